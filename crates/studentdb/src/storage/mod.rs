//! Storage backend implementations.
//!
//! Both backends implement the repository traits defined in
//! `studentdb_core::storage`:
//!
//! - `dynamodb`: AWS DynamoDB (or DynamoDB Local) using `aws-sdk-dynamodb`
//! - `inmemory`: an in-process store with the same write semantics, used by
//!   the tests and by `--in-memory` runs

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbRepository;
pub use inmemory::InMemoryRepository;
