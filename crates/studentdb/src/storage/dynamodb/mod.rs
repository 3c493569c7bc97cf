//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository traits
//! using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod repository;
mod table;

pub use repository::DynamoDbRepository;
