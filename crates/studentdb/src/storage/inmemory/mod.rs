//! In-memory storage backend.
//!
//! Keeps the table in a HashMap wrapped in `Arc<RwLock<_>>` and reproduces the
//! DynamoDB semantics the demo relies on: unconditional puts, partial items
//! left by updates of missing keys, and idempotent deletes.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new("Students");
//! repo.ensure_table().await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
