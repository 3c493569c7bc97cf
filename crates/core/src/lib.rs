//! Core types for studentdb.
//!
//! This crate holds the pure parts of the project: the student record, the
//! table schema description, the readiness-wait policy and the repository
//! traits implemented by the storage backends. Nothing here performs I/O.

pub mod storage;
pub mod student;
pub mod table;
