//! Table schema and provisioning types (pure data).

mod config;
mod readiness;

pub use config::{
    students_table_config, AttributeType, KeyAttribute, ProvisionedThroughput, TableConfig,
    DEFAULT_TABLE_NAME, PARTITION_KEY,
};
pub use readiness::{TableProvisioning, TableStatus, WaitPolicy};
