//! Table provisioning operations.

use std::future::Future;

use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use studentdb_core::storage::{RepositoryError, Result};
use studentdb_core::table::{AttributeType, TableConfig, TableStatus, WaitPolicy};

use super::client;
use super::error::map_create_table_error;

/// Issues CreateTable for the given schema.
///
/// Returns `RepositoryError::TableAlreadyExists` when the store reports the
/// table is already in use.
pub async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key.name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key.name)
        .attribute_type(to_scalar_type(&config.partition_key.attribute_type))
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

    let throughput = ProvisionedThroughput::builder()
        .read_capacity_units(config.throughput.read_capacity_units)
        .write_capacity_units(config.throughput.write_capacity_units)
        .build()
        .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

    client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .provisioned_throughput(throughput)
        .send()
        .await
        .map_err(|e| map_create_table_error(e, &config.table_name))?;

    Ok(())
}

/// Polls DescribeTable until the table is active, at most `policy.max_attempts` times.
pub async fn wait_for_table_active(
    client: &Client,
    table_name: &str,
    policy: &WaitPolicy,
) -> Result<()> {
    poll_until_active(table_name, policy, || client::get_table_status(client, table_name)).await
}

/// Calls `fetch_status` until it reports an active table.
///
/// A missing table (`None`) counts as not ready yet. Errors from `fetch_status`
/// end the wait immediately.
async fn poll_until_active<F, Fut>(
    table_name: &str,
    policy: &WaitPolicy,
    mut fetch_status: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<TableStatus>>>,
{
    tracing::debug!(
        table = table_name,
        max_attempts = policy.max_attempts,
        max_wait = ?policy.max_wait(),
        "Waiting for table to become active"
    );

    for attempt in 1..=policy.max_attempts {
        let status = fetch_status().await?;
        tracing::debug!(table = table_name, attempt, ?status, "Polled table status");

        if status.is_some_and(|s| s.is_ready()) {
            return Ok(());
        }
        if attempt < policy.max_attempts {
            tokio::time::sleep(policy.delay).await;
        }
    }

    Err(RepositoryError::TableActivationTimeout {
        table_name: table_name.to_string(),
        attempts: policy.max_attempts,
    })
}

fn to_scalar_type(attr_type: &AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::Number => ScalarAttributeType::N,
        AttributeType::String => ScalarAttributeType::S,
    }
}
