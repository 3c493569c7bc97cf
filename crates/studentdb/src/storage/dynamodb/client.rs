//! AWS SDK client setup.

use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::TableStatus as SdkTableStatus;
use aws_sdk_dynamodb::Client;
use studentdb_core::storage::{RepositoryError, Result};
use studentdb_core::table::TableStatus;

use super::error::map_describe_table_error;
use crate::config::Config;

/// Creates a DynamoDB client with the given configuration.
pub async fn create_client(config: &Config) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

/// Fetches the current table status, returns None if the table doesn't exist.
pub async fn get_table_status(client: &Client, table_name: &str) -> Result<Option<TableStatus>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(response) => {
            let table = response.table().ok_or_else(|| {
                RepositoryError::InvalidData(format!(
                    "DescribeTable returned no description for '{}'",
                    table_name
                ))
            })?;

            Ok(Some(to_table_status(table.table_status())))
        }
        Err(err) => {
            let missing = matches!(
                err.as_service_error(),
                Some(DescribeTableError::ResourceNotFoundException(_))
            );
            if missing {
                Ok(None)
            } else {
                Err(map_describe_table_error(err))
            }
        }
    }
}

fn to_table_status(status: Option<&SdkTableStatus>) -> TableStatus {
    match status {
        Some(SdkTableStatus::Active) => TableStatus::Active,
        Some(SdkTableStatus::Creating) => TableStatus::Creating,
        Some(SdkTableStatus::Updating) => TableStatus::Updating,
        Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
        _ => TableStatus::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_table_status() {
        assert_eq!(
            to_table_status(Some(&SdkTableStatus::Active)),
            TableStatus::Active
        );
        assert_eq!(
            to_table_status(Some(&SdkTableStatus::Creating)),
            TableStatus::Creating
        );
        assert_eq!(
            to_table_status(Some(&SdkTableStatus::Archived)),
            TableStatus::Unavailable
        );
        assert_eq!(to_table_status(None), TableStatus::Unavailable);
    }

    #[tokio::test]
    async fn test_create_client_uses_configured_region() {
        let config = Config {
            region: "eu-central-1".to_string(),
            ..Config::default()
        };

        let client = create_client(&config).await;
        assert_eq!(
            client.config().region().map(ToString::to_string),
            Some("eu-central-1".to_string())
        );
    }
}
