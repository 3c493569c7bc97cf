//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `studentdb_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use studentdb_core::storage::{RepositoryError, Result, StudentRepository, TableProvisioner};
use studentdb_core::student::{Student, StudentId};
use studentdb_core::table::{TableConfig, TableProvisioning, WaitPolicy};

use super::client::create_client;
use super::conversions::{item_to_student, number, student_key, student_to_item, AGE};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_update_item_error,
};
use super::table::{create_table, wait_for_table_active};
use crate::config::Config;

/// DynamoDB-based repository implementation.
///
/// Holds the SDK client and the schema of the one table it works against.
pub struct DynamoDbRepository {
    client: Client,
    table: TableConfig,
    wait_policy: WaitPolicy,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table schema.
    pub fn new(client: Client, table: TableConfig, wait_policy: WaitPolicy) -> Self {
        Self {
            client,
            table,
            wait_policy,
        }
    }

    /// Builds the SDK client from `config` and wraps it in a repository.
    ///
    /// Credentials come from the AWS SDK default chain.
    pub async fn connect(config: &Config) -> Self {
        let client = create_client(config).await;
        Self::new(client, config.table_config(), config.wait_policy)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table.table_name
    }
}

#[async_trait]
impl TableProvisioner for DynamoDbRepository {
    async fn ensure_table(&self) -> Result<TableProvisioning> {
        let outcome = match create_table(&self.client, &self.table).await {
            Ok(()) => {
                tracing::info!(table = self.table_name(), "Table created");
                TableProvisioning::Created
            }
            Err(RepositoryError::TableAlreadyExists(_)) => {
                tracing::info!(table = self.table_name(), "Table already exists");
                TableProvisioning::AlreadyExists
            }
            Err(err) => return Err(err),
        };

        // An existing table may still be CREATING when another client made it.
        wait_for_table_active(&self.client, self.table_name(), &self.wait_policy)
            .await
            .inspect_err(|error| {
                tracing::error!(
                    table = self.table_name(),
                    ?outcome,
                    %error,
                    "Table did not become active"
                )
            })?;
        Ok(outcome)
    }
}

#[async_trait]
impl StudentRepository for DynamoDbRepository {
    async fn get_student(&self, id: StudentId) -> Result<Option<Student>> {
        let (key_name, key_value) = student_key(id);

        let result = self
            .client
            .get_item()
            .table_name(self.table_name())
            .key(key_name, key_value)
            .send()
            .await
            .map_err(|e| map_get_item_error(e, self.table_name()))?;

        tracing::debug!(student_id = id, found = result.item.is_some(), "GetItem");

        match result.item {
            Some(item) => Ok(Some(item_to_student(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_student(&self, student: &Student) -> Result<()> {
        let item = student_to_item(student);

        self.client
            .put_item()
            .table_name(self.table_name())
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, self.table_name()))?;

        tracing::debug!(student_id = student.id, "PutItem");
        Ok(())
    }

    async fn update_student_age(&self, id: StudentId, age: i64) -> Result<()> {
        let (key_name, key_value) = student_key(id);

        self.client
            .update_item()
            .table_name(self.table_name())
            .key(key_name, key_value)
            .update_expression("SET #age = :age")
            .expression_attribute_names("#age", AGE)
            .expression_attribute_values(":age", number(age))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, self.table_name()))?;

        tracing::debug!(student_id = id, age, "UpdateItem");
        Ok(())
    }

    async fn delete_student(&self, id: StudentId) -> Result<()> {
        let (key_name, key_value) = student_key(id);

        self.client
            .delete_item()
            .table_name(self.table_name())
            .key(key_name, key_value)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, self.table_name()))?;

        tracing::debug!(student_id = id, "DeleteItem");
        Ok(())
    }
}

/// Runs against DynamoDB Local at `AWS_ENDPOINT_URL`.
///
/// ```bash
/// docker run -p 8000:8000 amazon/dynamodb-local
/// AWS_ACCESS_KEY_ID=test AWS_SECRET_ACCESS_KEY=test \
///     cargo test -p studentdb --features integration
/// ```
#[cfg(all(test, feature = "integration"))]
mod integration_tests {
    use std::time::Duration;

    use super::*;

    async fn repository(table_name: &str) -> DynamoDbRepository {
        let config = Config {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL")
                .ok()
                .or_else(|| Config::default().endpoint_url),
            table_name: table_name.to_string(),
            wait_policy: WaitPolicy::new(30, Duration::from_millis(200)),
            ..Config::default()
        };
        let repo = DynamoDbRepository::connect(&config).await;
        repo.ensure_table().await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_ensure_table_twice() {
        let repo = repository("StudentsIntegrationEnsure").await;

        let second = repo.ensure_table().await.unwrap();
        assert_eq!(second, TableProvisioning::AlreadyExists);
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = repository("StudentsIntegrationCrud").await;
        let student = Student::new(101, "Alice", 20);

        repo.create_student(&student).await.unwrap();

        let retrieved = repo.get_student(101).await.unwrap();
        assert_eq!(retrieved, Some(student));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let repo = repository("StudentsIntegrationCrud").await;
        assert_eq!(repo.get_student(-1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_age_only() {
        let repo = repository("StudentsIntegrationCrud").await;
        repo.create_student(&Student::new(103, "Charlie", 19))
            .await
            .unwrap();

        repo.update_student_age(103, 20).await.unwrap();

        let retrieved = repo.get_student(103).await.unwrap();
        assert_eq!(retrieved, Some(Student::new(103, "Charlie", 20)));
    }

    #[tokio::test]
    async fn test_update_missing_leaves_partial_item() {
        let repo = repository("StudentsIntegrationCrud").await;
        repo.delete_student(105).await.unwrap();

        repo.update_student_age(105, 30).await.unwrap();

        let result = repo.get_student(105).await;
        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        repo.delete_student(105).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = repository("StudentsIntegrationCrud").await;
        repo.create_student(&Student::new(104, "David", 21))
            .await
            .unwrap();

        repo.delete_student(104).await.unwrap();
        repo.delete_student(104).await.unwrap();

        assert_eq!(repo.get_student(104).await.unwrap(), None);
    }
}
