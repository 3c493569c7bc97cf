//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use studentdb_core::storage::{RepositoryError, Result, StudentRepository, TableProvisioner};
use studentdb_core::student::{Student, StudentId};
use studentdb_core::table::TableProvisioning;

/// Attributes stored for one key. `name` is absent on items created by an
/// age update.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredStudent {
    name: Option<String>,
    age: i64,
}

type Table = HashMap<StudentId, StoredStudent>;

/// In-memory storage backend.
///
/// The table does not exist until `ensure_table` is called; item operations
/// before that fail with `RepositoryError::TableNotFound`. Data is not
/// persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table_name: String,
    table: Arc<RwLock<Option<Table>>>,
}

impl InMemoryRepository {
    /// Creates a repository whose table has not been provisioned yet.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            table: Arc::new(RwLock::new(None)),
        }
    }

    fn table_not_found(&self) -> RepositoryError {
        RepositoryError::TableNotFound(self.table_name.clone())
    }
}

#[async_trait]
impl TableProvisioner for InMemoryRepository {
    async fn ensure_table(&self) -> Result<TableProvisioning> {
        let mut table = self.table.write().await;
        if table.is_some() {
            tracing::info!(table = %self.table_name, "Table already exists");
            return Ok(TableProvisioning::AlreadyExists);
        }
        *table = Some(HashMap::new());
        tracing::info!(table = %self.table_name, "Table created");
        Ok(TableProvisioning::Created)
    }
}

#[async_trait]
impl StudentRepository for InMemoryRepository {
    async fn get_student(&self, id: StudentId) -> Result<Option<Student>> {
        let table = self.table.read().await;
        let table = table.as_ref().ok_or_else(|| self.table_not_found())?;

        match table.get(&id) {
            None => Ok(None),
            Some(StoredStudent {
                name: Some(name),
                age,
            }) => Ok(Some(Student::new(id, name.clone(), *age))),
            Some(StoredStudent { name: None, .. }) => Err(RepositoryError::InvalidData(
                "Missing or invalid field: name".to_string(),
            )),
        }
    }

    async fn create_student(&self, student: &Student) -> Result<()> {
        let mut table = self.table.write().await;
        let table = table.as_mut().ok_or_else(|| self.table_not_found())?;

        table.insert(
            student.id,
            StoredStudent {
                name: Some(student.name.clone()),
                age: student.age,
            },
        );
        Ok(())
    }

    async fn update_student_age(&self, id: StudentId, age: i64) -> Result<()> {
        let mut table = self.table.write().await;
        let table = table.as_mut().ok_or_else(|| self.table_not_found())?;

        table
            .entry(id)
            .and_modify(|stored| stored.age = age)
            .or_insert(StoredStudent { name: None, age });
        Ok(())
    }

    async fn delete_student(&self, id: StudentId) -> Result<()> {
        let mut table = self.table.write().await;
        let table = table.as_mut().ok_or_else(|| self.table_not_found())?;

        table.remove(&id);
        Ok(())
    }
}
