//! The fixed create/read/update/delete walkthrough.

use std::fmt;

use studentdb_core::storage::{RepositoryError, Result, StudentRepository, TableProvisioner};
use studentdb_core::student::{demo_roster, Student, StudentId};
use studentdb_core::table::TableProvisioning;

/// ID read back after the inserts.
const READ_ID: StudentId = 2;
/// ID whose age gets updated, and the new age.
const UPDATE_ID: StudentId = 3;
const UPDATED_AGE: i64 = 20;
/// ID deleted and then read again.
const DELETE_ID: StudentId = 4;

/// One reported step of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    TableCreated { table_name: String },
    TableExists { table_name: String },
    TableError { error: RepositoryError },
    Added(Student),
    Found(Student),
    NotFound(StudentId),
    Updated { id: StudentId, age: i64 },
    Deleted(StudentId),
}

/// How a status line should stand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Notice,
    Failure,
}

impl Status {
    pub fn tone(&self) -> Tone {
        match self {
            Status::TableError { .. } => Tone::Failure,
            Status::TableExists { .. } | Status::NotFound(_) => Tone::Notice,
            _ => Tone::Success,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::TableCreated { table_name } => {
                write!(f, "Table '{}' created successfully!", table_name)
            }
            Status::TableExists { table_name } => {
                write!(f, "Table '{}' already exists.", table_name)
            }
            Status::TableError { error } => write!(f, "Error creating table: {}", error),
            Status::Added(s) => write!(f, "Added student: {}, {}, {}", s.id, s.name, s.age),
            Status::Found(student) => write!(f, "Student Found: {}", student),
            Status::NotFound(id) => write!(f, "No student found with ID {}", id),
            Status::Updated { id, age } => write!(f, "Updated student {} age to {}", id, age),
            Status::Deleted(id) => write!(f, "Deleted student with ID {}", id),
        }
    }
}

/// Provisions the table, then runs the fixed sequence of item operations,
/// passing one `Status` per step to `report`.
///
/// A failure to provision the table is reported and the sequence goes on.
/// The first failing item operation stops the sequence and is returned.
pub async fn run_demo<R>(
    repo: &R,
    table_name: &str,
    mut report: impl FnMut(Status),
) -> Result<()>
where
    R: StudentRepository + TableProvisioner,
{
    ensure_table(repo, table_name, &mut report).await;

    for student in demo_roster() {
        repo.create_student(&student).await?;
        report(Status::Added(student));
    }

    read_student(repo, READ_ID, &mut report).await?;

    repo.update_student_age(UPDATE_ID, UPDATED_AGE).await?;
    report(Status::Updated {
        id: UPDATE_ID,
        age: UPDATED_AGE,
    });

    repo.delete_student(DELETE_ID).await?;
    report(Status::Deleted(DELETE_ID));

    read_student(repo, DELETE_ID, &mut report).await
}

async fn ensure_table<R: TableProvisioner>(
    repo: &R,
    table_name: &str,
    report: &mut impl FnMut(Status),
) {
    let table_name = table_name.to_string();
    match repo.ensure_table().await {
        Ok(TableProvisioning::Created) => report(Status::TableCreated { table_name }),
        Ok(TableProvisioning::AlreadyExists) => report(Status::TableExists { table_name }),
        Err(error) => {
            tracing::error!(table = %table_name, error = %error, "Failed to provision table");
            report(Status::TableError { error });
        }
    }
}

async fn read_student<R: StudentRepository>(
    repo: &R,
    id: StudentId,
    report: &mut impl FnMut(Status),
) -> Result<()> {
    match repo.get_student(id).await? {
        Some(student) => report(Status::Found(student)),
        None => report(Status::NotFound(id)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::storage::InMemoryRepository;

    async fn collect<R>(repo: &R) -> (Vec<Status>, Result<()>)
    where
        R: StudentRepository + TableProvisioner,
    {
        let mut statuses = Vec::new();
        let result = run_demo(repo, "Students", |status| statuses.push(status)).await;
        (statuses, result)
    }

    fn item_statuses() -> Vec<Status> {
        vec![
            Status::Added(Student::new(1, "Alice", 20)),
            Status::Added(Student::new(2, "Bob", 22)),
            Status::Added(Student::new(3, "Charlie", 19)),
            Status::Added(Student::new(4, "David", 21)),
            Status::Found(Student::new(2, "Bob", 22)),
            Status::Updated { id: 3, age: 20 },
            Status::Deleted(4),
            Status::NotFound(4),
        ]
    }

    #[tokio::test]
    async fn test_full_walkthrough() {
        let repo = InMemoryRepository::new("Students");

        let (statuses, result) = collect(&repo).await;

        result.unwrap();
        let mut expected = vec![Status::TableCreated {
            table_name: "Students".to_string(),
        }];
        expected.extend(item_statuses());
        assert_eq!(statuses, expected);

        assert_eq!(
            repo.get_student(3).await.unwrap(),
            Some(Student::new(3, "Charlie", 20))
        );
        assert_eq!(repo.get_student(4).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_second_run_reports_existing_table() {
        let repo = InMemoryRepository::new("Students");
        collect(&repo).await.1.unwrap();

        let (statuses, result) = collect(&repo).await;

        result.unwrap();
        assert_eq!(
            statuses[0],
            Status::TableExists {
                table_name: "Students".to_string()
            }
        );
        // Puts overwrite, so the second run ends in the same state.
        assert_eq!(&statuses[1..], item_statuses().as_slice());
    }

    /// Table provisioning always fails; item operations go to the inner store.
    struct BrokenTable(InMemoryRepository);

    #[async_trait]
    impl TableProvisioner for BrokenTable {
        async fn ensure_table(&self) -> Result<TableProvisioning> {
            Err(RepositoryError::ConnectionFailed("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl StudentRepository for BrokenTable {
        async fn get_student(&self, id: StudentId) -> Result<Option<Student>> {
            self.0.get_student(id).await
        }

        async fn create_student(&self, student: &Student) -> Result<()> {
            self.0.create_student(student).await
        }

        async fn update_student_age(&self, id: StudentId, age: i64) -> Result<()> {
            self.0.update_student_age(id, age).await
        }

        async fn delete_student(&self, id: StudentId) -> Result<()> {
            self.0.delete_student(id).await
        }
    }

    #[tokio::test]
    async fn test_table_error_is_reported_and_sequence_continues() {
        // The inner table already exists, so items still succeed.
        let inner = InMemoryRepository::new("Students");
        inner.ensure_table().await.unwrap();
        let repo = BrokenTable(inner);

        let (statuses, result) = collect(&repo).await;

        result.unwrap();
        assert_eq!(
            statuses[0],
            Status::TableError {
                error: RepositoryError::ConnectionFailed("connection refused".to_string())
            }
        );
        assert_eq!(&statuses[1..], item_statuses().as_slice());
    }

    #[tokio::test]
    async fn test_item_error_aborts_sequence() {
        // No table behind the broken provisioner: the first put fails.
        let repo = BrokenTable(InMemoryRepository::new("Students"));

        let (statuses, result) = collect(&repo).await;

        assert_eq!(
            result,
            Err(RepositoryError::TableNotFound("Students".to_string()))
        );
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].tone(), Tone::Failure);
    }

    #[test]
    fn test_status_lines() {
        let lines: Vec<String> = [
            Status::TableCreated {
                table_name: "Students".to_string(),
            },
            Status::TableExists {
                table_name: "Students".to_string(),
            },
            Status::TableError {
                error: RepositoryError::QueryFailed("Table limit exceeded".to_string()),
            },
            Status::Added(Student::new(1, "Alice", 20)),
            Status::Found(Student::new(2, "Bob", 22)),
            Status::NotFound(4),
            Status::Updated { id: 3, age: 20 },
            Status::Deleted(4),
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert_eq!(
            lines,
            [
                "Table 'Students' created successfully!",
                "Table 'Students' already exists.",
                "Error creating table: Query failed: Table limit exceeded",
                "Added student: 1, Alice, 20",
                r#"Student Found: {id: 2, name: "Bob", age: 22}"#,
                "No student found with ID 4",
                "Updated student 3 age to 20",
                "Deleted student with ID 4",
            ]
        );
    }

    #[test]
    fn test_tones() {
        assert_eq!(Status::Deleted(4).tone(), Tone::Success);
        assert_eq!(Status::NotFound(4).tone(), Tone::Notice);
        assert_eq!(
            Status::TableExists {
                table_name: "Students".to_string()
            }
            .tone(),
            Tone::Notice
        );
    }
}
