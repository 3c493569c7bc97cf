use async_trait::async_trait;

use crate::student::{Student, StudentId};
use crate::table::TableProvisioning;

use super::Result;

/// Provisioning of the backing table.
#[async_trait]
pub trait TableProvisioner: Send + Sync {
    /// Creates the table if it is missing and waits until it accepts item
    /// operations. An existing table is left untouched.
    async fn ensure_table(&self) -> Result<TableProvisioning>;
}

/// Repository for student records.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Gets a student by ID. Returns `None` when no item has that key.
    async fn get_student(&self, id: StudentId) -> Result<Option<Student>>;

    /// Writes a student, replacing any item with the same ID.
    async fn create_student(&self, student: &Student) -> Result<()>;

    /// Sets the `age` attribute of a student, leaving other attributes as they are.
    ///
    /// No existence check is made: updating a missing ID leaves an item holding
    /// only the key and `age`.
    async fn update_student_age(&self, id: StudentId, age: i64) -> Result<()>;

    /// Deletes a student by ID. Deleting a missing ID succeeds.
    async fn delete_student(&self, id: StudentId) -> Result<()>;
}
