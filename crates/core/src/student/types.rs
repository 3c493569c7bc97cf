use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a student. Doubles as the table's partition key.
pub type StudentId = i64;

/// A student record: the only entity stored in the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i64,
}

impl Student {
    /// Creates a new student record.
    pub fn new(id: StudentId, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{id: {}, name: {:?}, age: {}}}",
            self.id, self.name, self.age
        )
    }
}
