//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and the
//! student record. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use studentdb_core::storage::RepositoryError;
use studentdb_core::student::{Student, StudentId};
use studentdb_core::table::PARTITION_KEY;

pub const NAME: &str = "name";
pub const AGE: &str = "age";

/// Encode an integer as a DynamoDB number.
pub fn number(value: i64) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

/// Primary key attribute of a student item.
pub fn student_key(id: StudentId) -> (String, AttributeValue) {
    (PARTITION_KEY.to_string(), number(id))
}

/// Convert a Student to DynamoDB item.
pub fn student_to_item(student: &Student) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    let (key_name, key_value) = student_key(student.id);
    item.insert(key_name, key_value);
    item.insert(NAME.to_string(), AttributeValue::S(student.name.clone()));
    item.insert(AGE.to_string(), number(student.age));

    item
}

/// Convert a DynamoDB item to Student.
pub fn item_to_student(item: &HashMap<String, AttributeValue>) -> Result<Student, RepositoryError> {
    Ok(Student {
        id: get_i64(item, PARTITION_KEY)?,
        name: get_string(item, NAME)?,
        age: get_i64(item, AGE)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required integer attribute.
fn get_i64(item: &HashMap<String, AttributeValue>, key: &str) -> Result<i64, RepositoryError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;

    raw.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number {}: {}", key, e)))
}
