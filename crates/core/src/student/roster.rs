use super::Student;

/// The four students written by the demo sequence, in insertion order.
pub fn demo_roster() -> Vec<Student> {
    vec![
        Student::new(1, "Alice", 20),
        Student::new(2, "Bob", 22),
        Student::new(3, "Charlie", 19),
        Student::new(4, "David", 21),
    ]
}
