mod roster;
mod types;

pub use roster::demo_roster;
pub use types::{Student, StudentId};
