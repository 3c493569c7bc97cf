use std::time::Duration;

/// Outcome of provisioning the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableProvisioning {
    /// The table was created and is now active.
    Created,
    /// The table already existed and was left as is.
    AlreadyExists,
}

/// Table status as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
    /// Any status in which the table cannot serve requests (archived,
    /// inaccessible encryption credentials, unknown values).
    Unavailable,
}

impl TableStatus {
    /// Whether the table has finished provisioning.
    pub fn is_ready(&self) -> bool {
        *self == TableStatus::Active
    }
}

/// Bounds the wait for a freshly created table to become active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Number of status polls before giving up. Always at least one.
    pub max_attempts: u32,
    /// Pause between two polls.
    pub delay: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 25,
            delay: Duration::from_secs(2),
        }
    }
}

impl WaitPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Upper bound of time spent sleeping between polls.
    pub fn max_wait(&self) -> Duration {
        self.delay * self.max_attempts.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = WaitPolicy::default();
        assert_eq!(policy.max_attempts, 25);
        assert_eq!(policy.delay, Duration::from_secs(2));
    }

    #[test]
    fn test_new_clamps_attempts() {
        let policy = WaitPolicy::new(0, Duration::from_millis(10));
        assert_eq!(policy.max_attempts, 1);
    }

    #[test]
    fn test_max_wait() {
        let policy = WaitPolicy::new(3, Duration::from_millis(500));
        assert_eq!(policy.max_wait(), Duration::from_secs(1));
        assert_eq!(
            WaitPolicy::new(1, Duration::from_secs(5)).max_wait(),
            Duration::ZERO
        );
    }

    #[test]
    fn test_ready_statuses() {
        assert!(TableStatus::Active.is_ready());
        assert!(!TableStatus::Updating.is_ready());
        assert!(!TableStatus::Creating.is_ready());
        assert!(!TableStatus::Deleting.is_ready());
        assert!(!TableStatus::Unavailable.is_ready());
    }
}
