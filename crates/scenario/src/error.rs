//! Scenario errors
//!
//! Faults in the script itself. Business rejections (locked, non-positive,
//! insufficient funds) are not errors here; they are recorded as outcomes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    #[error("Unknown account: {0}")]
    UnknownAccount(String),

    #[error("Account already opened: {0}")]
    DuplicateAccount(String),

    #[error("Cannot transfer from an account to itself: {0}")]
    SelfTransfer(String),
}

/// Result type alias for scenario operations
pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScenarioError::UnknownAccount("bob".to_string());
        assert_eq!(err.to_string(), "Unknown account: bob");

        let err = ScenarioError::SelfTransfer("alex".to_string());
        assert!(err.to_string().contains("alex"));
    }
}
