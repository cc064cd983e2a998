//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Submission was reached without completing step one
    #[error("Step one was never completed")]
    StepOneIncomplete,

    /// Invalid view transition
    #[error("Invalid view transition: {0}")]
    #[allow(dead_code)]
    InvalidViewTransition(String),

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::StepOneIncomplete;
        assert!(error.to_string().contains("Step one"));

        let error = StateError::InvalidViewTransition("Plan before StepTwo".to_string());
        assert!(error.to_string().contains("Invalid view transition"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("Generic error"));
    }
}
