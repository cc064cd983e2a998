//! Diet service-specific error types.

/// Errors that can occur while talking to the diet-generation service.
///
/// Transport failures and undecodable bodies are distinct variants; the UI
/// collapses everything but `MissingProfile` into one failure message, the
/// log keeps the distinction.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The profile was submitted before the wizard completed
    #[error("User profile is incomplete; step one was never submitted")]
    MissingProfile,

    /// The request could not be delivered
    #[error("HTTP request failed: {0}")]
    Transport(reqwest::Error),

    /// The request exceeded the bounded wait
    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),

    /// The service answered with a non-success status
    #[error("Service returned status {status}")]
    Status { status: u16 },

    /// The response body could not be mapped to a diet plan
    #[error("Malformed response from service: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout(error)
        } else {
            ApiError::Transport(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::MissingProfile;
        assert!(error.to_string().contains("incomplete"));

        let error = ApiError::Status { status: 500 };
        assert!(error.to_string().contains("500"));

        let error = ApiError::MalformedResponse("missing field `nome`".to_string());
        assert!(error.to_string().contains("Malformed response"));
        assert!(error.to_string().contains("nome"));
    }
}
