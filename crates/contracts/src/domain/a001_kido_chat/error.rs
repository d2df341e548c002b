use thiserror::Error;

/// Shown in the answer area when an ask fails for any reason
pub const BACKEND_UNREACHABLE: &str = "Error: could not reach the backend.";

/// Shown in the answer area when the reset call fails
pub const RESET_FAILED: &str = "Error: could not reset conversation.";

/// Why a request to the backend failed.
///
/// The widget does not distinguish between these when talking to the user,
/// the variants only exist for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ChatError::Status(502).to_string(), "HTTP error: 502");
        assert_eq!(
            ChatError::Transport("connection refused".into()).to_string(),
            "failed to send request: connection refused"
        );
    }
}
