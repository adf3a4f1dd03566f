/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    /// Network or request construction error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Non-success HTTP status that was not retried.
    #[error("http error {status}: {body}")]
    Http { status: u16, body: String },
    /// Every allowed attempt ran past the configured timeout.
    #[error("request timed out")]
    Timeout,
    /// The response body is not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(serde_json::Error),
    /// The account lacks the permission required by the request.
    #[error("unauthorized operation: {0}")]
    UnauthorizedOperation(String),
    /// The `action` parameter names a module the wiki does not know.
    #[error("invalid action [{code}]: {message}")]
    InvalidAction { code: String, message: String },
    /// The operation collided with a concurrent change (edit conflict etc).
    #[error("operation conflict [{code}]: {message}")]
    OperationConflict { code: String, message: String },
    /// Any other error reported by the API.
    #[error("operation failed [{code}]: {message}")]
    OperationFailed {
        /// Error code as reported by the wiki.
        code: String,
        /// `info` text joined with the free-text detail.
        message: String,
    },
    /// Invalid argument passed to a helper.
    #[error("configuration error: {0}")]
    Config(String),
}

impl WikiError {
    /// Returns the server error code for API-level errors.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::InvalidAction { code, .. }
            | Self::OperationConflict { code, .. }
            | Self::OperationFailed { code, .. } => Some(code),
            _ => None,
        }
    }
}
