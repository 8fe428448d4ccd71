use thiserror::Error;

/// Shown when a failure carries no service-provided detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "System unavailable. Please retry shortly.";

#[derive(Debug, Error)]
pub enum PathError {
    #[error("invalid input: {0}")]
    Input(String),
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("service error: status={status} body={body}")]
    Service { status: u16, body: String },
    #[error("malformed model output: {0}")]
    Parse(String),
    #[error("schema violation: {0}")]
    Schema(String),
}

impl PathError {
    /// The user-displayable message: the service's own message verbatim when
    /// it carries one, the validation message for rejected input, and a
    /// generic retry hint for everything else. Always non-empty.
    pub fn display_message(&self) -> String {
        match self {
            PathError::Service { body, .. } if !body.trim().is_empty() => body.clone(),
            PathError::Input(msg) => msg.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}
