//! Provider call failures.

use thiserror::Error;

use crate::traits::HttpError;

/// The only text a user ever sees for a failed generation.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Sorry, I couldn't generate a prompt right now. Please try again.";

/// Failure of a single generation request.
///
/// `Display` carries the diagnostic detail for the log; the UI must use
/// [`GenerationError::user_message`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request could not be delivered or the connection dropped.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The provider did not answer within the configured timeout.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The provider answered with a non-2xx status.
    #[error("provider returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The response contained no candidate text (e.g. blocked by safety filters).
    #[error("provider returned no candidate text")]
    EmptyResponse,

    /// The candidate text did not parse into prompt/encouragement/affirmation.
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },
}

impl GenerationError {
    /// Get a user-friendly error message. Always the same fixed text.
    pub fn user_message(&self) -> &'static str {
        GENERATION_FAILED_MESSAGE
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GenerationError::Transport { .. } => "E_GEN_TRANSPORT",
            GenerationError::Timeout { .. } => "E_GEN_TIMEOUT",
            GenerationError::HttpStatus { .. } => "E_GEN_HTTP",
            GenerationError::EmptyResponse => "E_GEN_EMPTY",
            GenerationError::InvalidPayload { .. } => "E_GEN_PAYLOAD",
        }
    }
}

impl From<HttpError> for GenerationError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Timeout(message) => GenerationError::Timeout { message },
            HttpError::ServerError { status, message } => {
                GenerationError::HttpStatus { status, message }
            }
            other => GenerationError::Transport {
                message: other.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::InvalidPayload {
            message: err.to_string(),
        }
    }
}
