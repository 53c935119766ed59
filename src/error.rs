use std::time::Duration;
use thiserror::Error;

/// Failure taxonomy of the portability layer.
///
/// Structural errors (`Validation`, `BatchTooLarge`, `TypeMapping`,
/// `DuplicateParameter`) are raised eagerly, before any SQL text or command
/// exists. Execution errors (`Timeout`, `Cancelled`, `Connection`) surface at
/// the awaiting call site. Nothing here wraps an unrelated root cause:
/// retrying propagates the operation's own error type untouched.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("batch requires {required} parameters, the dialect allows at most {maximum}")]
    BatchTooLarge { required: usize, maximum: usize },

    #[error("no storage type mapping for {0}")]
    TypeMapping(String),

    #[error("duplicate parameter name {0}")]
    DuplicateParameter(String),

    #[error("connection failed for \"{connection_string}\": {message}")]
    Connection {
        connection_string: String,
        message: String,
    },

    #[error("operation did not complete within {0:?}")]
    Timeout(Duration),

    #[error("operation was cancelled")]
    Cancelled,
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn connection(connection_string: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connection {
            connection_string: connection_string.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
