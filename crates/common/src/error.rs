//! Error types shared across DisplayKit crates.

/// Top-level error type for DisplayKit operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplaykitError {
    /// Caller-supplied argument failed shape/type validation. Raised before
    /// any backend call; the message names the first offending field.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The referenced display id does not exist (anymore). Display ids are
    /// not stable across hot-plug, so this is a normal outcome rather than
    /// a programming error.
    #[error("no display found with id {id}")]
    NotFound { id: u32 },

    /// The platform backend cannot perform the requested configuration.
    #[error("unsupported operation: {message}")]
    Unsupported { message: String },

    /// Transient or permission-related platform failure.
    #[error("backend unavailable: {message}")]
    Unavailable { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using DisplaykitError.
pub type DisplaykitResult<T> = Result<T, DisplaykitError>;

impl DisplaykitError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: msg.into(),
        }
    }

    pub fn not_found(id: u32) -> Self {
        Self::NotFound { id }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_message_names_the_field() {
        let err = DisplaykitError::invalid_argument("'enable' must be a boolean");
        assert!(err.to_string().contains("'enable' must be a boolean"));
    }

    #[test]
    fn not_found_carries_the_id() {
        let err = DisplaykitError::not_found(42);
        assert_eq!(err.to_string(), "no display found with id 42");
    }
}
