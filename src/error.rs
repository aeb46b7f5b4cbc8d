use thiserror::Error;

/// Transport-independent classification of a [`DeckError`].
///
/// The HTTP boundary owns the mapping from a kind to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad payload, invalid card codes, out-of-range count, empty deck.
    InvalidInput,
    /// Referenced deck does not exist.
    NotFound,
    /// Storage failure, corrupted persisted state, anything unexpected.
    Internal,
}

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl DeckError {
    pub fn invalid_input(ctx: impl Into<String>) -> Self {
        DeckError::InvalidInput(ctx.into())
    }

    pub fn not_found(ctx: impl Into<String>) -> Self {
        DeckError::NotFound(ctx.into())
    }

    pub fn internal(ctx: impl Into<String>) -> Self {
        DeckError::Internal(ctx.into())
    }

    /// Classify this error into one of the three kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::InvalidInput(_) => ErrorKind::InvalidInput,
            DeckError::NotFound(_) => ErrorKind::NotFound,
            DeckError::Internal(_)
            | DeckError::Config(_)
            | DeckError::Io(_)
            | DeckError::JsonSerialization(_)
            | DeckError::YamlSerialization(_)
            | DeckError::Storage(_)
            | DeckError::Generic(_) => ErrorKind::Internal,
        }
    }

    /// Human-readable message safe to show to a caller.
    ///
    /// Wrapped lower-level errors return `None`: their text may leak
    /// storage or filesystem details.
    pub fn context(&self) -> Option<&str> {
        match self {
            DeckError::InvalidInput(ctx)
            | DeckError::NotFound(ctx)
            | DeckError::Internal(ctx) => Some(ctx),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
