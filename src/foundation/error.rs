/// Crate-wide result alias.
pub type FilmstripResult<T> = Result<T, FilmstripError>;

/// Error type for all fallible filmstrip operations.
#[derive(thiserror::Error, Debug)]
pub enum FilmstripError {
    /// Invalid configuration or model data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Image bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Playback state machine misuse or inconsistency.
    #[error("playback error: {0}")]
    Playback(String),

    /// Wrapped external error (IO, encoding, platform).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FilmstripError {
    /// Build a [`FilmstripError::Validation`] from a message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FilmstripError::Decode`] from a message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FilmstripError::Playback`] from a message.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }
}
