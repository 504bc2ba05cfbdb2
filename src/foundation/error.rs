/// Convenience result type used throughout the crate.
pub type TyperResult<T> = Result<T, TyperError>;

/// Errors produced while configuring a generator or producing an animation.
#[derive(thiserror::Error, Debug)]
pub enum TyperError {
    /// The font file is missing, unreadable, or contains no usable face.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// A configuration value was rejected. The previous configuration is kept.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// GIF assembly or writing the output failed.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TyperError {
    /// Build a [`TyperError::FontLoad`].
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`TyperError::InvalidConfig`].
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`TyperError::Encoding`].
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

impl From<gif::EncodingError> for TyperError {
    fn from(err: gif::EncodingError) -> Self {
        Self::Encoding(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
