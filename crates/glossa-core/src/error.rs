use thiserror::Error;

/// Top-level error type for glossa.
#[derive(Debug, Error)]
pub enum GlossaError {
    /// Rejected argument (bad language code, empty resource path).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A resource file could not be read or decoded.
    #[error("resource error: {0}")]
    Resource(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
