//! Error taxonomy for decoration and raster I/O entry points.

/// Convenience result type used across the crate.
pub type HaloResult<T> = Result<T, HaloError>;

/// Top-level error taxonomy.
///
/// Every failure is fatal for the invocation that raised it; there is no
/// retry or recovery path inside the crate.
#[derive(thiserror::Error, Debug)]
pub enum HaloError {
    /// Input raster missing, unreadable, or undecodable.
    #[error("load error: {0}")]
    Load(String),

    /// Output raster could not be encoded or written.
    #[error("io error: {0}")]
    Io(String),

    /// Caller-supplied parameter outside the supported domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HaloError {
    /// Build a [`HaloError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`HaloError::Io`] value.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`HaloError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
