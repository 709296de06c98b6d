//! Common error types.

/// Errors raised while constructing shared domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A role name outside the fixed role set.
    #[error("Unknown role: {0:?}")]
    UnknownRole(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
