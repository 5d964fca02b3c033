//! Error types for envfold passes

use thiserror::Error;

/// Main error type for envfold operations
///
/// The transform itself is infallible: an unset variable and a node that
/// doesn't match the access pattern are both defined outcomes, not errors.
/// Errors only arise at the crate boundary, when source text or a host
/// configuration blob fails to parse.
#[derive(Error, Debug)]
pub enum EnvfoldError {
    /// Source text could not be parsed into a `syn` tree
    #[error("Parse error: {0}")]
    Parse(#[from] syn::Error),

    /// Host configuration blob was malformed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for envfold operations
pub type Result<T> = std::result::Result<T, EnvfoldError>;
