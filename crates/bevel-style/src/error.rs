//! Errors raised at the typed input boundary.
//!
//! Resolution itself is total and has no error type; only turning external
//! text into typed cascade sets can fail.

use thiserror::Error;

/// Failure to build typed cascade input.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A color string that is neither a hex notation nor a known name.
    #[error("invalid color value '{0}'")]
    InvalidColor(String),
    /// A direction keyword other than `ltr` or `rtl`.
    #[error("invalid layout direction '{0}' (expected 'ltr' or 'rtl')")]
    InvalidDirection(String),
    /// A border document that does not match the expected shape.
    #[error("invalid border document: {0}")]
    InvalidDocument(#[from] serde_json::Error),
}
