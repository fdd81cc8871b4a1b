//! Conversion errors.

use thiserror::Error;

/// Errors surfaced by the conversion engine.
///
/// Malformed input CSS is not among them: the parser never fails, and a
/// stylesheet with nothing to convert is a no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RempxError {
    /// The configured root font size override could not be interpreted:
    /// either the number is unparseable or the unit is not one of
    /// `px`, `em`, `rem`, `%`, or unitless.
    #[error("invalid root font size value '{value}'")]
    InvalidRootValue {
        /// The override string as supplied by the caller.
        value: String,
    },
}
