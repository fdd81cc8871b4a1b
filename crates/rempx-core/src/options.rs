//! Conversion options.

use serde::{Deserialize, Serialize};

/// Options controlling how rem declarations are converted.
///
/// Both fields default to `false`: keep the original declaration and
/// leave at-rule bodies alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Overwrite the original `rem` declaration with the pixel value
    /// instead of inserting a fallback before it.
    pub replace: bool,

    /// Also convert declarations inside top-level at-rules such as
    /// `@media` and `@supports`. `@keyframes` bodies are never converted,
    /// and at-rules nested inside other at-rules are never converted,
    /// regardless of this flag.
    pub atrules: bool,
}
