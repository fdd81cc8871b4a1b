//! rem-to-px fallback conversion engine.
//!
//! # Scope
//!
//! This crate implements:
//! - **Root Size Resolver** - the effective pixels-per-rem, from an
//!   explicit override or from `font-size` / `font` declared on the
//!   stylesheet's root scope (`html`, `:root`), defaulting to 16px
//! - **Value Scanner** - locating convertible `rem` dimensions in a
//!   declaration value, skipping excluded function calls
//! - **Unit Converter** - rem quantity to integer pixel quantity,
//!   magnitude rounded down
//! - **Declaration Rewriter** - building the pixel fallback value and
//!   describing the mutation (insert-before or replace-in-place)
//! - **Stylesheet Walker** - document-order traversal with the at-rule
//!   eligibility state machine (keyframes never, top-level at-rules by
//!   option, nested at-rules never)
//!
//! Parsing and serialization live in `rempx-syntax`; the engine only
//! walks the tree and mutates it through insert-before and
//! replace-value.
//!
//! # Processing model
//!
//! One [`process`] call is parse -> one read-only pass (root size) ->
//! one mutating pass (walker) -> serialize. The tree is privately owned
//! by the call for its whole lifetime; there is no shared state, no
//! retries, and nothing to roll back on error.
//!
//! # Not Implemented
//!
//! - Conversion of units other than `rem`
//! - Root size resolution across multiple stylesheets or cascade context
//! - `rem` inside custom property definitions

/// Conversion errors.
pub mod error;
/// Contexts excluded from conversion (function and property denylists).
pub mod exclusions;
/// Conversion options.
pub mod options;
/// Declaration rewriting (fallback construction and edits).
pub mod rewrite;
/// Root font size resolution.
pub mod root_size;
/// Locating `rem` tokens inside declaration values.
pub mod scanner;
/// CSS length unit values and rem-to-px arithmetic.
pub mod unit;
/// Stylesheet traversal and eligibility policy.
pub mod walker;

// Re-exports for convenience
pub use error::RempxError;
pub use options::ConversionOptions;
pub use rempx_syntax::{MapOptions, OutputOptions};
pub use scanner::{RemToken, find_rem_tokens};
pub use unit::{DEFAULT_ROOT_FONT_SIZE_PX, Unit, UnitValue, format_px, rem_to_px};

/// The outcome of a conversion run: the serialized stylesheet plus how
/// many declarations were converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    /// The serialized, converted stylesheet.
    pub css: String,
    /// Number of declarations that received a fallback (or were
    /// replaced).
    pub converted: usize,
}

/// Convert `rem` lengths in a stylesheet to pixel fallbacks.
///
/// - `root_value`: optional root font size override (`"20px"`,
///   `"1.5em"`, `"1.75rem"`, `"150%"`, `"18"`).
/// - `options`: replace-in-place and at-rule conversion flags.
/// - `output`: serializer pass-through (sourcemap annotation, file
///   names); the engine forwards it uninterpreted.
///
/// Stylesheets with nothing to convert come back unchanged (modulo the
/// serializer's single whitespace normalization).
///
/// # Errors
///
/// [`RempxError::InvalidRootValue`] for a malformed `root_value`; no
/// output is produced in that case.
pub fn process(
    css: &str,
    root_value: Option<&str>,
    options: &ConversionOptions,
    output: &OutputOptions,
) -> Result<String, RempxError> {
    process_report(css, root_value, options, output).map(|report| report.css)
}

/// [`process`], additionally reporting the number of conversions (used
/// by callers that want to summarize without re-scanning the output).
///
/// # Errors
///
/// Same as [`process`].
pub fn process_report(
    css: &str,
    root_value: Option<&str>,
    options: &ConversionOptions,
    output: &OutputOptions,
) -> Result<ProcessReport, RempxError> {
    let mut stylesheet = rempx_syntax::parse(css);
    let root_px = root_size::resolve(&stylesheet, root_value)?;
    let converted = walker::walk(&mut stylesheet, root_px, options);
    Ok(ProcessReport {
        css: rempx_syntax::serialize_with(&stylesheet, output),
        converted,
    })
}

/// All-defaults convenience wrapper: no override, keep originals, leave
/// at-rules alone, no sourcemap annotation.
///
/// # Errors
///
/// Never fails in practice (there is no override to reject); the
/// `Result` keeps the signature uniform with [`process`].
pub fn process_simple(css: &str) -> Result<String, RempxError> {
    process(
        css,
        None,
        &ConversionOptions::default(),
        &OutputOptions::default(),
    )
}
