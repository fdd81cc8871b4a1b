//! CSS tokenizer, lossless parser, and serializer for the rempx converter.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - The Level 3 token set, with every token carrying its raw lexeme
//!   - Comments and whitespace preserved as tokens
//!   - Escape sequences kept undecoded
//!
//! - **CSS Parser** ([§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing))
//!   - Stylesheet, rule, at-rule, and declaration parsing
//!   - Raws-preserving tree: whitespace and comments survive a round-trip
//!   - Never fails; malformed constructs pass through as raw text
//!
//! - **Serializer**
//!   - `serialize(parse(css)) == css` for unedited trees
//!   - Optional sourcemap reference annotation pass-through
//!
//! The tree is the mutation surface for the conversion engine in
//! `rempx-core`: the engine inserts fallback declarations before their
//! originals and replaces declaration values, nothing else.
//!
//! # Not Implemented
//!
//! - Selector parsing beyond splitting the comma-separated list
//! - Any interpretation of values (that is the engine's concern)
//! - Source map content generation (annotation comment only)

/// CSS parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
pub mod parser;
/// Stylesheet serialization.
pub mod serializer;
/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// Raws-preserving stylesheet tree.
pub mod tree;

// Re-exports for convenience
pub use parser::CSSParser;
pub use serializer::{MapOptions, OutputOptions, serialize, serialize_with};
pub use tokenizer::{CSSToken, CSSTokenizer};
pub use tree::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};

/// Tokenize and parse CSS text into a stylesheet tree.
#[must_use]
pub fn parse(css: &str) -> Stylesheet {
    let mut tokenizer = CSSTokenizer::new(css);
    tokenizer.run();
    let mut parser = CSSParser::new(tokenizer.into_tokens());
    parser.parse_stylesheet()
}
