//! Building pixel fallbacks for a single declaration.
//!
//! The rewriter never touches the tree itself: it inspects one
//! declaration and, when there is something to convert, describes the
//! mutation as an [`Edit`]. The walker owns the node lists and applies
//! edits through the tree's two mutation operations. This keeps the
//! engine decoupled from any particular tree representation and keeps
//! the borrow of the node list out of the analysis path.

use rempx_syntax::Declaration;

use crate::exclusions::is_disallowed_property;
use crate::options::ConversionOptions;
use crate::scanner::{RemToken, find_rem_tokens};
use crate::unit::{format_px, rem_to_px};

/// A mutation of a node list, produced by [`rewrite`] and applied by the
/// walker.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Insert a fallback declaration immediately before the declaration
    /// at `index`.
    InsertBefore {
        /// Position of the original declaration in its node list.
        index: usize,
        /// The fallback declaration to insert.
        declaration: Declaration,
    },
    /// Overwrite the value of the declaration at `index`.
    ReplaceValue {
        /// Position of the declaration in its node list.
        index: usize,
        /// The new value text.
        value: String,
    },
}

/// Inspect one declaration and produce the edit that converts its `rem`
/// occurrences, if any.
///
/// Returns `None` for declarations with nothing to convert: denylisted
/// properties, custom properties, and values in which no `rem` token
/// survives the scanner's exclusion filters.
#[must_use]
pub fn rewrite(
    index: usize,
    decl: &Declaration,
    root_px: f64,
    options: &ConversionOptions,
) -> Option<Edit> {
    // Custom properties are substituted at use sites the engine cannot
    // see; converting the definition would be wrong as often as right.
    if decl.prop.starts_with("--") {
        return None;
    }
    if is_disallowed_property(&decl.prop) {
        return None;
    }

    let tokens = find_rem_tokens(&decl.value);
    if tokens.is_empty() {
        return None;
    }

    let fallback = build_fallback_value(&decl.value, &tokens, root_px);

    if options.replace {
        Some(Edit::ReplaceValue {
            index,
            value: fallback,
        })
    } else {
        // The fallback clone keeps the original's raws and `!important`
        // annotation, so both declarations serialize uniformly.
        let mut declaration = decl.clone();
        declaration.value = fallback;
        Some(Edit::InsertBefore { index, declaration })
    }
}

/// Splice each matched `rem` lexeme with its pixel equivalent, leaving
/// every other byte of the value untouched.
fn build_fallback_value(value: &str, tokens: &[RemToken], root_px: f64) -> String {
    let mut out = String::with_capacity(value.len());
    let mut cursor = 0;
    for token in tokens {
        out.push_str(&value[cursor..token.start]);
        out.push_str(&format_px(rem_to_px(token.number, root_px)));
        cursor = token.end;
    }
    out.push_str(&value[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: a bare declaration with the given property and value.
    fn decl(prop: &str, value: &str) -> Declaration {
        Declaration {
            before: String::new(),
            prop: prop.to_string(),
            between: ": ".to_string(),
            value: value.to_string(),
            important: None,
        }
    }

    #[test]
    fn test_inserts_fallback_by_default() {
        let d = decl("font-size", "2rem");
        match rewrite(3, &d, 16.0, &ConversionOptions::default()) {
            Some(Edit::InsertBefore { index, declaration }) => {
                assert_eq!(index, 3);
                assert_eq!(declaration.value, "32px");
                assert_eq!(declaration.prop, "font-size");
            }
            other => panic!("Expected InsertBefore, got {other:?}"),
        }
    }

    #[test]
    fn test_replace_overwrites_value() {
        let d = decl("font-size", "2rem");
        let options = ConversionOptions {
            replace: true,
            ..ConversionOptions::default()
        };
        match rewrite(0, &d, 20.0, &options) {
            Some(Edit::ReplaceValue { value, .. }) => assert_eq!(value, "40px"),
            other => panic!("Expected ReplaceValue, got {other:?}"),
        }
    }

    #[test]
    fn test_multi_value_shorthand() {
        let d = decl("margin", "0.5rem .5rem 0rem -2rem");
        match rewrite(0, &d, 16.0, &ConversionOptions::default()) {
            Some(Edit::InsertBefore { declaration, .. }) => {
                assert_eq!(declaration.value, "8px 8px 0px -32px");
            }
            other => panic!("Expected InsertBefore, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_units_left_alone() {
        let d = decl("padding", "1rem 10px 2em 5%");
        match rewrite(0, &d, 16.0, &ConversionOptions::default()) {
            Some(Edit::InsertBefore { declaration, .. }) => {
                assert_eq!(declaration.value, "16px 10px 2em 5%");
            }
            other => panic!("Expected InsertBefore, got {other:?}"),
        }
    }

    #[test]
    fn test_disallowed_property_is_noop() {
        for prop in ["transform", "-ms-transform", "-webkit-transform"] {
            let d = decl(prop, "translate(2rem)");
            assert_eq!(rewrite(0, &d, 16.0, &ConversionOptions::default()), None);
        }
    }

    #[test]
    fn test_custom_property_is_noop() {
        let d = decl("--spacing", "2rem");
        assert_eq!(rewrite(0, &d, 16.0, &ConversionOptions::default()), None);
    }

    #[test]
    fn test_no_rem_is_noop() {
        let d = decl("font-size", "16px");
        assert_eq!(rewrite(0, &d, 16.0, &ConversionOptions::default()), None);
    }

    #[test]
    fn test_important_is_carried() {
        let mut d = decl("font-size", "2rem");
        d.important = Some(" !important".to_string());
        match rewrite(0, &d, 16.0, &ConversionOptions::default()) {
            Some(Edit::InsertBefore { declaration, .. }) => {
                assert_eq!(declaration.important.as_deref(), Some(" !important"));
            }
            other => panic!("Expected InsertBefore, got {other:?}"),
        }
    }
}
