//! Resolving the effective root font size in pixels.
//!
//! The converter needs one number before it touches anything: how many
//! pixels one `rem` is worth. An explicit override wins; otherwise the
//! stylesheet itself is consulted - a `font-size` (or `font` shorthand)
//! declared on the root scope - and failing that, the 16px user agent
//! default applies.
//!
//! [CSS Cascade 4 § 6.1](https://www.w3.org/TR/css-cascade-4/#cascade-sort)
//! "The last declaration in document order wins." The scan therefore
//! keeps overwriting its candidate and the final survivor is the answer,
//! regardless of where the consuming rules sit relative to it.

use rempx_syntax::{Declaration, Node, Rule, Stylesheet};

use crate::error::RempxError;
use crate::unit::{DEFAULT_ROOT_FONT_SIZE_PX, UnitValue};

/// Resolve the root font size in pixels.
///
/// Pure over the tree snapshot; the tree is never mutated.
///
/// # Errors
///
/// [`RempxError::InvalidRootValue`] when an explicit override is supplied
/// but cannot be interpreted. Stylesheet-declared sizes that cannot be
/// interpreted are not errors; they simply do not become candidates.
pub fn resolve(
    stylesheet: &Stylesheet,
    override_value: Option<&str>,
) -> Result<f64, RempxError> {
    if let Some(raw) = override_value {
        return UnitValue::parse(raw)
            .and_then(|value| value.to_root_px())
            .ok_or_else(|| RempxError::InvalidRootValue {
                value: raw.to_string(),
            });
    }

    let mut resolved = DEFAULT_ROOT_FONT_SIZE_PX;
    for node in &stylesheet.nodes {
        let Node::Rule(rule) = node else { continue };
        if !is_root_rule(rule) {
            continue;
        }
        for child in &rule.nodes {
            let Node::Declaration(decl) = child else {
                continue;
            };
            if let Some(px) = candidate_px(decl) {
                resolved = px;
            }
        }
    }
    Ok(resolved)
}

/// Whether a rule addresses the root scope: its selector list contains
/// `html` or `:root`.
fn is_root_rule(rule: &Rule) -> bool {
    rule.selectors()
        .iter()
        .any(|s| s.eq_ignore_ascii_case("html") || s.eq_ignore_ascii_case(":root"))
}

/// The pixel size a root-scope declaration contributes, if any.
fn candidate_px(decl: &Declaration) -> Option<f64> {
    if decl.prop.eq_ignore_ascii_case("font-size") {
        return UnitValue::parse(&decl.value)?.to_root_px();
    }
    if decl.prop.eq_ignore_ascii_case("font") {
        return UnitValue::parse(font_shorthand_size(&decl.value)?)?.to_root_px();
    }
    None
}

/// Extract the size component from a `font` shorthand value.
///
/// [CSS Fonts 4 § 2.4 font](https://www.w3.org/TR/css-fonts-4/#font-prop)
/// "... <font-size> [ / <line-height> ]? <font-family>"
///
/// The size is the last whitespace-delimited token before the first `/`
/// (the line-height separator). Working backward from the slash skips
/// whatever `font-style` / `font-variant` / `font-weight` keywords
/// precede the size, including numeric weights like `100`. A shorthand
/// without a slash (`font: inherit`, system keywords) has no discernible
/// size and yields `None`.
fn font_shorthand_size(value: &str) -> Option<&str> {
    let head = &value[..value.find('/')?];
    head.split_whitespace().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_shorthand_size() {
        assert_eq!(
            font_shorthand_size("italic 100 20px/24px sans-serif"),
            Some("20px")
        );
        assert_eq!(font_shorthand_size("16px/1.5 serif"), Some("16px"));
        assert_eq!(font_shorthand_size("inherit"), None);
        assert_eq!(font_shorthand_size("caption"), None);
    }
}
