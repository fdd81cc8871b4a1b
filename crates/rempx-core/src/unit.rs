//! CSS length unit values and rem-to-px arithmetic.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use serde::Serialize;

/// User agent default root font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_ROOT_FONT_SIZE_PX: f64 = 16.0;

/// The unit of a parsed quantity, restricted to what root font size
/// resolution can interpret.
///
/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Unit {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the root element."
    Rem,
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em,
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    Percent,
    /// A bare number with no unit suffix.
    Unitless,
    /// Any other unit; not interpretable as a root size.
    Other(String),
}

/// A parsed (number, unit) pair such as `20px`, `1.5em`, `150%`, `18`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitValue {
    /// The numeric coefficient.
    pub number: f64,
    /// The unit suffix.
    pub unit: Unit,
}

impl UnitValue {
    /// Parse a quantity from text: optional sign, optional leading `.`,
    /// then a unit suffix. Unit matching is ASCII case-insensitive.
    ///
    /// Returns `None` when no number can be found.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        let end = number_end(s);
        let number: f64 = s.get(..end)?.parse().ok()?;
        let suffix = &s[end..];

        let unit = if suffix.is_empty() {
            Unit::Unitless
        } else if suffix.eq_ignore_ascii_case("px") {
            Unit::Px
        } else if suffix.eq_ignore_ascii_case("rem") {
            Unit::Rem
        } else if suffix.eq_ignore_ascii_case("em") {
            Unit::Em
        } else if suffix == "%" {
            Unit::Percent
        } else {
            Unit::Other(suffix.to_string())
        };

        Some(Self { number, unit })
    }

    /// Resolve this quantity to a root font size in pixels.
    ///
    /// Relative units have no element context here, so they resolve
    /// against the CSS default root: `em`/`rem` multiply the 16px
    /// default, `%` takes a fraction of it, unitless numbers are raw
    /// pixels. Unknown units resolve to `None`.
    #[must_use]
    pub fn to_root_px(&self) -> Option<f64> {
        match &self.unit {
            Unit::Px | Unit::Unitless => Some(self.number),
            Unit::Rem | Unit::Em => Some(self.number * DEFAULT_ROOT_FONT_SIZE_PX),
            Unit::Percent => Some(self.number / 100.0 * DEFAULT_ROOT_FONT_SIZE_PX),
            Unit::Other(_) => None,
        }
    }
}

/// Byte length of the numeric prefix of `s`: optional `+`/`-`, digits,
/// at most one `.`. Zero when `s` does not start with a number.
fn number_end(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut saw_digit = false;
    let mut saw_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => {
                saw_digit = true;
                end += 1;
            }
            b'.' if !saw_dot => {
                saw_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if saw_digit { end } else { 0 }
}

/// Convert a `rem` coefficient to an integer pixel quantity at the given
/// root size.
///
/// The magnitude always rounds down (`2rem` at a 24.8px root is 49.6,
/// emitted as 49px) and the sign is restored afterward, so `-1.3rem` at
/// 16px is -20.8, emitted as -20px. The fallback therefore never
/// overshoots the true rem-computed size in either direction.
#[must_use]
pub fn rem_to_px(coefficient: f64, root_px: f64) -> i64 {
    (coefficient * root_px).trunc() as i64
}

/// Format an integer pixel quantity as a CSS token (`"32px"`).
#[must_use]
pub fn format_px(px: i64) -> String {
    format!("{px}px")
}
