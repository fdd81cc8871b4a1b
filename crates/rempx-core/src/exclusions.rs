//! Contexts excluded from conversion.
//!
//! Two static denylists, kept as data rather than scattered conditionals
//! so they are independently testable and extensible: function calls
//! whose arguments carry non-literal or already-relative units, and
//! properties whose values use lengths in non-length roles (transform
//! matrices) where a pixel fallback would misrender.
//!
//! Matching strips a single leading vendor prefix first, so one entry
//! covers `-webkit-calc`, `-moz-calc`, `-ms-transform`, and friends.

/// Function names whose arguments are never converted.
pub const DISALLOWED_FUNCTIONS: &[&str] = &[
    "calc",
    "linear-gradient",
    "radial-gradient",
    "repeating-linear-gradient",
    "repeating-radial-gradient",
    "translate",
    "translatex",
    "translatey",
    "translatez",
    "translate3d",
    "matrix",
    "matrix3d",
];

/// Properties whose declarations are never converted.
pub const DISALLOWED_PROPERTIES: &[&str] = &["transform"];

/// Strip a single leading vendor prefix (`-webkit-`, `-moz-`, `-ms-`,
/// `-o-`, or any other `-<vendor>-`) from an identifier.
///
/// [CSS 2.1 § 4.1.2.1 Vendor-specific extensions](https://www.w3.org/TR/CSS21/syndata.html#vendor-keywords)
/// "An initial dash or underscore is guaranteed never to be used in a
/// property or keyword by any current or future level of CSS."
#[must_use]
pub fn strip_vendor_prefix(name: &str) -> &str {
    if let Some(rest) = name.strip_prefix('-') {
        if let Some(idx) = rest.find('-') {
            return &rest[idx + 1..];
        }
    }
    name
}

/// Whether a function name (vendor prefix stripped, case-insensitive) is
/// excluded from conversion.
#[must_use]
pub fn is_disallowed_function(name: &str) -> bool {
    let base = strip_vendor_prefix(name);
    DISALLOWED_FUNCTIONS
        .iter()
        .any(|f| f.eq_ignore_ascii_case(base))
}

/// Whether a property name (vendor prefix stripped, case-insensitive) is
/// excluded from conversion.
#[must_use]
pub fn is_disallowed_property(name: &str) -> bool {
    let base = strip_vendor_prefix(name);
    DISALLOWED_PROPERTIES
        .iter()
        .any(|p| p.eq_ignore_ascii_case(base))
}

/// Whether an at-rule name is `keyframes`, under any vendor prefix.
#[must_use]
pub fn is_keyframes(name: &str) -> bool {
    strip_vendor_prefix(name).eq_ignore_ascii_case("keyframes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_vendor_prefix() {
        assert_eq!(strip_vendor_prefix("-webkit-calc"), "calc");
        assert_eq!(strip_vendor_prefix("-ms-transform"), "transform");
        assert_eq!(strip_vendor_prefix("-o-keyframes"), "keyframes");
        assert_eq!(strip_vendor_prefix("transform"), "transform");
        assert_eq!(strip_vendor_prefix("-"), "-");
    }

    #[test]
    fn test_disallowed_functions() {
        assert!(is_disallowed_function("calc"));
        assert!(is_disallowed_function("-webkit-calc"));
        assert!(is_disallowed_function("linear-gradient"));
        assert!(is_disallowed_function("-moz-linear-gradient"));
        assert!(is_disallowed_function("translate"));
        assert!(is_disallowed_function("Calc"));
        assert!(!is_disallowed_function("rgba"));
        assert!(!is_disallowed_function("url"));
    }

    #[test]
    fn test_disallowed_properties() {
        assert!(is_disallowed_property("transform"));
        assert!(is_disallowed_property("-ms-transform"));
        assert!(is_disallowed_property("-webkit-transform"));
        assert!(!is_disallowed_property("margin"));
    }

    #[test]
    fn test_keyframes_with_prefixes() {
        assert!(is_keyframes("keyframes"));
        assert!(is_keyframes("-webkit-keyframes"));
        assert!(is_keyframes("-moz-KEYFRAMES"));
        assert!(!is_keyframes("media"));
    }
}
