//! Integration tests for root font size resolution.

use rempx_core::{DEFAULT_ROOT_FONT_SIZE_PX, RempxError, root_size::resolve};
use rempx_syntax::parse;

/// Helper: resolve against parsed CSS with no override.
fn resolve_css(css: &str) -> f64 {
    resolve(&parse(css), None).unwrap()
}

#[test]
fn test_default_is_16px() {
    assert!((resolve_css("") - DEFAULT_ROOT_FONT_SIZE_PX).abs() < 1e-9);
    assert!((resolve_css(".rule { font-size: 20px }") - 16.0).abs() < 1e-9);
}

#[test]
fn test_override_beats_stylesheet() {
    let sheet = parse("html { font-size: 10px }");
    assert!((resolve(&sheet, Some("20px")).unwrap() - 20.0).abs() < 1e-9);
}

#[test]
fn test_override_unit_forms() {
    let sheet = parse("");
    assert!((resolve(&sheet, Some("20px")).unwrap() - 20.0).abs() < 1e-9);
    assert!((resolve(&sheet, Some("1.5em")).unwrap() - 24.0).abs() < 1e-9);
    assert!((resolve(&sheet, Some("1.75rem")).unwrap() - 28.0).abs() < 1e-9);
    assert!((resolve(&sheet, Some("150%")).unwrap() - 24.0).abs() < 1e-9);
    assert!((resolve(&sheet, Some("18")).unwrap() - 18.0).abs() < 1e-9);
}

#[test]
fn test_malformed_override_is_an_error() {
    let sheet = parse("");
    match resolve(&sheet, Some("2vw")) {
        Err(RempxError::InvalidRootValue { value }) => assert_eq!(value, "2vw"),
        other => panic!("Expected InvalidRootValue, got {other:?}"),
    }
    assert!(resolve(&sheet, Some("nope")).is_err());
}

#[test]
fn test_html_and_root_selectors() {
    assert!((resolve_css("html { font-size: 10px }") - 10.0).abs() < 1e-9);
    assert!((resolve_css(":root { font-size: 10px }") - 10.0).abs() < 1e-9);
    assert!((resolve_css("HTML { font-size: 10px }") - 10.0).abs() < 1e-9);
    assert!((resolve_css("html, body { font-size: 10px }") - 10.0).abs() < 1e-9);
}

#[test]
fn test_non_root_selectors_ignored() {
    assert!((resolve_css(".html { font-size: 10px }") - 16.0).abs() < 1e-9);
    assert!((resolve_css("body { font-size: 10px }") - 16.0).abs() < 1e-9);
}

#[test]
fn test_percentage_of_default() {
    assert!((resolve_css("html { font-size: 62.5% }") - 10.0).abs() < 1e-9);
}

#[test]
fn test_last_declaration_wins() {
    let css = "html { font-size: 10px } html { font-size: 20px }";
    assert!((resolve_css(css) - 20.0).abs() < 1e-9);

    let css = "html { font-size: 10px; font-size: 12px }";
    assert!((resolve_css(css) - 12.0).abs() < 1e-9);
}

#[test]
fn test_invalid_candidates_are_skipped() {
    // A later unreadable declaration does not erase an earlier valid one.
    let css = "html { font-size: 10px } html { font-size: bogus }";
    assert!((resolve_css(css) - 10.0).abs() < 1e-9);

    // An unsupported unit is not a candidate either.
    let css = "html { font-size: 2vw }";
    assert!((resolve_css(css) - 16.0).abs() < 1e-9);
}

#[test]
fn test_font_shorthand_with_line_height() {
    let css = ":root { font: italic 100 20px/24px sans-serif }";
    assert!((resolve_css(css) - 20.0).abs() < 1e-9);

    let css = "html { font: 16px/1.5 serif }";
    assert!((resolve_css(css) - 16.0).abs() < 1e-9);
}

#[test]
fn test_font_shorthand_without_size_falls_through() {
    assert!((resolve_css("html { font: inherit }") - 16.0).abs() < 1e-9);
    assert!((resolve_css("html { font: caption }") - 16.0).abs() < 1e-9);
}
