//! Integration tests for the value scanner.

use rempx_core::find_rem_tokens;

/// Helper: the matched numeric coefficients of a value.
fn numbers(value: &str) -> Vec<f64> {
    find_rem_tokens(value).iter().map(|t| t.number).collect()
}

#[test]
fn test_single_match_with_offsets() {
    let tokens = find_rem_tokens("2rem");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].start, 0);
    assert_eq!(tokens[0].end, 4);
    assert!((tokens[0].number - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_offsets_cover_the_full_lexeme() {
    let value = "0.5rem .5rem 0rem -2rem";
    let tokens = find_rem_tokens(value);
    assert_eq!(tokens.len(), 4);
    let lexemes: Vec<&str> = tokens.iter().map(|t| &value[t.start..t.end]).collect();
    assert_eq!(lexemes, vec!["0.5rem", ".5rem", "0rem", "-2rem"]);
    assert_eq!(numbers(value), vec![0.5, 0.5, 0.0, -2.0]);
}

#[test]
fn test_no_match_without_rem() {
    assert!(find_rem_tokens("16px").is_empty());
    assert!(find_rem_tokens("62.5%").is_empty());
    assert!(find_rem_tokens("0 auto").is_empty());
    assert!(find_rem_tokens("").is_empty());
}

#[test]
fn test_unit_must_be_exactly_rem() {
    assert!(find_rem_tokens("2remx").is_empty());
    assert!(find_rem_tokens("2rems").is_empty());
    // Case-insensitive, as units are.
    assert_eq!(numbers("2REM"), vec![2.0]);
}

#[test]
fn test_unit_must_be_adjacent() {
    assert!(find_rem_tokens("2 rem").is_empty());
    assert!(find_rem_tokens("rem 2").is_empty());
}

#[test]
fn test_ident_prefixed_number_is_not_a_dimension() {
    assert!(find_rem_tokens("item2rem").is_empty());
}

#[test]
fn test_calc_is_skipped() {
    assert!(find_rem_tokens("calc(100% - 2rem)").is_empty());
    assert!(find_rem_tokens("-webkit-calc(100% - 2rem)").is_empty());
}

#[test]
fn test_gradients_are_skipped() {
    assert!(find_rem_tokens("linear-gradient(red 2rem, blue)").is_empty());
    assert!(find_rem_tokens("-moz-linear-gradient(red 2rem, blue)").is_empty());
}

#[test]
fn test_nesting_inside_disallowed_function() {
    // The inner var() does not lift the calc() exclusion.
    assert!(find_rem_tokens("calc(var(--x) + 2rem)").is_empty());
}

#[test]
fn test_disallowed_function_inside_allowed_one() {
    // Only the token inside calc() is excluded.
    assert_eq!(numbers("minmax(calc(2rem + 1px), 3rem)"), vec![3.0]);
}

#[test]
fn test_allowed_functions_still_convert() {
    assert_eq!(numbers("minmax(2rem, 1fr)"), vec![2.0]);
}

#[test]
fn test_match_after_closing_disallowed_function() {
    assert_eq!(numbers("calc(2rem + 1px) 3rem"), vec![3.0]);
}

#[test]
fn test_quoted_strings_are_skipped() {
    assert!(find_rem_tokens("\"2rem\"").is_empty());
    assert!(find_rem_tokens("'2rem'").is_empty());
    assert_eq!(numbers("\"2rem\" 3rem"), vec![3.0]);
}

#[test]
fn test_url_contents_are_skipped() {
    assert!(find_rem_tokens("url(2rem.png)").is_empty());
    assert_eq!(numbers("url(2rem.png) 3rem"), vec![3.0]);
}

#[test]
fn test_malformed_input_never_panics() {
    assert!(find_rem_tokens("calc(").is_empty());
    assert!(find_rem_tokens(")))").is_empty());
    assert!(find_rem_tokens("\"unterminated").is_empty());
    assert!(find_rem_tokens("-").is_empty());
    assert!(find_rem_tokens(".").is_empty());
}
