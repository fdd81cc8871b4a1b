//! Integration tests for the CSS tokenizer.

use rempx_syntax::tokenizer::{CSSToken, CSSTokenizer};

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<CSSToken> {
    let mut tokenizer = CSSTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Helper: concatenated lexemes of a token stream.
fn rejoin(tokens: &[CSSToken]) -> String {
    let mut out = String::new();
    for token in tokens {
        token.write_lexeme(&mut out);
    }
    out
}

#[test]
fn test_whitespace_keeps_raw_run() {
    let tokens = tokenize("   \t\n  ");
    assert_eq!(tokens.len(), 2); // whitespace + EOF
    match &tokens[0] {
        CSSToken::Whitespace(ws) => assert_eq!(ws, "   \t\n  "),
        _ => panic!("Expected Whitespace token"),
    }
    assert!(tokens[1].is_eof());
}

#[test]
fn test_ident() {
    let tokens = tokenize("background-color");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        CSSToken::Ident(name) => assert_eq!(name, "background-color"),
        _ => panic!("Expected Ident token"),
    }
}

#[test]
fn test_function() {
    let tokens = tokenize("calc(");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        CSSToken::Function(name) => assert_eq!(name, "calc"),
        _ => panic!("Expected Function token"),
    }
}

#[test]
fn test_at_keyword() {
    let tokens = tokenize("@media");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        CSSToken::AtKeyword(name) => assert_eq!(name, "media"),
        _ => panic!("Expected AtKeyword token"),
    }
}

#[test]
fn test_dimension_splits_number_and_unit() {
    let tokens = tokenize("2rem");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        CSSToken::Dimension { number, unit } => {
            assert_eq!(number, "2");
            assert_eq!(unit, "rem");
        }
        _ => panic!("Expected Dimension token"),
    }
}

#[test]
fn test_dimension_keeps_spelling() {
    match &tokenize(".5rem")[0] {
        CSSToken::Dimension { number, unit } => {
            assert_eq!(number, ".5");
            assert_eq!(unit, "rem");
        }
        _ => panic!("Expected Dimension token"),
    }
    match &tokenize("-2rem")[0] {
        CSSToken::Dimension { number, unit } => {
            assert_eq!(number, "-2");
            assert_eq!(unit, "rem");
        }
        _ => panic!("Expected Dimension token"),
    }
}

#[test]
fn test_percentage() {
    match &tokenize("62.5%")[0] {
        CSSToken::Percentage(number) => assert_eq!(number, "62.5"),
        _ => panic!("Expected Percentage token"),
    }
}

#[test]
fn test_number_lexeme() {
    match &tokenize("1.75")[0] {
        CSSToken::Number(number) => assert_eq!(number, "1.75"),
        _ => panic!("Expected Number token"),
    }
}

#[test]
fn test_string_keeps_quotes() {
    match &tokenize("\"hello world\"")[0] {
        CSSToken::String(raw) => assert_eq!(raw, "\"hello world\""),
        _ => panic!("Expected String token"),
    }
    match &tokenize("'a;b{}'")[0] {
        CSSToken::String(raw) => assert_eq!(raw, "'a;b{}'"),
        _ => panic!("Expected String token"),
    }
}

#[test]
fn test_unquoted_url_is_one_token() {
    match &tokenize("url( image.png )")[0] {
        CSSToken::Url(raw) => assert_eq!(raw, "url( image.png )"),
        _ => panic!("Expected Url token"),
    }
}

#[test]
fn test_quoted_url_is_a_function() {
    let tokens = tokenize("url(\"image.png\")");
    match &tokens[0] {
        CSSToken::Function(name) => assert_eq!(name, "url"),
        _ => panic!("Expected Function token"),
    }
    match &tokens[1] {
        CSSToken::String(raw) => assert_eq!(raw, "\"image.png\""),
        _ => panic!("Expected String token"),
    }
}

#[test]
fn test_comment_is_a_token() {
    match &tokenize("/* note */")[0] {
        CSSToken::Comment(raw) => assert_eq!(raw, "/* note */"),
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_hash() {
    match &tokenize("#fff")[0] {
        CSSToken::Hash(value) => assert_eq!(value, "fff"),
        _ => panic!("Expected Hash token"),
    }
}

#[test]
fn test_vendor_prefixed_function() {
    match &tokenize("-webkit-calc(")[0] {
        CSSToken::Function(name) => assert_eq!(name, "-webkit-calc"),
        _ => panic!("Expected Function token"),
    }
}

#[test]
fn test_cdo_cdc() {
    let tokens = tokenize("<!-- -->");
    assert!(matches!(tokens[0], CSSToken::CDO));
    assert!(matches!(tokens[2], CSSToken::CDC));
}

#[test]
fn test_lexemes_reproduce_input() {
    let samples = [
        ".rule { font-size: 2rem }",
        "@media screen and (min-width: 40rem) { a { b: c } }",
        ".a{margin:0.5rem .5rem 0rem -2rem}",
        "html { font: italic 100 20px/24px sans-serif }",
        "/* head */ .x { background: url(i.png) no-repeat; }",
        ".y::before { content: \"2rem\" !important }",
        "@import url(base.css);",
    ];
    for css in samples {
        assert_eq!(rejoin(&tokenize(css)), css, "lexeme round-trip of {css:?}");
    }
}
