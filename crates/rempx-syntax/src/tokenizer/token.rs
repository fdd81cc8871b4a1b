//! CSS Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Unlike a tokenizer that feeds a cascade engine, this one feeds a
//! rewriting pipeline whose output must reproduce the input source
//! byte-for-byte wherever it is left untouched. Every token therefore
//! carries the raw lexeme it was built from: numeric tokens keep their
//! spelling instead of a parsed value, whitespace and comments are tokens
//! rather than discarded trivia, and escape sequences are preserved
//! undecoded.

use core::fmt;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// CSS tokens as defined by the CSS Syntax Module Level 3 specification,
/// restricted to what a lossless stylesheet round-trip needs.
#[derive(Debug, Clone, PartialEq)]
pub enum CSSToken {
    /// "`<ident-token>`"
    /// "has a value composed of one or more code points"
    Ident(String),

    /// "`<function-token>`"
    /// "has a value composed of one or more code points, followed by U+0028 LEFT PARENTHESIS"
    ///
    /// The value is the function name; the `(` is implied.
    Function(String),

    /// "`<at-keyword-token>`"
    /// "has a value composed of one or more code points, preceded by U+0040 COMMERCIAL AT (@)"
    ///
    /// The value is the keyword name; the `@` is implied.
    AtKeyword(String),

    /// "`<hash-token>`"
    /// "has a value composed of one or more code points, preceded by U+0023 NUMBER SIGN (#)"
    ///
    /// The value is the hash name; the `#` is implied.
    Hash(String),

    /// "`<string-token>`"
    ///
    /// Full lexeme including the surrounding quotes, so the original
    /// quote style survives serialization.
    String(String),

    /// "`<url-token>`"
    ///
    /// Full `url(...)` lexeme including the function name, parentheses,
    /// and any interior whitespace.
    Url(String),

    /// "`<delim-token>`"
    /// "has a value composed of a single code point"
    Delim(char),

    /// "`<number-token>`"
    ///
    /// Raw numeric lexeme (e.g. `".5"`, `"-2"`, `"1e3"`). Numeric
    /// interpretation is the consumer's concern.
    Number(String),

    /// "`<percentage-token>`"
    ///
    /// Raw numeric lexeme; the `%` is implied.
    Percentage(String),

    /// "`<dimension-token>`"
    /// "has a numeric value, a type flag, and a unit"
    Dimension {
        /// Raw numeric lexeme.
        number: String,
        /// The unit as spelled in the source.
        unit: String,
    },

    /// "`<whitespace-token>`"
    ///
    /// The exact run of whitespace characters.
    Whitespace(String),

    /// A `/* ... */` comment, full lexeme including the delimiters.
    ///
    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    /// discards these; we keep them so they survive the round-trip.
    Comment(String),

    /// "`<CDO-token>`"
    /// "represents the character sequence U+003C U+0021 U+002D U+002D (<!--)"
    CDO,

    /// "`<CDC-token>`"
    /// "represents the character sequence U+002D U+002D U+003E (-->)"
    CDC,

    /// "`<colon-token>`"
    Colon,

    /// "`<semicolon-token>`"
    Semicolon,

    /// "`<comma-token>`"
    Comma,

    /// `<[-token>`
    LeftBracket,

    /// `<]-token>`
    RightBracket,

    /// `<(-token>`
    LeftParen,

    /// `<)-token>`
    RightParen,

    /// `<{-token>`
    LeftBrace,

    /// `<}-token>`
    RightBrace,

    /// End of file - signals end of input
    EOF,
}

impl CSSToken {
    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EOF)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace(_))
    }

    /// Append the exact source text this token covers to `out`.
    ///
    /// Concatenating the lexemes of a token stream reproduces the
    /// tokenized input exactly.
    pub fn write_lexeme(&self, out: &mut String) {
        match self {
            Self::Ident(v) | Self::String(v) | Self::Url(v) | Self::Number(v)
            | Self::Whitespace(v) | Self::Comment(v) => out.push_str(v),
            Self::Function(v) => {
                out.push_str(v);
                out.push('(');
            }
            Self::AtKeyword(v) => {
                out.push('@');
                out.push_str(v);
            }
            Self::Hash(v) => {
                out.push('#');
                out.push_str(v);
            }
            Self::Percentage(v) => {
                out.push_str(v);
                out.push('%');
            }
            Self::Dimension { number, unit } => {
                out.push_str(number);
                out.push_str(unit);
            }
            Self::Delim(c) => out.push(*c),
            Self::CDO => out.push_str("<!--"),
            Self::CDC => out.push_str("-->"),
            Self::Colon => out.push(':'),
            Self::Semicolon => out.push(';'),
            Self::Comma => out.push(','),
            Self::LeftBracket => out.push('['),
            Self::RightBracket => out.push(']'),
            Self::LeftParen => out.push('('),
            Self::RightParen => out.push(')'),
            Self::LeftBrace => out.push('{'),
            Self::RightBrace => out.push('}'),
            Self::EOF => {}
        }
    }

    /// The exact source text this token covers.
    #[must_use]
    pub fn lexeme(&self) -> String {
        let mut s = String::new();
        self.write_lexeme(&mut s);
        s
    }
}

impl fmt::Display for CSSToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::AtKeyword(v) => write!(f, "<at-keyword:@{v}>"),
            Self::Hash(v) => write!(f, "<hash:#{v}>"),
            Self::String(v) => write!(f, "<string:{v}>"),
            Self::Url(v) => write!(f, "<url:{v}>"),
            Self::Delim(c) => write!(f, "<delim:{c}>"),
            Self::Number(v) => write!(f, "<number:{v}>"),
            Self::Percentage(v) => write!(f, "<percentage:{v}%>"),
            Self::Dimension { number, unit } => write!(f, "<dimension:{number}{unit}>"),
            Self::Whitespace(_) => write!(f, "<whitespace>"),
            Self::Comment(v) => write!(f, "<comment:{v}>"),
            Self::CDO => write!(f, "<CDO>"),
            Self::CDC => write!(f, "<CDC>"),
            Self::Colon => write!(f, "<colon>"),
            Self::Semicolon => write!(f, "<semicolon>"),
            Self::Comma => write!(f, "<comma>"),
            Self::LeftBracket => write!(f, "<[>"),
            Self::RightBracket => write!(f, "<]>"),
            Self::LeftParen => write!(f, "<(>"),
            Self::RightParen => write!(f, "<)>"),
            Self::LeftBrace => write!(f, "<{{>"),
            Self::RightBrace => write!(f, "<}}>"),
            Self::EOF => write!(f, "<EOF>"),
        }
    }
}
