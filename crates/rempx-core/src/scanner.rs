//! Locating convertible `rem` tokens inside a declaration value.
//!
//! This is a small single-purpose scanner over the value text, not a full
//! tokenizer: it understands just enough CSS micro-syntax (numbers,
//! identifiers, strings, function-call nesting) to find `<number>rem`
//! dimensions and to know when they sit inside an excluded function call.
//! Malformed input never produces an error; tokens that do not scan as a
//! rem dimension simply do not match.

use crate::exclusions::is_disallowed_function;

/// A convertible `rem` occurrence inside a value string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemToken {
    /// Byte offset of the start of the numeric lexeme (sign included).
    pub start: usize,
    /// Byte offset just past the `rem` unit.
    pub end: usize,
    /// The parsed numeric coefficient.
    pub number: f64,
}

/// Scan a declaration value for convertible `rem` dimensions, in order of
/// appearance.
///
/// Occurrences inside a disallowed function call (`calc`, gradients,
/// transform functions - see [`crate::exclusions`]), at any nesting
/// depth, are skipped. So are occurrences inside quoted strings and
/// inside `url(...)`.
#[must_use]
pub fn find_rem_tokens(value: &str) -> Vec<RemToken> {
    ValueScanner::new(value).run()
}

/// Cursor state for one scan over a value string.
struct ValueScanner<'v> {
    value: &'v str,
    chars: Vec<(usize, char)>,
    pos: usize,
    /// One frame per open parenthesis: whether it belongs to a
    /// disallowed function.
    frames: Vec<bool>,
    /// Count of disallowed frames currently open; matches are suppressed
    /// while nonzero.
    disallowed_depth: usize,
    matches: Vec<RemToken>,
}

impl<'v> ValueScanner<'v> {
    fn new(value: &'v str) -> Self {
        Self {
            value,
            chars: value.char_indices().collect(),
            pos: 0,
            frames: Vec::new(),
            disallowed_depth: 0,
            matches: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<RemToken> {
        while let Some(c) = self.peek() {
            match c {
                '"' | '\'' => self.skip_string(c),
                '(' => {
                    self.frames.push(false);
                    self.pos += 1;
                }
                ')' => {
                    if let Some(disallowed) = self.frames.pop() {
                        if disallowed {
                            self.disallowed_depth -= 1;
                        }
                    }
                    self.pos += 1;
                }
                _ if self.would_start_number() => self.scan_number(),
                _ if is_ident_start(c) || (c == '-' && self.would_start_ident_after_dash()) => {
                    self.scan_ident();
                }
                _ => self.pos += 1,
            }
        }
        self.matches
    }

    /// Scan a number and, if a unit identifier follows immediately,
    /// record a match for the `rem` unit.
    fn scan_number(&mut self) {
        let start = self.byte_at(self.pos);

        if matches!(self.peek(), Some('+' | '-')) {
            self.pos += 1;
        }
        self.skip_digits();
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
            self.skip_digits();
        }
        let number_end = self.byte_at(self.pos);

        // A unit must follow with no intervening space.
        if self.peek().is_some_and(is_ident_start) {
            let unit_start = self.pos;
            self.skip_ident_chars();
            let unit_end = self.byte_at(self.pos);
            let unit = &self.value[self.byte_at(unit_start)..unit_end];

            if unit.eq_ignore_ascii_case("rem") && self.disallowed_depth == 0 {
                if let Ok(number) = self.value[start..number_end].parse::<f64>() {
                    self.matches.push(RemToken {
                        start,
                        end: unit_end,
                        number,
                    });
                }
            }
        }
    }

    /// Scan an identifier; a `(` directly after it opens a function
    /// frame, disallowed or not. `url(` is skipped opaquely, since its
    /// unquoted contents are free text, not tokens.
    fn scan_ident(&mut self) {
        let start = self.pos;
        self.skip_ident_chars();
        let name = &self.value[self.byte_at(start)..self.byte_at(self.pos)];

        if self.peek() == Some('(') {
            if name.eq_ignore_ascii_case("url") {
                self.pos += 1;
                self.skip_url();
            } else {
                let disallowed = is_disallowed_function(name);
                self.pos += 1;
                self.frames.push(disallowed);
                if disallowed {
                    self.disallowed_depth += 1;
                }
            }
        }
    }

    /// Skip past a quoted string, honoring backslash escapes. An
    /// unescaped newline or EOF ends it (bad-string recovery).
    fn skip_string(&mut self, quote: char) {
        self.pos += 1;
        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                c if c == quote => return,
                '\\' => {
                    if self.peek().is_some() {
                        self.pos += 1;
                    }
                }
                '\n' => return,
                _ => {}
            }
        }
    }

    /// Skip past unquoted `url(` contents through the closing `)`.
    fn skip_url(&mut self) {
        while let Some(c) = self.peek() {
            self.pos += 1;
            match c {
                ')' => return,
                '\\' => {
                    if self.peek().is_some() {
                        self.pos += 1;
                    }
                }
                _ => {}
            }
        }
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn skip_ident_chars(&mut self) {
        while self.peek().is_some_and(is_ident_char) {
            self.pos += 1;
        }
    }

    /// Whether the cursor sits on the start of a number: a digit, `.`
    /// followed by a digit, or a sign followed by either.
    fn would_start_number(&self) -> bool {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => self.peek_at(1).is_some_and(|c| c.is_ascii_digit()),
            Some('+' | '-') => match self.peek_at(1) {
                Some(c) if c.is_ascii_digit() => true,
                Some('.') => self.peek_at(2).is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            },
            _ => false,
        }
    }

    /// Whether a `-` at the cursor begins an identifier
    /// (`-webkit-calc`, `--x`).
    fn would_start_ident_after_dash(&self) -> bool {
        matches!(self.peek_at(1), Some(c) if is_ident_start(c) || c == '-')
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).map(|&(_, c)| c)
    }

    /// Byte offset of the character at `pos`, or the end of the value.
    fn byte_at(&self, pos: usize) -> usize {
        self.chars.get(pos).map_or(self.value.len(), |&(i, _)| i)
    }
}

/// [CSS Syntax 3 § 4.2 - ident-start code point](https://www.w3.org/TR/css-syntax-3/#ident-start-code-point)
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// [CSS Syntax 3 § 4.2 - ident code point](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}
