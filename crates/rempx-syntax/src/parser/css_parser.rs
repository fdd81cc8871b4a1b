//! CSS Parser per [§ 5 Parsing](https://www.w3.org/TR/css-syntax-3/#parsing).
//!
//! "The input to the parsing stage is a stream of tokens from the
//! tokenization stage." The consume algorithms follow the spec's shape,
//! but instead of discarding whitespace and comments they thread every
//! piece of source text into the raws fields of the tree, so that
//! serializing an unedited tree reproduces the input.
//!
//! Parsing never fails: constructs the grammar cannot place (a prelude
//! cut short by EOF, a declaration without a colon) are passed through as
//! raw text in the closest enclosing raw field instead of being dropped.

use crate::tokenizer::CSSToken;
use crate::tree::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};

/// The contents of a block (or of the top level): child nodes plus the
/// raw text that trails them.
struct BlockBody {
    nodes: Vec<Node>,
    after: String,
    semicolon: bool,
}

/// CSS parser
pub struct CSSParser {
    tokens: Vec<CSSToken>,
    position: usize,
}

impl CSSParser {
    /// Create a new parser from a list of tokens.
    #[must_use]
    pub fn new(tokens: Vec<CSSToken>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
    ///
    /// "To parse a stylesheet from input..."
    pub fn parse_stylesheet(&mut self) -> Stylesheet {
        // "Consume a list of rules from input, with the top-level flag set."
        let body = self.consume_node_list(true);
        Stylesheet {
            nodes: body.nodes,
            after: body.after,
        }
    }

    /// [§ 5.4.1 Consume a list of rules](https://www.w3.org/TR/css-syntax-3/#consume-list-of-rules)
    /// and [§ 5.4.5 Consume a list of declarations](https://www.w3.org/TR/css-syntax-3/#consume-list-of-declarations),
    /// merged: block interiors may hold either nested rules (`@media`) or
    /// declarations (`@font-face`, style rules), decided by lookahead.
    fn consume_node_list(&mut self, top_level: bool) -> BlockBody {
        let mut nodes = Vec::new();
        // Raw text waiting to become the next node's `before` (or the
        // container's `after` if no node follows).
        let mut before = String::new();
        // Whether the most recent declaration was terminated by `;`.
        let mut last_semicolon = false;

        loop {
            match self.peek() {
                // "<whitespace-token>" - accumulate into the raw buffer.
                Some(CSSToken::Whitespace(ws)) => {
                    before.push_str(ws);
                    let _ = self.consume();
                }

                // Comments at node position become comment nodes.
                Some(CSSToken::Comment(raw)) => {
                    let inner = raw.strip_prefix("/*").unwrap_or(raw);
                    let inner = inner.strip_suffix("*/").unwrap_or(inner);
                    let text = inner.to_string();
                    let _ = self.consume();
                    nodes.push(Node::Comment(Comment {
                        before: std::mem::take(&mut before),
                        text,
                    }));
                }

                // "<CDO-token>" or "<CDC-token>"
                // "If the top-level flag is set, do nothing." - but the
                // text must survive, so it rides in the raw buffer.
                Some(tok @ (CSSToken::CDO | CSSToken::CDC)) => {
                    tok.write_lexeme(&mut before);
                    let _ = self.consume();
                }

                // A semicolon not claimed by a declaration is stray;
                // preserve it as raw text.
                Some(CSSToken::Semicolon) => {
                    before.push(';');
                    let _ = self.consume();
                }

                // "<}-token>" - end of the enclosing block. At the top
                // level it is stray and preserved as raw text.
                Some(CSSToken::RightBrace) => {
                    if top_level {
                        before.push('}');
                        let _ = self.consume();
                    } else {
                        return BlockBody {
                            semicolon: ends_with_declaration(&nodes) && last_semicolon,
                            nodes,
                            after: before,
                        };
                    }
                }

                // "<EOF-token>"
                None | Some(CSSToken::EOF) => {
                    return BlockBody {
                        semicolon: ends_with_declaration(&nodes) && last_semicolon,
                        nodes,
                        after: before,
                    };
                }

                // "<at-keyword-token>"
                // "Reconsume the current input token. Consume an at-rule."
                Some(CSSToken::AtKeyword(_)) => {
                    let at_rule = self.consume_at_rule(std::mem::take(&mut before));
                    nodes.push(Node::AtRule(at_rule));
                }

                // "anything else" - a qualified rule or, inside a block,
                // possibly a declaration. A `{` before any `;` or `}`
                // means rule; otherwise declaration.
                Some(_) => {
                    if !top_level && !self.lookahead_is_rule() {
                        match self.consume_declaration(std::mem::take(&mut before)) {
                            Ok((decl, trailing_ws)) => {
                                nodes.push(Node::Declaration(decl));
                                last_semicolon = if self.peek() == Some(&CSSToken::Semicolon) {
                                    let _ = self.consume();
                                    true
                                } else {
                                    false
                                };
                                before.push_str(&trailing_ws);
                            }
                            Err(raw) => before.push_str(&raw),
                        }
                    } else {
                        match self.consume_qualified_rule(std::mem::take(&mut before)) {
                            Ok(rule) => nodes.push(Node::Rule(rule)),
                            Err(raw) => before.push_str(&raw),
                        }
                    }
                }
            }
        }
    }

    /// Decide between a qualified rule and a declaration by scanning
    /// ahead: a `{` encountered before any `;` or `}` starts a rule.
    fn lookahead_is_rule(&self) -> bool {
        let mut i = self.position;
        while let Some(token) = self.tokens.get(i) {
            match token {
                CSSToken::LeftBrace => return true,
                CSSToken::Semicolon | CSSToken::RightBrace | CSSToken::EOF => return false,
                _ => i += 1,
            }
        }
        false
    }

    /// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-qualified-rule)
    ///
    /// On EOF before the block opens ("This is a parse error. Return
    /// nothing.") the raw prelude text is handed back for pass-through.
    fn consume_qualified_rule(&mut self, before: String) -> Result<Rule, String> {
        let mut prelude = String::new();

        loop {
            match self.peek() {
                // "<EOF-token>" - "This is a parse error. Return nothing."
                None | Some(CSSToken::EOF) => {
                    let mut raw = before;
                    raw.push_str(&prelude);
                    return Err(raw);
                }

                // "<{-token>" - the prelude is the selector list.
                Some(CSSToken::LeftBrace) => {
                    let _ = self.consume(); // {
                    let (selector, between) = split_trailing_whitespace(&prelude);
                    let body = self.consume_node_list(false);
                    if self.peek() == Some(&CSSToken::RightBrace) {
                        let _ = self.consume();
                    }
                    return Ok(Rule {
                        before,
                        selector,
                        between,
                        nodes: body.nodes,
                        after: body.after,
                        semicolon: body.semicolon,
                    });
                }

                // "anything else" - prelude text, kept verbatim.
                Some(token) => {
                    token.write_lexeme(&mut prelude);
                    let _ = self.consume();
                }
            }
        }
    }

    /// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-at-rule)
    fn consume_at_rule(&mut self, before: String) -> AtRule {
        let name = match self.consume() {
            Some(CSSToken::AtKeyword(name)) => name.clone(),
            // Guarded by the caller's peek.
            _ => String::new(),
        };

        let mut prelude = String::new();

        loop {
            match self.peek() {
                // "<semicolon-token>" - "Return the at-rule."
                Some(CSSToken::Semicolon) => {
                    let _ = self.consume();
                    return blockless_at_rule(before, name, &prelude, true);
                }

                // "<EOF-token>" - "This is a parse error. Return the at-rule."
                None | Some(CSSToken::EOF) => {
                    return blockless_at_rule(before, name, &prelude, false);
                }

                // "<{-token>" - "Consume a simple block and assign it to
                // the at-rule's block."
                Some(CSSToken::LeftBrace) => {
                    let _ = self.consume(); // {
                    let (after_name, params, between) = split_at_rule_prelude(&prelude);
                    let body = self.consume_node_list(false);
                    if self.peek() == Some(&CSSToken::RightBrace) {
                        let _ = self.consume();
                    }
                    return AtRule {
                        before,
                        name,
                        after_name,
                        params,
                        between,
                        nodes: Some(body.nodes),
                        after: body.after,
                        semicolon: body.semicolon,
                    };
                }

                // "anything else" - prelude text, kept verbatim.
                Some(token) => {
                    token.write_lexeme(&mut prelude);
                    let _ = self.consume();
                }
            }
        }
    }

    /// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
    ///
    /// Returns the declaration plus any whitespace that sat between the
    /// value and the terminator (relocated to the next node's `before`).
    /// A construct that is not a declaration after all comes back as raw
    /// text for pass-through.
    fn consume_declaration(&mut self, before: String) -> Result<(Declaration, String), String> {
        // "Consume the next input token." - the property name.
        let prop = match self.peek() {
            Some(CSSToken::Ident(name)) => {
                let prop = name.clone();
                let _ = self.consume();
                prop
            }
            // Not a declaration (e.g. a `*zoom` hack); pass through raw.
            _ => {
                let mut raw = before;
                raw.push_str(&self.consume_raw_until_declaration_end());
                return Err(raw);
            }
        };

        // "While the next input token is a <whitespace-token>, consume it."
        let mut pre_colon = String::new();
        while let Some(CSSToken::Whitespace(ws)) = self.peek() {
            pre_colon.push_str(ws);
            let _ = self.consume();
        }

        // "If the next input token is anything other than a <colon-token>,
        // this is a parse error."
        if self.peek() != Some(&CSSToken::Colon) {
            let mut raw = before;
            raw.push_str(&prop);
            raw.push_str(&pre_colon);
            raw.push_str(&self.consume_raw_until_declaration_end());
            return Err(raw);
        }
        let _ = self.consume(); // :

        // Everything up to `;` / `}` / EOF is raw value text.
        let mut raw_value = String::new();
        while let Some(token) = self.peek() {
            if matches!(
                token,
                CSSToken::Semicolon | CSSToken::RightBrace | CSSToken::EOF
            ) {
                break;
            }
            token.write_lexeme(&mut raw_value);
            let _ = self.consume();
        }

        // Split the raw value into leading whitespace (part of `between`),
        // the value body, and trailing whitespace (relocated).
        let lead_len = raw_value.len() - raw_value.trim_start().len();
        let trail_len = raw_value.len() - raw_value.trim_end().len().max(lead_len);
        let body = &raw_value[lead_len..raw_value.len() - trail_len];
        let trailing_ws = raw_value[raw_value.len() - trail_len..].to_string();

        let mut between = pre_colon;
        between.push(':');
        between.push_str(&raw_value[..lead_len]);

        let (value, important) = split_important(body);

        Ok((
            Declaration {
                before,
                prop,
                between,
                value,
                important,
            },
            trailing_ws,
        ))
    }

    /// Consume raw text through the end of a declaration-shaped construct:
    /// everything up to and including a `;`, or up to (not including) a
    /// `}` or EOF.
    fn consume_raw_until_declaration_end(&mut self) -> String {
        let mut raw = String::new();
        while let Some(token) = self.peek() {
            match token {
                CSSToken::Semicolon => {
                    raw.push(';');
                    let _ = self.consume();
                    return raw;
                }
                CSSToken::RightBrace | CSSToken::EOF => return raw,
                _ => {
                    token.write_lexeme(&mut raw);
                    let _ = self.consume();
                }
            }
        }
        raw
    }

    fn consume(&mut self) -> Option<&CSSToken> {
        if self.position < self.tokens.len() {
            let token = &self.tokens[self.position];
            self.position += 1;
            Some(token)
        } else {
            None
        }
    }

    fn peek(&self) -> Option<&CSSToken> {
        self.tokens.get(self.position)
    }
}

/// Whether the last parsed node is a declaration (the only case where the
/// container's `semicolon` flag is meaningful).
fn ends_with_declaration(nodes: &[Node]) -> bool {
    matches!(nodes.last(), Some(Node::Declaration(_)))
}

/// Split `text` into (head, trailing-whitespace).
fn split_trailing_whitespace(text: &str) -> (String, String) {
    let head_len = text.trim_end().len();
    (text[..head_len].to_string(), text[head_len..].to_string())
}

/// Split an at-rule prelude into (whitespace after the name, params,
/// whitespace before the block or terminator).
fn split_at_rule_prelude(prelude: &str) -> (String, String, String) {
    let lead_len = prelude.len() - prelude.trim_start().len();
    let head_len = prelude.trim_end().len().max(lead_len);
    (
        prelude[..lead_len].to_string(),
        prelude[lead_len..head_len].to_string(),
        prelude[head_len..].to_string(),
    )
}

/// Assemble a block-less at-rule (`@import ...;`).
fn blockless_at_rule(before: String, name: String, prelude: &str, semicolon: bool) -> AtRule {
    let (after_name, params, between) = split_at_rule_prelude(prelude);
    AtRule {
        before,
        name,
        after_name,
        params,
        between,
        nodes: None,
        after: String::new(),
        semicolon,
    }
}

/// [CSS Cascade 4 § 6.4.2 Important declarations](https://www.w3.org/TR/css-cascade-4/#importance)
///
/// "A declaration is important if the last two (non-whitespace,
/// non-comment) tokens in its value are a <delim-token> with the value
/// '!' followed by an <ident-token> ... 'important'."
///
/// Splits the annotation off the value, keeping its raw spelling
/// (including the whitespace that preceded the `!`) so it serializes
/// back unchanged.
fn split_important(body: &str) -> (String, Option<String>) {
    let lower = body.to_ascii_lowercase();
    if !lower.ends_with("important") {
        return (body.to_string(), None);
    }

    let head = &body[..body.len() - "important".len()];
    let head_trimmed = head.trim_end();
    if !head_trimmed.ends_with('!') {
        return (body.to_string(), None);
    }

    let value = body[..head_trimmed.len() - 1].trim_end();
    (
        value.to_string(),
        Some(body[value.len()..].to_string()),
    )
}
