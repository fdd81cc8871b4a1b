//! Raws-preserving stylesheet tree.
//!
//! Every node owns the source text around it that carries no meaning but
//! must survive serialization: the whitespace that preceded it (`before`),
//! the text between its name and its body (`between`), and for containers
//! the whitespace before the closing brace (`after`). A stylesheet parsed
//! and serialized without edits reproduces its input.
//!
//! The rewriting engine mutates this tree through exactly two operations:
//! inserting a node before a sibling (plain [`Vec::insert`] on the owning
//! node list) and [`Declaration::replace_value`]. Everything else is
//! read-only to it.

use serde::Serialize;

/// A parsed CSS stylesheet.
///
/// [§ 5.3.3 Parse a stylesheet](https://www.w3.org/TR/css-syntax-3/#parse-stylesheet)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stylesheet {
    /// Top-level rules, at-rules, and comments in document order.
    pub nodes: Vec<Node>,
    /// Raw trailing text after the last node (whitespace, stray tokens).
    pub after: String,
}

/// A node in the stylesheet tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// A style rule (qualified rule).
    Rule(Rule),
    /// An at-rule, with or without a block.
    AtRule(AtRule),
    /// A declaration (only valid inside a rule or at-rule body).
    Declaration(Declaration),
    /// A comment sitting between nodes.
    Comment(Comment),
}

/// [§ 5.4.3 Consume a qualified rule](https://www.w3.org/TR/css-syntax-3/#consume-a-qualified-rule)
///
/// A style rule: selector list plus a block of child nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Whitespace preceding the rule.
    pub before: String,
    /// The selector list, as spelled in the source (internal whitespace kept).
    pub selector: String,
    /// Whitespace between the selector and the `{`.
    pub between: String,
    /// Child nodes (declarations and comments, or nested rules).
    pub nodes: Vec<Node>,
    /// Whitespace before the closing `}`.
    pub after: String,
    /// Whether the last child declaration carried a trailing `;`.
    pub semicolon: bool,
}

impl Rule {
    /// The individual selectors of the comma-separated selector list,
    /// trimmed.
    ///
    /// [Selectors Level 4 § 5.1](https://www.w3.org/TR/selectors-4/#selector-list)
    /// "A selector list is a comma-separated list of selectors."
    #[must_use]
    pub fn selectors(&self) -> Vec<&str> {
        self.selector
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// [§ 5.4.2 Consume an at-rule](https://www.w3.org/TR/css-syntax-3/#consume-an-at-rule)
///
/// An at-rule such as `@media`, `@keyframes`, or a block-less `@import`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtRule {
    /// Whitespace preceding the at-rule.
    pub before: String,
    /// The at-keyword name, without the `@`.
    pub name: String,
    /// Whitespace between the name and the prelude.
    pub after_name: String,
    /// The prelude, as spelled in the source (trimmed at both ends).
    pub params: String,
    /// Whitespace between the prelude and the `{` (or the `;`).
    pub between: String,
    /// Child nodes for block at-rules; `None` for `@import`-style rules.
    pub nodes: Option<Vec<Node>>,
    /// Whitespace before the closing `}` (empty for block-less rules).
    pub after: String,
    /// For a block: whether the last child declaration carried a trailing
    /// `;`. For a block-less at-rule: whether the terminating `;` was
    /// present at all.
    pub semicolon: bool,
}

/// [§ 5.4.6 Consume a declaration](https://www.w3.org/TR/css-syntax-3/#consume-declaration)
///
/// A property declaration (e.g. `font-size: 2rem`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    /// Whitespace preceding the declaration.
    pub before: String,
    /// The property name.
    pub prop: String,
    /// The colon and its surrounding whitespace (e.g. `": "`).
    pub between: String,
    /// The value text, trimmed, `!important` split off.
    pub value: String,
    /// The raw `!important` annotation including leading whitespace
    /// (e.g. `" !important"`), when present.
    ///
    /// [CSS Cascade 4 § 6.4.2](https://www.w3.org/TR/css-cascade-4/#importance)
    pub important: Option<String>,
}

impl Declaration {
    /// Whether the declaration carries `!important`.
    #[must_use]
    pub const fn is_important(&self) -> bool {
        self.important.is_some()
    }

    /// Overwrite the value in place, leaving property, raws, and the
    /// `!important` annotation untouched.
    pub fn replace_value(&mut self, value: String) {
        self.value = value;
    }
}

/// A `/* ... */` comment at node position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// Whitespace preceding the comment.
    pub before: String,
    /// The comment text between the delimiters.
    pub text: String,
}
