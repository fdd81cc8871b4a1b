//! Stylesheet serialization.
//!
//! [§ 9 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
//! "This specification does not define how to serialize CSS in general."
//! What it does require: "the serialization must round-trip with parsing".
//! The tree carries every raw field needed for that, so serialization is
//! plain concatenation; the only normalization is that whitespace which
//! sat between a declaration value and its `;` is dropped.

use crate::tree::{AtRule, Declaration, Node, Rule, Stylesheet};

/// Source map emission settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    /// Whether the caller wants the map inlined. No map content is
    /// generated either way; only an external map produces an observable
    /// artifact (the reference annotation).
    pub inline: bool,
}

/// Pass-through options for the serializer, forwarded untouched by the
/// conversion engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Name of the input file, if any.
    pub from: Option<String>,
    /// Name of the output file; an external map annotation points at
    /// `<to>.map`.
    pub to: Option<String>,
    /// Source map settings; `None` disables any annotation.
    pub map: Option<MapOptions>,
}

/// Serialize a stylesheet back to CSS text.
#[must_use]
pub fn serialize(stylesheet: &Stylesheet) -> String {
    let mut out = String::new();
    // Declarations cannot be top-level nodes, so the last-declaration
    // semicolon flag is inert here.
    write_nodes(&mut out, &stylesheet.nodes, false);
    out.push_str(&stylesheet.after);
    out
}

/// Serialize a stylesheet, appending a sourcemap reference annotation when
/// the options ask for an external map and name an output file.
///
/// The annotation follows the
/// [Source Map revision 3 convention](https://sourcemaps.info/spec.html):
/// `/*# sourceMappingURL=<url> */` on its own line at the end.
#[must_use]
pub fn serialize_with(stylesheet: &Stylesheet, options: &OutputOptions) -> String {
    let mut out = serialize(stylesheet);
    if let Some(map) = &options.map {
        if !map.inline {
            if let Some(to) = &options.to {
                out.push_str(&format!("\n/*# sourceMappingURL={to}.map */"));
            }
        }
    }
    out
}

/// Write a node list. `semicolon` is the container's flag: whether the
/// last declaration carries a trailing `;`.
fn write_nodes(out: &mut String, nodes: &[Node], semicolon: bool) {
    for (index, node) in nodes.iter().enumerate() {
        let last = index + 1 == nodes.len();
        match node {
            Node::Rule(rule) => write_rule(out, rule),
            Node::AtRule(at_rule) => write_at_rule(out, at_rule),
            Node::Declaration(decl) => {
                write_declaration(out, decl);
                // A declaration followed by a sibling always had a `;`;
                // the final one only if the container says so.
                if !last || semicolon {
                    out.push(';');
                }
            }
            Node::Comment(comment) => {
                out.push_str(&comment.before);
                out.push_str("/*");
                out.push_str(&comment.text);
                out.push_str("*/");
            }
        }
    }
}

fn write_rule(out: &mut String, rule: &Rule) {
    out.push_str(&rule.before);
    out.push_str(&rule.selector);
    out.push_str(&rule.between);
    out.push('{');
    write_nodes(out, &rule.nodes, rule.semicolon);
    out.push_str(&rule.after);
    out.push('}');
}

fn write_at_rule(out: &mut String, at_rule: &AtRule) {
    out.push_str(&at_rule.before);
    out.push('@');
    out.push_str(&at_rule.name);
    out.push_str(&at_rule.after_name);
    out.push_str(&at_rule.params);
    out.push_str(&at_rule.between);
    match &at_rule.nodes {
        Some(nodes) => {
            out.push('{');
            write_nodes(out, nodes, at_rule.semicolon);
            out.push_str(&at_rule.after);
            out.push('}');
        }
        None => {
            if at_rule.semicolon {
                out.push(';');
            }
        }
    }
}

fn write_declaration(out: &mut String, decl: &Declaration) {
    out.push_str(&decl.before);
    out.push_str(&decl.prop);
    out.push_str(&decl.between);
    out.push_str(&decl.value);
    if let Some(important) = &decl.important {
        out.push_str(important);
    }
}
