//! Document-order traversal with the at-rule eligibility state machine.
//!
//! Eligibility is a function of two pieces of state carried down the
//! recursion: the at-rule nesting depth and a sticky keyframes flag.
//!
//! - depth 0 (outside any at-rule): declarations are always eligible.
//! - inside `@keyframes` (any vendor prefix): never eligible, at any
//!   depth, regardless of options.
//! - depth 1 (directly inside one top-level at-rule): eligible iff
//!   `options.atrules`.
//! - depth >= 2 (at-rule nested in an at-rule): never eligible, even
//!   with `options.atrules`. The asymmetry with depth 1 is deliberate
//!   and pinned by tests.

use rempx_syntax::{Node, Stylesheet};

use crate::exclusions::is_keyframes;
use crate::options::ConversionOptions;
use crate::rewrite::{Edit, rewrite};

/// Walk the stylesheet and convert every eligible declaration, in place.
///
/// Returns the number of declarations converted.
pub fn walk(stylesheet: &mut Stylesheet, root_px: f64, options: &ConversionOptions) -> usize {
    walk_nodes(&mut stylesheet.nodes, 0, false, root_px, options)
}

/// Recurse over one node list. `at_rule_depth` counts enclosing at-rules;
/// `in_keyframes` is set once a keyframes at-rule is entered and never
/// cleared on the way down.
fn walk_nodes(
    nodes: &mut Vec<Node>,
    at_rule_depth: usize,
    in_keyframes: bool,
    root_px: f64,
    options: &ConversionOptions,
) -> usize {
    let eligible = !in_keyframes
        && match at_rule_depth {
            0 => true,
            1 => options.atrules,
            _ => false,
        };

    let mut converted = 0;

    if eligible {
        // Two phases: analyze immutably, then apply. Applying back to
        // front keeps earlier indices valid as fallbacks are inserted.
        let mut edits = Vec::new();
        for (index, node) in nodes.iter().enumerate() {
            if let Node::Declaration(decl) = node {
                if let Some(edit) = rewrite(index, decl, root_px, options) {
                    edits.push(edit);
                }
            }
        }
        converted += edits.len();
        for edit in edits.into_iter().rev() {
            match edit {
                Edit::InsertBefore { index, declaration } => {
                    nodes.insert(index, Node::Declaration(declaration));
                }
                Edit::ReplaceValue { index, value } => {
                    if let Node::Declaration(decl) = &mut nodes[index] {
                        decl.replace_value(value);
                    }
                }
            }
        }
    }

    for node in nodes.iter_mut() {
        match node {
            // Rules do not change the at-rule depth; their declarations
            // inherit the eligibility of the level the rule sits at.
            Node::Rule(rule) => {
                converted +=
                    walk_nodes(&mut rule.nodes, at_rule_depth, in_keyframes, root_px, options);
            }
            Node::AtRule(at_rule) => {
                let keyframes = in_keyframes || is_keyframes(&at_rule.name);
                if let Some(children) = &mut at_rule.nodes {
                    converted +=
                        walk_nodes(children, at_rule_depth + 1, keyframes, root_px, options);
                }
            }
            Node::Declaration(_) | Node::Comment(_) => {}
        }
    }

    converted
}
