//! Debug utilities for inspecting formula structure.
//!
//! These are primarily useful in tests and during development.

use std::fmt;

use crate::formula::{Formula, Precedence};

/// A single node of a formula, as seen in a pre-order walk.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NodeInfo {
    /// Distance from the root (root is 0)
    pub level: usize,
    /// Connective name, or the variable/constant itself
    pub label: String,
    pub precedence: Precedence,
    /// The subformula rooted here, in canonical form
    pub text: String,
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} (prec={}) {}",
            "  ".repeat(self.level),
            self.label,
            self.precedence as u8,
            self.text
        )
    }
}

/// Pre-order listing of a formula's nodes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FormulaTree {
    pub nodes: Vec<NodeInfo>,
}

impl fmt::Display for FormulaTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}", node)?;
        }
        Ok(())
    }
}

fn label(formula: &Formula) -> String {
    match formula {
        Formula::Var(name) => format!("VAR({})", name),
        Formula::True => "TRUE".to_string(),
        Formula::False => "FALSE".to_string(),
        Formula::Not(_) => "NOT".to_string(),
        Formula::And(_, _) => "AND".to_string(),
        Formula::Or(_, _) => "OR".to_string(),
        Formula::Implies(_, _) => "IMPLIES".to_string(),
        Formula::Iff(_, _) => "IFF".to_string(),
    }
}

pub fn formula_tree(formula: &Formula) -> FormulaTree {
    let mut nodes = Vec::new();
    let mut stack = vec![(formula, 0)];
    while let Some((node, level)) = stack.pop() {
        nodes.push(NodeInfo {
            level,
            label: label(node),
            precedence: node.precedence(),
            text: node.to_string(),
        });
        match node {
            Formula::Not(a) => stack.push((a, level + 1)),
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) | Formula::Iff(a, b) => {
                stack.push((b, level + 1));
                stack.push((a, level + 1));
            }
            Formula::Var(_) | Formula::True | Formula::False => {}
        }
    }
    FormulaTree { nodes }
}
