//! Propositional formula AST.
//!
//! [`Formula`] is an owned binary tree: every connective owns its operands through a `Box`,
//! so there is no sharing and no cycles. Formulas are built either through the constructors
//! below or by the [parser][crate::parser].

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parser::{parse_str, FormulaError};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Formula {
    Var(String),
    True,
    False,
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

/// Binding strength of connectives, weakest first.
///
/// The parser and the stringifier share this ladder. Leaves are [`Precedence::Atom`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Precedence {
    Iff = 1,
    Implies = 2,
    Or = 3,
    And = 4,
    Not = 5,
    Atom = 6,
}

impl Precedence {
    /// The next tighter level. `Atom` is its own successor.
    pub fn tighter(self) -> Self {
        match self {
            Precedence::Iff => Precedence::Implies,
            Precedence::Implies => Precedence::Or,
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Not,
            Precedence::Not | Precedence::Atom => Precedence::Atom,
        }
    }
}

impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Var(name.into())
    }

    /// Negation. Unlike a simplifying constructor, `not(not(x))` stays a double negation.
    #[allow(clippy::should_implement_trait)]
    pub fn not(value: Self) -> Self {
        Formula::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Formula::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Formula::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Formula::Implies(Box::new(lhs), Box::new(rhs))
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Formula::Iff(Box::new(lhs), Box::new(rhs))
    }
}

impl Formula {
    pub fn precedence(&self) -> Precedence {
        match self {
            Formula::Var(_) | Formula::True | Formula::False => Precedence::Atom,
            Formula::Not(_) => Precedence::Not,
            Formula::And(_, _) => Precedence::And,
            Formula::Or(_, _) => Precedence::Or,
            Formula::Implies(_, _) => Precedence::Implies,
            Formula::Iff(_, _) => Precedence::Iff,
        }
    }

    pub fn is_atom(&self) -> bool {
        self.precedence() == Precedence::Atom
    }

    /// Operands of a binary connective, `None` for leaves and negations.
    pub fn operands(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) | Formula::Iff(a, b) => Some((a, b)),
            _ => None,
        }
    }

    pub fn negated(&self) -> Option<&Formula> {
        match self {
            Formula::Not(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn conjuncts(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::And(a, b) => Some((a, b)),
            _ => None,
        }
    }

    pub fn disjuncts(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Or(a, b) => Some((a, b)),
            _ => None,
        }
    }

    /// Antecedent and consequent of an implication.
    pub fn implication(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Implies(a, b) => Some((a, b)),
            _ => None,
        }
    }

    /// The `X` of `~~X`.
    pub fn double_negated(&self) -> Option<&Formula> {
        self.negated().and_then(Formula::negated)
    }

    /// Distinct variable names, sorted.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<String>) {
        match self {
            Formula::Var(name) => {
                vars.insert(name.clone());
            }
            Formula::True | Formula::False => {}
            Formula::Not(a) => a.collect_variables(vars),
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) | Formula::Iff(a, b) => {
                a.collect_variables(vars);
                b.collect_variables(vars);
            }
        }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        match self {
            Formula::Var(_) | Formula::True | Formula::False => 1,
            Formula::Not(a) => 1 + a.size(),
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) | Formula::Iff(a, b) => {
                1 + a.size() + b.size()
            }
        }
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Formula::Var(_) | Formula::True | Formula::False => 1,
            Formula::Not(a) => 1 + a.depth(),
            Formula::And(a, b) | Formula::Or(a, b) | Formula::Implies(a, b) | Formula::Iff(a, b) => {
                1 + a.depth().max(b.depth())
            }
        }
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
