//! Natural deduction rule descriptors.
//!
//! A [`Rule`] is metadata only: which rule, how it is grouped, how many cited steps it needs.
//! What a rule *does* lives in [`engine`][crate::engine], one handler per [`RuleKind`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Tag of the initial steps of a proof; not an applicable rule.
    Premise,
    Assume,
    #[serde(rename = "mp")]
    ModusPonens,
    #[serde(rename = "mt")]
    ModusTollens,
    AndIntro,
    AndElimLeft,
    AndElimRight,
    OrIntroLeft,
    OrIntroRight,
    OrElim,
    ImplIntro,
    DoubleNeg,
    Lem,
}

impl RuleKind {
    pub const ALL: [RuleKind; 13] = [
        RuleKind::Premise,
        RuleKind::Assume,
        RuleKind::ModusPonens,
        RuleKind::ModusTollens,
        RuleKind::AndIntro,
        RuleKind::AndElimLeft,
        RuleKind::AndElimRight,
        RuleKind::OrIntroLeft,
        RuleKind::OrIntroRight,
        RuleKind::OrElim,
        RuleKind::ImplIntro,
        RuleKind::DoubleNeg,
        RuleKind::Lem,
    ];

    /// Stable key, e.g. `"mp"` or `"and_elim_left"`.
    pub fn id(self) -> &'static str {
        match self {
            RuleKind::Premise => "premise",
            RuleKind::Assume => "assume",
            RuleKind::ModusPonens => "mp",
            RuleKind::ModusTollens => "mt",
            RuleKind::AndIntro => "and_intro",
            RuleKind::AndElimLeft => "and_elim_left",
            RuleKind::AndElimRight => "and_elim_right",
            RuleKind::OrIntroLeft => "or_intro_left",
            RuleKind::OrIntroRight => "or_intro_right",
            RuleKind::OrElim => "or_elim",
            RuleKind::ImplIntro => "impl_intro",
            RuleKind::DoubleNeg => "double_neg",
            RuleKind::Lem => "lem",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RuleKind::Premise => "Premise",
            RuleKind::Assume => "Assumption",
            RuleKind::ModusPonens => "Modus Ponens",
            RuleKind::ModusTollens => "Modus Tollens",
            RuleKind::AndIntro => "Conjunction Introduction",
            RuleKind::AndElimLeft => "Conjunction Elimination (left)",
            RuleKind::AndElimRight => "Conjunction Elimination (right)",
            RuleKind::OrIntroLeft => "Disjunction Introduction (left)",
            RuleKind::OrIntroRight => "Disjunction Introduction (right)",
            RuleKind::OrElim => "Disjunction Elimination",
            RuleKind::ImplIntro => "Implication Introduction",
            RuleKind::DoubleNeg => "Double Negation",
            RuleKind::Lem => "Law of Excluded Middle",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        RuleKind::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RuleCategory {
    Assumption,
    Basic,
    Introduction,
    Elimination,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rule {
    pub kind: RuleKind,
    pub category: RuleCategory,
    /// Number of cited steps (0, 1 or 2).
    pub required_steps: usize,
}

impl Rule {
    const fn new(kind: RuleKind, category: RuleCategory, required_steps: usize) -> Self {
        Self {
            kind,
            category,
            required_steps,
        }
    }

    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Whether applying the rule takes a user-supplied formula.
    pub fn needs_input(&self) -> bool {
        matches!(
            self.kind,
            RuleKind::Assume | RuleKind::OrIntroLeft | RuleKind::OrIntroRight | RuleKind::Lem
        )
    }

    /// Table entry for `kind`; `None` for [`RuleKind::Premise`].
    pub fn get(kind: RuleKind) -> Option<&'static Rule> {
        RULES.iter().find(|r| r.kind == kind)
    }

    pub fn by_id(id: &str) -> Option<&'static Rule> {
        RuleKind::from_id(id).and_then(Rule::get)
    }
}

/// Every applicable rule, grouped by category.
pub static RULES: [Rule; 12] = [
    Rule::new(RuleKind::Assume, RuleCategory::Assumption, 0),
    Rule::new(RuleKind::ModusPonens, RuleCategory::Basic, 2),
    Rule::new(RuleKind::ModusTollens, RuleCategory::Basic, 2),
    Rule::new(RuleKind::Lem, RuleCategory::Basic, 0),
    Rule::new(RuleKind::AndIntro, RuleCategory::Introduction, 2),
    Rule::new(RuleKind::OrIntroLeft, RuleCategory::Introduction, 1),
    Rule::new(RuleKind::OrIntroRight, RuleCategory::Introduction, 1),
    Rule::new(RuleKind::ImplIntro, RuleCategory::Introduction, 0),
    Rule::new(RuleKind::AndElimLeft, RuleCategory::Elimination, 1),
    Rule::new(RuleKind::AndElimRight, RuleCategory::Elimination, 1),
    Rule::new(RuleKind::OrElim, RuleCategory::Elimination, 1),
    Rule::new(RuleKind::DoubleNeg, RuleCategory::Elimination, 1),
];
