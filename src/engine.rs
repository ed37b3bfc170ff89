//! Natural deduction engine.
//!
//! The engine is stateless. Each operation reads a [`ProofState`] snapshot:
//!
//! - [`check_applicability`] is a cheap advisory pre-check for the UI;
//! - [`apply_rule`] derives a new [`ProofStep`] (or `None` when the rule does not fit);
//! - [`validate_proof`] decides whether the goal has been reached.
//!
//! # Rule handlers
//!
//! Every [`RuleKind`] has one handler, a pure function from the cited steps and optional user
//! input to a [`Derivation`]: the new formula, the cited ids, and where the step goes
//! (same depth, a new subproof, or closing the current one). [`apply_rule`] turns a derivation
//! into a numbered step.
//!
//! Formulas are re-parsed from the step strings on every call; nothing is cached.
//!
//! # Line numbers
//!
//! - a step at the same depth increments the last segment of the previous line: `2.1` -> `2.2`;
//! - `assume` appends `.1` to the previous line: `2` -> `2.1` (or is `1` in an empty proof);
//! - `impl_intro` drops the last segment of the previous line and increments: `2.3` -> `3`.
//!
//! # Example
//!
//! ```
//! use fitch_rs::engine::{apply_rule, validate_proof};
//! use fitch_rs::proof::ProofState;
//! use fitch_rs::rules::{Rule, RuleKind};
//! use fitch_rs::types::StepId;
//!
//! let mut state = ProofState::new("q", ["p", "p -> q"]);
//! let mp = Rule::get(RuleKind::ModusPonens).unwrap();
//! let step = apply_rule(mp, &state, &[StepId::new(1), StepId::new(2)], None).unwrap();
//! assert_eq!(step.formula, "q");
//! assert_eq!(step.line_number.to_string(), "3");
//!
//! state.push_step(step);
//! assert!(validate_proof(&state));
//! ```

use log::debug;

use crate::formula::Formula;
use crate::parser::parse_str;
use crate::proof::{OrCases, ProofState, ProofStep};
use crate::rules::{Rule, RuleKind, RULES};
use crate::types::StepId;
use crate::utils::{parenthesize_compound, same_formula};

/// Outcome of [`check_applicability`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Applicability {
    pub applicable: bool,
    /// Why not, for display.
    pub reason: Option<String>,
}

impl Applicability {
    fn yes() -> Self {
        Self {
            applicable: true,
            reason: None,
        }
    }

    fn no(reason: impl Into<String>) -> Self {
        Self {
            applicable: false,
            reason: Some(reason.into()),
        }
    }
}

/// A rule together with its applicability in some state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ApplicableRule {
    pub rule: &'static Rule,
    pub applicability: Applicability,
}

/// Where a derived step goes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Placement {
    /// Same depth as the current step.
    Continue,
    /// Opens a subproof one level deeper.
    Open,
    /// Closes the current subproof, back to the parent depth.
    Close,
}

/// What a rule handler produces, before numbering.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Derivation {
    pub formula: String,
    pub dependencies: Vec<StepId>,
    pub placement: Placement,
    pub cases: Option<OrCases>,
}

impl Derivation {
    fn continued(formula: String, dependencies: Vec<StepId>) -> Self {
        Self {
            formula,
            dependencies,
            placement: Placement::Continue,
            cases: None,
        }
    }
}

struct Citation<'a> {
    state: &'a ProofState,
    steps: Vec<&'a ProofStep>,
    input: Option<&'a str>,
}

impl<'a> Citation<'a> {
    fn ids(&self) -> Vec<StepId> {
        self.steps.iter().map(|s| s.id).collect()
    }

    /// Non-blank user input.
    fn input(&self) -> Option<&'a str> {
        self.input.filter(|s| !s.trim().is_empty())
    }

    /// Non-blank user input that parses.
    fn input_formula(&self) -> Option<(&'a str, Formula)> {
        let input = self.input()?;
        let formula = parse_step_formula(input)?;
        Some((input, formula))
    }

    fn pair(&self) -> Option<(&'a ProofStep, &'a ProofStep)> {
        match self.steps.as_slice() {
            &[a, b] => Some((a, b)),
            _ => None,
        }
    }

    fn single(&self) -> Option<&'a ProofStep> {
        match self.steps.as_slice() {
            &[a] => Some(a),
            _ => None,
        }
    }
}

fn parse_step_formula(formula: &str) -> Option<Formula> {
    parse_str(formula)
        .inspect_err(|e| debug!("cannot parse {:?}: {}", formula, e))
        .ok()
}

/// The rule table, grouped by category.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Whether `rule` can be attempted in `state`.
///
/// For most rules this only counts the available steps; [`apply_rule`] may still refuse the
/// actual selection.
pub fn check_applicability(rule: &Rule, state: &ProofState) -> Applicability {
    match rule.kind {
        RuleKind::Assume | RuleKind::Lem => Applicability::yes(),
        RuleKind::Premise => Applicability::no("Premises are given, not derived"),
        RuleKind::ImplIntro => {
            if state.current_depth() > 0 {
                Applicability::yes()
            } else {
                Applicability::no("No open assumption to close")
            }
        }
        RuleKind::OrElim => {
            let has_disjunction = state.steps().iter().any(|s| {
                parse_step_formula(&s.formula).is_some_and(|f| f.disjuncts().is_some())
            });
            if has_disjunction {
                Applicability::yes()
            } else {
                Applicability::no("Need a disjunction (P∨Q) to apply this rule")
            }
        }
        _ => {
            let available = state
                .steps()
                .iter()
                .filter(|s| s.depth <= state.current_depth())
                .count();
            if available >= rule.required_steps {
                Applicability::yes()
            } else if rule.required_steps == 1 {
                Applicability::no("Need at least 1 step to apply this rule")
            } else {
                Applicability::no(format!("Need at least {} steps to apply this rule", rule.required_steps))
            }
        }
    }
}

/// Every rule of the table with its applicability in `state`.
pub fn applicable_rules(state: &ProofState) -> Vec<ApplicableRule> {
    RULES
        .iter()
        .map(|rule| ApplicableRule {
            rule,
            applicability: check_applicability(rule, state),
        })
        .collect()
}

/// Applies `rule` to the `selected` steps of `state`.
///
/// Returns `None` when the number of selected steps is wrong, a selected id does not exist,
/// the cited formulas do not have the shape the rule needs, or required input is missing or
/// does not parse. The state itself is not modified.
pub fn apply_rule(rule: &Rule, state: &ProofState, selected: &[StepId], input: Option<&str>) -> Option<ProofStep> {
    debug!(
        "apply_rule(rule = {}, selected = {:?}, input = {:?})",
        rule.kind, selected, input
    );

    if selected.len() != rule.required_steps {
        debug!(
            "apply_rule: {} needs {} step(s), got {}",
            rule.kind,
            rule.required_steps,
            selected.len()
        );
        return None;
    }

    let steps = selected
        .iter()
        .map(|&id| state.step(id))
        .collect::<Option<Vec<_>>>();
    let Some(steps) = steps else {
        debug!("apply_rule: unknown step in {:?}", selected);
        return None;
    };

    let citation = Citation { state, steps, input };
    let derivation = match rule.kind {
        RuleKind::Premise => None,
        RuleKind::Assume => assume(&citation),
        RuleKind::ModusPonens => modus_ponens(&citation),
        RuleKind::ModusTollens => modus_tollens(&citation),
        RuleKind::AndIntro => and_intro(&citation),
        RuleKind::AndElimLeft => and_elim(&citation, true),
        RuleKind::AndElimRight => and_elim(&citation, false),
        RuleKind::OrIntroLeft => or_intro(&citation, true),
        RuleKind::OrIntroRight => or_intro(&citation, false),
        RuleKind::OrElim => or_elim(&citation),
        RuleKind::ImplIntro => impl_intro(&citation),
        RuleKind::DoubleNeg => double_neg(&citation),
        RuleKind::Lem => lem(&citation),
    };
    let Some(derivation) = derivation else {
        debug!("apply_rule: {} does not apply", rule.kind);
        return None;
    };

    Some(make_step(rule.kind, state, derivation))
}

fn make_step(rule: RuleKind, state: &ProofState, derivation: Derivation) -> ProofStep {
    let id = state.next_step_id();
    let depth = state.current_depth();
    let step = match derivation.placement {
        Placement::Continue => ProofStep::new(id, state.next_line_number(), derivation.formula, rule, depth),
        Placement::Open => {
            ProofStep::new(id, state.subproof_line_number(), derivation.formula, rule, depth + 1).subproof_start()
        }
        Placement::Close => {
            // Handlers only close when a step exists at depth > 0.
            let line = state
                .last_step()
                .map_or_else(|| state.next_line_number(), |last| last.line_number.after_subproof());
            ProofStep::new(id, line, derivation.formula, rule, depth.saturating_sub(1)).subproof_end()
        }
    };
    let step = step.with_dependencies(derivation.dependencies);
    match derivation.cases {
        Some(cases) => step.with_cases(cases),
        None => step,
    }
}

fn assume(c: &Citation) -> Option<Derivation> {
    let (input, _) = c.input_formula()?;
    Some(Derivation {
        formula: input.to_string(),
        dependencies: Vec::new(),
        placement: Placement::Open,
        cases: None,
    })
}

fn modus_ponens(c: &Citation) -> Option<Derivation> {
    let (a, b) = c.pair()?;
    for (minor, major) in [(a, b), (b, a)] {
        let Some(implication) = parse_step_formula(&major.formula) else {
            continue;
        };
        if let Some((antecedent, consequent)) = implication.implication() {
            if same_formula(&minor.formula, &antecedent.to_string()) {
                return Some(Derivation::continued(consequent.to_string(), c.ids()));
            }
        }
    }
    None
}

fn modus_tollens(c: &Citation) -> Option<Derivation> {
    let (a, b) = c.pair()?;
    for (minor, major) in [(a, b), (b, a)] {
        let (Some(implication), Some(negation)) =
            (parse_step_formula(&major.formula), parse_step_formula(&minor.formula))
        else {
            continue;
        };
        let (Some((antecedent, consequent)), Some(denied)) = (implication.implication(), negation.negated()) else {
            continue;
        };
        if same_formula(&denied.to_string(), &consequent.to_string()) {
            return Some(Derivation::continued(format!("~({})", antecedent), c.ids()));
        }
    }
    None
}

fn and_intro(c: &Citation) -> Option<Derivation> {
    let (a, b) = c.pair()?;
    parse_step_formula(&a.formula)?;
    parse_step_formula(&b.formula)?;
    let formula = format!("({}) ^ ({})", a.formula.trim(), b.formula.trim());
    Some(Derivation::continued(formula, c.ids()))
}

fn and_elim(c: &Citation, left: bool) -> Option<Derivation> {
    let step = c.single()?;
    let formula = parse_step_formula(&step.formula)?;
    let (l, r) = formula.conjuncts()?;
    let part = if left { l } else { r };
    Some(Derivation::continued(part.to_string(), c.ids()))
}

fn or_intro(c: &Citation, left: bool) -> Option<Derivation> {
    let step = c.single()?;
    parse_step_formula(&step.formula)?;
    let (input, _) = c.input_formula()?;
    let (existing, added) = (step.formula.trim(), input.trim());
    let formula = if left {
        format!("({}) | ({})", existing, added)
    } else {
        format!("({}) | ({})", added, existing)
    };
    Some(Derivation::continued(formula, c.ids()))
}

fn or_elim(c: &Citation) -> Option<Derivation> {
    let step = c.single()?;
    let formula = parse_step_formula(&step.formula)?;
    let (l, r) = formula.disjuncts()?;
    let cases = OrCases {
        left: l.to_string(),
        right: r.to_string(),
    };
    let mut derivation = Derivation::continued(step.formula.clone(), c.ids());
    derivation.cases = Some(cases);
    Some(derivation)
}

fn double_neg(c: &Citation) -> Option<Derivation> {
    let step = c.single()?;
    let formula = parse_step_formula(&step.formula)?;
    let inner = formula.double_negated()?;
    Some(Derivation::continued(inner.to_string(), c.ids()))
}

fn impl_intro(c: &Citation) -> Option<Derivation> {
    let depth = c.state.current_depth();
    let assumption = c.state.open_assumption()?;
    let conclusion = c.state.last_step()?;
    if conclusion.depth != depth {
        return None;
    }
    let mut dependencies = vec![assumption.id];
    if conclusion.id != assumption.id {
        dependencies.push(conclusion.id);
    }
    Some(Derivation {
        formula: format!("({}) -> ({})", assumption.formula.trim(), conclusion.formula.trim()),
        dependencies,
        placement: Placement::Close,
        cases: None,
    })
}

fn lem(c: &Citation) -> Option<Derivation> {
    let (input, _) = c.input_formula()?;
    let p = parenthesize_compound(input);
    Some(Derivation::continued(format!("{} | ~{}", p, p), Vec::new()))
}

/// Whether the proof is finished: top level, and the last step is the goal.
pub fn validate_proof(state: &ProofState) -> bool {
    let valid = match state.last_step() {
        Some(last) => state.current_depth() == 0 && same_formula(&last.formula, &state.goal),
        None => false,
    };
    debug!("validate_proof(goal = {:?}) -> {}", state.goal, valid);
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::types::LineNumber;
    use crate::utils::normalize;

    fn rule(kind: RuleKind) -> &'static Rule {
        Rule::get(kind).unwrap()
    }

    fn ids(ids: &[u32]) -> Vec<StepId> {
        ids.iter().map(|&i| StepId::new(i)).collect()
    }

    fn line(s: &str) -> LineNumber {
        s.parse().unwrap()
    }

    /// Applies and appends, panicking if the rule does not apply.
    fn step(state: &mut ProofState, kind: RuleKind, selected: &[u32], input: Option<&str>) -> ProofStep {
        let step = apply_rule(rule(kind), state, &ids(selected), input)
            .unwrap_or_else(|| panic!("{:?} did not apply", kind));
        state.push_step(step.clone());
        step
    }

    fn empty() -> ProofState {
        ProofState::new("p -> p", Vec::<String>::new())
    }

    #[test]
    fn test_always_applicable() {
        let state = empty();
        assert!(check_applicability(rule(RuleKind::Assume), &state).applicable);
        assert!(check_applicability(rule(RuleKind::Lem), &state).applicable);
    }

    #[test]
    fn test_impl_intro_needs_open_assumption() {
        let mut state = empty();
        let res = check_applicability(rule(RuleKind::ImplIntro), &state);
        assert!(!res.applicable);
        assert_eq!(res.reason.as_deref(), Some("No open assumption to close"));

        step(&mut state, RuleKind::Assume, &[], Some("p"));
        assert!(check_applicability(rule(RuleKind::ImplIntro), &state).applicable);
    }

    #[test]
    fn test_or_elim_needs_disjunction() {
        let state = ProofState::new("q", ["p ^ q"]);
        let res = check_applicability(rule(RuleKind::OrElim), &state);
        assert!(!res.applicable);
        assert_eq!(res.reason.as_deref(), Some("Need a disjunction (P∨Q) to apply this rule"));

        let state = ProofState::new("q", ["p ^ q", "r | s"]);
        assert!(check_applicability(rule(RuleKind::OrElim), &state).applicable);
    }

    #[test]
    fn test_step_count_precondition() {
        let state = ProofState::new("q", ["p"]);
        assert!(check_applicability(rule(RuleKind::AndElimLeft), &state).applicable);
        let res = check_applicability(rule(RuleKind::ModusPonens), &state);
        assert!(!res.applicable);
        assert_eq!(res.reason.as_deref(), Some("Need at least 2 steps to apply this rule"));

        let res = check_applicability(rule(RuleKind::DoubleNeg), &empty());
        assert_eq!(res.reason.as_deref(), Some("Need at least 1 step to apply this rule"));
    }

    #[test]
    fn test_applicability_is_not_sufficient() {
        let state = ProofState::new("q", ["p"]);
        assert!(check_applicability(rule(RuleKind::AndElimLeft), &state).applicable);
        assert!(apply_rule(rule(RuleKind::AndElimLeft), &state, &ids(&[1]), None).is_none());
    }

    #[test]
    fn test_applicable_rules_lists_whole_table() {
        let state = ProofState::new("q", ["p", "p -> q"]);
        let all = applicable_rules(&state);
        assert_eq!(all.len(), rules().len());
        let impl_intro = all.iter().find(|r| r.rule.kind == RuleKind::ImplIntro).unwrap();
        assert!(!impl_intro.applicability.applicable);
        let mp = all.iter().find(|r| r.rule.kind == RuleKind::ModusPonens).unwrap();
        assert!(mp.applicability.applicable);
    }

    #[test]
    fn test_modus_ponens() {
        let mut state = ProofState::new("q", ["p", "p -> q"]);
        let s = step(&mut state, RuleKind::ModusPonens, &[1, 2], None);
        assert_eq!(s.formula, "q");
        assert_eq!(s.dependencies, ids(&[1, 2]));
        assert_eq!(s.line_number, line("3"));
        assert_eq!(s.depth, 0);
        assert_eq!(s.id, StepId::new(3));
    }

    #[test]
    fn test_modus_ponens_either_order() {
        let state = ProofState::new("q", ["p -> q", "p"]);
        let s = apply_rule(rule(RuleKind::ModusPonens), &state, &ids(&[1, 2]), None).unwrap();
        assert_eq!(s.formula, "q");
    }

    #[test]
    fn test_modus_ponens_complex_consequent() {
        let state = ProofState::new("q ^ r", ["(a | b)", "a | b -> (q ^ r)"]);
        let s = apply_rule(rule(RuleKind::ModusPonens), &state, &ids(&[2, 1]), None).unwrap();
        assert_eq!(s.formula, "q ^ r");
    }

    #[test]
    fn test_modus_ponens_mismatch() {
        let state = ProofState::new("q", ["r", "p -> q"]);
        assert!(apply_rule(rule(RuleKind::ModusPonens), &state, &ids(&[1, 2]), None).is_none());
    }

    #[test]
    fn test_wrong_selection_count() {
        let state = ProofState::new("q", ["p", "p -> q"]);
        assert!(apply_rule(rule(RuleKind::ModusPonens), &state, &ids(&[1]), None).is_none());
        assert!(apply_rule(rule(RuleKind::AndElimLeft), &state, &ids(&[1, 2]), None).is_none());
        assert!(apply_rule(rule(RuleKind::Lem), &state, &ids(&[1]), Some("p")).is_none());
    }

    #[test]
    fn test_unknown_step() {
        let state = ProofState::new("q", ["p", "p -> q"]);
        assert!(apply_rule(rule(RuleKind::ModusPonens), &state, &ids(&[1, 9]), None).is_none());
    }

    #[test]
    fn test_modus_tollens() {
        let state = ProofState::new("~p", ["~q", "p ^ r -> q"]);
        let s = apply_rule(rule(RuleKind::ModusTollens), &state, &ids(&[1, 2]), None).unwrap();
        assert_eq!(s.formula, "~(p ^ r)");
        assert!(parse_str(&s.formula).is_ok());

        let state = ProofState::new("~p", ["p -> q", "~(q)"]);
        let s = apply_rule(rule(RuleKind::ModusTollens), &state, &ids(&[1, 2]), None).unwrap();
        assert_eq!(s.formula, "~(p)");

        let state = ProofState::new("~p", ["p -> q", "~r"]);
        assert!(apply_rule(rule(RuleKind::ModusTollens), &state, &ids(&[1, 2]), None).is_none());
    }

    #[test]
    fn test_and_intro_over_parenthesizes() {
        let state = ProofState::new("p ^ q", ["p", "q | r"]);
        let s = apply_rule(rule(RuleKind::AndIntro), &state, &ids(&[1, 2]), None).unwrap();
        assert_eq!(s.formula, "(p) ^ (q | r)");
    }

    #[test]
    fn test_and_elim() {
        let state = ProofState::new("q", ["(p | r) ^ ~q"]);
        let left = apply_rule(rule(RuleKind::AndElimLeft), &state, &ids(&[1]), None).unwrap();
        let right = apply_rule(rule(RuleKind::AndElimRight), &state, &ids(&[1]), None).unwrap();
        assert_eq!(left.formula, "p | r");
        assert_eq!(right.formula, "~q");
    }

    #[test]
    fn test_or_intro() {
        let state = ProofState::new("p | q", ["p"]);
        let left = apply_rule(rule(RuleKind::OrIntroLeft), &state, &ids(&[1]), Some("q ^ r")).unwrap();
        let right = apply_rule(rule(RuleKind::OrIntroRight), &state, &ids(&[1]), Some("q")).unwrap();
        assert_eq!(left.formula, "(p) | (q ^ r)");
        assert_eq!(right.formula, "(q) | (p)");
    }

    #[test]
    fn test_or_intro_requires_input() {
        let state = ProofState::new("p | q", ["p"]);
        let r = rule(RuleKind::OrIntroLeft);
        assert!(apply_rule(r, &state, &ids(&[1]), None).is_none());
        assert!(apply_rule(r, &state, &ids(&[1]), Some("  ")).is_none());
        assert!(apply_rule(r, &state, &ids(&[1]), Some("q ^")).is_none());
    }

    #[test]
    fn test_or_elim_records_cases() {
        let state = ProofState::new("r", ["(p ^ q) | ~r"]);
        let s = apply_rule(rule(RuleKind::OrElim), &state, &ids(&[1]), None).unwrap();
        assert_eq!(s.formula, "(p ^ q) | ~r");
        let cases = s.cases.unwrap();
        assert_eq!(cases.left, "p ^ q");
        assert_eq!(cases.right, "~r");

        let state = ProofState::new("r", ["p ^ q"]);
        assert!(apply_rule(rule(RuleKind::OrElim), &state, &ids(&[1]), None).is_none());
    }

    #[test]
    fn test_double_neg() {
        let state = ProofState::new("p", ["~~(p -> q)", "~p"]);
        let s = apply_rule(rule(RuleKind::DoubleNeg), &state, &ids(&[1]), None).unwrap();
        assert_eq!(s.formula, "p -> q");
        assert!(apply_rule(rule(RuleKind::DoubleNeg), &state, &ids(&[2]), None).is_none());
    }

    #[test]
    fn test_assume() {
        let mut state = ProofState::new("p -> q", ["q"]);
        let s = step(&mut state, RuleKind::Assume, &[], Some(" p "));
        assert_eq!(s.formula, " p ");
        assert_eq!(s.depth, 1);
        assert_eq!(s.line_number, line("1.1"));
        assert!(s.is_subproof_start);
        assert_eq!(state.current_depth(), 1);

        assert!(apply_rule(rule(RuleKind::Assume), &state, &[], None).is_none());
        assert!(apply_rule(rule(RuleKind::Assume), &state, &[], Some("")).is_none());
        assert!(apply_rule(rule(RuleKind::Assume), &state, &[], Some("p @ q")).is_none());
    }

    #[test]
    fn test_assume_then_close() {
        let mut state = empty();
        let a = step(&mut state, RuleKind::Assume, &[], Some("p"));
        assert_eq!(a.depth, 1);
        assert_eq!(a.line_number, line("1"));

        let c = step(&mut state, RuleKind::ImplIntro, &[], None);
        assert_eq!(normalize(&c.formula), "p->p");
        assert_eq!(c.depth, 0);
        assert_eq!(c.line_number, line("2"));
        assert!(c.is_subproof_end);
        assert_eq!(c.dependencies, ids(&[1]));
        assert!(validate_proof(&state));
    }

    #[test]
    fn test_nested_line_numbers() {
        // 1 p -> q         premise
        // 1.1 | p          assume
        // 1.2 | q          mp
        // 1.2.1 | | r      assume
        // 1.2.2 | | q      mp
        // 1.3 | r -> q     impl_intro
        // 2 p -> (r -> q)  impl_intro
        let mut state = ProofState::new("p -> (r -> q)", ["p -> q"]);
        assert_eq!(step(&mut state, RuleKind::Assume, &[], Some("p")).line_number, line("1.1"));
        assert_eq!(step(&mut state, RuleKind::ModusPonens, &[2, 1], None).line_number, line("1.2"));
        assert_eq!(step(&mut state, RuleKind::Assume, &[], Some("r")).line_number, line("1.2.1"));
        let q = step(&mut state, RuleKind::ModusPonens, &[2, 1], None);
        assert_eq!(q.line_number, line("1.2.2"));
        assert_eq!(q.depth, 2);

        let inner = step(&mut state, RuleKind::ImplIntro, &[], None);
        assert_eq!(inner.formula, "(r) -> (q)");
        assert_eq!(inner.line_number, line("1.3"));
        assert_eq!(inner.depth, 1);
        assert_eq!(inner.dependencies, ids(&[4, 5]));

        let outer = step(&mut state, RuleKind::ImplIntro, &[], None);
        assert_eq!(outer.formula, "(p) -> ((r) -> (q))");
        assert_eq!(outer.line_number, line("2"));
        assert_eq!(outer.depth, 0);
        assert_eq!(outer.dependencies, ids(&[2, 6]));

        assert!(validate_proof(&state));
    }

    #[test]
    fn test_continue_after_close() {
        let mut state = ProofState::new("q", ["p", "q"]);
        step(&mut state, RuleKind::Assume, &[], Some("r"));
        step(&mut state, RuleKind::ImplIntro, &[], None);
        let s = step(&mut state, RuleKind::OrIntroLeft, &[2], Some("s"));
        assert_eq!(s.line_number, line("4"));
        assert_eq!(s.depth, 0);
    }

    #[test]
    fn test_impl_intro_without_assumption() {
        let state = ProofState::new("q", ["p"]);
        assert!(apply_rule(rule(RuleKind::ImplIntro), &state, &[], None).is_none());
    }

    #[test]
    fn test_lem_formatting() {
        let state = empty();
        let r = rule(RuleKind::Lem);
        let apply = |input: &str| apply_rule(r, &state, &[], Some(input)).map(|s| s.formula);
        assert_eq!(apply("p -> q").as_deref(), Some("(p -> q) | ~(p -> q)"));
        assert_eq!(apply("(p -> q)").as_deref(), Some("(p -> q) | ~(p -> q)"));
        assert_eq!(apply("p").as_deref(), Some("p | ~p"));
        assert_eq!(apply("  ~p ").as_deref(), Some("~p | ~~p"));
        assert_eq!(apply("(p) ^ (q)").as_deref(), Some("((p) ^ (q)) | ~((p) ^ (q))"));
        assert_eq!(apply(""), None);
        assert_eq!(apply("p ->"), None);
    }

    #[test]
    fn test_lem_result_is_tautology() {
        let state = empty();
        let s = apply_rule(rule(RuleKind::Lem), &state, &[], Some("p <-> q")).unwrap();
        let f = parse_str(&s.formula).unwrap();
        assert!(crate::truth_table::TruthTable::new(&f).unwrap().is_tautology());
    }

    #[test]
    fn test_unparseable_step_is_soft_failure() {
        let state = ProofState::new("q", ["p @", "p -> q"]);
        assert!(apply_rule(rule(RuleKind::ModusPonens), &state, &ids(&[1, 2]), None).is_none());
        assert!(apply_rule(rule(RuleKind::AndIntro), &state, &ids(&[1, 2]), None).is_none());
        assert!(!check_applicability(rule(RuleKind::OrElim), &state).applicable);
    }

    #[test]
    fn test_validate_proof() {
        let mut state = empty();
        assert!(!validate_proof(&state));

        step(&mut state, RuleKind::Assume, &[], Some("p"));
        // Goal formula matches but the subproof is still open.
        state.goal = "p".to_string();
        assert!(!validate_proof(&state));

        step(&mut state, RuleKind::ImplIntro, &[], None);
        assert!(!validate_proof(&state));
        state.goal = "P -> P".to_string();
        assert!(validate_proof(&state));
        state.goal = "q".to_string();
        assert!(!validate_proof(&state));
    }

    #[test]
    fn test_mark_complete() {
        let mut state = ProofState::new("q", ["p", "p -> q"]);
        assert!(!state.mark_complete());
        step(&mut state, RuleKind::ModusPonens, &[1, 2], None);
        assert!(state.mark_complete());
        assert!(state.is_complete);
        state.remove_step(StepId::new(3));
        assert!(!state.is_complete);
    }

    #[test]
    fn test_apply_does_not_mutate_state() {
        let state = ProofState::new("q", ["p", "p -> q"]);
        let before = state.clone();
        apply_rule(rule(RuleKind::ModusPonens), &state, &ids(&[1, 2]), None).unwrap();
        assert_eq!(state, before);
    }
}
