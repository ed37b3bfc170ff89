//! Proof steps and proof state.
//!
//! A [`ProofState`] owns an ordered list of [`ProofStep`]s. Steps store their formula as a
//! string; anything that needs structure re-parses it. Dependencies are plain [`StepId`]s,
//! resolved by lookup.
//!
//! The engine never mutates a state: it reads a state and returns a new step, which the
//! caller then appends with [`ProofState::push_step`].

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::rules::RuleKind;
use crate::types::{LineNumber, StepId};

/// The two cases of a disjunction cited by `or_elim`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct OrCases {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProofStep {
    pub id: StepId,
    pub line_number: LineNumber,
    pub formula: String,
    pub rule: RuleKind,
    /// Cited steps, in the order they were selected.
    pub dependencies: Vec<StepId>,
    /// Subproof nesting, 0 at top level.
    pub depth: usize,
    pub is_subproof_start: bool,
    pub is_subproof_end: bool,
    /// Set on `or_elim` steps only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cases: Option<OrCases>,
}

impl ProofStep {
    pub fn new(id: StepId, line_number: LineNumber, formula: impl Into<String>, rule: RuleKind, depth: usize) -> Self {
        Self {
            id,
            line_number,
            formula: formula.into(),
            rule,
            dependencies: Vec::new(),
            depth,
            is_subproof_start: false,
            is_subproof_end: false,
            cases: None,
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<StepId>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn subproof_start(mut self) -> Self {
        self.is_subproof_start = true;
        self
    }

    pub fn subproof_end(mut self) -> Self {
        self.is_subproof_end = true;
        self
    }

    pub fn with_cases(mut self, cases: OrCases) -> Self {
        self.cases = Some(cases);
        self
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}{}  [{}", self.line_number, "| ".repeat(self.depth), self.formula, self.rule)?;
        for (i, dep) in self.dependencies.iter().enumerate() {
            write!(f, "{}{}", if i == 0 { " " } else { ", " }, dep)?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProofState {
    pub goal: String,
    pub premises: Vec<String>,
    steps: Vec<ProofStep>,
    current_depth: usize,
    next_id: StepId,
    pub is_complete: bool,
}

impl ProofState {
    /// Starts a proof: each premise becomes a top-level `Premise` step, in order.
    pub fn new<S: Into<String>>(goal: impl Into<String>, premises: impl IntoIterator<Item = S>) -> Self {
        let mut state = Self {
            goal: goal.into(),
            premises: premises.into_iter().map(Into::into).collect(),
            steps: Vec::new(),
            current_depth: 0,
            next_id: StepId::new(1),
            is_complete: false,
        };
        for premise in state.premises.clone() {
            let step = ProofStep::new(state.next_id, state.next_line_number(), premise, RuleKind::Premise, 0);
            state.push_step(step);
        }
        state
    }

    pub fn steps(&self) -> &[ProofStep] {
        &self.steps
    }

    pub fn current_depth(&self) -> usize {
        self.current_depth
    }

    pub fn step(&self, id: StepId) -> Option<&ProofStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    pub fn last_step(&self) -> Option<&ProofStep> {
        self.steps.last()
    }

    /// Id the next created step will get.
    pub fn next_step_id(&self) -> StepId {
        self.next_id
    }

    /// The innermost assumption that is still open.
    pub fn open_assumption(&self) -> Option<&ProofStep> {
        if self.current_depth == 0 {
            return None;
        }
        self.steps
            .iter()
            .rev()
            .find(|s| s.is_subproof_start && s.depth == self.current_depth)
    }

    /// Line number for a step continuing at the current depth.
    pub fn next_line_number(&self) -> LineNumber {
        match self.steps.last() {
            Some(last) => last.line_number.next_sibling(),
            None => LineNumber::first(),
        }
    }

    /// Line number for a step opening a new subproof.
    pub fn subproof_line_number(&self) -> LineNumber {
        match self.steps.last() {
            Some(last) => last.line_number.first_child(),
            None => LineNumber::first(),
        }
    }

    /// Appends a step created by the engine and moves to its depth.
    pub fn push_step(&mut self, step: ProofStep) {
        debug!("push_step(id = {}, line = {}, formula = {:?})", step.id, step.line_number, step.formula);
        if step.id >= self.next_id {
            self.next_id = step.id.next();
        }
        self.current_depth = step.depth;
        self.is_complete = false;
        self.steps.push(step);
    }

    /// Removes a step. Depth follows the new last step; ids are not reused.
    pub fn remove_step(&mut self, id: StepId) -> Option<ProofStep> {
        let index = self.steps.iter().position(|s| s.id == id)?;
        let removed = self.steps.remove(index);
        debug!("remove_step(id = {}, line = {})", removed.id, removed.line_number);
        self.current_depth = self.steps.last().map_or(0, |s| s.depth);
        self.is_complete = false;
        Some(removed)
    }

    /// Back to the premises only.
    pub fn reset(&mut self) {
        *self = ProofState::new(self.goal.clone(), self.premises.clone());
    }

    /// Sets `is_complete` when the proof is valid and returns it.
    pub fn mark_complete(&mut self) -> bool {
        self.is_complete = crate::engine::validate_proof(self);
        self.is_complete
    }
}

impl fmt::Display for ProofState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Goal: {}", self.goal)?;
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        Ok(())
    }
}
