//! # fitch-rs: propositional logic and natural deduction in Rust
//!
//! **`fitch-rs`** is the core of an interactive logic tutor. It parses propositional formulas,
//! prints them back with minimal parentheses, builds truth tables, and checks Fitch-style
//! natural deduction proofs that a user constructs one rule at a time.
//!
//! ## Key Features
//!
//! - **Forgiving input**: ASCII (`~ ^ | -> <->`), alternate (`! && || /\ \/`) and Unicode
//!   (`¬ ∧ ∨ → ↔ ⊤ ⊥`) spellings are all accepted.
//! - **Faithful output**: the printer adds a parenthesis only where precedence needs one, so
//!   parsing, printing, and parsing again gives back the same tree.
//! - **Stateless proof engine**: rules read a [`ProofState`][crate::proof::ProofState] and return a
//!   new [`ProofStep`][crate::proof::ProofStep]; the caller owns the state.
//! - **Soft failures**: a rule that does not fit returns `None`, a bad formula comes back as an
//!   error message. Nothing in here panics on user input.
//!
//! ## Basic Usage
//!
//! ```rust
//! use fitch_rs::formula::Formula;
//! use fitch_rs::truth_table::TruthTable;
//!
//! // Parse: `^` binds tighter than `|`, `->` is right-associative.
//! let f: Formula = "p | q ^ r -> s -> p".parse().unwrap();
//! assert_eq!(f.to_string(), "p | q ^ r -> s -> p");
//!
//! // Render for display.
//! assert_eq!(f.to_display(), r"p \lor q \land r \to s \to p");
//!
//! // Enumerate.
//! let table = TruthTable::new(&f).unwrap();
//! assert_eq!(table.variables(), &["p", "q", "r", "s"]);
//! assert!(!table.is_tautology());
//! ```
//!
//! ## Proofs
//!
//! ```rust
//! use fitch_rs::engine::{apply_rule, validate_proof};
//! use fitch_rs::proof::ProofState;
//! use fitch_rs::rules::{Rule, RuleKind};
//!
//! let mut state = ProofState::new("p -> p", Vec::<String>::new());
//!
//! let assume = Rule::get(RuleKind::Assume).unwrap();
//! let step = apply_rule(assume, &state, &[], Some("p")).unwrap();
//! state.push_step(step);
//!
//! let close = Rule::get(RuleKind::ImplIntro).unwrap();
//! let step = apply_rule(close, &state, &[], None).unwrap();
//! assert_eq!(step.formula, "(p) -> (p)");
//! state.push_step(step);
//!
//! assert!(validate_proof(&state));
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]** and **[`parser`]**: from text to [`Formula`][crate::formula::Formula].
//! - **[`render`]**: from a formula back to text or display markup.
//! - **[`eval`]** and **[`truth_table`]**: semantics.
//! - **[`rules`]**, **[`proof`]**, **[`engine`]**: natural deduction.
//! - **[`knowledge`]**: bundled exercises.

pub mod debug;
pub mod engine;
pub mod eval;
pub mod formula;
pub mod knowledge;
pub mod parser;
pub mod proof;
pub mod render;
pub mod rules;
pub mod token;
pub mod truth_table;
pub mod types;
pub mod utils;
