//! Formula to text conversion.
//!
//! Two outputs share one printer:
//! - the canonical surface string (the [`Display`][std::fmt::Display] impl of [`Formula`]),
//!   which the parser reads back;
//! - display markup for a rendering layer (LaTeX by default), see [`RenderConfig`].
//!
//! Both insert the *minimal* set of parentheses: a subformula is wrapped only when its
//! precedence is lower than the position it occupies requires. Left operands of left-associative
//! connectives (and right operands of `->`) may share their parent's level; the other side needs
//! a strictly tighter one.
//!
//! ```
//! use fitch_rs::formula::Formula;
//!
//! let f: Formula = "(p ^ q) | ((r -> s) -> t)".parse().unwrap();
//! assert_eq!(f.to_string(), "p ^ q | ((r -> s) -> t)");
//! assert_eq!(f.to_display(), r"p \land q \lor ((r \to s) \to t)");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::formula::{Formula, Precedence};

/// Symbol set used for display markup.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// `\neg`, `\land`, `\lor`, `\to`, `\leftrightarrow`, `\top`, `\bot`.
    #[default]
    Latex,
    /// `¬ ∧ ∨ → ↔ ⊤ ⊥`.
    Unicode,
    /// The parser's own spelling: `~ ^ | -> <-> T F`.
    Ascii,
}

/// Configuration options for display markup.
///
/// # Examples
///
/// ```
/// use fitch_rs::formula::Formula;
/// use fitch_rs::render::{Notation, RenderConfig};
///
/// let f: Formula = "~p -> q".parse().unwrap();
/// let config = RenderConfig::default().with_notation(Notation::Unicode);
/// assert_eq!(f.to_display_with(&config), "¬p → q");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Symbol set (default: `Latex`)
    pub notation: Notation,
    /// Whether binary connectives are surrounded by spaces (default: true)
    pub spaced_binary: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            notation: Notation::Latex,
            spaced_binary: true,
        }
    }
}

impl RenderConfig {
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    pub fn with_spaced_binary(mut self, spaced_binary: bool) -> Self {
        self.spaced_binary = spaced_binary;
        self
    }

    fn symbols(&self) -> &'static Symbols {
        match self.notation {
            Notation::Latex => &LATEX,
            Notation::Unicode => &UNICODE,
            Notation::Ascii => &ASCII,
        }
    }
}

struct Symbols {
    not: &'static str,
    and: &'static str,
    or: &'static str,
    implies: &'static str,
    iff: &'static str,
    top: &'static str,
    bot: &'static str,
}

static ASCII: Symbols = Symbols {
    not: "~",
    and: "^",
    or: "|",
    implies: "->",
    iff: "<->",
    top: "T",
    bot: "F",
};

static UNICODE: Symbols = Symbols {
    not: "¬",
    and: "∧",
    or: "∨",
    implies: "→",
    iff: "↔",
    top: "⊤",
    bot: "⊥",
};

// Trailing space after `\neg` keeps `\neg p` from turning into the unknown command `\negp`.
static LATEX: Symbols = Symbols {
    not: "\\neg ",
    and: "\\land",
    or: "\\lor",
    implies: "\\to",
    iff: "\\leftrightarrow",
    top: "\\top",
    bot: "\\bot",
};

struct Printer<'s> {
    symbols: &'s Symbols,
    spaced: bool,
}

impl Printer<'_> {
    fn write(&self, out: &mut impl fmt::Write, formula: &Formula, required: Precedence) -> fmt::Result {
        let own = formula.precedence();
        let wrap = own < required;
        if wrap {
            out.write_char('(')?;
        }
        match formula {
            // An empty name prints as nothing.
            Formula::Var(name) => out.write_str(name)?,
            Formula::True => out.write_str(self.symbols.top)?,
            Formula::False => out.write_str(self.symbols.bot)?,
            Formula::Not(inner) => {
                out.write_str(self.symbols.not)?;
                self.write(out, inner, Precedence::Not)?;
            }
            Formula::And(a, b) => self.write_binary(out, a, self.symbols.and, b, own, own.tighter())?,
            Formula::Or(a, b) => self.write_binary(out, a, self.symbols.or, b, own, own.tighter())?,
            Formula::Iff(a, b) => self.write_binary(out, a, self.symbols.iff, b, own, own.tighter())?,
            // Right-associative: the left side is the one that needs a tighter level.
            Formula::Implies(a, b) => self.write_binary(out, a, self.symbols.implies, b, own.tighter(), own)?,
        }
        if wrap {
            out.write_char(')')?;
        }
        Ok(())
    }

    fn write_binary(
        &self,
        out: &mut impl fmt::Write,
        lhs: &Formula,
        op: &str,
        rhs: &Formula,
        lhs_required: Precedence,
        rhs_required: Precedence,
    ) -> fmt::Result {
        self.write(out, lhs, lhs_required)?;
        if self.spaced {
            write!(out, " {} ", op)?;
        } else {
            out.write_str(op)?;
        }
        self.write(out, rhs, rhs_required)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printer = Printer {
            symbols: &ASCII,
            spaced: true,
        };
        printer.write(f, self, Precedence::Iff)
    }
}

impl Formula {
    /// Display markup with the default [`RenderConfig`].
    pub fn to_display(&self) -> String {
        self.to_display_with(&RenderConfig::default())
    }

    pub fn to_display_with(&self, config: &RenderConfig) -> String {
        let printer = Printer {
            symbols: config.symbols(),
            spaced: config.spaced_binary,
        };
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = printer.write(&mut out, self, Precedence::Iff);
        out
    }
}
