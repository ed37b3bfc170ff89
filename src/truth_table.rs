//! Truth tables by full enumeration.
//!
//! A formula over `k` distinct variables has a table of `2^k` rows. Columns follow the
//! lexicographic order of variable names. Rows are listed from all-true down to all-false:
//! in row `i`, the variable in column `j` is `true` iff bit `k - 1 - j` of `i` is zero.
//!
//! For `k = 2` (columns `p`, `q`):
//!
//! ```text
//! row  p  q
//!   0  T  T
//!   1  T  F
//!   2  F  T
//!   3  F  F
//! ```
//!
//! Formulas with more than [`MAX_VARIABLES`] distinct variables are refused with
//! [`TooManyVariables`].

use std::collections::BTreeMap;
use std::fmt;

use log::debug;

use crate::eval::Valuation;
use crate::formula::Formula;

/// Largest number of distinct variables a table is built for (`2^20` rows).
pub const MAX_VARIABLES: usize = 20;

/// A formula mentions more variables than [`MAX_VARIABLES`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TooManyVariables {
    pub count: usize,
    pub limit: usize,
}

impl fmt::Display for TooManyVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Formula has {} variables, truth tables are limited to {}",
            self.count, self.limit
        )
    }
}

impl std::error::Error for TooManyVariables {}

/// Number of rows for `k` variables.
fn row_count(k: usize) -> Result<usize, TooManyVariables> {
    if k > MAX_VARIABLES {
        debug!("row_count: {} variables exceeds the limit of {}", k, MAX_VARIABLES);
        return Err(TooManyVariables {
            count: k,
            limit: MAX_VARIABLES,
        });
    }
    Ok(1 << k)
}

/// One line of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Values of the variables, in column order.
    pub values: Vec<bool>,
    /// Value of the formula.
    pub result: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Classification {
    Tautology,
    Contradiction,
    Contingent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Classification::Tautology => "tautology",
            Classification::Contradiction => "contradiction",
            Classification::Contingent => "contingent",
        };
        write!(f, "{}", s)
    }
}

struct RowValuation<'a> {
    columns: &'a [String],
    values: &'a [bool],
}

impl Valuation for RowValuation<'_> {
    fn value(&self, name: &str) -> Option<bool> {
        // Columns are sorted.
        self.columns
            .binary_search_by(|c| c.as_str().cmp(name))
            .ok()
            .map(|i| self.values[i])
    }
}

fn row_values(index: usize, k: usize) -> Vec<bool> {
    (0..k).map(|j| (index >> (k - 1 - j)) & 1 == 0).collect()
}

fn enumerate(formula: &Formula, columns: &[String]) -> Result<Vec<Row>, TooManyVariables> {
    let k = columns.len();
    let size = row_count(k)?;
    let rows = (0..size)
        .map(|i| {
            let values = row_values(i, k);
            let result = formula.eval(&RowValuation {
                columns,
                values: &values,
            });
            Row { values, result }
        })
        .collect();
    Ok(rows)
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Enumerates every assignment of `formula`'s variables.
    ///
    /// Fails when there are more than [`MAX_VARIABLES`] of them.
    pub fn new(formula: &Formula) -> Result<Self, TooManyVariables> {
        let variables: Vec<String> = formula.variables().into_iter().collect();
        let rows = enumerate(formula, &variables)?;
        Ok(Self { variables, rows })
    }

    /// Column headers, sorted.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Satisfying assignments.
    pub fn models(&self) -> impl Iterator<Item = BTreeMap<String, bool>> + '_ {
        self.rows.iter().filter(|r| r.result).map(|r| {
            self.variables
                .iter()
                .cloned()
                .zip(r.values.iter().copied())
                .collect()
        })
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|r| r.result)
    }

    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|r| !r.result)
    }

    pub fn is_satisfiable(&self) -> bool {
        !self.is_contradiction()
    }

    pub fn classify(&self) -> Classification {
        if self.is_tautology() {
            Classification::Tautology
        } else if self.is_contradiction() {
            Classification::Contradiction
        } else {
            Classification::Contingent
        }
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.variables {
            write!(f, "{} | ", v)?;
        }
        writeln!(f, "=")?;
        for row in &self.rows {
            for (v, value) in self.variables.iter().zip(&row.values) {
                let cell = if *value { "T" } else { "F" };
                write!(f, "{:<width$} | ", cell, width = v.chars().count())?;
            }
            writeln!(f, "{}", if row.result { "T" } else { "F" })?;
        }
        Ok(())
    }
}

/// Whether `a` and `b` agree on every assignment to their combined variables.
///
/// The combined variable count is subject to [`MAX_VARIABLES`].
pub fn equivalent(a: &Formula, b: &Formula) -> Result<bool, TooManyVariables> {
    let mut vars = a.variables();
    vars.extend(b.variables());
    let columns: Vec<String> = vars.into_iter().collect();
    let k = columns.len();
    let size = row_count(k)?;
    Ok((0..size).all(|i| {
        let values = row_values(i, k);
        let valuation = RowValuation {
            columns: &columns,
            values: &values,
        };
        a.eval(&valuation) == b.eval(&valuation)
    }))
}
