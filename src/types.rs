//! Type-safe wrappers for proof step identifiers and line numbers.
//!
//! A [`StepId`] is the stable identity of a step inside one proof; a [`LineNumber`] is what
//! a reader sees in the margin and encodes the subproof nesting.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A proof step identifier (1-indexed).
///
/// Ids are handed out sequentially and never reused within a proof, even after deletion.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(u32);

impl StepId {
    /// # Panics
    ///
    /// Panics if `id == 0`. Step ids are 1-indexed.
    pub fn new(id: u32) -> Self {
        assert_ne!(id, 0, "Step IDs must be >= 1");
        StepId(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        StepId(self.0 + 1)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<StepId> for u32 {
    fn from(id: StepId) -> Self {
        id.0
    }
}

/// Fitch-style dotted line number, e.g. `2`, `2.1`, `2.1.3`.
///
/// # Invariants
///
/// - At least one segment
/// - Every segment is >= 1
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LineNumber(Vec<u32>);

impl LineNumber {
    /// Line `1`.
    pub fn first() -> Self {
        LineNumber(vec![1])
    }

    pub fn segments(&self) -> &[u32] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Next line at the same nesting: `2.1` -> `2.2`.
    pub fn next_sibling(&self) -> Self {
        let mut segments = self.0.clone();
        if let Some(last) = segments.last_mut() {
            *last += 1;
        }
        LineNumber(segments)
    }

    /// First line of a subproof opened after this one: `2` -> `2.1`.
    pub fn first_child(&self) -> Self {
        let mut segments = self.0.clone();
        segments.push(1);
        LineNumber(segments)
    }

    /// Line following the subproof that this line opened: `2.1` -> `3`.
    ///
    /// A single-segment line has no parent and just advances: `1` -> `2`.
    pub fn after_subproof(&self) -> Self {
        let mut segments = self.0.clone();
        if segments.len() > 1 {
            segments.pop();
        }
        LineNumber(segments).next_sibling()
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidLineNumber(pub String);

impl fmt::Display for InvalidLineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid line number: {:?}", self.0)
    }
}

impl std::error::Error for InvalidLineNumber {}

impl FromStr for LineNumber {
    type Err = InvalidLineNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = s
            .split('.')
            .map(|part| part.parse::<u32>().ok().filter(|&n| n > 0))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| InvalidLineNumber(s.to_string()))?;
        Ok(LineNumber(segments))
    }
}

impl From<LineNumber> for String {
    fn from(line: LineNumber) -> Self {
        line.to_string()
    }
}

impl TryFrom<String> for LineNumber {
    type Error = InvalidLineNumber;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
