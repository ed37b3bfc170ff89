//! String-level helpers for formula text.
//!
//! These work on raw strings, without parsing.

/// Comparison key for formula strings: whitespace and parentheses removed, lowercased.
///
/// Deliberately permissive: `"P -> Q"` and `"p->q"` compare equal, and so do `"(p ^ q) | r"`
/// and `"p ^ (q | r)"`. Only used for equality checks, never for parsing.
///
/// ```
/// use fitch_rs::utils::normalize;
///
/// assert_eq!(normalize(" (P -> Q) "), "p->q");
/// ```
pub fn normalize(formula: &str) -> String {
    formula
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn same_formula(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Whether the whole (trimmed) string is enclosed by one matching pair of parentheses.
///
/// `"(p ^ q)"` is, `"(p) ^ (q)"` is not: its first `(` closes before the end.
pub fn is_fully_parenthesized(formula: &str) -> bool {
    let s = formula.trim();
    if !(s.starts_with('(') && s.ends_with(')')) {
        return false;
    }
    let mut depth: usize = 0;
    let last = s.len() - 1;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
                if depth == 0 && i != last {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

const BINARY_SPELLINGS: &[&str] = &["<->", "->", "/\\", "\\/", "&&", "||", "^", "|", "∧", "∨", "→", "↔"];

/// Whether the string mentions any binary connective, in any accepted spelling.
pub fn has_binary_operator(formula: &str) -> bool {
    BINARY_SPELLINGS.iter().any(|op| formula.contains(op))
}

/// Trimmed `formula`, wrapped in parentheses when it has a binary connective at some level and
/// is not already enclosed.
pub fn parenthesize_compound(formula: &str) -> String {
    let s = formula.trim();
    if has_binary_operator(s) && !is_fully_parenthesized(s) {
        format!("({})", s)
    } else {
        s.to_string()
    }
}
