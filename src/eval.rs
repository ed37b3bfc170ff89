use std::collections::{BTreeMap, HashMap};

use crate::formula::Formula;

/// A source of truth values for variables.
///
/// A variable the valuation knows nothing about evaluates to `false`.
pub trait Valuation {
    fn value(&self, name: &str) -> Option<bool>;
}

impl Valuation for HashMap<String, bool> {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Valuation for BTreeMap<String, bool> {
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Valuation for [(&str, bool)] {
    fn value(&self, name: &str) -> Option<bool> {
        self.iter().find(|(n, _)| *n == name).map(|&(_, b)| b)
    }
}

impl<const N: usize> Valuation for [(&str, bool); N] {
    fn value(&self, name: &str) -> Option<bool> {
        self.as_slice().value(name)
    }
}

impl Formula {
    pub fn eval<V: Valuation + ?Sized>(&self, valuation: &V) -> bool {
        evaluate(self, valuation)
    }
}

/// Evaluates `formula` under `valuation`. Unassigned variables are `false`.
pub fn evaluate<V: Valuation + ?Sized>(formula: &Formula, valuation: &V) -> bool {
    match formula {
        Formula::Var(name) => valuation.value(name).unwrap_or(false),
        Formula::True => true,
        Formula::False => false,
        Formula::Not(a) => !evaluate(a, valuation),
        Formula::And(a, b) => evaluate(a, valuation) && evaluate(b, valuation),
        Formula::Or(a, b) => evaluate(a, valuation) || evaluate(b, valuation),
        Formula::Implies(a, b) => !evaluate(a, valuation) || evaluate(b, valuation),
        Formula::Iff(a, b) => evaluate(a, valuation) == evaluate(b, valuation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse_str;

    fn eval_str(input: &str, valuation: &[(&str, bool)]) -> bool {
        parse_str(input).unwrap().eval(valuation)
    }

    #[test]
    fn test_eval_constants() {
        assert!(eval_str("T", &[]));
        assert!(!eval_str("F", &[]));
    }

    #[test]
    fn test_eval_var() {
        assert!(eval_str("p", &[("p", true)]));
        assert!(!eval_str("p", &[("p", false)]));
    }

    #[test]
    fn test_unassigned_var_is_false() {
        assert!(!eval_str("p", &[]));
        assert!(eval_str("~p", &[("q", true)]));
    }

    #[test]
    fn test_eval_connectives() {
        for a in [false, true] {
            for b in [false, true] {
                let val = [("a", a), ("b", b)];
                assert_eq!(eval_str("a ^ b", &val), a && b);
                assert_eq!(eval_str("a | b", &val), a || b);
                assert_eq!(eval_str("a -> b", &val), !a || b);
                assert_eq!(eval_str("a <-> b", &val), a == b);
                assert_eq!(eval_str("~a", &val), !a);
            }
        }
    }

    #[test]
    fn test_eval_with_maps() {
        let f = parse_str("p -> q").unwrap();

        let mut hash = HashMap::new();
        hash.insert("p".to_string(), true);
        hash.insert("q".to_string(), false);
        assert!(!f.eval(&hash));

        let mut btree = BTreeMap::new();
        btree.insert("p".to_string(), false);
        assert!(evaluate(&f, &btree));
    }

    #[test]
    fn test_eval_fixed_array() {
        let f = parse_str("p ^ ~q").unwrap();
        assert!(f.eval(&[("p", true), ("q", false)]));
    }
}
