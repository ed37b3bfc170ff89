//! Ready-made exercises: named sets of premises with goals provable from them.

use crate::proof::ProofState;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct KnowledgeBase {
    pub name: &'static str,
    pub premises: &'static [&'static str],
    pub goals: &'static [&'static str],
}

static KNOWLEDGE_BASES: &[KnowledgeBase] = &[
    KnowledgeBase {
        name: "Modus Ponens",
        premises: &["p", "p -> q"],
        goals: &["q", "p ^ q"],
    },
    KnowledgeBase {
        name: "Hypothetical Syllogism",
        premises: &["p -> q", "q -> r"],
        goals: &["p -> r"],
    },
    KnowledgeBase {
        name: "Contraposition",
        premises: &["p -> q", "~q"],
        goals: &["~p"],
    },
    KnowledgeBase {
        name: "Conjunction",
        premises: &["p ^ q"],
        goals: &["q ^ p", "p | r"],
    },
    KnowledgeBase {
        name: "Double Negation",
        premises: &["~~p", "p -> q"],
        goals: &["q"],
    },
    KnowledgeBase {
        name: "Disjunction",
        premises: &["p | q", "p -> r", "q -> r"],
        goals: &["r"],
    },
    KnowledgeBase {
        name: "Tautologies",
        premises: &[],
        goals: &["p -> p", "p | ~p", "p -> (q -> p)"],
    },
];

/// All bundled knowledge bases.
pub fn knowledge_bases() -> &'static [KnowledgeBase] {
    KNOWLEDGE_BASES
}

impl KnowledgeBase {
    pub fn find(name: &str) -> Option<&'static KnowledgeBase> {
        KNOWLEDGE_BASES.iter().find(|kb| kb.name.eq_ignore_ascii_case(name))
    }

    /// Fresh proof of `goal` from these premises. The goal does not have to be one of `goals`.
    pub fn start(&self, goal: &str) -> ProofState {
        ProofState::new(goal, self.premises.iter().copied())
    }

    /// Fresh proof of the `index`-th suggested goal.
    pub fn start_goal(&self, index: usize) -> Option<ProofState> {
        self.goals.get(index).map(|goal| self.start(goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::parser::parse_str;
    use crate::rules::RuleKind;

    #[test]
    fn test_all_formulas_parse() {
        for kb in knowledge_bases() {
            for f in kb.premises.iter().chain(kb.goals) {
                assert!(parse_str(f).is_ok(), "{}: {:?}", kb.name, f);
            }
            assert!(!kb.goals.is_empty(), "{}", kb.name);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(KnowledgeBase::find("contraposition").unwrap().premises, &["p -> q", "~q"]);
        assert!(KnowledgeBase::find("nothing").is_none());
    }

    #[test]
    fn test_start() {
        let kb = KnowledgeBase::find("Modus Ponens").unwrap();
        let state = kb.start_goal(0).unwrap();
        assert_eq!(state.goal, "q");
        assert_eq!(state.steps().len(), 2);
        assert!(state.steps().iter().all(|s| s.rule == RuleKind::Premise));
        assert!(kb.start_goal(5).is_none());
    }

    #[test]
    fn test_premise_free_base() {
        let kb = KnowledgeBase::find("Tautologies").unwrap();
        let state = kb.start("p -> p");
        assert!(state.steps().is_empty());
    }
}
