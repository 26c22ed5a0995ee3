//! Cursor invariants of the editing history under arbitrary edit sequences.

use lowcode_core::{ComponentNode, History};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Commit(u64),
    Undo,
    Redo,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1u64..1000).prop_map(Step::Commit),
        Just(Step::Undo),
        Just(Step::Redo),
    ]
}

fn tree(id: u64) -> Vec<ComponentNode> {
    vec![ComponentNode::new(id, "Page")]
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(steps in prop::collection::vec(step(), 0..40)) {
        let mut history = History::new(tree(0));
        for step in steps {
            match step {
                Step::Commit(id) => history.commit(tree(id)),
                Step::Undo => { history.undo(); }
                Step::Redo => { history.redo(); }
            }
            prop_assert!(history.cursor() < history.len());
            prop_assert_eq!(history.can_undo(), history.cursor() > 0);
            prop_assert_eq!(history.can_redo(), history.cursor() + 1 < history.len());
        }
    }

    #[test]
    fn commit_always_lands_on_newest(steps in prop::collection::vec(step(), 0..40), id in 1000u64..2000) {
        let mut history = History::new(tree(0));
        for step in steps {
            match step {
                Step::Commit(id) => history.commit(tree(id)),
                Step::Undo => { history.undo(); }
                Step::Redo => { history.redo(); }
            }
        }
        history.commit(tree(id));
        prop_assert!(!history.can_redo());
        prop_assert_eq!(history.current()[0].id, id);
    }

    #[test]
    fn undo_then_redo_restores_current(ids in prop::collection::vec(1u64..1000, 1..20)) {
        let mut history = History::new(tree(0));
        for id in &ids {
            history.commit(tree(*id));
        }
        let undone = history.undo().map(|snapshot| snapshot[0].id);
        prop_assert_eq!(undone, Some(if ids.len() > 1 { ids[ids.len() - 2] } else { 0 }));
        let redone = history.redo().map(|snapshot| snapshot[0].id);
        prop_assert_eq!(redone, ids.last().copied());
    }
}
