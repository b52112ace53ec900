//! Lifecycle tests across the session state machines.

use nexus_sessions::{ChoiceSession, ChoiceState, Control, PagerSession, SelectOutcome};
use proptest::prelude::*;
use rand::SeedableRng;

#[test]
fn quiz_lifecycle_matches_the_observable_behavior() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut session = ChoiceSession::new(
        "Capital of France?",
        "Paris",
        vec!["London".to_string(), "Berlin".to_string()],
        &mut rng,
    );

    // Every option is reachable through the control-token codec.
    for (index, option) in session.options().iter().enumerate() {
        let raw = nexus_sessions::encode(1, Control::Option(index));
        let (_, control) = nexus_sessions::decode(&raw).unwrap();
        assert_eq!(control, Control::Option(index));
        assert_eq!(session.option(index), Some(option.as_str()));
    }

    assert_eq!(
        session.select("Paris"),
        SelectOutcome::Graded { correct: true }
    );
    assert_eq!(session.select("Paris"), SelectOutcome::AlreadyClosed);
    assert!(!session.expire());
    assert_eq!(session.state(), ChoiceState::Answered);
}

#[test]
fn shuffling_reaches_every_answer_position() {
    // With a uniform permutation over three options, 64 shuffles land the
    // correct answer at each index with overwhelming probability.
    let mut seen = [false; 3];
    for seed in 0..64 {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let session = ChoiceSession::new(
            "q",
            "right",
            vec!["wrong a".to_string(), "wrong b".to_string()],
            &mut rng,
        );
        let position = session
            .options()
            .iter()
            .position(|option| option == "right")
            .unwrap();
        seen[position] = true;
    }
    assert_eq!(seen, [true, true, true]);
}

proptest! {
    #[test]
    fn pager_index_stays_in_bounds(
        page_count in 1usize..20,
        steps in proptest::collection::vec(any::<bool>(), 0..200),
    ) {
        let mut pager = PagerSession::new((0..page_count).collect::<Vec<_>>());
        for forward in steps {
            if forward {
                pager.next();
            } else {
                pager.previous();
            }
            prop_assert!(pager.current_index() < page_count);
        }
    }

    #[test]
    fn pager_position_equals_clamped_walk(
        page_count in 1usize..10,
        steps in proptest::collection::vec(any::<bool>(), 0..50),
    ) {
        let mut pager = PagerSession::new((0..page_count).collect::<Vec<_>>());
        let mut expected = 0usize;
        for forward in steps {
            if forward {
                pager.next();
                expected = (expected + 1).min(page_count - 1);
            } else {
                pager.previous();
                expected = expected.saturating_sub(1);
            }
        }
        prop_assert_eq!(pager.current_index(), expected);
    }
}
