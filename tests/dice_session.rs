//! End-to-end behavior of a dice session with a real random source.

mod common;

use common::seeded_session;
use minidemos::demos::dice::{validated_maxima, DiceSessionState};

#[test]
fn three_dice_scenario() {
    let (mut session, board) = seeded_session(7);
    assert_eq!(session.state().dice_count, 1);
    assert_eq!(session.state().max_values, vec!["6"]);
    assert_eq!(session.state().current_results, vec![1]);

    session.set_dice_count("3");
    assert_eq!(session.state().dice_count, 3);
    assert_eq!(session.state().max_values, vec!["6", "6", "6"]);
    assert_eq!(session.state().current_results, vec![1, 1, 1]);

    for _ in 0..50 {
        let before = session.state().current_results.clone();
        let outcome = session.roll().expect("roll accepted");
        let state = session.state();
        assert_eq!(outcome.results, state.current_results);
        assert_eq!(state.previous_results, before);
        assert!(state.current_results.iter().all(|v| (1..=6).contains(v)));
    }
    assert!(board.is_empty());
}

#[test]
fn results_respect_per_die_maxima() {
    let (mut session, board) = seeded_session(42);
    session.set_dice_count("3");
    session.toggle_same_value_mode(false);
    session.set_per_die_maximum(0, "1");
    session.set_per_die_maximum(1, "2");
    session.set_per_die_maximum(2, "6");

    let maxima = validated_maxima(&session.state().max_values).unwrap();
    for _ in 0..50 {
        session.roll().expect("roll accepted");
        for (value, max) in session.state().current_results.iter().zip(&maxima) {
            assert!((1..=*max).contains(value));
        }
        assert_eq!(session.state().current_results[0], 1);
    }
    assert!(board.is_empty());
}

#[test]
fn previous_results_are_a_copy() {
    let (mut session, _board) = seeded_session(3);
    session.set_dice_count("2");
    session.roll().unwrap();
    let snapshot = session.state().current_results.clone();
    session.roll().unwrap();
    assert_eq!(session.state().previous_results, snapshot);

    // An accepted count change resets both rows to ones.
    session.set_dice_count("4");
    assert_eq!(session.state().current_results, vec![1, 1, 1, 1]);
    assert_eq!(session.state().previous_results, vec![1, 1, 1, 1]);
}

#[test]
fn starting_state_skips_history_and_notices() {
    let (session, board) = seeded_session(2);
    let session = session.with_state(DiceSessionState::starting_with(3, "4"));
    let state = session.state();
    assert_eq!(state.dice_count, 3);
    assert_eq!(state.shared_max, "4");
    assert_eq!(state.max_values, vec!["4"; 3]);
    assert_eq!(state.current_results, vec![1; 3]);
    assert!(state.previous_results.is_empty());
    assert!(state.same_value_mode);
    assert!(board.is_empty());
}

#[test]
fn starting_state_clamps_count() {
    assert_eq!(DiceSessionState::starting_with(0, "6").dice_count, 1);
    assert_eq!(DiceSessionState::starting_with(9, "6").dice_count, 5);
}

#[test]
fn rejected_count_notifies_exactly_once() {
    let (mut session, board) = seeded_session(1);
    session.set_dice_count("2");
    let before = session.state().clone();

    session.set_dice_count("9");
    assert_eq!(session.state(), &before);
    assert_eq!(board.drain(), vec!["Please enter a number between 1 and 5"]);
}

#[test]
fn rejected_roll_returns_none_and_notifies() {
    let (mut session, board) = seeded_session(1);
    session.set_shared_maximum("7");
    let before = session.state().clone();

    assert!(session.roll().is_none());
    assert_eq!(session.state(), &before);
    assert_eq!(board.drain(), vec!["Enter numbers between 1 and 6"]);

    session.set_shared_maximum("abc");
    assert!(session.roll().is_none());
    assert_eq!(board.len(), 1);
}

#[test]
fn closure_notifier_is_accepted() {
    let mut session = minidemos::demos::dice::DiceSession::new(|message: &str| {
        panic!("unexpected notice: {message}");
    });
    session.set_dice_count("5");
    assert_eq!(session.roll().map(|outcome| outcome.results.len()), Some(5));
}
