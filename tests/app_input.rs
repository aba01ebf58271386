//! Keyboard handling and focus model of the terminal host.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use minidemos::config::Config;
use minidemos::demos::wizard::WizardScreen;
use minidemos::demos::DemoKind;
use minidemos::ui::app::App;
use minidemos::ui::form::FieldId;
use minidemos::ui::input::handle_key;

fn focus_on(app: &mut App, id: FieldId) {
    for _ in 0..app.fields().len() {
        if app.focused_field().map(|field| field.id) == Some(id) {
            return;
        }
        handle_key(app, press_key(KeyCode::Tab));
    }
    panic!("field {id:?} not reachable");
}

// -- Navigation ---------------------------------------------------------------

#[test]
fn starts_on_configured_demo() {
    let mut config = Config::default();
    config.ui.start_demo = DemoKind::Counter;
    let app = App::new(&config);
    assert_eq!(app.active(), DemoKind::Counter);
}

#[test]
fn function_keys_select_demos() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::F(4)));
    assert_eq!(app.active(), DemoKind::Tracker);
    handle_key(&mut app, press_key(KeyCode::F(2)));
    assert_eq!(app.active(), DemoKind::Counter);
}

#[test]
fn ctrl_arrows_cycle_demos() {
    let mut app = make_app();
    handle_key(&mut app, ctrl_key(KeyCode::Left));
    assert_eq!(app.active(), DemoKind::Tracker);
    handle_key(&mut app, ctrl_key(KeyCode::Right));
    assert_eq!(app.active(), DemoKind::Dice);
}

#[test]
fn tab_wraps_focus() {
    let mut app = make_app();
    let len = app.fields().len();
    assert_eq!(len, 4);
    for _ in 0..len {
        handle_key(&mut app, press_key(KeyCode::Tab));
    }
    assert_eq!(app.focus(), 0);
    handle_key(&mut app, press_key(KeyCode::BackTab));
    assert_eq!(app.focus(), len - 1);
}

#[test]
fn ctrl_q_quits() {
    let mut app = make_app();
    handle_key(&mut app, ctrl_key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let mut app = make_app();
    let mut key = press_key(KeyCode::Tab);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(app.focus(), 0);
}

// -- Dice ---------------------------------------------------------------------

#[test]
fn typing_a_count_resizes_dice() {
    let mut app = make_app();
    focus_on(&mut app, FieldId::DiceCount);
    handle_key(&mut app, press_key(KeyCode::Backspace));
    // Empty field is rejected but the text is kept.
    assert_eq!(app.dice_count_text(), "");
    assert_eq!(app.dice().dice_count, 1);
    assert_eq!(
        app.toasts().messages().collect::<Vec<_>>(),
        vec!["Please enter a number between 1 and 5"]
    );

    type_text(&mut app, "3");
    assert_eq!(app.dice_count_text(), "3");
    assert_eq!(app.dice().dice_count, 3);
    assert_eq!(app.dice().current_results, vec![1, 1, 1]);
}

#[test]
fn per_die_fields_appear_when_toggle_is_off() {
    let mut app = make_app();
    focus_on(&mut app, FieldId::DiceCount);
    handle_key(&mut app, press_key(KeyCode::Backspace));
    type_text(&mut app, "2");
    focus_on(&mut app, FieldId::SameValues);
    handle_key(&mut app, press_key(KeyCode::Char(' ')));
    assert!(!app.dice().same_value_mode);

    let ids: Vec<FieldId> = app.fields().into_iter().map(|field| field.id).collect();
    assert_eq!(
        ids,
        vec![
            FieldId::DiceCount,
            FieldId::SameValues,
            FieldId::DieMax(0),
            FieldId::DieMax(1),
            FieldId::Roll,
        ]
    );

    focus_on(&mut app, FieldId::DieMax(1));
    handle_key(&mut app, press_key(KeyCode::Backspace));
    type_text(&mut app, "3");
    assert_eq!(app.dice().max_values, vec!["6", "3"]);
}

#[test]
fn roll_button_rolls_within_range() {
    let mut app = make_app();
    focus_on(&mut app, FieldId::Roll);
    for _ in 0..20 {
        handle_key(&mut app, press_key(KeyCode::Enter));
        let value = app.dice().current_results[0];
        assert!((1..=6).contains(&value));
    }
    assert!(app.toasts().is_empty());
}

#[test]
fn bad_maximum_shows_toast_until_it_expires() {
    let mut config = Config::default();
    config.ui.toast_ticks = 2;
    let mut app = App::new(&config);
    focus_on(&mut app, FieldId::SharedMax);
    type_text(&mut app, "0");
    assert_eq!(app.dice().max_values, vec!["60"]);

    focus_on(&mut app, FieldId::Roll);
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(app.dice().current_results, vec![1]);
    assert_eq!(
        app.toasts().messages().collect::<Vec<_>>(),
        vec!["Enter numbers between 1 and 6"]
    );

    app.on_tick();
    app.on_tick();
    assert!(app.toasts().is_empty());
}

#[test]
fn esc_dismisses_toasts() {
    let mut app = make_app();
    focus_on(&mut app, FieldId::DiceCount);
    type_text(&mut app, "9");
    assert!(!app.toasts().is_empty());
    handle_key(&mut app, press_key(KeyCode::Esc));
    assert!(app.toasts().is_empty());
}

#[test]
fn config_sets_initial_dice() {
    let mut config = Config::default();
    config.dice.initial_count = 4;
    config.dice.initial_max = "3".to_string();
    let app = App::new(&config);
    assert_eq!(app.dice_count_text(), "4");
    assert_eq!(app.dice().max_values, vec!["3"; 4]);
    assert_eq!(app.dice().current_results, vec![1; 4]);
    assert!(app.dice().previous_results.is_empty());
    assert!(app.toasts().is_empty());
}

#[test]
fn fresh_app_has_no_previous_roll() {
    let app = make_app();
    assert_eq!(app.dice().current_results, vec![1]);
    assert!(app.dice().previous_results.is_empty());
}

#[test]
fn first_roll_records_starting_faces_as_previous() {
    let mut app = make_app();
    focus_on(&mut app, FieldId::Roll);
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(app.dice().previous_results, vec![1]);
}

// -- Counter, wizard, tracker -------------------------------------------------

#[test]
fn counter_button_counts_presses() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::F(2)));
    for _ in 0..3 {
        handle_key(&mut app, press_key(KeyCode::Char(' ')));
    }
    assert_eq!(app.counter().clicks(), 3);
}

#[test]
fn wizard_walks_three_screens() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::F(3)));
    type_text(&mut app, "one");
    focus_on(&mut app, FieldId::WizardNext);
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(app.wizard().screen, WizardScreen::Second);
    assert_eq!(app.focus(), 0);

    type_text(&mut app, "two words");
    focus_on(&mut app, FieldId::WizardNext);
    handle_key(&mut app, press_key(KeyCode::Enter));

    let wizard = app.wizard();
    assert_eq!(wizard.screen, WizardScreen::Summary);
    assert_eq!(wizard.first, "one");
    assert_eq!(wizard.second, "two words");
    assert!(app.fields().is_empty());
    assert_eq!(app.focus(), 0);
}

#[test]
fn tracker_adds_and_clears() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::F(4)));
    type_text(&mut app, "Walk");
    handle_key(&mut app, press_key(KeyCode::Tab));
    type_text(&mut app, "1:30");
    focus_on(&mut app, FieldId::AddActivity);
    handle_key(&mut app, press_key(KeyCode::Enter));

    assert_eq!(app.tracker().activities.len(), 1);
    assert_eq!(app.tracker().summary().total_minutes, 90);
    assert!(app.tracker().name_input.is_empty());

    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(
        app.toasts().messages().collect::<Vec<_>>(),
        vec!["Enter an activity name and a duration (min, hh:mm or hh.mm)"]
    );

    focus_on(&mut app, FieldId::ClearActivities);
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert!(app.tracker().activities.is_empty());
}

#[test]
fn ctrl_chars_do_not_type() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::F(4)));
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL),
    );
    assert!(app.tracker().name_input.is_empty());
}
