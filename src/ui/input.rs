use crate::demos::DemoKind;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Right => app.cycle_demo(1),
            KeyCode::Left => app.cycle_demo(-1),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::F(n @ 1..=4) => app.select_demo(DemoKind::ALL[usize::from(n - 1)]),
        KeyCode::Tab | KeyCode::Down => app.move_focus(1),
        KeyCode::BackTab | KeyCode::Up => app.move_focus(-1),
        KeyCode::Esc => app.dismiss_toasts(),
        KeyCode::Enter => app.activate(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(' ') if !app.is_editing_text() => app.activate(),
        KeyCode::Char(ch) => app.insert_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
