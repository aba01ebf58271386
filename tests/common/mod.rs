//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use minidemos::config::Config;
use minidemos::demos::dice::{DiceEffects, DiceSession};
use minidemos::demos::notice::{NoticeBoard, Notifier};
use minidemos::ui::app::App;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::path::PathBuf;
use tempfile::TempDir;

/// Effects that record notices and hand out pre-scripted die values.
/// Once the script runs out every die shows its maximum.
#[derive(Default)]
pub struct ScriptedEffects {
    pub notices: Vec<String>,
    pub rolls: VecDeque<u8>,
    pub requested_faces: Vec<u8>,
}

impl ScriptedEffects {
    pub fn with_rolls(rolls: &[u8]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Notifier for ScriptedEffects {
    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

impl DiceEffects for ScriptedEffects {
    fn roll_die(&mut self, faces: u8) -> u8 {
        self.requested_faces.push(faces);
        self.rolls.pop_front().unwrap_or(faces)
    }
}

/// Dice session with a seeded generator and a board to inspect notices.
pub fn seeded_session(seed: u64) -> (DiceSession<NoticeBoard, StdRng>, NoticeBoard) {
    let board = NoticeBoard::new();
    let session = DiceSession::with_rng(board.clone(), StdRng::seed_from_u64(seed));
    (session, board)
}

pub fn make_app() -> App {
    App::new(&Config::default())
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

/// Type every character of `text` into the focused field.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        minidemos::ui::input::handle_key(app, press_key(KeyCode::Char(ch)));
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
