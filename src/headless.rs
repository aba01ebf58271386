//! Non-interactive entry points used by the `roll` and `duration`
//! subcommands.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::demos::dice::DiceSession;
use crate::demos::notice::NoticeBoard;
use crate::demos::tracker::{parse_duration, TrackerSummary};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeadlessError {
    #[error("{}", .notices.join("; "))]
    Rejected { notices: Vec<String> },

    #[error("got {given} maximum values for {dice} dice")]
    MaxCountMismatch { given: usize, dice: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollReport {
    pub dice_count: u8,
    pub max_values: Vec<String>,
    pub results: Vec<u8>,
}

impl fmt::Display for RollReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let results: Vec<String> = self.results.iter().map(u8::to_string).collect();
        write!(f, "{}", results.join(" "))
    }
}

/// Roll once with a thread-local random source.
pub fn roll(count: &str, maxima: &[String]) -> Result<RollReport, HeadlessError> {
    roll_with_rng(count, maxima, rand::rng())
}

/// Roll once. A single maximum is shared by every die; several switch the
/// session to per-die mode and must match the dice count.
pub fn roll_with_rng<R: Rng + 'static>(
    count: &str,
    maxima: &[String],
    rng: R,
) -> Result<RollReport, HeadlessError> {
    let board = NoticeBoard::new();
    let mut session = DiceSession::with_rng(board.clone(), rng);

    session.set_dice_count(count);
    match maxima {
        [] => {}
        [shared] => session.set_shared_maximum(shared),
        per_die => {
            let dice = session.state().dice_count;
            if per_die.len() != usize::from(dice) && board.is_empty() {
                return Err(HeadlessError::MaxCountMismatch {
                    given: per_die.len(),
                    dice,
                });
            }
            session.toggle_same_value_mode(false);
            for (index, value) in per_die.iter().enumerate() {
                session.set_per_die_maximum(index, value);
            }
        }
    }
    let outcome = session.roll();

    let notices = board.drain();
    match outcome {
        Some(outcome) if notices.is_empty() => Ok(RollReport {
            dice_count: session.state().dice_count,
            max_values: session.state().max_values.clone(),
            results: outcome.results,
        }),
        _ => Err(HeadlessError::Rejected { notices }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationEntry {
    pub input: String,
    pub minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationReport {
    pub entries: Vec<DurationEntry>,
    pub summary: TrackerSummary,
}

impl fmt::Display for DurationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match entry.minutes {
                Some(minutes) => writeln!(f, "{}\t{} min", entry.input, minutes)?,
                None => writeln!(f, "{}\tinvalid", entry.input)?,
            }
        }
        write!(f, "{}", self.summary)
    }
}

pub fn durations(inputs: &[String]) -> DurationReport {
    let entries: Vec<DurationEntry> = inputs
        .iter()
        .map(|input| DurationEntry {
            input: input.clone(),
            minutes: parse_duration(input.trim()),
        })
        .collect();
    let summary = TrackerSummary::of(entries.iter().filter_map(|entry| entry.minutes));
    DurationReport { entries, summary }
}
