//! The four demo screens and the plumbing they share.

pub mod counter;
pub mod dice;
pub mod input;
pub mod notice;
pub mod tracker;
pub mod wizard;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one demo screen. Order is tab order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    #[default]
    Dice,
    Counter,
    Wizard,
    Tracker,
}

impl DemoKind {
    pub const ALL: [DemoKind; 4] = [
        DemoKind::Dice,
        DemoKind::Counter,
        DemoKind::Wizard,
        DemoKind::Tracker,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DemoKind::Dice => "Dice Simulator",
            DemoKind::Counter => "Click Counter",
            DemoKind::Wizard => "Three Screens",
            DemoKind::Tracker => "Activity Tracker",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|kind| *kind == self).unwrap_or(0)
    }

    /// Tab `offset` steps away, wrapping in both directions.
    pub fn cycled(self, offset: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let index = (self.index() as isize + offset).rem_euclid(len);
        Self::ALL[index as usize]
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
