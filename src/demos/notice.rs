//! One-way notification capability handed to the demos.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Fixed advisory messages raised when an input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    DiceCount,
    FaceMaximum,
    ActivityInput,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::DiceCount => "Please enter a number between 1 and 5",
            Notice::FaceMaximum => "Enter numbers between 1 and 6",
            Notice::ActivityInput => "Enter an activity name and a duration (min, hh:mm or hh.mm)",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Receives user-facing messages. Fire-and-forget: nothing is returned and
/// the caller's control flow never depends on how the message is shown.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<F> Notifier for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) {
        self(message)
    }
}

/// Shared queue of pending notices.
///
/// Clones share the same queue, so one clone can be injected into a session
/// while the host keeps another to drain and display.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    queue: Arc<Mutex<VecDeque<String>>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&self) -> Vec<String> {
        self.queue.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl Notifier for NoticeBoard {
    fn notify(&mut self, message: &str) {
        tracing::debug!(message, "notice raised");
        self.queue.lock().push_back(message.to_string());
    }
}
