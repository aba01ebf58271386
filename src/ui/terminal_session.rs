use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Owns the terminal while the UI runs.
///
/// Raw mode and the alternate screen are undone exactly once: when the
/// session is dropped, or from the panic hook if a panic gets there first.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: Arc<AtomicBool>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let active = Arc::new(AtomicBool::new(true));

        let terminal = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
        let terminal = match terminal {
            Ok(terminal) => terminal,
            Err(err) => {
                leave(&active);
                return Err(err);
            }
        };

        install_panic_hook(Arc::clone(&active));
        tracing::debug!("entered alternate screen");
        Ok(Self { terminal, active })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render).map(drop)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        leave(&self.active);
    }
}

fn install_panic_hook(active: Arc<AtomicBool>) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        leave(&active);
        tracing::error!(%info, "panic in terminal UI");
        default_hook(info);
    }));
}

fn leave(active: &AtomicBool) {
    if active.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}
