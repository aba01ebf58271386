use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_session::TerminalSession;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the terminal UI until the user quits.
pub fn run(config: &Config) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);
    tracing::info!(demo = ?app.active(), "terminal UI started");

    loop {
        session.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size.
            Ok(AppEvent::Resize(cols, rows)) => tracing::trace!(cols, rows, "resized"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("event source closed");
                break;
            }
        }
    }

    drop(session);
    tracing::info!("terminal UI stopped");
    Ok(())
}
