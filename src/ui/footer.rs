//! Key hints for the focused control, with the version on the right.

use crate::ui::app::App;
use crate::ui::form::FieldKind;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, MUTED_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub keys: &'static str,
    pub action: &'static str,
}

const fn hint(keys: &'static str, action: &'static str) -> Hint {
    Hint { keys, action }
}

const NAVIGATION: [Hint; 4] = [
    hint("Tab/↑↓", "Focus"),
    hint("F1-F4 Ctrl+←/→", "Demo"),
    hint("Esc", "Dismiss"),
    hint("Ctrl+Q", "Quit"),
];

/// Hints for the focused control first, then the keys that always work.
pub fn hints(focused: Option<&FieldKind>) -> Vec<Hint> {
    let mut hints = match focused {
        Some(FieldKind::Text(_)) => vec![hint("Type", "Edit"), hint("Backspace", "Delete")],
        Some(FieldKind::Toggle(_)) => vec![hint("Space/Enter", "Toggle")],
        Some(FieldKind::Button) => vec![hint("Enter/Space", "Press")],
        None => Vec::new(),
    };
    hints.extend(NAVIGATION);
    hints
}

fn hint_line(hints: &[Hint]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (idx, hint) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR)));
        }
        spans.push(Span::styled(hint.keys, Style::default().fg(ACCENT)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    Line::from(spans)
}

pub fn render_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let focused = app.focused_field().map(|field| field.kind);
    frame.render_widget(Paragraph::new(hint_line(&hints(focused.as_ref()))), inner);
    frame.render_widget(
        Paragraph::new(format!("v{VERSION}"))
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Right),
        inner,
    );
}
