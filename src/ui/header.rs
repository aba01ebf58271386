use crate::demos::DemoKind;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

/// Tab strip with one entry per demo, function key first.
pub struct Header {
    active: DemoKind,
}

impl Header {
    pub fn new(active: DemoKind) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Tabs<'static> {
        let titles: Vec<Line<'static>> = DemoKind::ALL
            .iter()
            .enumerate()
            .map(|(idx, kind)| Line::from(format!("F{} {}", idx + 1, kind.title())))
            .collect();

        Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(HEADER_TEXT))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .divider(ratatui::text::Span::styled(
                " │ ",
                Style::default().fg(HEADER_SEPARATOR),
            ))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
