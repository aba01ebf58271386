use crate::demos::wizard::WizardScreen;
use crate::demos::DemoKind;
use crate::ui::app::App;
use crate::ui::dice_face::faces_line;
use crate::ui::footer::render_footer;
use crate::ui::form::{FieldKind, FormField};
use crate::ui::header::Header;
use crate::ui::layout::{bottom_centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.active()).widget(), header);
    frame.render_widget(Clear, body);
    draw_demo(frame, app, body);
    render_footer(frame, app, footer);

    draw_toasts(frame, app, body);
}

fn draw_demo(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut lines = form_lines(app);
    lines.push(Line::from(""));
    lines.extend(match app.active() {
        DemoKind::Dice => dice_lines(app),
        DemoKind::Counter => vec![Line::from(format!("Press: {}", app.counter().clicks()))],
        DemoKind::Wizard => wizard_lines(app),
        DemoKind::Tracker => tracker_lines(app),
    });

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.active().title()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

/// One line per focusable control; the focused one is highlighted.
fn form_lines(app: &App) -> Vec<Line<'static>> {
    let focus = app.focus();
    app.fields()
        .into_iter()
        .enumerate()
        .map(|(idx, field)| field_line(field, idx == focus))
        .collect()
}

fn field_line(field: FormField, focused: bool) -> Line<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let label_style = Style::default().fg(MUTED_TEXT);
    let mut line = match field.kind {
        FieldKind::Text(value) => {
            let cursor = if focused { "▏" } else { "" };
            Line::from(vec![
                Span::styled(format!(" {}: ", field.label), label_style),
                Span::styled(format!("[{value}{cursor}]"), text_style),
            ])
        }
        FieldKind::Toggle(on) => {
            let mark = if on { "[x]" } else { "[ ]" };
            Line::from(vec![
                Span::styled(format!(" {mark} "), Style::default().fg(ACCENT)),
                Span::styled(field.label, text_style),
            ])
        }
        FieldKind::Button => Line::from(Span::styled(
            format!(" < {} >", field.label),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    };
    if focused {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}

fn dice_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.dice();
    vec![
        Line::from(Span::styled(" Results:", Style::default().fg(MUTED_TEXT))),
        Line::from(format!(" {}", faces_line(&state.current_results))),
        Line::from(""),
        Line::from(Span::styled(" Previous Roll:", Style::default().fg(MUTED_TEXT))),
        Line::from(format!(" {}", faces_line(&state.previous_results))),
    ]
}

fn wizard_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.wizard();
    let mut lines = vec![Line::from(Span::styled(
        format!(" Screen {} of 3", state.screen.number()),
        Style::default().fg(MUTED_TEXT),
    ))];
    match state.screen {
        WizardScreen::First => {}
        WizardScreen::Second => {
            lines.push(Line::from(format!(" Value from screen 1: {}", state.first)));
        }
        WizardScreen::Summary => {
            lines.push(Line::from(format!(" Value from screen 1: {}", state.first)));
            lines.push(Line::from(format!(" Value from screen 2: {}", state.second)));
        }
    }
    lines
}

fn tracker_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.tracker();
    let mut lines = vec![
        Line::from(Span::styled(
            " Summary",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(" {}", state.summary())),
        Line::from(""),
    ];
    let name_width = state
        .activities
        .iter()
        .map(|activity| activity.name.chars().count())
        .max()
        .unwrap_or(0);
    lines.extend(state.activities.iter().map(|activity| {
        Line::from(vec![
            Span::styled(
                format!(" {:<width$}  ", activity.name, width = name_width),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(
                format!("{} min", activity.minutes),
                Style::default().fg(STATUS_OK),
            ),
        ])
    }));
    lines
}

fn draw_toasts(frame: &mut Frame<'_>, app: &App, body: Rect) {
    if app.toasts().is_empty() {
        return;
    }
    let lines: Vec<Line> = app
        .toasts()
        .messages()
        .map(|message| Line::from(format!(" {message} ")))
        .collect();
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = bottom_centered_rect(
        body,
        width.saturating_add(2),
        (lines.len() as u16).saturating_add(2),
    );

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(HEADER_TEXT))
            .block(block),
        area,
    );
}
