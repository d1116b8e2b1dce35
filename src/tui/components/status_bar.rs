// Status bar component
//
// Key hints for the current input context on the left, the theme-name label
// on the right. The most recent warning or error from the log buffer takes
// over the hint slot when present.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let hint = if app.show_help {
        " Esc:close help"
    } else if app.modal.is_some() {
        " Tab:next field  Shift+Tab:previous  Enter:activate  Esc:close"
    } else {
        " Tab:move  Enter:activate  m:menu  t:theme  ?:help  q:quit"
    };

    let theme_label = format!("Theme: {} ", app.theme_kind.label());

    // An alert replaces the hints until a newer log entry supersedes it
    let (left_text, left_style) = match app.log_buffer.latest_alert() {
        Some(entry) if !app.show_help && app.modal.is_none() => {
            let color = match entry.level {
                LogLevel::Error => app.theme.error,
                _ => app.theme.accent,
            };
            (
                format!(
                    " {} {}: {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.level.as_str(),
                    entry.message
                ),
                Style::default().fg(color),
            )
        }
        _ => (hint.to_string(), Style::default().fg(app.theme.status_bar)),
    };

    let padding = (area.width as usize)
        .saturating_sub(left_text.chars().count())
        .saturating_sub(theme_label.chars().count());

    let line = Line::from(vec![
        Span::styled(left_text, left_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(theme_label, Style::default().fg(app.theme.accent)),
    ]);

    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(app.theme.border)),
    );

    f.render_widget(status, area);
}
