// Title bar component
//
// School name on the left, current page on the right.

use crate::site::SCHOOL_NAME;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", SCHOOL_NAME),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(app.theme.muted)),
        Span::styled(app.page.title(), Style::default().fg(app.theme.foreground)),
    ]);

    let bar = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.theme.border)),
    );

    f.render_widget(bar, area);
}
