// Help overlay rendering
//
// Keyboard shortcuts and the current theme, centered over everything else.

use crate::tui::app::App;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the help overlay
pub fn render(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Getting around", header_style)),
        kb("Tab", "Next control"),
        kb("Shift+Tab", "Previous control"),
        kb("Enter", "Activate control"),
        kb("m", "Open/close the menu"),
        kb("↑/↓", "Scroll the page"),
        Line::raw(""),
        Line::from(Span::styled("  Enrollment dialog", header_style)),
        kb("Tab", "Next field (wraps around)"),
        kb("◂/▸", "Choose a program"),
        kb("Space", "Toggle consent"),
        kb("Esc", "Close the dialog"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Switch theme"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
        ]),
    ]);

    let width = 46;
    let height = content.lines.len() as u16 + 2;
    let area = super::centered_rect(width, height, f.area());

    // Clear the area behind the overlay
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border_focused))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
