// Views module - screen-level rendering logic
//
// One frame = title bar, page content, status bar, then any overlay on top
// (the enrollment dialog, or the help screen above everything).

mod help;
mod modal;
mod page;

use super::app::App;
use crate::tui::components::{status_bar, title_bar};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Paint the theme background across the whole frame
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title bar
            Constraint::Min(5),    // page content
            Constraint::Length(2), // status bar
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    page::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    // Dialog overlay (on top of the page)
    if let Some(ref modal) = app.modal {
        modal::render(f, modal, app);
    }

    // Help overlay (on top of everything)
    if app.show_help {
        help::render(f, app);
    }
}

/// Calculate a centered rect for an overlay
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
