// Page content rendering
//
// Builds the body of the current page as styled lines: the navigation menu
// first, then the page-specific content (carousel, program list, news board,
// contact details). Focus is shown by swapping a control's style for the
// theme's selection colors.

use crate::site::{NewsCategory, Page, NEWS_CARDS, PROGRAMS, SLIDES};
use crate::theme::Theme;
use crate::tui::app::{App, Control};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the current page into the content area
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    render_nav(&mut lines, app);
    lines.push(Line::raw(""));

    match app.page {
        Page::Home => render_home(&mut lines, app),
        Page::Programs => render_programs(&mut lines, app),
        Page::News => render_news(&mut lines, app),
        Page::Contact => render_contact(&mut lines, app),
    }

    let body = Paragraph::new(lines)
        .style(Style::default().fg(app.theme.foreground))
        .wrap(Wrap { trim: false })
        .scroll((app.page_scroll, 0))
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(body, area);
}

/// Style for a focusable control: selection colors while focused
fn control_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    }
}

/// The collapsible menu: a single toggle line, plus the link list when open
fn render_nav(lines: &mut Vec<Line>, app: &App) {
    let toggle_label = if app.nav.is_expanded() {
        " ☰ Menu (open) "
    } else {
        " ☰ Menu "
    };
    lines.push(Line::from(Span::styled(
        toggle_label,
        control_style(&app.theme, app.focused == Control::NavToggle),
    )));

    if app.nav.list_hidden() {
        return;
    }

    for page in Page::ALL {
        let focused = app.focused == Control::NavLink(page);
        let marker = if app.page == page { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(marker, Style::default().fg(app.theme.muted)),
            Span::styled(page.title(), control_style(&app.theme, focused)),
        ]));
    }
}

fn render_home(lines: &mut Vec<Line>, app: &App) {
    // Announcement carousel: active slide plus its indicator row
    if let Some(slide) = SLIDES.get(app.carousel.index()) {
        lines.push(Line::from(Span::styled(
            format!("  {}", slide.heading),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", slide.body),
            Style::default().fg(app.theme.foreground),
        )));

        let indicators: Vec<Span> = (0..SLIDES.len())
            .map(|i| {
                if app.carousel.indicator_active(i) {
                    Span::styled("● ", Style::default().fg(app.theme.accent))
                } else {
                    Span::styled("○ ", Style::default().fg(app.theme.muted))
                }
            })
            .collect();
        let mut row = vec![Span::raw("  ")];
        row.extend(indicators);
        lines.push(Line::from(row));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  A caring school community offering early childhood through senior",
        Style::default().fg(app.theme.foreground),
    )));
    lines.push(Line::from(Span::styled(
        "  secondary education. Visit us on the News & Events page for what's on.",
        Style::default().fg(app.theme.foreground),
    )));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "[ Enroll Now ]",
            control_style(&app.theme, app.focused == Control::Enroll),
        ),
    ]));
}

fn render_programs(lines: &mut Vec<Line>, app: &App) {
    lines.push(Line::from(Span::styled(
        "  Our Programs",
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::raw(""));

    for program in PROGRAMS {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(app.theme.accent)),
            Span::styled(program, Style::default().fg(app.theme.foreground)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            "[ Enroll Now ]",
            control_style(&app.theme, app.focused == Control::Enroll),
        ),
    ]));
}

fn render_news(lines: &mut Vec<Line>, app: &App) {
    // Filter row: the active category is marked, the focused one highlighted
    let mut filters: Vec<Span> = vec![Span::raw("  ")];
    for category in NewsCategory::ALL {
        let focused = app.focused == Control::Filter(category);
        let label = if app.news.is_selected(category) {
            format!("[{}]", category.label())
        } else {
            format!(" {} ", category.label())
        };
        filters.push(Span::styled(label, control_style(&app.theme, focused)));
        filters.push(Span::raw(" "));
    }
    lines.push(Line::from(filters));
    lines.push(Line::raw(""));

    for card in app.news.visible_cards() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", card.title),
                Style::default()
                    .fg(app.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", card.date),
                Style::default().fg(app.theme.muted),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", card.summary),
            Style::default().fg(app.theme.foreground),
        )));
        lines.push(Line::raw(""));
    }

    let hidden = app.news.hidden_count();
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("  {} more in other categories", hidden),
            Style::default().fg(app.theme.muted),
        )));
    }

    // The full card set minus the visible partition is exactly what's hidden
    debug_assert_eq!(app.news.visible_cards().len() + hidden, NEWS_CARDS.len());
}

fn render_contact(lines: &mut Vec<Line>, app: &App) {
    lines.push(Line::from(Span::styled(
        "  Get in touch",
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::raw(""));

    for detail in [
        "  Plot 14, Kabulonga Road, Lusaka",
        "  Phone: +260 977 000 111",
        "  Email: office@stmovens.edu.zm",
        "  Office hours: Mon-Fri, 07:30-16:00",
    ] {
        lines.push(Line::from(Span::styled(
            detail,
            Style::default().fg(app.theme.foreground),
        )));
    }
}
