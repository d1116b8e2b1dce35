// Enrollment dialog rendering
//
// The dialog is a centered overlay cleared out of the page behind it. Fields
// render as label, value, and (when present) the field's error message; after
// a successful submission the acknowledgment replaces the whole field list.

use crate::form::Field;
use crate::theme::Theme;
use crate::tui::app::App;
use crate::tui::modal::{EnrollModal, Focusable};
use crate::validate::ValidationKind;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

const DIALOG_WIDTH: u16 = 52;

/// Render the dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &EnrollModal, app: &App) {
    let theme = &app.theme;
    let focus = modal.focus();

    let lines = if modal.form.submitted {
        acknowledgment_lines(theme, focus)
    } else {
        form_lines(modal, theme, focus)
    };

    let height = (lines.len() as u16 + 2).min(f.area().height);
    let area = super::centered_rect(DIALOG_WIDTH, height, f.area());

    // Clear the area behind the dialog
    f.render_widget(Clear, area);

    let dialog = Paragraph::new(lines)
        .style(Style::default().bg(theme.background).fg(theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border_focused))
                .title(" Enrollment Inquiry ")
                .title_bottom(Line::from(" Tab:fields  Enter:activate  Esc:close ").centered()),
        );

    f.render_widget(dialog, area);
}

fn form_lines<'a>(modal: &'a EnrollModal, theme: &Theme, focus: Option<Focusable>) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for (index, field) in modal.form.fields.iter().enumerate() {
        let focused = focus == Some(Focusable::Field(index));

        if field.kind == Some(ValidationKind::Checkbox) {
            lines.push(checkbox_line(field, theme, focused));
        } else {
            lines.push(Line::from(Span::styled(
                format!(" {}", field.label),
                Style::default().fg(theme.muted),
            )));
            lines.push(value_line(field, theme, focused));
        }

        if let Some(error) = field.error {
            lines.push(Line::from(Span::styled(
                format!("   ! {}", error),
                Style::default().fg(theme.error),
            )));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::raw(" "),
        button("[ Submit ]", theme, focus == Some(Focusable::Submit)),
        Span::raw("  "),
        button("[ Cancel ]", theme, focus == Some(Focusable::Cancel)),
    ]));

    lines
}

fn acknowledgment_lines(theme: &Theme, focus: Option<Focusable>) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::from(Span::styled(
            " Thank you for your inquiry!",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " The school office will contact you shortly.",
            Style::default().fg(theme.foreground),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::raw(" "),
            button("[ Close ]", theme, focus == Some(Focusable::Close)),
        ]),
    ]
}

/// The editable value row: marker, clipped text, and a cursor while focused
fn value_line<'a>(field: &'a Field, theme: &Theme, focused: bool) -> Line<'a> {
    let is_select = field.kind == Some(ValidationKind::Select);
    let text = field.text();

    let shown = if is_select && text.is_empty() {
        "(choose with ◂ ▸)".to_string()
    } else {
        clip_tail(text, DIALOG_WIDTH as usize - 8)
    };

    let marker = if focused { " ▸ " } else { "   " };
    let value_style = if focused {
        Style::default().fg(theme.selection_fg).bg(theme.selection)
    } else if field.error.is_some() {
        Style::default().fg(theme.error)
    } else {
        Style::default().fg(theme.foreground)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(shown, value_style),
    ];
    if focused && !is_select {
        spans.push(Span::styled("_", Style::default().fg(theme.accent)));
    }
    Line::from(spans)
}

fn checkbox_line<'a>(field: &'a Field, theme: &Theme, focused: bool) -> Line<'a> {
    let mark = if field.checked() { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(theme.selection_fg).bg(theme.selection)
    } else {
        Style::default().fg(theme.foreground)
    };
    Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{} {}", mark, field.label), style),
    ])
}

fn button<'a>(label: &'a str, theme: &Theme, focused: bool) -> Span<'a> {
    let style = if focused {
        Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };
    Span::styled(label, style)
}

/// Keep the tail of `text` that fits in `max_width` display columns, so the
/// most recent keystrokes stay visible while typing long values
fn clip_tail(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut kept: Vec<char> = Vec::new();
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_tail_keeps_the_end_of_long_values() {
        assert_eq!(clip_tail("hello", 10), "hello");
        assert_eq!(clip_tail("hello world", 5), "world");
        assert_eq!(clip_tail("", 5), "");
    }

    #[test]
    fn clip_tail_counts_wide_characters() {
        // CJK characters occupy two columns each
        assert_eq!(clip_tail("ab宽", 2), "宽");
        assert_eq!(clip_tail("ab宽", 3), "b宽");
    }
}
