// TUI application state
//
// Owns the current page, the ring of focusable page controls, the component
// states (nav menu, news board, carousel), the theme, and the dialog slot.
// Opening and closing the dialog live here so that every close trigger runs
// the same cleanup sequence: no partial-close state is reachable.

use super::components::{Carousel, NavMenu, NewsBoard};
use super::input::InputHandler;
use super::modal::EnrollModal;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::site::{NewsCategory, Page, SLIDES};
use crate::theme::{Theme, ThemeKind};

/// A focusable control on the page (outside the dialog)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The collapsible menu's toggle button
    NavToggle,
    /// A link inside the expanded menu
    NavLink(Page),
    /// Opens the enrollment dialog
    Enroll,
    /// A news filter button
    Filter(NewsCategory),
    /// Flips between the two themes
    ThemeToggle,
}

/// Main application state for the TUI
pub struct App {
    /// Page currently shown
    pub page: Page,

    /// Which page control has focus
    pub focused: Control,

    /// Control that opened the dialog; focus returns here on close
    opened_from: Option<Control>,

    /// Collapsible navigation menu
    pub nav: NavMenu,

    /// News filter state
    pub news: NewsBoard,

    /// Home page announcement rotation
    pub carousel: Carousel,

    /// The enrollment dialog, when open
    pub modal: Option<EnrollModal>,

    /// Page input (scrolling, focus moves) is locked out while the dialog
    /// is open; always equal to `modal.is_some()`
    scroll_locked: bool,

    /// Active theme kind (persisted through the config)
    pub theme_kind: ThemeKind,

    /// Resolved palette for rendering
    pub theme: Theme,

    /// Loaded configuration; `theme` is written back on toggle
    pub config: Config,

    /// Captured log entries for the status bar alert
    pub log_buffer: LogBuffer,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,

    /// Whether the help overlay is up
    pub show_help: bool,

    /// Vertical scroll offset of the page body
    pub page_scroll: u16,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = config.theme;
        Self {
            page: Page::default(),
            focused: Control::NavToggle,
            opened_from: None,
            nav: NavMenu::new(),
            news: NewsBoard::new(),
            carousel: Carousel::new(SLIDES.len()),
            modal: None,
            scroll_locked: false,
            theme_kind,
            theme: Theme::resolve(theme_kind),
            config,
            log_buffer,
            input_handler: InputHandler::default(),
            show_help: false,
            page_scroll: 0,
            should_quit: false,
        }
    }

    /// The ordered focusable controls for the current page state
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = vec![Control::NavToggle];

        if self.nav.is_expanded() {
            controls.extend(Page::ALL.map(Control::NavLink));
        }

        match self.page {
            Page::Home | Page::Programs => controls.push(Control::Enroll),
            Page::News => controls.extend(NewsCategory::ALL.map(Control::Filter)),
            Page::Contact => {}
        }

        controls.push(Control::ThemeToggle);
        controls
    }

    /// Move page focus forward or backward through the control ring
    pub fn move_focus(&mut self, forward: bool) {
        if self.scroll_locked {
            return;
        }
        let controls = self.controls();
        let position = controls.iter().position(|&c| c == self.focused);
        let next = match position {
            None => 0,
            Some(i) if forward => (i + 1) % controls.len(),
            Some(i) => (i + controls.len() - 1) % controls.len(),
        };
        self.focused = controls[next];
    }

    /// Activate the focused control
    pub fn activate_focused(&mut self) {
        match self.focused {
            Control::NavToggle => self.nav.toggle(),
            Control::NavLink(page) => {
                self.page = self.nav.select(page);
                self.page_scroll = 0;
                // The link just vanished with the collapsed menu
                self.focused = Control::NavToggle;
            }
            Control::Enroll => self.open_modal(),
            Control::Filter(category) => self.news.activate(category),
            Control::ThemeToggle => self.toggle_theme(),
        }

        // A state change may have removed the focused control
        if !self.controls().contains(&self.focused) {
            self.focused = Control::NavToggle;
        }
    }

    // ─── Dialog lifecycle ────────────────────────────────────

    /// Open the enrollment dialog: remember the opener, lock page input,
    /// focus the dialog's first focusable element
    pub fn open_modal(&mut self) {
        if self.modal.is_some() {
            return;
        }
        self.opened_from = Some(self.focused);
        self.modal = Some(EnrollModal::new());
        self.scroll_locked = true;
        debug_assert_eq!(self.scroll_locked, self.modal.is_some());
    }

    /// Close the enrollment dialog. Every trigger (Cancel, Close, Escape)
    /// funnels through here: hide, unlock page input, restore focus to the
    /// opener if it still exists, reset the form, clear every field error.
    pub fn close_modal(&mut self) {
        let Some(mut modal) = self.modal.take() else {
            return;
        };
        modal.form.reset();
        self.scroll_locked = false;

        if let Some(opener) = self.opened_from.take() {
            if self.controls().contains(&opener) {
                self.focused = opener;
            }
        }
        debug_assert_eq!(self.scroll_locked, self.modal.is_some());
    }

    /// Whether page-level input is currently locked out by the dialog
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    // ─── Theme ───────────────────────────────────────────────

    /// Apply a theme kind: swap the palette and record it on the config
    pub fn set_theme(&mut self, kind: ThemeKind) {
        self.theme_kind = kind;
        self.theme = Theme::resolve(kind);
        self.config.theme = kind;
    }

    /// Flip between the two themes and persist the choice
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme_kind.toggled());
        if let Err(e) = self.config.save() {
            tracing::warn!("Could not persist theme preference: {}", e);
        } else {
            tracing::debug!("Theme preference saved: {}", self.theme_kind.label());
        }
    }

    // ─── Page scrolling ──────────────────────────────────────

    pub fn scroll_up(&mut self) {
        if !self.scroll_locked {
            self.page_scroll = self.page_scroll.saturating_sub(1);
        }
    }

    pub fn scroll_down(&mut self) {
        if !self.scroll_locked {
            self.page_scroll = self.page_scroll.saturating_add(1);
        }
    }

    // ─── Input plumbing ──────────────────────────────────────

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default(), LogBuffer::new())
    }

    #[test]
    fn open_then_close_restores_focus_to_opener() {
        let mut app = app();
        app.focused = Control::Enroll;

        app.open_modal();
        assert!(app.modal.is_some());

        app.close_modal();
        assert!(app.modal.is_none());
        assert_eq!(app.focused, Control::Enroll);
    }

    #[test]
    fn scroll_lock_tracks_dialog_presence() {
        let mut app = app();
        assert!(!app.is_scroll_locked());

        app.open_modal();
        assert!(app.is_scroll_locked());

        app.close_modal();
        assert!(!app.is_scroll_locked());
    }

    #[test]
    fn close_clears_errors_for_the_next_open() {
        let mut app = app();
        app.focused = Control::Enroll;
        app.open_modal();

        // Leave the form invalid with recorded errors
        let modal = app.modal.as_mut().unwrap();
        modal.form.validate_all();
        assert!(modal.form.first_invalid().is_some());

        app.close_modal();
        app.open_modal();

        let modal = app.modal.as_ref().unwrap();
        assert!(modal.form.first_invalid().is_none());
        assert!(modal.form.fields.iter().all(|f| f.error.is_none()));
    }

    #[test]
    fn vanished_opener_leaves_focus_alone() {
        let mut app = app();
        app.nav.toggle();
        app.focused = Control::Enroll;
        app.open_modal();

        // Pretend a nav link opened the dialog, then collapse the menu so
        // that control no longer exists
        app.opened_from = Some(Control::NavLink(Page::News));
        app.nav.toggle();
        app.focused = Control::NavToggle;

        app.close_modal();
        assert_eq!(app.focused, Control::NavToggle);
    }

    #[test]
    fn nav_link_activation_switches_page_and_closes_menu() {
        let mut app = app();
        app.nav.toggle();
        app.focused = Control::NavLink(Page::News);

        app.activate_focused();
        assert_eq!(app.page, Page::News);
        assert!(!app.nav.is_expanded());
        assert_eq!(app.focused, Control::NavToggle);
    }

    #[test]
    fn focus_ring_matches_page_controls() {
        let mut app = app();
        app.page = Page::News;

        let controls = app.controls();
        assert!(controls.contains(&Control::Filter(NewsCategory::Upcoming)));
        assert!(!controls.contains(&Control::Enroll));

        // A full lap through the ring returns to the start
        let start = app.focused;
        for _ in 0..controls.len() {
            app.move_focus(true);
        }
        assert_eq!(app.focused, start);
    }

    #[test]
    fn page_input_is_locked_while_dialog_is_open() {
        let mut app = app();
        app.focused = Control::Enroll;
        app.open_modal();

        let before = app.focused;
        app.move_focus(true);
        assert_eq!(app.focused, before);

        app.scroll_down();
        assert_eq!(app.page_scroll, 0);
    }

    #[test]
    fn set_theme_updates_palette_and_config() {
        let mut app = app();
        app.set_theme(ThemeKind::Modern);

        assert_eq!(app.theme_kind, ThemeKind::Modern);
        assert_eq!(app.theme.name, "Modern");
        assert_eq!(app.config.theme, ThemeKind::Modern);
    }
}
