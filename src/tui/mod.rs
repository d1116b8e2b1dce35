// TUI module - Terminal User Interface
//
// Terminal initialization and cleanup, the event loop (keyboard input and the
// carousel timer), and layered key dispatch:
// help overlay -> dialog -> global keys -> page keys.

pub mod app;
pub mod components;
pub mod input;
pub mod modal;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Control};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal when
/// done regardless of how the loop ended.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Multiplexes three sources with tokio::select!:
/// 1. Keyboard input (navigation and commands)
/// 2. A redraw tick (keeps hints and alerts fresh)
/// 3. The carousel timer (slide advancement)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut redraw_interval = tokio::time::interval(Duration::from_millis(200));

    // The carousel advances every N seconds; interval_at skips the immediate
    // first tick so slide 0 gets its full time on screen
    let carousel_period = Duration::from_secs(app.config.carousel_secs);
    let mut carousel_interval =
        tokio::time::interval_at(tokio::time::Instant::now() + carousel_period, carousel_period);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = redraw_interval.tick() => {}

            // Carousel advancement
            _ = carousel_interval.tick() => {
                app.carousel.advance();
            }
        }

        if app.should_quit {
            // Deterministic teardown: halt the rotation before leaving the loop
            app.carousel.stop();
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Help overlay -> Dialog -> Global -> Page
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: the help overlay absorbs everything while up
    if app.show_help {
        match key_event.kind {
            KeyEventKind::Press => {
                if matches!(
                    key_event.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                ) && app.handle_key_press(key_event.code)
                {
                    app.show_help = false;
                }
            }
            KeyEventKind::Release => app.handle_key_release(key_event.code),
            _ => {}
        }
        return;
    }

    // Layer 2: the dialog captures all input when open
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 3: global keys (work on every page)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: page keys
    match key_event.kind {
        KeyEventKind::Press => {
            let key = key_event.code;
            match key {
                KeyCode::Tab => {
                    if app.handle_key_press(key) {
                        app.move_focus(!key_event.modifiers.contains(KeyModifiers::SHIFT));
                    }
                }
                KeyCode::BackTab => {
                    if app.handle_key_press(key) {
                        app.move_focus(false);
                    }
                }
                KeyCode::Enter => {
                    if app.handle_key_press(key) {
                        app.activate_focused();
                    }
                }
                KeyCode::Up => {
                    if app.handle_key_press(key) {
                        app.scroll_up();
                    }
                }
                KeyCode::Down => {
                    if app.handle_key_press(key) {
                        app.scroll_down();
                    }
                }
                _ => {}
            }
        }
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle dialog input - returns true if the dialog absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.modal.is_none() {
        return false;
    }

    // Always process Release events to keep the input handler in sync,
    // otherwise keys stay stuck "pressed" after the dialog closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    let action = match app.modal.as_mut() {
        Some(modal) => modal.handle_input(*key_event),
        None => ModalAction::None,
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
    }

    true
}

/// Handle global keys - returns true if handled
/// Global keys work the same on every page; the dialog layer runs first, so
/// these letters still type normally into form fields.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Help overlay
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.show_help = true;
            }
            true
        }
        // Theme switch
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.toggle_theme();
            }
            true
        }
        // Menu toggle shortcut
        KeyCode::Char('m') => {
            if app.handle_key_press(key) {
                app.nav.toggle();
                // Collapsing the menu may have removed the focused link
                if !app.controls().contains(&app.focused) {
                    app.focused = Control::NavToggle;
                }
            }
            true
        }
        _ => false,
    }
}
