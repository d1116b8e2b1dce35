// Input handling system with configurable key behaviors
//
// Action keys (Enter, Tab, Esc, shortcut letters) trigger once per press and
// are debounced for terminals that never send release events. Navigation keys
// repeat while held. Keys with no configured behavior pass straight through:
// they are printable characters headed for a form field, and debouncing them
// would swallow fast repeated keystrokes.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only on state change (press -> release)
    /// Use for: Enter, Tab, single-action keys
    StateChange,

    /// Trigger on press, then repeat after initial delay
    /// Use for: Arrow keys, PageUp/Down, navigation
    Repeatable {
        /// Delay before starting to repeat
        initial_delay: Duration,
        /// Time between repeats
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(50),
        }
    }

    /// Fast navigation (for PageUp/PageDown)
    pub fn fast_navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(300),
            repeat_interval: Duration::from_millis(30),
        }
    }
}

/// Tracks the state of a single key
#[derive(Debug)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

impl KeyState {
    fn new() -> Self {
        Self {
            is_pressed: false,
            press_started: None,
            last_triggered: None,
        }
    }

    /// Reset state when key is released
    fn release(&mut self) {
        self.is_pressed = false;
        self.press_started = None;
        self.last_triggered = None;
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    /// Map of key code to its current state
    key_states: HashMap<KeyCode, KeyState>,
    /// Map of key code to its behavior configuration
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure a key's behavior
    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();

        // Unconfigured keys are text input: never debounced, never repeated
        let Some(behavior) = self.key_behaviors.get(&key).copied() else {
            return true;
        };

        let state = self.key_states.entry(key).or_insert_with(KeyState::new);

        // If key was already pressed, check if we should repeat
        if state.is_pressed {
            match behavior {
                KeyBehavior::StateChange => {
                    // Debounce: only trigger if enough time passed since last trigger
                    // This handles terminals that don't send Release events
                    if let Some(last) = state.last_triggered {
                        if now.duration_since(last) >= Duration::from_millis(150) {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
                KeyBehavior::Repeatable {
                    initial_delay,
                    repeat_interval,
                } => {
                    if let (Some(press_start), Some(last_trigger)) =
                        (state.press_started, state.last_triggered)
                    {
                        let time_since_press = now.duration_since(press_start);
                        let time_since_last = now.duration_since(last_trigger);

                        // After initial delay, repeat at interval
                        if time_since_press >= initial_delay && time_since_last >= repeat_interval {
                            state.last_triggered = Some(now);
                            return true;
                        }
                    }
                    false
                }
            }
        } else {
            // New key press - always trigger
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            true
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Default configuration for the kiosk's keys
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        // Navigation keys - repeatable
        handler.configure_keys(
            &[KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right],
            KeyBehavior::navigation(),
        );

        // Page navigation - fast repeatable
        handler.configure_keys(
            &[KeyCode::PageUp, KeyCode::PageDown],
            KeyBehavior::fast_navigation(),
        );

        // Action keys - state change only (trigger once per press)
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                // Shortcuts
                KeyCode::Char('q'),
                KeyCode::Char('m'),
                KeyCode::Char('t'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_change_triggers_once_per_press() {
        let mut handler = InputHandler::new();
        handler.configure_key(KeyCode::Enter, KeyBehavior::StateChange);

        assert!(handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));
        assert!(!handler.handle_key_press(KeyCode::Enter));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press(KeyCode::Enter));
    }

    #[test]
    fn unconfigured_keys_always_trigger() {
        let mut handler = InputHandler::with_default_config();

        // Characters going into form fields must never be swallowed
        assert!(handler.handle_key_press(KeyCode::Char('a')));
        assert!(handler.handle_key_press(KeyCode::Char('a')));
        assert!(handler.handle_key_press(KeyCode::Char('a')));
    }

    #[test]
    fn repeatable_waits_out_initial_delay() {
        let mut handler = InputHandler::new();
        handler.configure_key(
            KeyCode::Down,
            KeyBehavior::Repeatable {
                initial_delay: Duration::from_millis(100),
                repeat_interval: Duration::from_millis(50),
            },
        );

        // First press triggers immediately
        assert!(handler.handle_key_press(KeyCode::Down));

        // Immediate second call doesn't trigger (within initial delay)
        assert!(!handler.handle_key_press(KeyCode::Down));

        std::thread::sleep(Duration::from_millis(110));
        assert!(handler.handle_key_press(KeyCode::Down));
    }
}
