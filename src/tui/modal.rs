// Enrollment dialog state machine
//
// Self-contained: the dialog handles its own input and returns actions for
// the app to execute. The app holds Option<EnrollModal>; opening and closing
// (with their cleanup obligations) live on the app so every close trigger
// funnels through one path.
//
// While the dialog is up it owns keyboard focus completely. Tab and Shift+Tab
// move through the focusable set with wraparound, so focus can never land
// outside the dialog. The set is recomputed on every move rather than cached:
// submission replaces the fields with an acknowledgment, which changes what
// is focusable.

use crate::form::{EnrollForm, SubmitOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A focusable element inside the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focusable {
    /// A form field, by index into the form's field list
    Field(usize),
    Submit,
    Cancel,
    /// The acknowledgment view's only control
    Close,
}

/// Actions returned by dialog input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no app-level state change needed
    None,
    /// Close the dialog (runs the app's full close sequence)
    Close,
}

/// The enrollment inquiry dialog
#[derive(Debug, Clone)]
pub struct EnrollModal {
    pub form: EnrollForm,
    focus: Option<Focusable>,
}

impl EnrollModal {
    /// Build the dialog and focus the first focusable element, if any
    pub fn new() -> Self {
        let mut modal = Self {
            form: EnrollForm::new(),
            focus: None,
        };
        modal.focus = modal.focusable_set().first().copied();
        modal
    }

    /// The ordered focusable elements for the dialog's current content.
    /// Recomputed on demand, never cached.
    pub fn focusable_set(&self) -> Vec<Focusable> {
        if self.form.submitted {
            vec![Focusable::Close]
        } else {
            let mut set: Vec<Focusable> = (0..self.form.len()).map(Focusable::Field).collect();
            set.push(Focusable::Submit);
            set.push(Focusable::Cancel);
            set
        }
    }

    /// Currently focused element
    pub fn focus(&self) -> Option<Focusable> {
        self.focus
    }

    /// Move focus one step with wraparound: forward from the last element
    /// lands on the first, backward from the first lands on the last.
    /// Leaving a field validates it (blur).
    fn move_focus(&mut self, forward: bool) {
        if let Some(Focusable::Field(index)) = self.focus {
            self.form.validate_field(index);
        }

        let set = self.focusable_set();
        if set.is_empty() {
            self.focus = None;
            return;
        }

        let position = self.focus.and_then(|f| set.iter().position(|&x| x == f));
        let next = match position {
            // Focus was lost (or never set): re-enter at the first element
            None => 0,
            Some(i) if forward => (i + 1) % set.len(),
            Some(i) => (i + set.len() - 1) % set.len(),
        };
        self.focus = Some(set[next]);
    }

    /// Submit the form and move focus accordingly: to the acknowledgment's
    /// Close control on success, to the first erroneous field on failure
    fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Accepted => {
                self.focus = self.focusable_set().first().copied();
            }
            SubmitOutcome::Rejected { first_invalid } => {
                if let Some(index) = first_invalid {
                    self.focus = Some(Focusable::Field(index));
                }
            }
        }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyEvent) -> ModalAction {
        match key.code {
            KeyCode::Esc => return ModalAction::Close,
            KeyCode::Tab => self.move_focus(!key.modifiers.contains(KeyModifiers::SHIFT)),
            KeyCode::BackTab => self.move_focus(false),
            KeyCode::Down => self.move_focus(true),
            KeyCode::Up => self.move_focus(false),
            KeyCode::Enter => match self.focus {
                Some(Focusable::Submit) => self.submit(),
                Some(Focusable::Cancel) | Some(Focusable::Close) => return ModalAction::Close,
                // Enter on a field advances, like Tab
                Some(Focusable::Field(_)) | None => self.move_focus(true),
            },
            KeyCode::Backspace => {
                if let Some(Focusable::Field(index)) = self.focus {
                    self.form.backspace(index);
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if let Some(Focusable::Field(index)) = self.focus {
                    self.form
                        .cycle_program(index, key.code == KeyCode::Right);
                }
            }
            KeyCode::Char(' ') => {
                if let Some(Focusable::Field(index)) = self.focus {
                    if self.form.fields[index].is_free_text() {
                        self.form.push_char(index, ' ');
                    } else {
                        self.form.toggle_checked(index);
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(Focusable::Field(index)) = self.focus {
                    self.form.push_char(index, c);
                }
            }
            _ => {}
        }

        ModalAction::None
    }
}

impl Default for EnrollModal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift_tab() -> KeyEvent {
        KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
    }

    #[test]
    fn opens_focused_on_first_element() {
        let modal = EnrollModal::new();
        assert_eq!(modal.focus(), Some(Focusable::Field(0)));
    }

    #[test]
    fn tab_cycles_without_leaving_the_dialog() {
        let mut modal = EnrollModal::new();
        let set = modal.focusable_set();

        // Walk several full laps; focus must always be a member of the set
        for _ in 0..set.len() * 3 {
            modal.handle_input(press(KeyCode::Tab));
            let focus = modal.focus().unwrap();
            assert!(modal.focusable_set().contains(&focus));
        }

        // One full lap returns to the start
        assert_eq!(modal.focus(), Some(Focusable::Field(0)));
    }

    #[test]
    fn tab_on_last_wraps_to_first_and_back() {
        let mut modal = EnrollModal::new();

        // Shift+Tab from the first element lands on the last
        modal.handle_input(shift_tab());
        assert_eq!(modal.focus(), Some(Focusable::Cancel));

        // Tab from the last element lands back on the first
        modal.handle_input(press(KeyCode::Tab));
        assert_eq!(modal.focus(), Some(Focusable::Field(0)));
    }

    #[test]
    fn leaving_a_field_validates_it() {
        let mut modal = EnrollModal::new();
        assert!(modal.form.fields[0].error.is_none());

        // Tab off the empty name field: blur validation records the error
        modal.handle_input(press(KeyCode::Tab));
        assert_eq!(
            modal.form.fields[0].error,
            Some("Name must be at least 2 characters.")
        );
    }

    #[test]
    fn lost_focus_recovers_to_first_element() {
        let mut modal = EnrollModal::new();
        modal.focus = None;

        modal.handle_input(press(KeyCode::Tab));
        assert_eq!(modal.focus(), Some(Focusable::Field(0)));
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut modal = EnrollModal::new();
        for c in "Jo".chars() {
            modal.handle_input(press(KeyCode::Char(c)));
        }
        assert_eq!(modal.form.fields[0].text(), "Jo");

        modal.handle_input(press(KeyCode::Backspace));
        assert_eq!(modal.form.fields[0].text(), "J");
    }

    #[test]
    fn failed_submit_focuses_first_invalid_field() {
        let mut modal = EnrollModal::new();

        // Jump to the Submit button and press it on an empty form
        while modal.focus() != Some(Focusable::Submit) {
            modal.handle_input(press(KeyCode::Tab));
        }
        let action = modal.handle_input(press(KeyCode::Enter));

        assert_eq!(action, ModalAction::None);
        assert!(!modal.form.submitted);
        assert_eq!(modal.focus(), Some(Focusable::Field(0)));
    }

    #[test]
    fn accepted_submit_swaps_the_focusable_set() {
        let mut modal = EnrollModal::new();
        fill_valid(&mut modal.form);

        while modal.focus() != Some(Focusable::Submit) {
            modal.handle_input(press(KeyCode::Tab));
        }
        modal.handle_input(press(KeyCode::Enter));

        assert!(modal.form.submitted);
        assert_eq!(modal.focusable_set(), vec![Focusable::Close]);
        assert_eq!(modal.focus(), Some(Focusable::Close));

        // Enter on Close requests the close sequence
        assert_eq!(modal.handle_input(press(KeyCode::Enter)), ModalAction::Close);
    }

    #[test]
    fn escape_requests_close() {
        let mut modal = EnrollModal::new();
        assert_eq!(modal.handle_input(press(KeyCode::Esc)), ModalAction::Close);
    }

    fn fill_valid(form: &mut EnrollForm) {
        use crate::form::FieldId;
        use crate::validate::FieldValue;

        let mut set = |id: FieldId, text: &str| {
            let index = form.fields.iter().position(|f| f.id == id).unwrap();
            form.fields[index].value = FieldValue::Text(text.to_string());
        };
        set(FieldId::Name, "Chanda Mwila");
        set(FieldId::Dob, "2014-03-21");
        set(FieldId::Phone, "0977123456");
        set(FieldId::Email, "parent@example.org");
        set(FieldId::Program, "Primary School");

        let consent = form
            .fields
            .iter()
            .position(|f| f.id == FieldId::Consent)
            .unwrap();
        form.toggle_checked(consent);
    }
}
