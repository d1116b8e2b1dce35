// Enrollment form controller
//
// Owns the field set of the enrollment inquiry dialog: per-field editing,
// blur/submit validation, and reset. Validation outcomes are recorded on the
// fields themselves; rendering reads them, the validators never do.

use crate::site::PROGRAMS;
use crate::validate::{self, FieldValue, ValidationKind};

/// Identity of each form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Dob,
    Phone,
    Email,
    Program,
    Message,
    Consent,
}

/// One form field: identity, declared check, current value, current error
#[derive(Debug, Clone)]
pub struct Field {
    pub id: FieldId,
    pub label: &'static str,
    /// Fields without a validation kind are exempt and always valid
    pub kind: Option<ValidationKind>,
    pub value: FieldValue,
    /// At most one message per field; a new result overwrites, never appends
    pub error: Option<&'static str>,
}

impl Field {
    fn new(id: FieldId, label: &'static str, kind: Option<ValidationKind>) -> Self {
        let value = match kind {
            Some(ValidationKind::Checkbox) => FieldValue::unchecked(),
            _ => FieldValue::text(),
        };
        Self {
            id,
            label,
            kind,
            value,
            error: None,
        }
    }

    /// Whether the field takes free keystrokes (as opposed to the program
    /// select, which cycles a fixed list, and the consent checkbox)
    pub fn is_free_text(&self) -> bool {
        matches!(self.value, FieldValue::Text(_)) && self.kind != Some(ValidationKind::Select)
    }

    /// Current text content, empty for the checkbox
    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) => text,
            FieldValue::Checked(_) => "",
        }
    }

    /// Checkbox state, false for text fields
    pub fn checked(&self) -> bool {
        matches!(self.value, FieldValue::Checked(true))
    }
}

/// What happened when the form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All checks passed; the form is replaced by the acknowledgment
    Accepted,
    /// At least one check failed; focus should move to the first bad field
    Rejected { first_invalid: Option<usize> },
}

/// The enrollment inquiry form
#[derive(Debug, Clone)]
pub struct EnrollForm {
    pub fields: Vec<Field>,
    /// True once a submission passed; the success view replaces the fields
    pub submitted: bool,
}

impl EnrollForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                Field::new(FieldId::Name, "Full name", Some(ValidationKind::Name)),
                Field::new(
                    FieldId::Dob,
                    "Date of birth (YYYY-MM-DD)",
                    Some(ValidationKind::Dob),
                ),
                Field::new(FieldId::Phone, "Phone", Some(ValidationKind::Phone)),
                Field::new(FieldId::Email, "Email", Some(ValidationKind::Email)),
                Field::new(FieldId::Program, "Program", Some(ValidationKind::Select)),
                Field::new(FieldId::Message, "Message (optional)", None),
                Field::new(
                    FieldId::Consent,
                    "I consent to being contacted",
                    Some(ValidationKind::Checkbox),
                ),
            ],
            submitted: false,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Validate one field: record its error on failure, clear it on success.
    /// Fields with no declared kind are exempt and considered valid.
    pub fn validate_field(&mut self, index: usize) -> bool {
        let Some(field) = self.fields.get_mut(index) else {
            return true;
        };

        match field.kind {
            None => {
                field.error = None;
                true
            }
            Some(kind) => match validate::check(kind, &field.value) {
                Ok(()) => {
                    field.error = None;
                    true
                }
                Err(message) => {
                    field.error = Some(message);
                    false
                }
            },
        }
    }

    /// Validate every field. Always evaluates all of them so every error is
    /// surfaced at once; true only if all pass.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for index in 0..self.fields.len() {
            let valid = self.validate_field(index);
            all_valid = all_valid && valid;
        }
        all_valid
    }

    /// Index of the first field currently marked erroneous
    pub fn first_invalid(&self) -> Option<usize> {
        self.fields.iter().position(|field| field.error.is_some())
    }

    /// Submit: full validation, then either accept or report the first
    /// erroneous field for focus
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.validate_all() {
            self.submitted = true;
            tracing::info!("enrollment inquiry accepted");
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected {
                first_invalid: self.first_invalid(),
            }
        }
    }

    /// Reset to empty values with no errors and no pending acknowledgment
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = match field.kind {
                Some(ValidationKind::Checkbox) => FieldValue::unchecked(),
                _ => FieldValue::text(),
            };
            field.error = None;
        }
        self.submitted = false;
    }

    // ─── Editing ─────────────────────────────────────────────

    /// Append a character to a free-text field
    pub fn push_char(&mut self, index: usize, c: char) {
        if let Some(field) = self.fields.get_mut(index) {
            if field.is_free_text() {
                if let FieldValue::Text(text) = &mut field.value {
                    text.push(c);
                }
            }
        }
    }

    /// Delete the last character of a free-text field
    pub fn backspace(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            if field.is_free_text() {
                if let FieldValue::Text(text) = &mut field.value {
                    text.pop();
                }
            }
        }
    }

    /// Flip the consent checkbox
    pub fn toggle_checked(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            if let FieldValue::Checked(checked) = &mut field.value {
                *checked = !*checked;
            }
        }
    }

    /// Cycle the program select forward or backward through the fixed list.
    /// An unselected field enters the list at its first (or last) entry.
    pub fn cycle_program(&mut self, index: usize, forward: bool) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        if field.kind != Some(ValidationKind::Select) {
            return;
        }
        let FieldValue::Text(current) = &field.value else {
            return;
        };

        let position = PROGRAMS.iter().position(|p| *p == current.as_str());
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => PROGRAMS.len() - 1,
            (Some(i), true) => (i + 1) % PROGRAMS.len(),
            (Some(i), false) => (i + PROGRAMS.len() - 1) % PROGRAMS.len(),
        };
        field.value = FieldValue::Text(PROGRAMS[next].to_string());
    }
}

impl Default for EnrollForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EnrollForm {
        let mut form = EnrollForm::new();
        set_text(&mut form, FieldId::Name, "Chanda Mwila");
        set_text(&mut form, FieldId::Dob, "2014-03-21");
        set_text(&mut form, FieldId::Phone, "0977123456");
        set_text(&mut form, FieldId::Email, "parent@example.org");
        set_text(&mut form, FieldId::Program, "Primary School");
        let consent = index_of(&form, FieldId::Consent);
        form.toggle_checked(consent);
        form
    }

    fn index_of(form: &EnrollForm, id: FieldId) -> usize {
        form.fields.iter().position(|f| f.id == id).unwrap()
    }

    fn set_text(form: &mut EnrollForm, id: FieldId, text: &str) {
        let index = index_of(form, id);
        form.fields[index].value = FieldValue::Text(text.to_string());
    }

    #[test]
    fn validate_all_equals_and_over_fields() {
        let mut form = filled_form();
        assert!(form.validate_all());

        // Breaking any single field breaks the whole form
        set_text(&mut form, FieldId::Email, "not-an-email");
        assert!(!form.validate_all());
    }

    #[test]
    fn validate_all_surfaces_every_error_at_once() {
        let mut form = EnrollForm::new();
        assert!(!form.validate_all());

        // No short-circuit: every validated field carries its message
        for field in &form.fields {
            if field.kind.is_some() {
                assert!(field.error.is_some(), "{:?} should have an error", field.id);
            }
        }
    }

    #[test]
    fn exempt_field_is_always_valid() {
        let mut form = EnrollForm::new();
        let message = index_of(&form, FieldId::Message);
        assert!(form.validate_field(message));
        assert!(form.fields[message].error.is_none());
    }

    #[test]
    fn new_validation_overwrites_previous_error() {
        let mut form = EnrollForm::new();
        let phone = index_of(&form, FieldId::Phone);

        assert!(!form.validate_field(phone));
        let first = form.fields[phone].error;
        assert!(first.is_some());

        set_text(&mut form, FieldId::Phone, "0977123456");
        assert!(form.validate_field(phone));
        assert!(form.fields[phone].error.is_none());
    }

    #[test]
    fn submit_accepts_valid_form() {
        let mut form = filled_form();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.submitted);
    }

    #[test]
    fn submit_rejects_and_points_at_first_invalid() {
        let mut form = filled_form();
        set_text(&mut form, FieldId::Name, "");
        set_text(&mut form, FieldId::Email, "bad");

        let outcome = form.submit();
        let name = index_of(&form, FieldId::Name);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                first_invalid: Some(name)
            }
        );
        assert!(!form.submitted);
    }

    #[test]
    fn reset_clears_values_errors_and_submission() {
        let mut form = filled_form();
        form.validate_all();
        set_text(&mut form, FieldId::Email, "bad");
        form.validate_all();
        form.submitted = true;

        form.reset();
        assert!(!form.submitted);
        for field in &form.fields {
            assert!(field.error.is_none());
            match &field.value {
                FieldValue::Text(text) => assert!(text.is_empty()),
                FieldValue::Checked(checked) => assert!(!checked),
            }
        }
    }

    #[test]
    fn program_cycles_through_fixed_list() {
        let mut form = EnrollForm::new();
        let program = index_of(&form, FieldId::Program);

        form.cycle_program(program, true);
        assert_eq!(form.fields[program].text(), PROGRAMS[0]);

        form.cycle_program(program, true);
        assert_eq!(form.fields[program].text(), PROGRAMS[1]);

        form.cycle_program(program, false);
        assert_eq!(form.fields[program].text(), PROGRAMS[0]);

        // Wrap backward from the first entry
        form.cycle_program(program, false);
        assert_eq!(form.fields[program].text(), PROGRAMS[PROGRAMS.len() - 1]);
    }

    #[test]
    fn editing_only_touches_free_text_fields() {
        let mut form = EnrollForm::new();
        let program = index_of(&form, FieldId::Program);
        let consent = index_of(&form, FieldId::Consent);

        form.push_char(program, 'x');
        assert_eq!(form.fields[program].text(), "");

        form.push_char(consent, 'x');
        assert!(!form.fields[consent].checked());
    }
}
