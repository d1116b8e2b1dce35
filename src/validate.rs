// Field validation checks
//
// Pure mapping from a validation kind and a raw value to pass/fail plus a
// failure message. Checks never panic and never touch display state; showing
// or clearing error text is the form controller's job.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// Which check applies to a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Trimmed length >= 2
    Name,
    /// Non-empty and strictly before the current moment
    Dob,
    /// Zambian phone number shapes
    Phone,
    /// local@domain.tld shape
    Email,
    /// A program must be chosen
    Select,
    /// Consent must be given
    Checkbox,
}

/// The raw value a field holds
///
/// Text covers the typed fields and the select (where the value is the chosen
/// program name, empty until one is picked); Checked covers the consent box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Empty text value
    pub fn text() -> Self {
        FieldValue::Text(String::new())
    }

    /// Unchecked box
    pub fn unchecked() -> Self {
        FieldValue::Checked(false)
    }
}

/// Outcome of a single check: Ok, or the exact message to display
pub type Checked = Result<(), &'static str>;

/// Zambian formats: +260/260 followed by 8-9 digits, or a bare 9-10 digit number
fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?:\+?260\d{8,9}|\d{9,10})$").unwrap())
}

/// local@domain.tld: no whitespace, one @, at least one dot in the domain
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Run the check for `kind` against `value`
pub fn check(kind: ValidationKind, value: &FieldValue) -> Checked {
    check_at(kind, value, chrono::Local::now().naive_local())
}

/// Same as [`check`] with an explicit "current moment" for the DOB rule,
/// so date boundaries are deterministic under test
pub fn check_at(kind: ValidationKind, value: &FieldValue, now: NaiveDateTime) -> Checked {
    match (kind, value) {
        (ValidationKind::Name, FieldValue::Text(text)) => {
            if text.trim().chars().count() >= 2 {
                Ok(())
            } else {
                Err("Name must be at least 2 characters.")
            }
        }
        (ValidationKind::Dob, FieldValue::Text(text)) => check_dob(text, now),
        (ValidationKind::Phone, FieldValue::Text(text)) => {
            if phone_pattern().is_match(text.trim()) {
                Ok(())
            } else {
                Err("Please enter a valid Zambian phone number format.")
            }
        }
        (ValidationKind::Email, FieldValue::Text(text)) => {
            if email_pattern().is_match(text.trim()) {
                Ok(())
            } else {
                Err("Please enter a valid email address.")
            }
        }
        (ValidationKind::Select, FieldValue::Text(text)) => {
            if text.is_empty() {
                Err("Please select a program.")
            } else {
                Ok(())
            }
        }
        (ValidationKind::Checkbox, FieldValue::Checked(checked)) => {
            if *checked {
                Ok(())
            } else {
                Err("You must give consent.")
            }
        }
        // A kind paired with the wrong value shape cannot pass its rule.
        // Fields couple kind and value by construction, so this arm is a
        // safety net rather than a reachable path.
        (ValidationKind::Checkbox, FieldValue::Text(_)) => Err("You must give consent."),
        (_, FieldValue::Checked(_)) => Err("Please enter a valid value."),
    }
}

/// Date of birth: required, parseable as YYYY-MM-DD, and strictly before now.
///
/// The date's midnight is compared against the current datetime, so today's
/// date still validates while tomorrow's does not.
fn check_dob(text: &str, now: NaiveDateTime) -> Checked {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Date of Birth is required.");
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) if date.and_hms_opt(0, 0, 0).is_some_and(|dt| dt < now) => Ok(()),
        _ => Err("DOB must be a past date."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Local};

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn name_requires_two_trimmed_characters() {
        assert_eq!(check(ValidationKind::Name, &text("Jo")), Ok(()));
        assert_eq!(check(ValidationKind::Name, &text("  Amina  ")), Ok(()));
        assert_eq!(
            check(ValidationKind::Name, &text("J")),
            Err("Name must be at least 2 characters.")
        );
        assert_eq!(
            check(ValidationKind::Name, &text("   J   ")),
            Err("Name must be at least 2 characters.")
        );
        assert_eq!(
            check(ValidationKind::Name, &text("")),
            Err("Name must be at least 2 characters.")
        );
    }

    #[test]
    fn dob_empty_is_required() {
        assert_eq!(
            check(ValidationKind::Dob, &text("")),
            Err("Date of Birth is required.")
        );
        assert_eq!(
            check(ValidationKind::Dob, &text("   ")),
            Err("Date of Birth is required.")
        );
    }

    #[test]
    fn dob_tomorrow_is_rejected() {
        let tomorrow = Local::now()
            .date_naive()
            .checked_add_days(Days::new(1))
            .unwrap();
        let value = text(&tomorrow.format("%Y-%m-%d").to_string());
        assert_eq!(
            check(ValidationKind::Dob, &value),
            Err("DOB must be a past date.")
        );
    }

    #[test]
    fn dob_past_date_is_valid() {
        assert_eq!(check(ValidationKind::Dob, &text("2014-03-21")), Ok(()));
    }

    #[test]
    fn dob_today_counts_as_past() {
        // Midnight of today is strictly before any later moment of the day
        let now = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(check_at(ValidationKind::Dob, &text("2026-08-06"), now), Ok(()));
        assert_eq!(
            check_at(ValidationKind::Dob, &text("2026-08-07"), now),
            Err("DOB must be a past date.")
        );
    }

    #[test]
    fn dob_garbage_is_rejected() {
        assert_eq!(
            check(ValidationKind::Dob, &text("not-a-date")),
            Err("DOB must be a past date.")
        );
        assert_eq!(
            check(ValidationKind::Dob, &text("2014-13-45")),
            Err("DOB must be a past date.")
        );
    }

    #[test]
    fn phone_accepts_zambian_shapes() {
        // Bare 9-10 digit numbers
        assert_eq!(check(ValidationKind::Phone, &text("0977123456")), Ok(()));
        assert_eq!(check(ValidationKind::Phone, &text("977123456")), Ok(()));
        // Country code with 8-9 digits after the prefix
        assert_eq!(check(ValidationKind::Phone, &text("+260977123456")), Ok(()));
        assert_eq!(check(ValidationKind::Phone, &text("260977123456")), Ok(()));
    }

    #[test]
    fn phone_rejects_wrong_lengths() {
        let msg = Err("Please enter a valid Zambian phone number format.");
        assert_eq!(check(ValidationKind::Phone, &text("12345")), msg);
        assert_eq!(check(ValidationKind::Phone, &text("")), msg);
        assert_eq!(check(ValidationKind::Phone, &text("09771234567890")), msg);
        assert_eq!(check(ValidationKind::Phone, &text("+2609")), msg);
        assert_eq!(check(ValidationKind::Phone, &text("phone")), msg);
    }

    #[test]
    fn email_shape() {
        assert_eq!(
            check(ValidationKind::Email, &text("parent@example.org")),
            Ok(())
        );
        let msg = Err("Please enter a valid email address.");
        assert_eq!(check(ValidationKind::Email, &text("parent@example")), msg);
        assert_eq!(check(ValidationKind::Email, &text("parent example.org")), msg);
        assert_eq!(check(ValidationKind::Email, &text("p@a@example.org")), msg);
        assert_eq!(check(ValidationKind::Email, &text("")), msg);
    }

    #[test]
    fn select_requires_a_choice() {
        assert_eq!(
            check(ValidationKind::Select, &text("")),
            Err("Please select a program.")
        );
        assert_eq!(check(ValidationKind::Select, &text("Primary School")), Ok(()));
    }

    #[test]
    fn checkbox_requires_consent() {
        assert_eq!(
            check(ValidationKind::Checkbox, &FieldValue::Checked(false)),
            Err("You must give consent.")
        );
        assert_eq!(
            check(ValidationKind::Checkbox, &FieldValue::Checked(true)),
            Ok(())
        );
    }
}
