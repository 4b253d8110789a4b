//! Field validators used by the filter and registration forms.
//!
//! All functions are pure; pages call them on input/change and again before
//! submitting, marking the control invalid when they fail.

use chrono::{Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PERSON_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ ]+$").expect("valid name regex"));

/// Dates further ahead than this are rejected by the assignment filter
pub const MAX_YEARS_AHEAD: u32 = 2;

pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";

pub const REQUIRED_MESSAGE: &str = "Este campo es obligatorio.";

/// Rejected fields of a form, keyed by field name
pub type FieldErrors = BTreeMap<&'static str, String>;

pub fn validate_required(text: &str) -> bool {
    !text.trim().is_empty()
}

pub fn validate_email(text: &str) -> bool {
    EMAIL_RE.is_match(text.trim())
}

fn all_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_phone(text: &str) -> bool {
    all_digits(text.trim())
}

/// Digits plus `+ - ( )` and spaces, with at least 8 digits
pub fn validate_emergency_phone(text: &str) -> bool {
    let text = text.trim();
    let allowed = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '));
    allowed && text.chars().filter(|c| c.is_ascii_digit()).count() >= 8
}

pub fn validate_document_number(text: &str) -> bool {
    all_digits(text.trim())
}

pub fn validate_person_name(text: &str) -> bool {
    PERSON_NAME_RE.is_match(text.trim())
}

/// Message to show under the confirmation field, if any.
/// Nothing is checked while both fields are empty.
pub fn validate_password_confirmation(password1: &str, password2: &str) -> Option<&'static str> {
    if password1.is_empty() && password2.is_empty() {
        return None;
    }
    (password1 != password2).then_some(PASSWORD_MISMATCH)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateField {
    Desde,
    Hasta,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("La fecha desde no puede ser posterior a la fecha hasta.")]
    DesdeAfterHasta,
    #[error("La fecha desde no puede ser más de 2 años en el futuro.")]
    DesdeTooFarAhead,
    #[error("La fecha hasta no puede ser más de 2 años en el futuro.")]
    HastaTooFarAhead,
}

impl DateRangeError {
    /// Controls to mark invalid
    pub fn fields(&self) -> &'static [DateField] {
        match self {
            DateRangeError::DesdeAfterHasta => &[DateField::Desde, DateField::Hasta],
            DateRangeError::DesdeTooFarAhead => &[DateField::Desde],
            DateRangeError::HastaTooFarAhead => &[DateField::Hasta],
        }
    }

    pub fn marks(&self, field: DateField) -> bool {
        self.fields().contains(&field)
    }
}

/// Parses the value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Empty or unparsable values are ignored.
pub fn validate_date_range(desde: &str, hasta: &str, today: NaiveDate) -> Result<(), DateRangeError> {
    let desde = parse_input_date(desde);
    let hasta = parse_input_date(hasta);

    if let (Some(d), Some(h)) = (desde, hasta) {
        if d > h {
            return Err(DateRangeError::DesdeAfterHasta);
        }
    }

    let limit = today
        .checked_add_months(Months::new(12 * MAX_YEARS_AHEAD))
        .unwrap_or(NaiveDate::MAX);
    if desde.is_some_and(|d| d > limit) {
        return Err(DateRangeError::DesdeTooFarAhead);
    }
    if hasta.is_some_and(|h| h > limit) {
        return Err(DateRangeError::HastaTooFarAhead);
    }
    Ok(())
}

/// [`validate_date_range`] against the local calendar date
pub fn validate_date_range_today(desde: &str, hasta: &str) -> Result<(), DateRangeError> {
    validate_date_range(desde, hasta, chrono::Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        parse_input_date(s).unwrap()
    }

    #[test]
    fn email() {
        assert!(validate_email("ana@example.cl"));
        assert!(validate_email("  ana.perez@mail.example.com "));
        assert!(!validate_email("ana@example"));
        assert!(!validate_email("ana example@x.cl"));
        assert!(!validate_email(""));
    }

    #[test]
    fn phone_and_document_are_digits_only() {
        assert!(validate_phone("912345678"));
        assert!(!validate_phone("+56 9 1234"));
        assert!(!validate_phone(""));
        assert!(validate_document_number("12345678"));
        assert!(!validate_document_number("12.345.678-9"));
    }

    #[test]
    fn emergency_phone_allows_punctuation() {
        assert!(validate_emergency_phone("+56 (9) 1234-5678"));
        assert!(!validate_emergency_phone("+56 9 12"));
        assert!(!validate_emergency_phone("9123 4567 ext"));
    }

    #[test]
    fn person_name_accepts_spanish_letters() {
        assert!(validate_person_name("José Ñúñez"));
        assert!(!validate_person_name("Ana2"));
        assert!(!validate_person_name("   "));
    }

    #[test]
    fn required() {
        assert!(validate_required("x"));
        assert!(!validate_required("  "));
    }

    #[test]
    fn password_confirmation() {
        assert_eq!(validate_password_confirmation("", ""), None);
        assert_eq!(validate_password_confirmation("abc", "abc"), None);
        assert_eq!(
            validate_password_confirmation("abc", ""),
            Some(PASSWORD_MISMATCH)
        );
        assert_eq!(
            validate_password_confirmation("abc", "abd"),
            Some(PASSWORD_MISMATCH)
        );
    }

    #[test]
    fn date_range_order() {
        let today = day("2024-05-01");
        assert_eq!(validate_date_range("2024-05-01", "2024-05-01", today), Ok(()));
        let err = validate_date_range("2024-06-02", "2024-06-01", today).unwrap_err();
        assert_eq!(err, DateRangeError::DesdeAfterHasta);
        assert!(err.marks(DateField::Desde) && err.marks(DateField::Hasta));
    }

    #[test]
    fn date_range_horizon() {
        let today = day("2024-05-01");
        assert_eq!(validate_date_range("", "2026-05-01", today), Ok(()));
        assert_eq!(
            validate_date_range("", "2026-05-02", today),
            Err(DateRangeError::HastaTooFarAhead)
        );
        let err = validate_date_range("2026-05-02", "", today).unwrap_err();
        assert_eq!(err, DateRangeError::DesdeTooFarAhead);
        assert!(!err.marks(DateField::Hasta));
    }

    #[test]
    fn unparsable_dates_are_ignored() {
        let today = day("2024-05-01");
        assert_eq!(validate_date_range("ayer", "2024-01-01", today), Ok(()));
    }
}
