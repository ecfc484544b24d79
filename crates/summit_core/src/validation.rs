//! Field-level checks for the registration form.
//!
//! The email and phone rules mirror two permissive patterns and are kept
//! exactly that permissive:
//!
//! * email: `^[^\s@]+@[^\s@]+\.[^\s@]+$`
//! * phone: `^[\d\s\-()+.]{10,}$`

use std::collections::BTreeMap;

use shared::domain::FieldName;

use crate::registration::RegistrationRecord;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_PHONE_MESSAGE: &str = "Please enter a valid phone number";
const MIN_PHONE_CHARS: usize = 10;

/// The `\s` set of the patterns above: Unicode White_Space without U+0085,
/// plus U+FEFF.
pub fn is_pattern_space(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

/// Strips leading and trailing [`is_pattern_space`] characters.
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(is_pattern_space)
}

/// Violated fields and their messages, in form order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldName, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn first_field(&self) -> Option<FieldName> {
        self.errors.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Checks every field independently so all problems surface at once.
pub fn validate(record: &RegistrationRecord) -> ValidationResult {
    let mut result = ValidationResult::default();

    for (field, value, message) in [
        (FieldName::FirstName, &record.first_name, "First name is required"),
        (FieldName::LastName, &record.last_name, "Last name is required"),
        (FieldName::Email, &record.email, "Email address is required"),
    ] {
        if trim_value(value).is_empty() {
            result.insert(field, message);
        }
    }

    if !record.email.is_empty() && !is_valid_email(&record.email) {
        result.insert(FieldName::Email, INVALID_EMAIL_MESSAGE);
    }

    if !record.phone.is_empty() && !is_valid_phone(&record.phone) {
        result.insert(FieldName::Phone, INVALID_PHONE_MESSAGE);
    }

    result
}

/// Single-field check used when a field loses focus.
pub fn validate_field(field: FieldName, value: &str) -> Option<String> {
    let mut message = None;

    if field.is_required() && trim_value(value).is_empty() {
        message = Some(format!("{} is required", field.label()));
    }

    match field {
        FieldName::Email if !value.is_empty() && !is_valid_email(value) => {
            message = Some(INVALID_EMAIL_MESSAGE.to_string());
        }
        FieldName::Phone if !value.is_empty() && !is_valid_phone(value) => {
            message = Some(INVALID_PHONE_MESSAGE.to_string());
        }
        _ => {}
    }

    message
}

pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_pattern_space) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Needs a dot with at least one character on each side.
    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(idx, c)| *c == '.' && idx > 0 && idx + 1 < chars.len())
}

pub fn is_valid_phone(value: &str) -> bool {
    value.chars().count() >= MIN_PHONE_CHARS
        && value.chars().all(|c| {
            c.is_ascii_digit() || is_pattern_space(c) || matches!(c, '-' | '(' | ')' | '+' | '.')
        })
}
