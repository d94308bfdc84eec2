//! Pure input validation predicates.
//!
//! Every function here is a side-effect-free check over a string. The
//! entity models compose these into their `validate()` methods; the
//! presentation layer is expected to call them for field-level feedback
//! before submitting.

use regex::Regex;
use std::sync::OnceLock;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$")
            .expect("Failed to compile email regex")
    })
}

fn phone_regex() -> &'static Regex {
    static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
    PHONE_REGEX
        .get_or_init(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("Failed to compile phone regex"))
}

fn username_regex() -> &'static Regex {
    static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
    USERNAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_]{3,20}$").expect("Failed to compile username regex")
    })
}

fn date_regex() -> &'static Regex {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    DATE_REGEX
        .get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Failed to compile date regex"))
}

/// Validate an email address with an RFC-lite pattern: dot-separated local
/// segments of `[a-zA-Z0-9_+&*-]`, at least one domain label, and a 2-7
/// letter TLD.
pub fn is_valid_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    email_regex().is_match(email)
}

/// Validate a phone number: 10-15 digits with an optional leading `+`,
/// after stripping whitespace, dashes, and parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.trim().is_empty() {
        return false;
    }
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '(' && *c != ')')
        .collect();
    phone_regex().is_match(&cleaned)
}

/// Validate a username: alphanumeric and underscore, 3-20 characters.
pub fn is_valid_username(username: &str) -> bool {
    if username.trim().is_empty() {
        return false;
    }
    username_regex().is_match(username)
}

/// Validate a password.
///
/// Only enforces a minimum length of 6 characters; no character-class
/// requirements.
pub fn is_valid_password(password: &str) -> bool {
    !password.trim().is_empty() && password.len() >= 6
}

/// Check that a value is non-empty after trimming.
pub fn is_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate a `YYYY-MM-DD` date string.
///
/// Shape only; no calendar validity check ("2024-13-99" passes).
pub fn is_valid_date(date: &str) -> bool {
    if date.trim().is_empty() {
        return false;
    }
    date_regex().is_match(date)
}

/// Validate a gender selection.
pub fn is_valid_gender(gender: &str) -> bool {
    matches!(gender, "Male" | "Female" | "Other")
}

/// Validate a report status display string.
pub fn is_valid_report_status(status: &str) -> bool {
    matches!(
        status,
        "Pending" | "In Review" | "Approved" | "In Progress" | "Resolved" | "Completed"
    )
}

/// Validate a report type. Storage accepts any non-empty string; the
/// presentation layer constrains the option set.
pub fn is_valid_report_type(report_type: &str) -> bool {
    is_not_empty(report_type)
}

/// Validate that a text is within a maximum length.
pub fn is_valid_length(text: &str, max_length: usize) -> bool {
    text.len() <= max_length
}
