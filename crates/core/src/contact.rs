//! Contact submission validation and normalization.
//!
//! [`validate`] is the only way to obtain a [`NewContact`], so anything that
//! reaches the store has already been trimmed, cleaned and checked. Every
//! field is checked on each call and all failures are reported together.

use std::sync::LazyLock;

use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidateEmail;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Minimum length of a trimmed name (characters).
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum length of the raw name field (characters).
pub const MAX_NAME_LENGTH: usize = 100;

/// Minimum length of a cleaned phone number, including a leading `+`.
pub const MIN_PHONE_LENGTH: usize = 10;

/// Maximum length of a cleaned phone number, including a leading `+`.
pub const MAX_PHONE_LENGTH: usize = 20;

/// Minimum length of a trimmed message (characters).
pub const MIN_MESSAGE_LENGTH: usize = 5;

/// Maximum length of the raw message field (characters).
pub const MAX_MESSAGE_LENGTH: usize = 1000;

/// Latin and Cyrillic letters, whitespace and hyphens.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё\s-]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One field of a posted form as it arrived on the wire.
///
/// Anything other than a JSON string is kept as [`FormValue::NotText`] so
/// the validator can report it against the field instead of the whole body
/// failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormValue {
    /// Field omitted or sent as `null`.
    #[default]
    Missing,
    Text(String),
    /// A number, boolean, array or object.
    NotText,
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            FormValue::Missing | FormValue::NotText => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        FormValue::Text(text.to_string())
    }
}

impl<'de> Deserialize<'de> for FormValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Null,
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => FormValue::Text(text),
            Raw::Null => FormValue::Missing,
            Raw::Other(_) => FormValue::NotText,
        })
    }
}

/// Raw contact form payload as posted by the landing page.
///
/// Missing or `null` text fields are validated as blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: FormValue,
    #[serde(default)]
    pub email: FormValue,
    #[serde(default)]
    pub phone: FormValue,
    #[serde(default)]
    pub message: FormValue,
}

impl ContactSubmission {
    pub fn new(name: &str, email: &str, phone: Option<&str>, message: &str) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.map(FormValue::from).unwrap_or_default(),
            message: message.into(),
        }
    }
}

/// A submission that passed validation, with every field normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
}

impl NewContact {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Cleaned phone: digits with an optional leading `+`.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Which rule a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    InvalidName,
    InvalidEmail,
    InvalidPhone,
    InvalidMessage,
}

impl ViolationKind {
    /// Name of the submission field the rule applies to.
    pub fn field(self) -> &'static str {
        match self {
            ViolationKind::InvalidName => "name",
            ViolationKind::InvalidEmail => "email",
            ViolationKind::InvalidPhone => "phone",
            ViolationKind::InvalidMessage => "message",
        }
    }
}

/// A single rejected field with a message suitable for the end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: ViolationKind,
    pub message: String,
}

impl FieldViolation {
    fn new(code: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: code.field(),
            code,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate and normalize a submission.
///
/// Returns [`CoreError::Validation`] listing every failing field, in form
/// order (name, email, phone, message).
pub fn validate(submission: &ContactSubmission) -> Result<NewContact, CoreError> {
    let mut violations = Vec::new();

    let name = text_field(&submission.name, ViolationKind::InvalidName)
        .and_then(validate_name)
        .map_err(|v| violations.push(v));
    let email = text_field(&submission.email, ViolationKind::InvalidEmail)
        .and_then(validate_email)
        .map_err(|v| violations.push(v));
    let phone = match &submission.phone {
        FormValue::NotText => Err(not_text(ViolationKind::InvalidPhone)),
        other => validate_phone(other.as_text()),
    }
    .map_err(|v| violations.push(v));
    let message = text_field(&submission.message, ViolationKind::InvalidMessage)
        .and_then(validate_message)
        .map_err(|v| violations.push(v));

    match (name, email, phone, message) {
        (Ok(name), Ok(email), Ok(phone), Ok(message)) => Ok(NewContact {
            name,
            email,
            phone,
            message,
        }),
        _ => Err(CoreError::Validation(violations)),
    }
}

/// Text of a required field; missing counts as blank.
fn text_field(value: &FormValue, kind: ViolationKind) -> Result<&str, FieldViolation> {
    match value {
        FormValue::Missing => Ok(""),
        FormValue::Text(text) => Ok(text),
        FormValue::NotText => Err(not_text(kind)),
    }
}

fn not_text(kind: ViolationKind) -> FieldViolation {
    FieldViolation::new(kind, "Значение должно быть строкой")
}

/// Trim a name and check its length and character set.
pub fn validate_name(raw: &str) -> Result<String, FieldViolation> {
    if raw.chars().count() > MAX_NAME_LENGTH {
        return Err(FieldViolation::new(
            ViolationKind::InvalidName,
            format!("Имя слишком длинное (максимум {MAX_NAME_LENGTH} символов)"),
        ));
    }

    let name = raw.trim();
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(FieldViolation::new(
            ViolationKind::InvalidName,
            format!("Имя должно содержать минимум {MIN_NAME_LENGTH} символа"),
        ));
    }
    if !NAME_RE.is_match(name) {
        return Err(FieldViolation::new(
            ViolationKind::InvalidName,
            "Имя может содержать только буквы, пробелы и дефисы",
        ));
    }

    Ok(name.to_string())
}

/// Trim an email address and check its syntax.
///
/// On top of the `validator` crate's check the domain must contain at least
/// one dot and no empty labels, so `user@localhost` is rejected.
pub fn validate_email(raw: &str) -> Result<String, FieldViolation> {
    let email = raw.trim().to_string();

    let domain_ok = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.') && domain.split('.').all(|l| !l.is_empty()))
        .unwrap_or(false);

    if domain_ok && email.validate_email() {
        Ok(email)
    } else {
        Err(FieldViolation::new(
            ViolationKind::InvalidEmail,
            "Введите корректный email адрес",
        ))
    }
}

/// Clean an optional phone number and check its length.
///
/// Blank input counts as absent because browsers post `""` for an untouched
/// phone field.
pub fn validate_phone(raw: Option<&str>) -> Result<Option<String>, FieldViolation> {
    let Some(raw) = raw.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };

    let cleaned = clean_phone(raw);
    let len = cleaned.chars().count();
    if !(MIN_PHONE_LENGTH..=MAX_PHONE_LENGTH).contains(&len) {
        return Err(FieldViolation::new(
            ViolationKind::InvalidPhone,
            format!(
                "Номер телефона должен содержать от {MIN_PHONE_LENGTH} до {MAX_PHONE_LENGTH} цифр"
            ),
        ));
    }

    Ok(Some(cleaned))
}

/// Keep ASCII digits and a leading `+`, drop everything else.
///
/// ```
/// use agency_core::contact::clean_phone;
/// assert_eq!(clean_phone("+7 (900) 123-45-67"), "+79001234567");
/// assert_eq!(clean_phone("8 900 1+23"), "8900123");
/// ```
pub fn clean_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut cleaned = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        cleaned.push('+');
    }
    cleaned.extend(trimmed.chars().filter(char::is_ascii_digit));
    cleaned
}

/// Trim a message and check its length.
pub fn validate_message(raw: &str) -> Result<String, FieldViolation> {
    if raw.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(FieldViolation::new(
            ViolationKind::InvalidMessage,
            format!("Сообщение слишком длинное (максимум {MAX_MESSAGE_LENGTH} символов)"),
        ));
    }

    let message = raw.trim();
    if message.chars().count() < MIN_MESSAGE_LENGTH {
        return Err(FieldViolation::new(
            ViolationKind::InvalidMessage,
            format!("Сообщение должно содержать минимум {MIN_MESSAGE_LENGTH} символов"),
        ));
    }

    Ok(message.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
