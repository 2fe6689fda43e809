//! Form field validators
//!
//! Each validator returns `Result<(), FieldError>` so callers collect
//! per-field messages without touching shared state. Used by the enquiry
//! and contact screens; the wizard's traveler step checks presence only.

/// A validation failure tied to one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Non-empty after trimming.
pub fn require(field: &'static str, value: &str, label: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::new(field, format!("{} is required", label)))
    } else {
        Ok(())
    }
}

/// `local@domain.tld` shape: an `@` with a non-empty local part and a dot in
/// a non-empty domain. Deliberately loose, matching what the server accepts.
pub fn email(field: &'static str, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::new(field, "Email is required"));
    }

    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.is_empty()
                && domain.split_once('.').is_some_and(|(host, tld)| {
                    !host.is_empty() && !tld.is_empty()
                })
        });

    if valid {
        Ok(())
    } else {
        Err(FieldError::new(field, "Email is invalid"))
    }
}

/// Exactly 10 digits after stripping every non-digit character.
pub fn phone(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "Phone is required"));
    }

    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        Ok(())
    } else {
        Err(FieldError::new(field, "Phone must be 10 digits"))
    }
}
