//! Field validators for the login and signup forms.
//!
//! Each validator takes the raw input value and trims it where the form
//! does. Passwords are never trimmed.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FieldError;

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 8;

static EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static USERNAME: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$"));

/// `true` if `pattern` compiled and matches `value`.
pub(crate) fn matches(pattern: &LazyLock<Result<Regex, regex::Error>>, value: &str) -> bool {
    match pattern.as_ref() {
        Ok(re) => re.is_match(value),
        Err(err) => {
            log::error!("validation pattern failed to compile: {err}");
            false
        }
    }
}

/// Login username: required after trimming.
///
/// # Errors
///
/// [`FieldError::UsernameRequired`] if blank.
pub fn login_username(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::UsernameRequired);
    }
    Ok(())
}

/// Login password: required.
///
/// # Errors
///
/// [`FieldError::PasswordRequired`] if empty.
pub fn login_password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    Ok(())
}

/// # Errors
///
/// [`FieldError::NameRequired`] if blank.
pub fn name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

/// `local@domain.tld` with no whitespace and a single `@`.
///
/// # Errors
///
/// [`FieldError::EmailRequired`] or [`FieldError::EmailInvalid`].
pub fn email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !matches(&EMAIL, value) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

/// Signup username: at least three characters from `[A-Za-z0-9_-]`.
///
/// # Errors
///
/// The first failing check: required, length, then character set.
pub fn username(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::UsernameRequired);
    }
    if value.chars().count() < MIN_USERNAME_CHARS {
        return Err(FieldError::UsernameTooShort);
    }
    if !matches(&USERNAME, value) {
        return Err(FieldError::UsernameCharset);
    }
    Ok(())
}

/// Signup password: at least eight characters including an ASCII letter
/// and an ASCII digit.
///
/// # Errors
///
/// The first failing check: required, length, then composition.
pub fn password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return Err(FieldError::PasswordTooShort);
    }
    let letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let digit = value.chars().any(|c| c.is_ascii_digit());
    if !(letter && digit) {
        return Err(FieldError::PasswordTooSimple);
    }
    Ok(())
}

/// Confirmation must be present and equal to `password`.
///
/// # Errors
///
/// [`FieldError::ConfirmRequired`] or [`FieldError::PasswordMismatch`].
pub fn password_confirm(password: &str, confirm: &str) -> Result<(), FieldError> {
    if confirm.is_empty() {
        return Err(FieldError::ConfirmRequired);
    }
    if password != confirm {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}
