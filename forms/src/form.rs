//! Which inputs belong to which form, and how each one is checked.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::HashMap;

use crate::error::FieldError;
use crate::rules;

/// Read access to current input values by element id.
pub trait FieldValues {
    /// Current value of the input with `input_id`, or `""` if absent.
    fn value(&self, input_id: &str) -> String;
}

impl FieldValues for HashMap<&str, &str> {
    fn value(&self, input_id: &str) -> String {
        self.get(input_id).map(|v| (*v).to_owned()).unwrap_or_default()
    }
}

/// A validated input on the login or signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LoginUsername,
    LoginPassword,
    Name,
    Email,
    Username,
    Password,
    PasswordConfirm,
}

impl Field {
    /// Element id of the `<input>`.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::LoginUsername | Self::Username => "id_username",
            Self::LoginPassword => "id_password",
            Self::Name => "id_name",
            Self::Email => "id_email",
            Self::Password => "id_password1",
            Self::PasswordConfirm => "id_password2",
        }
    }

    /// Element id of the message slot under the input.
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Self::LoginUsername | Self::Username => "username-error",
            Self::LoginPassword => "password-error",
            Self::Name => "name-error",
            Self::Email => "email-error",
            Self::Password => "password1-error",
            Self::PasswordConfirm => "password2-error",
        }
    }

    /// Check this field against the form's current values.
    ///
    /// # Errors
    ///
    /// The [`FieldError`] to display under the input.
    pub fn validate(self, values: &impl FieldValues) -> Result<(), FieldError> {
        let own = values.value(self.input_id());
        match self {
            Self::LoginUsername => rules::login_username(&own),
            Self::LoginPassword => rules::login_password(&own),
            Self::Name => rules::name(&own),
            Self::Email => rules::email(&own),
            Self::Username => rules::username(&own),
            Self::Password => rules::password(&own),
            Self::PasswordConfirm => rules::password_confirm(&values.value(Self::Password.input_id()), &own),
        }
    }
}

/// A form checked field by field on blur and all at once on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    pub form_id: &'static str,
    pub fields: &'static [Field],
    /// Editing `.0` re-checks `.1` when `.1` already has a value.
    pub linked: Option<(Field, Field)>,
}

pub const LOGIN: FormSpec = FormSpec {
    form_id: "login-form",
    fields: &[Field::LoginUsername, Field::LoginPassword],
    linked: None,
};

pub const SIGNUP: FormSpec = FormSpec {
    form_id: "signup-form",
    fields: &[Field::Name, Field::Email, Field::Username, Field::Password, Field::PasswordConfirm],
    linked: Some((Field::Password, Field::PasswordConfirm)),
};

impl FormSpec {
    /// Every field's outcome in display order. All fields are checked so
    /// each slot is updated, not just the first failure.
    #[must_use]
    pub fn validate_all(&self, values: &impl FieldValues) -> Vec<(Field, Result<(), FieldError>)> {
        self.fields.iter().map(|f| (*f, f.validate(values))).collect()
    }

    /// `true` if every field passes.
    #[must_use]
    pub fn is_valid(&self, values: &impl FieldValues) -> bool {
        self.validate_all(values).iter().all(|(_, r)| r.is_ok())
    }
}
