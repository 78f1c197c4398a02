//! Form state: field identifiers, the value record, and the headless
//! controller that owns both.

use serde::{Deserialize, Serialize};

use crate::core::validation::{ValidationErrors, validate};

/// The fields of the login form, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    PhoneNumber,
}

impl Field {
    /// Every field, in the order validation evaluates and reports them.
    pub const ALL: [Field; 5] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::PhoneNumber,
    ];

    /// The field's key in the submitted payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::PhoneNumber => "phoneNumber",
        }
    }
}

/// One form instance's input values. Created empty on mount, mutated on every
/// keystroke, discarded on unmount. The phone number is optional; an empty
/// string means the user left it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
}

impl FormValues {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::PhoneNumber => self.phone_number = value,
        }
    }
}

type SubmitCallback = Box<dyn FnMut(FormValues) + Send + Sync>;

/// Headless form state controller.
///
/// Owns the [`FormValues`] record and the errors from the last submit attempt.
/// Keystrokes go through [`set_field_value`](Self::set_field_value), which
/// never validates; validation runs over the whole snapshot only inside
/// [`submit`](Self::submit). The callback configured at construction fires on
/// every accepted submit, with no dedup between identical attempts.
pub struct FormController {
    values: FormValues,
    errors: ValidationErrors,
    on_valid: SubmitCallback,
}

impl FormController {
    pub fn new(on_valid: impl FnMut(FormValues) + Send + Sync + 'static) -> Self {
        Self {
            values: FormValues::default(),
            errors: ValidationErrors::default(),
            on_valid: Box::new(on_valid),
        }
    }

    /// Update a single field. Errors from the previous submit stay visible
    /// until the next submit recomputes them.
    pub fn set_field_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set_field(field, value.into());
    }

    /// Validate the full snapshot. Stores the per-field errors and, when every
    /// field passes, invokes the submit callback with a copy of the values.
    /// Returns whether the submission was accepted.
    pub fn submit(&mut self) -> bool {
        let result = validate(&self.values);
        let accepted = result.is_empty();
        self.errors = result;
        if accepted {
            (self.on_valid)(self.values.clone());
        }
        accepted
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Errors from the most recent submit attempt. Empty before the first
    /// submit and after any accepted one.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}
