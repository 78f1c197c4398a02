//! Declarative validation schema for the login form.
//!
//! Each field carries an ordered list of predicate/message rules. Validation
//! is a pure function over the whole [`FormValues`] snapshot: per field, the
//! first failing rule supplies the error message and the rest are skipped;
//! valid fields are omitted from the result.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::form::{Field, FormValues};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// One predicate/message pair. The predicate receives the field's own value
/// and the full snapshot, so cross-field rules (confirm password) can see
/// their sibling.
pub struct Rule {
    pub check: fn(value: &str, values: &FormValues) -> bool,
    pub message: &'static str,
}

const USERNAME_RULES: &[Rule] = &[
    Rule {
        check: |v, _| !v.is_empty(),
        message: "Username is required",
    },
    Rule {
        check: |v, _| v.chars().count() >= 5,
        message: "Username must be at least 5 characters long",
    },
];

const EMAIL_RULES: &[Rule] = &[
    Rule {
        check: |v, _| !v.is_empty(),
        message: "Email is required",
    },
    Rule {
        check: |v, _| EMAIL_REGEX.is_match(v),
        message: "Invalid email format",
    },
];

const PASSWORD_RULES: &[Rule] = &[
    Rule {
        check: |v, _| !v.is_empty(),
        message: "Password is required",
    },
    Rule {
        check: |v, _| v.chars().count() >= 8,
        message: "Password must be at least 8 characters long",
    },
    Rule {
        check: |v, _| v.chars().any(|c| c.is_ascii_uppercase()),
        message: "Password must contain at least one uppercase letter",
    },
    Rule {
        check: |v, _| v.chars().any(|c| c.is_ascii_digit()),
        message: "Password must contain at least one number",
    },
    Rule {
        // Underscore counts as special, same coverage as the [\W_] class.
        check: |v, _| v.chars().any(|c| !c.is_ascii_alphanumeric()),
        message: "Password must contain at least one special character",
    },
];

const CONFIRM_PASSWORD_RULES: &[Rule] = &[
    Rule {
        check: |v, _| !v.is_empty(),
        message: "Confirm Password is required",
    },
    Rule {
        check: |v, values| v == values.password,
        message: "Passwords must match",
    },
];

const PHONE_NUMBER_RULES: &[Rule] = &[Rule {
    // Optional field: empty passes, anything else must be exactly 10 digits.
    check: |v, _| v.is_empty() || (v.len() == 10 && v.bytes().all(|b| b.is_ascii_digit())),
    message: "Phone number must be a 10-digit number",
}];

/// The declared rule list for a field, in evaluation order.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Username => USERNAME_RULES,
        Field::Email => EMAIL_RULES,
        Field::Password => PASSWORD_RULES,
        Field::ConfirmPassword => CONFIRM_PASSWORD_RULES,
        Field::PhoneNumber => PHONE_NUMBER_RULES,
    }
}

/// Per-field error messages from one validation pass, in field declaration
/// order. Fields that passed every rule have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(Field, &'static str)>,
}

impl ValidationErrors {
    fn insert(&mut self, field: Field, message: &'static str) {
        self.entries.push((field, message));
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

/// Validate a complete snapshot against the schema. Pure; the same snapshot
/// always yields the same result.
pub fn validate(values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        let value = values.field(field);
        if let Some(rule) = rules_for(field)
            .iter()
            .find(|rule| !(rule.check)(value, values))
        {
            errors.insert(field, rule.message);
        }
    }
    errors
}
