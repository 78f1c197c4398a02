//! Headless form logic: the value record, the validation schema, and the
//! submit controller. Nothing here depends on the rendering layer.

mod form;
pub mod validation;

#[cfg(test)]
mod tests;

pub use form::{Field, FormController, FormValues};
pub use validation::{Rule, ValidationErrors, rules_for, validate};
