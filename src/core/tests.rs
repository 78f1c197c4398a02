#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::core::{Field, FormController, FormValues, validate};

    fn valid_values() -> FormValues {
        FormValues {
            username: "frodo".to_string(),
            email: "frodo@shire.me".to_string(),
            password: "P@ssw0rd".to_string(),
            confirm_password: "P@ssw0rd".to_string(),
            phone_number: String::new(),
        }
    }

    fn controller_with_log() -> (FormController, Arc<Mutex<Vec<FormValues>>>) {
        let accepted: Arc<Mutex<Vec<FormValues>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&accepted);
        let controller = FormController::new(move |snapshot| {
            sink.lock().unwrap().push(snapshot);
        });
        (controller, accepted)
    }

    fn fill(controller: &mut FormController, values: &FormValues) {
        for field in Field::ALL {
            controller.set_field_value(field, values.field(field));
        }
    }

    #[test]
    fn test_valid_snapshot_passes() {
        let errors = validate(&valid_values());
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_empty_fields_report_required_first() {
        let errors = validate(&FormValues::default());

        assert_eq!(errors.get(Field::Username), Some("Username is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Confirm Password is required")
        );
        // Phone is optional, so the empty form has exactly four errors.
        assert_eq!(errors.get(Field::PhoneNumber), None);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_username_minimum_length() {
        let mut values = valid_values();
        values.username = "abcd".to_string();
        assert_eq!(
            validate(&values).get(Field::Username),
            Some("Username must be at least 5 characters long")
        );

        values.username = "abcde".to_string();
        assert_eq!(validate(&values).get(Field::Username), None);
    }

    #[test]
    fn test_email_format() {
        let mut values = valid_values();
        values.email = "not-an-email".to_string();
        assert_eq!(
            validate(&values).get(Field::Email),
            Some("Invalid email format")
        );

        values.email = "frodo@shire".to_string();
        assert_eq!(
            validate(&values).get(Field::Email),
            Some("Invalid email format")
        );

        values.email = "frodo.baggins+ring@shire.me".to_string();
        assert_eq!(validate(&values).get(Field::Email), None);
    }

    #[test]
    fn test_password_rules_in_declared_order() {
        let mut values = valid_values();

        // No uppercase, no digit, no special: the uppercase rule is declared
        // first, so its message wins.
        values.password = "password".to_string();
        values.confirm_password = values.password.clone();
        assert_eq!(
            validate(&values).get(Field::Password),
            Some("Password must contain at least one uppercase letter")
        );

        values.password = "PASSWORD1".to_string();
        values.confirm_password = values.password.clone();
        assert_eq!(
            validate(&values).get(Field::Password),
            Some("Password must contain at least one special character")
        );

        values.password = "Passw0rd".to_string();
        values.confirm_password = values.password.clone();
        assert_eq!(
            validate(&values).get(Field::Password),
            Some("Password must contain at least one special character")
        );

        values.password = "P@s1".to_string();
        values.confirm_password = values.password.clone();
        assert_eq!(
            validate(&values).get(Field::Password),
            Some("Password must be at least 8 characters long")
        );

        // Underscore alone satisfies the special-character rule.
        values.password = "Passw0rd_".to_string();
        values.confirm_password = values.password.clone();
        assert_eq!(validate(&values).get(Field::Password), None);
    }

    #[test]
    fn test_confirm_password_must_match() {
        let mut values = valid_values();
        values.confirm_password = "P@ssw0rd!".to_string();

        let errors = validate(&values);
        assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords must match"));
        // Mismatch is reported even when every other field is broken too.
        values.username.clear();
        values.email = "nope".to_string();
        assert_eq!(
            validate(&values).get(Field::ConfirmPassword),
            Some("Passwords must match")
        );
    }

    #[test]
    fn test_phone_number_is_optional() {
        let mut values = valid_values();
        values.phone_number = String::new();
        assert_eq!(validate(&values).get(Field::PhoneNumber), None);

        values.phone_number = "12345".to_string();
        assert_eq!(
            validate(&values).get(Field::PhoneNumber),
            Some("Phone number must be a 10-digit number")
        );

        values.phone_number = "123456789x".to_string();
        assert_eq!(
            validate(&values).get(Field::PhoneNumber),
            Some("Phone number must be a 10-digit number")
        );

        values.phone_number = "0123456789".to_string();
        assert_eq!(validate(&values).get(Field::PhoneNumber), None);
    }

    #[test]
    fn test_errors_iterate_in_field_order() {
        let mut values = valid_values();
        values.username.clear();
        values.phone_number = "12345".to_string();

        let fields: Vec<Field> = validate(&values).iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::Username, Field::PhoneNumber]);
    }

    #[test]
    fn test_submit_invokes_callback_once() {
        let (mut controller, accepted) = controller_with_log();
        fill(&mut controller, &valid_values());

        assert!(controller.submit());
        assert!(controller.errors().is_empty());

        let accepted = accepted.lock().unwrap();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0], valid_values());
    }

    #[test]
    fn test_invalid_submit_suppresses_callback() {
        let (mut controller, accepted) = controller_with_log();
        let mut values = valid_values();
        values.username = "abcd".to_string();
        fill(&mut controller, &values);

        assert!(!controller.submit());
        assert_eq!(
            controller.errors().get(Field::Username),
            Some("Username must be at least 5 characters long")
        );
        assert!(accepted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_repeated_submit_is_not_deduplicated() {
        let (mut controller, accepted) = controller_with_log();
        fill(&mut controller, &valid_values());

        assert!(controller.submit());
        assert!(controller.submit());

        let accepted = accepted.lock().unwrap();
        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0], accepted[1]);
    }

    #[test]
    fn test_set_field_value_defers_validation() {
        let (mut controller, accepted) = controller_with_log();

        controller.set_field_value(Field::Username, "abcd");
        controller.set_field_value(Field::Email, "nope");
        assert!(controller.errors().is_empty());
        assert!(accepted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_corrected_submit_clears_stale_errors() {
        let (mut controller, accepted) = controller_with_log();
        let mut values = valid_values();
        values.password = "password".to_string();
        values.confirm_password = "password".to_string();
        fill(&mut controller, &values);

        assert!(!controller.submit());
        assert!(!controller.errors().is_empty());

        controller.set_field_value(Field::Password, "P@ssw0rd");
        controller.set_field_value(Field::ConfirmPassword, "P@ssw0rd");
        assert!(controller.submit());
        assert!(controller.errors().is_empty());
        assert_eq!(accepted.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_serializes_with_original_keys() {
        let mut values = valid_values();
        values.phone_number = "0123456789".to_string();

        // The serialized keys are the `Field::as_str` names.
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json[Field::Username.as_str()], "frodo");
        assert_eq!(json[Field::ConfirmPassword.as_str()], "P@ssw0rd");
        assert_eq!(json[Field::PhoneNumber.as_str()], "0123456789");
        for field in Field::ALL {
            assert!(json.get(field.as_str()).is_some());
        }
    }
}
