use super::input_validator::{ValidationErrors, ValidationErrorsExt};

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_email(email: &str, errors: &mut ValidationErrors) {
        if email.trim().is_empty() {
            errors.add_error("email", "Email cannot be empty".to_string());
            return;
        }

        // Basic email format validation
        if !email.contains('@') || !email.contains('.') {
            errors.add_error("email", "Email format is invalid".to_string());
        }
    }

    pub fn validate_required_string(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        if value.trim().is_empty() {
            errors.add_error(field_name, format!("{} cannot be empty", field_name));
        }
    }

    /// `#` followed by six hex digits, the only form the admin UI emits.
    pub fn validate_hex_color(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        let valid = value.len() == 7
            && value.starts_with('#')
            && value[1..].chars().all(|c| c.is_ascii_hexdigit());

        if !valid {
            errors.add_error(field_name, format!("{} must look like #RRGGBB", field_name));
        }
    }
}
