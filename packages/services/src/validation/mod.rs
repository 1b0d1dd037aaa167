pub mod field_validators;
pub mod input_validator;

// Re-export common types and functions
pub use field_validators::FieldValidator;
pub use input_validator::{validation_errors_to_message, InputValidator, ValidationErrors};
