//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace-only.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is invalid.
    #[error("Invalid phone number: {0} (expected exactly 10 digits)")]
    InvalidPhone(String),

    /// The provided birthdate string could not be parsed as a date.
    #[error("Invalid birthdate: {0} (expected dd.mm.yyyy)")]
    InvalidBirthday(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::EmptyName;
        assert_eq!(err.to_string(), "Contact name cannot be empty");

        let err = ValidationError::InvalidPhone("12ab".to_string());
        assert!(err.to_string().contains("12ab"));

        let err = ValidationError::InvalidBirthday("31.13.2000".to_string());
        assert!(err.to_string().contains("31.13.2000"));
    }
}
