use thiserror::Error;

/// The only failure a submit can produce. Always recovered locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out all fields!")]
    MissingFields,
    #[error("You must agree to the Terms & Privacy Policy!")]
    TermsNotAccepted,
}

/// Every value must be non-empty. Whitespace counts as content.
pub fn require_filled(values: &[&str]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.is_empty()) {
        Err(ValidationError::MissingFields)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_require_filled() {
        assert_eq!(require_filled(&["a", "b"]), Ok(()));
        assert_eq!(
            require_filled(&["a", ""]),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(require_filled(&[" "]), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill out all fields!"
        );
        assert_eq!(
            ValidationError::TermsNotAccepted.to_string(),
            "You must agree to the Terms & Privacy Policy!"
        );
    }
}
