//! Predicates shared by every policy.
//!
//! Each predicate returns `Ok(())` when the candidate passes and the matching
//! [`PolicyError`] otherwise. Policies chain them with `?` in their own order.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::PolicyError;

/// Requires the candidate to be strictly longer than `threshold` characters.
///
/// Length is counted in `char`s, so multi-byte letters count once.
pub fn validate_length(candidate: &str, threshold: usize) -> Result<(), PolicyError> {
    let length = candidate.chars().count();
    if length <= threshold {
        return Err(PolicyError::InvalidLength { length, threshold });
    }
    Ok(())
}

pub fn has_uppercase(candidate: &str) -> Result<(), PolicyError> {
    if !candidate.chars().any(char::is_uppercase) {
        return Err(PolicyError::MissingUppercase);
    }
    Ok(())
}

pub fn has_lowercase(candidate: &str) -> Result<(), PolicyError> {
    if !candidate.chars().any(char::is_lowercase) {
        return Err(PolicyError::MissingLowercase);
    }
    Ok(())
}

/// Requires at least one decimal digit (Unicode category Nd), e.g. `7` or `٣`.
pub fn has_digit(candidate: &str) -> Result<(), PolicyError> {
    if !candidate.chars().any(is_decimal_digit) {
        return Err(PolicyError::MissingDigit);
    }
    Ok(())
}

fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || get_general_category(c) == GeneralCategory::DecimalNumber
}
