//! The Ganímedes policy.

use crate::{Check, PolicyError, Rule};

/// Characters that satisfy the special-character check.
pub const SPECIAL_CHARACTERS: [char; 5] = ['@', '_', '#', '$', '%'];

const THRESHOLD: usize = 8;

const CHECKS: &[Check] = &[
    Check::Length {
        threshold: THRESHOLD,
    },
    Check::Uppercase,
    Check::Lowercase,
    Check::Digit,
    Check::SpecialCharacter,
];

/// Longer than 8 characters, mixed case, a digit and one of `@ _ # $ %`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ganimedes;

impl Ganimedes {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Ganimedes {
    fn name(&self) -> &'static str {
        "Ganímedes"
    }

    fn checks(&self) -> &'static [Check] {
        CHECKS
    }
}

pub fn has_special_character(candidate: &str) -> Result<(), PolicyError> {
    if !candidate.chars().any(|c| SPECIAL_CHARACTERS.contains(&c)) {
        return Err(PolicyError::MissingSpecialCharacter);
    }
    Ok(())
}
