//! The Calisto policy.
//!
//! Calisto does not require upper or lowercase letters on their own. Casing
//! only matters inside the matched word.

use crate::{CalistoDefect, Check, PolicyError, Rule};

const KEYWORD: &[u8] = b"calisto";

const THRESHOLD: usize = 6;

const MIN_UPPERCASE: usize = 2;

const CHECKS: &[Check] = &[
    Check::Length {
        threshold: THRESHOLD,
    },
    Check::Digit,
    Check::CalistoPattern,
];

/// Longer than 6 characters, a digit and a partly uppercase "calisto".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calisto;

impl Calisto {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Calisto {
    fn name(&self) -> &'static str {
        "Calisto"
    }

    fn checks(&self) -> &'static [Check] {
        CHECKS
    }
}

/// Requires the first case-insensitive "calisto" in the candidate to have
/// between 2 and 6 uppercase letters.
pub fn contains_calisto_pattern(candidate: &str) -> Result<(), PolicyError> {
    // A match is all ASCII, so its start and end are char boundaries.
    let start = candidate
        .as_bytes()
        .windows(KEYWORD.len())
        .position(|window| window.eq_ignore_ascii_case(KEYWORD))
        .ok_or(PolicyError::InvalidCalistoPattern(CalistoDefect::Absent))?;

    let span = &candidate[start..start + KEYWORD.len()];
    let uppercase = span.chars().filter(char::is_ascii_uppercase).count();

    if uppercase < MIN_UPPERCASE || uppercase == KEYWORD.len() {
        return Err(PolicyError::InvalidCalistoPattern(
            CalistoDefect::UppercaseCount(uppercase),
        ));
    }
    Ok(())
}
