//! Named predicates and the rule capability.

use std::fmt;

use crate::{PolicyError, calisto, ganimedes, rules};

/// A single predicate in a policy's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Length must be strictly greater than `threshold`.
    Length { threshold: usize },
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
    CalistoPattern,
}

impl Check {
    /// Run this predicate against `candidate`.
    pub fn run(self, candidate: &str) -> Result<(), PolicyError> {
        match self {
            Check::Length { threshold } => rules::validate_length(candidate, threshold),
            Check::Uppercase => rules::has_uppercase(candidate),
            Check::Lowercase => rules::has_lowercase(candidate),
            Check::Digit => rules::has_digit(candidate),
            Check::SpecialCharacter => ganimedes::has_special_character(candidate),
            Check::CalistoPattern => calisto::contains_calisto_pattern(candidate),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Length { threshold } => write!(f, "longer than {threshold} characters"),
            Check::Uppercase => f.write_str("at least one uppercase letter"),
            Check::Lowercase => f.write_str("at least one lowercase letter"),
            Check::Digit => f.write_str("at least one digit"),
            Check::SpecialCharacter => write!(
                f,
                "at least one of {}",
                ganimedes::SPECIAL_CHARACTERS
                    .iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            Check::CalistoPattern => {
                f.write_str("the word 'calisto' with 2 to 6 of its letters uppercase")
            }
        }
    }
}

/// A credential policy: a fixed, ordered sequence of checks.
pub trait Rule {
    /// Display name of the policy.
    fn name(&self) -> &'static str;

    /// The checks this policy runs, in evaluation order.
    fn checks(&self) -> &'static [Check];

    /// Run every check in order, stopping at the first failure.
    fn is_valid(&self, candidate: &str) -> Result<(), PolicyError> {
        self.checks()
            .iter()
            .try_for_each(|check| check.run(candidate))
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn checks(&self) -> &'static [Check] {
        (**self).checks()
    }

    fn is_valid(&self, candidate: &str) -> Result<(), PolicyError> {
        (**self).is_valid(candidate)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn checks(&self) -> &'static [Check] {
        (**self).checks()
    }

    fn is_valid(&self, candidate: &str) -> Result<(), PolicyError> {
        (**self).is_valid(candidate)
    }
}
