//! Policy error types.

use thiserror::Error;

/// Why a candidate was rejected.
///
/// Every variant is one disjoint validation failure. Matching on the enum as
/// a whole catches any rejection; matching a single variant catches one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PolicyError {
    /// The candidate is not strictly longer than the policy's threshold.
    #[error("must be longer than {threshold} characters (got {length})")]
    InvalidLength { length: usize, threshold: usize },

    #[error("must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("must contain at least one digit")]
    MissingDigit,

    /// None of `@ _ # $ %` is present.
    #[error("must contain at least one special character (@, _, #, $, %)")]
    MissingSpecialCharacter,

    /// The word "calisto" is missing or has the wrong casing.
    #[error("{0}")]
    InvalidCalistoPattern(CalistoDefect),
}

impl PolicyError {
    /// Stable snake_case identifier for the rejection kind.
    pub fn code(&self) -> &'static str {
        match self {
            PolicyError::InvalidLength { .. } => "invalid_length",
            PolicyError::MissingUppercase => "missing_uppercase",
            PolicyError::MissingLowercase => "missing_lowercase",
            PolicyError::MissingDigit => "missing_digit",
            PolicyError::MissingSpecialCharacter => "missing_special_character",
            PolicyError::InvalidCalistoPattern(_) => "invalid_calisto_pattern",
        }
    }
}

/// Detail for [`PolicyError::InvalidCalistoPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalistoDefect {
    #[error("must contain the word 'calisto'")]
    Absent,

    /// The matched word has fewer than 2 or all 7 letters in uppercase.
    #[error(
        "the word 'calisto' must have at least two uppercase letters, but not all ({0} found)"
    )]
    UppercaseCount(usize),
}

/// Errors outside of candidate validation.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A policy name did not match any known policy.
    #[error("unknown policy '{0}' (expected 'ganimedes' or 'calisto')")]
    UnknownPolicy(String),
}
