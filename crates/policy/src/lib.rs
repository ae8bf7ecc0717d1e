//! Credential policies for candidate passwords ("claves").
//!
//! A policy is a fixed, ordered sequence of checks. Evaluation stops at the
//! first failing check and reports it as a [`PolicyError`].
//!
//! # Policies
//!
//! - [`Ganimedes`]: longer than 8 characters, an uppercase letter, a lowercase
//!   letter, a digit and one of `@ _ # $ %`.
//! - [`Calisto`]: longer than 6 characters, a digit and the word "calisto"
//!   (any case) with between 2 and 6 of its letters in uppercase.
//!
//! # Example
//!
//! ```
//! use policy::{Calisto, PolicyError, Validator};
//!
//! let validator = Validator::new(Calisto::new());
//! assert!(validator.is_valid("xx1CAliSto").is_ok());
//! assert!(matches!(
//!     validator.is_valid("xx1CALISTO"),
//!     Err(PolicyError::InvalidCalistoPattern(_))
//! ));
//! ```

mod calisto;
mod check;
mod error;
mod ganimedes;
mod policy;
pub mod rules;
mod validator;

pub use calisto::{Calisto, contains_calisto_pattern};
pub use check::{Check, Rule};
pub use error::{CalistoDefect, Error, PolicyError};
pub use ganimedes::{Ganimedes, SPECIAL_CHARACTERS, has_special_character};
pub use policy::{Policy, PolicyKind};
pub use validator::Validator;
