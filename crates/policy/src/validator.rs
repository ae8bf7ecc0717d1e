//! The validator wrapper.

use crate::{Policy, PolicyError, Rule};

/// Validates candidates against a single configured policy.
#[derive(Debug, Clone, Default)]
pub struct Validator<R = Policy> {
    rule: R,
}

impl<R: Rule> Validator<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The policy in use.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Swap the policy for another of the same type.
    pub fn set_rule(&mut self, rule: R) {
        self.rule = rule;
    }

    pub fn into_inner(self) -> R {
        self.rule
    }

    /// Check `candidate` against the policy.
    ///
    /// Errors from the policy are returned unchanged.
    pub fn is_valid(&self, candidate: &str) -> Result<(), PolicyError> {
        let result = self.rule.is_valid(candidate);
        if let Err(error) = &result {
            // Never log the candidate itself.
            tracing::debug!(policy = self.rule.name(), code = error.code(), "candidate rejected");
        }
        result
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        self.is_valid(candidate).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Calisto, Ganimedes, PolicyKind};

    #[test]
    fn test_passes_errors_through() {
        let validator = Validator::new(Ganimedes::new());
        assert_eq!(
            validator.is_valid("abcdefg1@"),
            Err(PolicyError::MissingUppercase)
        );
        assert!(validator.accepts("Abcdefg1@"));
    }

    #[test]
    fn test_set_rule_replaces_policy() {
        let mut validator = Validator::new(Policy::from(PolicyKind::Ganimedes));
        assert!(!validator.accepts("xx1CAliSto"));

        validator.set_rule(Policy::from(PolicyKind::Calisto));
        assert_eq!(validator.rule().kind(), PolicyKind::Calisto);
        assert!(validator.accepts("xx1CAliSto"));
    }

    #[test]
    fn test_holds_trait_objects() {
        let validators: Vec<Validator<Box<dyn Rule>>> = vec![
            Validator::new(Box::new(Ganimedes::new())),
            Validator::new(Box::new(Calisto::new())),
        ];
        let names: Vec<_> = validators.iter().map(|v| v.rule().name()).collect();
        assert_eq!(names, ["Ganímedes", "Calisto"]);
    }

    #[test]
    fn test_default_uses_ganimedes() {
        let validator: Validator = Validator::default();
        assert_eq!(validator.into_inner(), Policy::Ganimedes(Ganimedes::new()));
    }
}
