//! Policy selection by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Calisto, Check, Error, Ganimedes, PolicyError, Rule};

/// Names of the available policies, as used in config files and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    #[serde(alias = "ganímedes")]
    Ganimedes,
    Calisto,
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ganimedes" | "ganímedes" => Ok(PolicyKind::Ganimedes),
            "calisto" => Ok(PolicyKind::Calisto),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Ganimedes => f.write_str("ganimedes"),
            PolicyKind::Calisto => f.write_str("calisto"),
        }
    }
}

/// One of the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Ganimedes(Ganimedes),
    Calisto(Calisto),
}

impl Policy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Ganimedes(_) => PolicyKind::Ganimedes,
            Policy::Calisto(_) => PolicyKind::Calisto,
        }
    }
}

impl Default for Policy {
    fn default() -> Self {
        PolicyKind::default().into()
    }
}

impl From<PolicyKind> for Policy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Ganimedes => Policy::Ganimedes(Ganimedes::new()),
            PolicyKind::Calisto => Policy::Calisto(Calisto::new()),
        }
    }
}

impl From<Ganimedes> for Policy {
    fn from(rule: Ganimedes) -> Self {
        Policy::Ganimedes(rule)
    }
}

impl From<Calisto> for Policy {
    fn from(rule: Calisto) -> Self {
        Policy::Calisto(rule)
    }
}

impl Rule for Policy {
    fn name(&self) -> &'static str {
        match self {
            Policy::Ganimedes(rule) => rule.name(),
            Policy::Calisto(rule) => rule.name(),
        }
    }

    fn checks(&self) -> &'static [Check] {
        match self {
            Policy::Ganimedes(rule) => rule.checks(),
            Policy::Calisto(rule) => rule.checks(),
        }
    }

    fn is_valid(&self, candidate: &str) -> Result<(), PolicyError> {
        match self {
            Policy::Ganimedes(rule) => rule.is_valid(candidate),
            Policy::Calisto(rule) => rule.is_valid(candidate),
        }
    }
}
