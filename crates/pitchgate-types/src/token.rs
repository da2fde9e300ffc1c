use crate::catalog::Domain;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Canonical permission token used in tables and summaries.
///
/// Normalization rules are intentionally simple and deterministic:
/// - trimmed
/// - ASCII lowercase
/// - the `<domain>:<action>` split is not enforced here; malformed tokens are
///   rejected by config validation, and table misses simply answer "denied"
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Permission(String);

impl Permission {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The resource domain this token is scoped to, if the prefix parses.
    pub fn domain(&self) -> Option<Domain> {
        self.0.split_once(':').and_then(|(d, _)| Domain::parse(d))
    }

    /// The action part after the `:`, if present and non-empty.
    pub fn action(&self) -> Option<&str> {
        match self.0.split_once(':') {
            Some((_, a)) if !a.is_empty() => Some(a),
            _ => None,
        }
    }
}

// Lets `BTreeSet<Permission>` answer `contains(&str)` without allocating.
impl Borrow<str> for Permission {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Permission {
    fn from(value: &str) -> Self {
        Permission::new(value)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
