use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed person name: one or more given names followed by a last name.
///
/// Constructed by the line parser and immutable afterwards. Structural
/// invariants (non-empty last name, at least one given name) are enforced
/// by the validator, not by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub given_names: Vec<String>,
    pub last_name: String,
}

impl PersonName {
    pub fn new(given_names: Vec<String>, last_name: impl Into<String>) -> Self {
        Self {
            given_names,
            last_name: last_name.into(),
        }
    }

    /// The given names joined by single spaces, as used for display and
    /// as the secondary sort key.
    pub fn joined_given_names(&self) -> String {
        self.given_names.join(" ")
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.joined_given_names(), self.last_name)
    }
}
