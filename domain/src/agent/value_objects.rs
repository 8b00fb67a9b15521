//! Agent value objects.

use serde::{Deserialize, Serialize};

/// Unique name of an agent in the capability catalog.
///
/// The name is the agent's identity: two profiles with the same name are
/// the same agent, and the catalog rejects duplicates at load time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentName(String);

impl AgentName {
    /// Creates an AgentName from an existing string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for AgentName {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for AgentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        let name = AgentName::new("delivery-engineer");
        assert_eq!(name.to_string(), "delivery-engineer");
        assert_eq!(name.as_str(), "delivery-engineer");
    }
}
