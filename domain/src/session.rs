//! Session identity.

use serde::{Deserialize, Serialize};

/// Addressable unit of persisted state for one ongoing working context.
///
/// A session holds at most one non-terminal delivery at a time. The id is
/// slugified so it stays safe to use as a document key (e.g. a file name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Build a session id from a free-form label.
    ///
    /// Lowercases, maps runs of non-alphanumeric characters to single
    /// dashes, and trims. An empty or fully-stripped label becomes
    /// `default`.
    pub fn from_label(label: &str) -> Self {
        let mut slug = String::with_capacity(label.len());
        let mut last_dash = true;
        for c in label.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        let slug = slug.trim_matches('-').to_string();
        if slug.is_empty() {
            Self("default".to_string())
        } else {
            Self(slug)
        }
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugification() {
        assert_eq!(SessionId::from_label("My Project").as_str(), "my-project");
        assert_eq!(
            SessionId::from_label("  weird//path\\name  ").as_str(),
            "weird-path-name"
        );
        assert_eq!(SessionId::from_label("already-fine").as_str(), "already-fine");
    }

    #[test]
    fn test_empty_label_falls_back_to_default() {
        assert_eq!(SessionId::from_label("").as_str(), "default");
        assert_eq!(SessionId::from_label("///").as_str(), "default");
        assert_eq!(SessionId::default().as_str(), "default");
    }
}
