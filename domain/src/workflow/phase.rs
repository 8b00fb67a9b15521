//! Phase label for the delivery lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named lifecycle stage of a delivery (Value Object).
///
/// Each phase carries an expected worker specialization: planning wants a
/// read-only strategist, implementation wants a writer, verification wants
/// a reviewer. Which phases a delivery actually visits, and in which order,
/// is fixed by its [`Mode`](super::Mode) when the delivery starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Shape the approach before touching code
    Plan,
    /// Make the change
    Implement,
    /// Review and validate the result
    Verify,
}

impl Phase {
    /// Get the string identifier for this phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Plan => "plan",
            Phase::Implement => "implement",
            Phase::Verify => "verify",
        }
    }

    /// Human-readable name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Plan => "Plan",
            Phase::Implement => "Implement",
            Phase::Verify => "Verify",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plan" => Ok(Phase::Plan),
            "implement" => Ok(Phase::Implement),
            "verify" => Ok(Phase::Verify),
            _ => Err(format!("Invalid phase: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Phase::Plan), "plan");
        assert_eq!(format!("{}", Phase::Implement), "implement");
        assert_eq!(format!("{}", Phase::Verify), "verify");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("plan".parse::<Phase>().ok(), Some(Phase::Plan));
        assert_eq!("IMPLEMENT".parse::<Phase>().ok(), Some(Phase::Implement));
        assert_eq!("verify".parse::<Phase>().ok(), Some(Phase::Verify));
        assert!("review".parse::<Phase>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Phase::Implement).unwrap();
        assert_eq!(json, "\"implement\"");
        let back: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Phase::Implement);
    }
}
