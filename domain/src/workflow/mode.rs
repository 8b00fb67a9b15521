//! Operating modes and their phase orders.
//!
//! A mode is a named operating policy: it fixes which phases a delivery
//! visits and in which order, and it participates in agent eligibility
//! (an [`AgentProfile`](crate::AgentProfile) declares the modes it
//! supports). The phase order is resolved exactly once, when a delivery
//! starts, and never changes for that delivery's lifetime.

use super::phase::Phase;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating policy for a delivery (Value Object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Full lifecycle: plan, implement, verify
    #[default]
    Delivery,
    /// Small urgent change, no planning phase
    Quickfix,
    /// Exploratory work, no verification phase
    Spike,
}

impl Mode {
    /// The ordered phases a delivery in this mode walks through.
    ///
    /// Always non-empty.
    pub fn phase_order(&self) -> &'static [Phase] {
        match self {
            Mode::Delivery => &[Phase::Plan, Phase::Implement, Phase::Verify],
            Mode::Quickfix => &[Phase::Implement, Phase::Verify],
            Mode::Spike => &[Phase::Plan, Phase::Implement],
        }
    }

    /// Get the string identifier for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Delivery => "delivery",
            Mode::Quickfix => "quickfix",
            Mode::Spike => "spike",
        }
    }

    /// Get a human-readable description of this mode
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Delivery => "Delivery: full lifecycle (plan -> implement -> verify)",
            Mode::Quickfix => "Quickfix: urgent change (implement -> verify)",
            Mode::Spike => "Spike: exploration (plan -> implement)",
        }
    }

    /// All known modes, in display order.
    pub fn all() -> &'static [Mode] {
        &[Mode::Delivery, Mode::Quickfix, Mode::Spike]
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "delivery" => Ok(Mode::Delivery),
            "quickfix" | "hotfix" => Ok(Mode::Quickfix),
            "spike" => Ok(Mode::Spike),
            _ => Err(format!("Invalid mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(Mode::default(), Mode::Delivery);
    }

    #[test]
    fn test_phase_order_is_fixed_and_nonempty() {
        for mode in Mode::all() {
            assert!(!mode.phase_order().is_empty());
        }
        assert_eq!(
            Mode::Delivery.phase_order(),
            &[Phase::Plan, Phase::Implement, Phase::Verify]
        );
        assert_eq!(
            Mode::Quickfix.phase_order(),
            &[Phase::Implement, Phase::Verify]
        );
        assert_eq!(Mode::Spike.phase_order(), &[Phase::Plan, Phase::Implement]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("delivery".parse::<Mode>().ok(), Some(Mode::Delivery));
        assert_eq!("hotfix".parse::<Mode>().ok(), Some(Mode::Quickfix));
        assert_eq!("Spike".parse::<Mode>().ok(), Some(Mode::Spike));
        assert!("ensemble".parse::<Mode>().is_err());
    }
}
