//! Advisory phase consistency guard.
//!
//! Detects drift between the agent a caller is about to run and the phase
//! a delivery currently sits in: a builder agent paired with the verify
//! phase, or a reviewer paired with implementation. The guard only
//! describes the mismatch; whether to act on it is the caller's call.

use crate::agent::AgentProfile;
use crate::catalog::CapabilityCatalog;
use crate::workflow::Phase;

/// Check an agent/phase pairing for drift.
///
/// Returns an empty string when either argument is missing, the agent is
/// not in the catalog, or the pairing is compatible. Otherwise returns a
/// one-line warning mentioning "phase inconsistency". Never fails and
/// never blocks.
pub fn phase_alignment_warning(
    catalog: &CapabilityCatalog,
    agent_name: Option<&str>,
    phase: Option<Phase>,
) -> String {
    let (Some(name), Some(phase)) = (agent_name, phase) else {
        return String::new();
    };
    let Some(profile) = catalog.get(name) else {
        return String::new();
    };

    if is_builder(profile) && phase == Phase::Verify {
        return format!(
            "phase inconsistency: agent '{}' specializes in implementation work, \
             but the {} phase is active",
            name, phase
        );
    }
    if is_reviewer(profile) && phase == Phase::Implement {
        return format!(
            "phase inconsistency: agent '{}' specializes in review work, \
             but the {} phase is active",
            name, phase
        );
    }
    String::new()
}

/// Implementation family: declares implement but not verify.
fn is_builder(profile: &AgentProfile) -> bool {
    profile.operates_in(Phase::Implement) && !profile.operates_in(Phase::Verify)
}

/// Review family: declares verify but not implement.
fn is_reviewer(profile: &AgentProfile) -> bool {
    profile.operates_in(Phase::Verify) && !profile.operates_in(Phase::Implement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentLayer, ModelTier};
    use crate::catalog::RoutingTable;
    use crate::workflow::TaskType;
    use std::collections::BTreeMap;

    fn catalog() -> CapabilityCatalog {
        let agents = vec![
            AgentProfile::new("delivery-engineer", ModelTier::Standard, AgentLayer::Core)
                .writes()
                .with_phases(vec![Phase::Implement])
                .with_task_types(vec![TaskType::Feature]),
            AgentProfile::new("delivery-reviewer", ModelTier::Premium, AgentLayer::Core)
                .with_phases(vec![Phase::Verify])
                .with_task_types(vec![TaskType::Review]),
            AgentProfile::new("rust-specialist", ModelTier::Standard, AgentLayer::Engineering)
                .writes()
                .with_phases(vec![Phase::Implement, Phase::Verify])
                .with_task_types(vec![TaskType::Feature]),
        ];
        CapabilityCatalog::new(agents, RoutingTable::new(BTreeMap::new())).unwrap()
    }

    #[test]
    fn missing_arguments_yield_empty_string() {
        let catalog = catalog();
        assert_eq!(phase_alignment_warning(&catalog, None, None), "");
        assert_eq!(
            phase_alignment_warning(&catalog, Some("delivery-engineer"), None),
            ""
        );
        assert_eq!(
            phase_alignment_warning(&catalog, None, Some(Phase::Verify)),
            ""
        );
    }

    #[test]
    fn unknown_agent_yields_empty_string() {
        assert_eq!(
            phase_alignment_warning(&catalog(), Some("ghost"), Some(Phase::Verify)),
            ""
        );
    }

    #[test]
    fn builder_at_verify_phase_warns() {
        let warning =
            phase_alignment_warning(&catalog(), Some("delivery-engineer"), Some(Phase::Verify));
        assert!(warning.contains("phase inconsistency"));
        assert!(warning.contains("delivery-engineer"));
    }

    #[test]
    fn reviewer_at_implement_phase_warns() {
        let warning =
            phase_alignment_warning(&catalog(), Some("delivery-reviewer"), Some(Phase::Implement));
        assert!(warning.contains("phase inconsistency"));
    }

    #[test]
    fn compatible_pairings_stay_silent() {
        let catalog = catalog();
        assert_eq!(
            phase_alignment_warning(&catalog, Some("delivery-engineer"), Some(Phase::Implement)),
            ""
        );
        assert_eq!(
            phase_alignment_warning(&catalog, Some("delivery-reviewer"), Some(Phase::Verify)),
            ""
        );
        // An agent declaring both families is compatible with either phase.
        assert_eq!(
            phase_alignment_warning(&catalog, Some("rust-specialist"), Some(Phase::Verify)),
            ""
        );
        // Plan is neither family's home turf; the guard stays quiet.
        assert_eq!(
            phase_alignment_warning(&catalog, Some("delivery-engineer"), Some(Phase::Plan)),
            ""
        );
    }
}
