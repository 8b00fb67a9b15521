//! Route Task use case.
//!
//! Thin wrapper around the domain routing engine: selects one agent and
//! consults the advisory guard against the phase the session's delivery
//! currently sits in, so the caller sees potential drift alongside the
//! selection. The request's own phase filter is a hard constraint; the
//! active phase passed here is only compared, never enforced.

use foreman_domain::{
    AgentName, CapabilityCatalog, Phase, RoutingError, RoutingRequest,
    phase_alignment_warning, route,
};
use std::sync::Arc;
use tracing::info;

/// Result of routing one unit of work.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedTask {
    /// The selected agent; execution is the caller's job.
    pub agent: AgentName,
    /// Advisory phase-drift warning, present only when the selection looks
    /// inconsistent with the active delivery phase. Never blocks.
    pub warning: Option<String>,
}

/// Use case for selecting a specialist agent for a task.
pub struct RouteTaskUseCase {
    catalog: Arc<CapabilityCatalog>,
}

impl RouteTaskUseCase {
    pub fn new(catalog: Arc<CapabilityCatalog>) -> Self {
        Self { catalog }
    }

    /// Route a task, checking the choice against the session's active
    /// phase (if any).
    pub fn execute(
        &self,
        request: &RoutingRequest,
        active_phase: Option<Phase>,
    ) -> Result<RoutedTask, RoutingError> {
        let agent = route(&self.catalog, request)?;
        let warning = match phase_alignment_warning(
            &self.catalog,
            Some(agent.as_str()),
            active_phase,
        ) {
            w if w.is_empty() => None,
            w => Some(w),
        };

        info!(task_type = %request.task_type, agent = %agent, "task routed");
        Ok(RoutedTask { agent, warning })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foreman_domain::{AgentLayer, AgentProfile, ModelTier, RoutingTable, TaskType};
    use std::collections::BTreeMap;

    fn use_case() -> RouteTaskUseCase {
        let agents = vec![
            AgentProfile::new("delivery-engineer", ModelTier::Standard, AgentLayer::Core)
                .writes()
                .with_phases(vec![Phase::Implement])
                .with_task_types(vec![TaskType::Feature]),
        ];
        let mut entries = BTreeMap::new();
        entries.insert(
            TaskType::Feature,
            vec![AgentName::new("delivery-engineer")],
        );
        let catalog =
            CapabilityCatalog::new(agents, RoutingTable::new(entries)).unwrap();
        RouteTaskUseCase::new(Arc::new(catalog))
    }

    #[test]
    fn routes_and_stays_quiet_on_aligned_phase() {
        let routed = use_case()
            .execute(
                &RoutingRequest::new(TaskType::Feature),
                Some(Phase::Implement),
            )
            .unwrap();
        assert_eq!(routed.agent.as_str(), "delivery-engineer");
        assert_eq!(routed.warning, None);
    }

    #[test]
    fn warns_when_selection_drifts_from_active_phase() {
        // A builder selected while the delivery sits in verify.
        let routed = use_case()
            .execute(&RoutingRequest::new(TaskType::Feature), Some(Phase::Verify))
            .unwrap();
        let warning = routed.warning.expect("expected a drift warning");
        assert!(warning.contains("phase inconsistency"));
    }

    #[test]
    fn no_active_phase_means_no_warning() {
        let routed = use_case()
            .execute(&RoutingRequest::new(TaskType::Feature), None)
            .unwrap();
        assert_eq!(routed.warning, None);
    }

    #[test]
    fn propagates_routing_errors() {
        let err = use_case()
            .execute(&RoutingRequest::new(TaskType::Docs), None)
            .unwrap_err();
        assert_eq!(err, RoutingError::UnknownTaskType(TaskType::Docs));
    }
}
