//! Deterministic task routing.
//!
//! [`route`] is the single decision point that picks one agent for a unit
//! of work. It is a pure function of the catalog and the request: the same
//! inputs always produce the same agent or the same error. Constraints are
//! applied as ordered filter stages, and when a stage empties the
//! candidate set the resulting [`RoutingError`] names that stage. An
//! explicit constraint is never silently relaxed.

use crate::agent::{AgentName, AgentProfile};
use crate::catalog::CapabilityCatalog;
use crate::workflow::{Mode, Phase, Stack, TaskType};
use thiserror::Error;
use tracing::debug;

/// Why routing found no agent.
///
/// Each variant corresponds to the filter stage that ran out of
/// candidates, so callers can tell "nobody serves this task type" apart
/// from "your availability list excluded everyone who does".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("no agent is registered for task type '{0}'")]
    UnknownTaskType(TaskType),

    #[error("no registered agent for task type '{0}' is in the available set")]
    NoAvailableMatch(TaskType),

    #[error("no write-capable agent remains for task type '{0}'")]
    NoWriteCapableMatch(TaskType),

    #[error("no agent for task type '{0}' matches the requested phase/mode/stack")]
    NoPhaseModeStackMatch(TaskType),
}

/// Per-call routing constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingRequest {
    /// The kind of work to route (required).
    pub task_type: TaskType,
    /// Allow-list of agents the caller can actually run right now.
    /// `None` means every catalog agent is available; an empty list means
    /// nothing is, which is a failure rather than "allow all".
    pub available: Option<Vec<AgentName>>,
    /// Only select agents allowed to modify the workspace.
    pub require_write: bool,
    /// Prefer delivery-family agents when any survive the filters.
    pub prefer_delivery: bool,
    /// Only select agents declared for this phase.
    pub phase: Option<Phase>,
    /// Only select agents supporting this orchestration mode.
    pub mode: Option<Mode>,
    /// Only select agents applicable to this stack.
    pub stack: Option<Stack>,
}

impl RoutingRequest {
    pub fn new(task_type: TaskType) -> Self {
        Self {
            task_type,
            available: None,
            require_write: false,
            prefer_delivery: true,
            phase: None,
            mode: None,
            stack: None,
        }
    }

    pub fn with_available(mut self, available: Vec<AgentName>) -> Self {
        self.available = Some(available);
        self
    }

    pub fn requiring_write(mut self) -> Self {
        self.require_write = true;
        self
    }

    /// Disable the delivery-family preference partition.
    pub fn without_delivery_preference(mut self) -> Self {
        self.prefer_delivery = false;
        self
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_stack(mut self, stack: Stack) -> Self {
        self.stack = Some(stack);
        self
    }
}

/// Select exactly one agent for the request, or fail with the stage that
/// emptied the candidate set.
pub fn route(
    catalog: &CapabilityCatalog,
    request: &RoutingRequest,
) -> Result<AgentName, RoutingError> {
    let task_type = request.task_type;

    // Stage 1: resolve the ordered candidate list for the task type.
    let names = catalog
        .routing()
        .candidates(task_type)
        .ok_or(RoutingError::UnknownTaskType(task_type))?;
    // Candidates were validated against the roster at catalog construction.
    let mut candidates: Vec<&AgentProfile> = names
        .iter()
        .filter_map(|name| catalog.get(name.as_str()))
        .collect();
    if candidates.is_empty() {
        return Err(RoutingError::UnknownTaskType(task_type));
    }

    // Stage 2: restrict to the caller's availability list.
    if let Some(available) = &request.available {
        candidates.retain(|p| available.contains(&p.name));
        if candidates.is_empty() {
            return Err(RoutingError::NoAvailableMatch(task_type));
        }
    }

    // Stage 3: write capability is a hard constraint.
    if request.require_write {
        candidates.retain(|p| p.can_write);
        if candidates.is_empty() {
            return Err(RoutingError::NoWriteCapableMatch(task_type));
        }
    }

    // Stage 4: phase / mode / stack eligibility.
    if request.phase.is_some() || request.mode.is_some() || request.stack.is_some() {
        candidates.retain(|p| {
            request.phase.is_none_or(|phase| p.operates_in(phase))
                && request.mode.is_none_or(|mode| p.supports_mode(mode))
                && request.stack.is_none_or(|stack| p.stacks.covers(stack))
        });
        if candidates.is_empty() {
            return Err(RoutingError::NoPhaseModeStackMatch(task_type));
        }
    }

    // Stage 5: delivery-family preference. A preference, not a filter:
    // when no family member survives, the other group is used as-is.
    if request.prefer_delivery {
        let family: Vec<&AgentProfile> = candidates
            .iter()
            .copied()
            .filter(|p| p.is_delivery_family())
            .collect();
        if !family.is_empty() {
            candidates = family;
        }
    }

    // Stage 6: first survivor wins, preserving table order.
    let chosen = candidates[0].name.clone();
    debug!(task_type = %task_type, agent = %chosen, "routed task");
    Ok(chosen)
}
