//! Agent domain entities.

use super::value_objects::AgentName;
use crate::workflow::{Mode, Phase, Stack, TaskType};
use std::fmt;

/// Model tier an agent runs on.
///
/// The tier is descriptive metadata for the caller that executes the
/// agent; routing never filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    /// Cheap and fast, for mechanical work
    Light,
    /// The everyday default
    Standard,
    /// Strongest reasoning, for planning and review
    Premium,
}

impl ModelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelTier::Light => "light",
            ModelTier::Standard => "standard",
            ModelTier::Premium => "premium",
        }
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ModelTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ModelTier::Light),
            "standard" => Ok(ModelTier::Standard),
            "premium" => Ok(ModelTier::Premium),
            _ => Err(format!("Invalid model tier: {}", s)),
        }
    }
}

/// Layer classification of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentLayer {
    /// The delivery family: planners, engineers, reviewers driving a delivery
    Core,
    /// Workflow support: triage, release stewardship
    Process,
    /// Stack and discipline specialists
    Engineering,
}

impl AgentLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentLayer::Core => "core",
            AgentLayer::Process => "process",
            AgentLayer::Engineering => "engineering",
        }
    }
}

impl fmt::Display for AgentLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core" => Ok(AgentLayer::Core),
            "process" => Ok(AgentLayer::Process),
            "engineering" => Ok(AgentLayer::Engineering),
            _ => Err(format!("Invalid agent layer: {}", s)),
        }
    }
}

/// Which technology stacks an agent applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackScope {
    /// The universal marker: applicable to any stack
    Universal,
    /// Applicable only to the listed stacks
    Only(Vec<Stack>),
}

impl StackScope {
    /// Whether this scope covers the given stack.
    ///
    /// The universal marker always passes.
    pub fn covers(&self, stack: Stack) -> bool {
        match self {
            StackScope::Universal => true,
            StackScope::Only(stacks) => stacks.contains(&stack),
        }
    }
}

/// A specialist worker in the capability catalog (Entity).
///
/// Profiles are immutable once loaded; identity is the [`AgentName`].
/// Everything here describes *eligibility* (which task types, phases,
/// stacks, and modes the agent may be selected for), not behavior. The
/// agent's prompt content and execution are external concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentProfile {
    /// Unique identity within the catalog
    pub name: AgentName,
    /// Model tier the agent runs on
    pub tier: ModelTier,
    /// Whether the agent is allowed to modify the workspace
    pub can_write: bool,
    /// Layer classification
    pub layer: AgentLayer,
    /// Phases the agent may operate in
    pub phases: Vec<Phase>,
    /// Task types the agent serves
    pub task_types: Vec<TaskType>,
    /// Stacks the agent applies to
    pub stacks: StackScope,
    /// Orchestration modes the agent supports
    pub modes: Vec<Mode>,
    /// Whether the agent is an optional extra rather than part of the core roster
    pub optional: bool,
    /// Search keywords; non-authoritative, never used for routing decisions
    pub keywords: Vec<String>,
}

impl AgentProfile {
    /// Create a profile with the given identity and classification.
    ///
    /// Starts read-only, universal-stack, supporting every mode, with no
    /// declared phases or task types. Use the builder methods to fill in
    /// eligibility.
    pub fn new(name: impl Into<AgentName>, tier: ModelTier, layer: AgentLayer) -> Self {
        Self {
            name: name.into(),
            tier,
            can_write: false,
            layer,
            phases: Vec::new(),
            task_types: Vec::new(),
            stacks: StackScope::Universal,
            modes: Mode::all().to_vec(),
            optional: false,
            keywords: Vec::new(),
        }
    }

    /// Grant workspace write access.
    pub fn writes(mut self) -> Self {
        self.can_write = true;
        self
    }

    pub fn with_phases(mut self, phases: impl Into<Vec<Phase>>) -> Self {
        self.phases = phases.into();
        self
    }

    pub fn with_task_types(mut self, task_types: impl Into<Vec<TaskType>>) -> Self {
        self.task_types = task_types.into();
        self
    }

    pub fn with_stacks(mut self, stacks: impl Into<Vec<Stack>>) -> Self {
        self.stacks = StackScope::Only(stacks.into());
        self
    }

    pub fn with_modes(mut self, modes: impl Into<Vec<Mode>>) -> Self {
        self.modes = modes.into();
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    /// Whether the agent may operate in the given phase.
    pub fn operates_in(&self, phase: Phase) -> bool {
        self.phases.contains(&phase)
    }

    /// Whether the agent serves the given task type.
    pub fn serves(&self, task_type: TaskType) -> bool {
        self.task_types.contains(&task_type)
    }

    /// Whether the agent supports the given orchestration mode.
    pub fn supports_mode(&self, mode: Mode) -> bool {
        self.modes.contains(&mode)
    }

    /// Whether the agent belongs to the delivery family.
    ///
    /// Core-layer agents and agents carrying the `delivery-` name prefix
    /// drive deliveries directly; routing prefers them for delivery work
    /// unless told otherwise.
    pub fn is_delivery_family(&self) -> bool {
        self.layer == AgentLayer::Core || self.name.as_str().starts_with("delivery-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AgentProfile {
        AgentProfile::new("delivery-engineer", ModelTier::Standard, AgentLayer::Core)
            .writes()
            .with_phases(vec![Phase::Implement])
            .with_task_types(vec![TaskType::Feature, TaskType::Bugfix])
    }

    #[test]
    fn test_new_defaults() {
        let p = AgentProfile::new("triage-scout", ModelTier::Light, AgentLayer::Process);
        assert!(!p.can_write);
        assert!(!p.optional);
        assert_eq!(p.stacks, StackScope::Universal);
        assert_eq!(p.modes, Mode::all().to_vec());
        assert!(p.phases.is_empty());
    }

    #[test]
    fn test_eligibility_checks() {
        let p = profile();
        assert!(p.operates_in(Phase::Implement));
        assert!(!p.operates_in(Phase::Verify));
        assert!(p.serves(TaskType::Bugfix));
        assert!(!p.serves(TaskType::Docs));
        assert!(p.supports_mode(Mode::Quickfix));
    }

    #[test]
    fn test_stack_scope_universal_always_covers() {
        assert!(StackScope::Universal.covers(Stack::Rust));
        assert!(StackScope::Universal.covers(Stack::Go));
        let scoped = StackScope::Only(vec![Stack::Rust]);
        assert!(scoped.covers(Stack::Rust));
        assert!(!scoped.covers(Stack::Python));
    }

    #[test]
    fn test_delivery_family_by_layer_or_prefix() {
        assert!(profile().is_delivery_family());
        let by_prefix =
            AgentProfile::new("delivery-scout", ModelTier::Light, AgentLayer::Process);
        assert!(by_prefix.is_delivery_family());
        let outsider =
            AgentProfile::new("rust-specialist", ModelTier::Standard, AgentLayer::Engineering);
        assert!(!outsider.is_delivery_family());
    }
}
