//! Capability catalog: the agent roster plus the routing table.
//!
//! The catalog is loaded once from a declarative source, validated on
//! construction, and read-only afterwards. There is no mutation API; a
//! refresh means building a whole new catalog through the source again.

use crate::agent::{AgentLayer, AgentName, AgentProfile};
use crate::workflow::{Phase, TaskType};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::warn;

/// Structural problems detected while assembling a catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("duplicate agent name in catalog: {0}")]
    DuplicateAgent(AgentName),

    #[error("routing table for task type '{task_type}' references unknown agent '{agent}'")]
    UnknownRoutingCandidate {
        task_type: TaskType,
        agent: AgentName,
    },
}

/// Ordered candidate lists per task type, most preferred first.
///
/// The table is independent of each profile's own task-type set, but the
/// two are expected to agree; disagreements are logged at load time and
/// the table wins at routing time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutingTable {
    entries: BTreeMap<TaskType, Vec<AgentName>>,
}

impl RoutingTable {
    pub fn new(entries: BTreeMap<TaskType, Vec<AgentName>>) -> Self {
        Self { entries }
    }

    /// The ordered candidates for a task type, or `None` when the task
    /// type is not registered.
    pub fn candidates(&self, task_type: TaskType) -> Option<&[AgentName]> {
        self.entries.get(&task_type).map(Vec::as_slice)
    }

    /// Registered task types, in stable order.
    pub fn task_types(&self) -> impl Iterator<Item = TaskType> + '_ {
        self.entries.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Optional narrowing criteria for [`CapabilityCatalog::list`].
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    pub task_type: Option<TaskType>,
    pub phase: Option<Phase>,
    pub layer: Option<AgentLayer>,
    pub writers_only: bool,
}

impl CatalogFilter {
    fn matches(&self, profile: &AgentProfile) -> bool {
        if let Some(task_type) = self.task_type
            && !profile.serves(task_type)
        {
            return false;
        }
        if let Some(phase) = self.phase
            && !profile.operates_in(phase)
        {
            return false;
        }
        if let Some(layer) = self.layer
            && profile.layer != layer
        {
            return false;
        }
        if self.writers_only && !profile.can_write {
            return false;
        }
        true
    }
}

/// The read-only roster of agents and their routing preferences.
#[derive(Debug, Clone)]
pub struct CapabilityCatalog {
    agents: Vec<AgentProfile>,
    index: HashMap<String, usize>,
    routing: RoutingTable,
}

impl CapabilityCatalog {
    /// Assemble and validate a catalog.
    ///
    /// Rejects duplicate agent names and routing candidates that name no
    /// known agent. A candidate whose profile does not declare the task
    /// type it is routed for is tolerated with a warning.
    pub fn new(
        agents: Vec<AgentProfile>,
        routing: RoutingTable,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(agents.len());
        for (i, agent) in agents.iter().enumerate() {
            if index.insert(agent.name.as_str().to_string(), i).is_some() {
                return Err(CatalogError::DuplicateAgent(agent.name.clone()));
            }
        }

        for task_type in routing.task_types() {
            for candidate in routing.candidates(task_type).unwrap_or_default() {
                let Some(&i) = index.get(candidate.as_str()) else {
                    return Err(CatalogError::UnknownRoutingCandidate {
                        task_type,
                        agent: candidate.clone(),
                    });
                };
                if !agents[i].serves(task_type) {
                    warn!(
                        agent = %candidate,
                        task_type = %task_type,
                        "routing table lists an agent that does not declare this task type"
                    );
                }
            }
        }

        Ok(Self {
            agents,
            index,
            routing,
        })
    }

    /// Look up a profile by name.
    pub fn get(&self, name: &str) -> Option<&AgentProfile> {
        self.index.get(name).map(|&i| &self.agents[i])
    }

    /// List profiles matching the filter, preserving catalog order.
    pub fn list(&self, filter: &CatalogFilter) -> Vec<&AgentProfile> {
        self.agents.iter().filter(|p| filter.matches(p)).collect()
    }

    /// All profiles in catalog order.
    pub fn agents(&self) -> &[AgentProfile] {
        &self.agents
    }

    pub fn routing(&self) -> &RoutingTable {
        &self.routing
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
