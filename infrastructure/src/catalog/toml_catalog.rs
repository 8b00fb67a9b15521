//! TOML-backed catalog source.
//!
//! Deserializes raw string-labeled records and converts them into domain
//! types at this boundary: every phase, mode, stack, tier, layer, and task
//! type label is validated here, so unknown labels become a
//! [`CatalogLoadError`] immediately instead of traveling through the core
//! as raw strings. A malformed document is fatal to the load; nothing is
//! retried.

use foreman_application::ports::catalog_source::{CatalogLoadError, CatalogSource};
use foreman_domain::{
    AgentName, AgentProfile, CapabilityCatalog, Mode, RoutingTable, StackScope, TaskType,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// The catalog shipped with the binary, used when no path is configured.
pub const DEFAULT_CATALOG: &str = include_str!("default_catalog.toml");

/// Raw agent record as written in the TOML document.
#[derive(Debug, Deserialize)]
struct RawAgent {
    name: String,
    tier: String,
    layer: String,
    #[serde(default)]
    can_write: bool,
    #[serde(default)]
    phases: Vec<String>,
    #[serde(default)]
    task_types: Vec<String>,
    /// Empty, or containing "any", means stack-universal.
    #[serde(default)]
    stacks: Vec<String>,
    /// Empty means available in every mode.
    #[serde(default)]
    modes: Vec<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawCatalogDoc {
    #[serde(default)]
    agent: Vec<RawAgent>,
    #[serde(default)]
    routing: BTreeMap<String, Vec<String>>,
}

/// Catalog source reading a TOML document from a file, or falling back to
/// the embedded default roster.
pub struct TomlCatalogSource {
    path: Option<PathBuf>,
}

impl TomlCatalogSource {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Source serving only the embedded default catalog.
    pub fn builtin() -> Self {
        Self { path: None }
    }
}

impl CatalogSource for TomlCatalogSource {
    fn load(&self) -> Result<CapabilityCatalog, CatalogLoadError> {
        let content = match &self.path {
            Some(path) => fs::read_to_string(path).map_err(|source| {
                CatalogLoadError::Unreadable {
                    path: path.display().to_string(),
                    source,
                }
            })?,
            None => DEFAULT_CATALOG.to_string(),
        };
        let catalog = parse_catalog(&content)?;
        info!(
            agents = catalog.len(),
            source = %self
                .path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "builtin".to_string()),
            "capability catalog loaded"
        );
        Ok(catalog)
    }
}

/// Parse and validate a full catalog document.
pub fn parse_catalog(content: &str) -> Result<CapabilityCatalog, CatalogLoadError> {
    let raw: RawCatalogDoc =
        toml::from_str(content).map_err(|e| CatalogLoadError::Malformed(e.to_string()))?;

    let agents = raw
        .agent
        .into_iter()
        .map(convert_agent)
        .collect::<Result<Vec<_>, _>>()?;

    let mut entries = BTreeMap::new();
    for (task_label, candidates) in raw.routing {
        let task_type: TaskType = parse_label(&task_label, "task type", "routing table")?;
        entries.insert(
            task_type,
            candidates.into_iter().map(AgentName::new).collect(),
        );
    }

    Ok(CapabilityCatalog::new(agents, RoutingTable::new(entries))?)
}

fn convert_agent(raw: RawAgent) -> Result<AgentProfile, CatalogLoadError> {
    let context = format!("agent '{}'", raw.name);

    let tier = parse_label(&raw.tier, "tier", &context)?;
    let layer = parse_label(&raw.layer, "layer", &context)?;
    let phases = raw
        .phases
        .iter()
        .map(|p| parse_label(p, "phase", &context))
        .collect::<Result<Vec<_>, _>>()?;
    let task_types = raw
        .task_types
        .iter()
        .map(|t| parse_label(t, "task type", &context))
        .collect::<Result<Vec<_>, _>>()?;

    let stacks = if raw.stacks.is_empty() || raw.stacks.iter().any(|s| s == "any") {
        StackScope::Universal
    } else {
        StackScope::Only(
            raw.stacks
                .iter()
                .map(|s| parse_label(s, "stack", &context))
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    let modes = if raw.modes.is_empty() {
        Mode::all().to_vec()
    } else {
        raw.modes
            .iter()
            .map(|m| parse_label(m, "mode", &context))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(AgentProfile {
        name: AgentName::new(raw.name),
        tier,
        can_write: raw.can_write,
        layer,
        phases,
        task_types,
        stacks,
        modes,
        optional: raw.optional,
        keywords: raw.keywords,
    })
}

fn parse_label<T>(
    value: &str,
    field: &'static str,
    context: &str,
) -> Result<T, CatalogLoadError>
where
    T: FromStr,
{
    value.parse().map_err(|_| CatalogLoadError::UnknownLabel {
        field,
        value: value.to_string(),
        context: context.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use foreman_domain::{RoutingRequest, route};

    #[test]
    fn default_catalog_loads_cleanly() {
        let catalog = TomlCatalogSource::builtin().load().unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.get("delivery-engineer").is_some());
        assert!(catalog.get("delivery-engineer").unwrap().can_write);
    }

    #[test]
    fn default_catalog_routes_every_registered_task_type() {
        let catalog = TomlCatalogSource::builtin().load().unwrap();
        let task_types: Vec<_> = catalog.routing().task_types().collect();
        assert!(!task_types.is_empty());
        for task_type in task_types {
            route(&catalog, &RoutingRequest::new(task_type)).unwrap();
        }
    }

    #[test]
    fn missing_file_is_unreadable() {
        let source = TomlCatalogSource::new(Some("/nonexistent/agents.toml".into()));
        assert!(matches!(
            source.load(),
            Err(CatalogLoadError::Unreadable { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(matches!(
            parse_catalog("[[agent]\nname ="),
            Err(CatalogLoadError::Malformed(_))
        ));
    }

    #[test]
    fn unknown_phase_label_is_rejected_with_context() {
        let doc = r#"
            [[agent]]
            name = "mystery"
            tier = "standard"
            layer = "core"
            phases = ["ship-it"]
        "#;
        match parse_catalog(doc) {
            Err(CatalogLoadError::UnknownLabel { field, value, context }) => {
                assert_eq!(field, "phase");
                assert_eq!(value, "ship-it");
                assert!(context.contains("mystery"));
            }
            other => panic!("expected UnknownLabel, got {:?}", other.err()),
        }
    }

    #[test]
    fn omitted_stacks_and_modes_default_to_universal() {
        let doc = r#"
            [[agent]]
            name = "generalist"
            tier = "standard"
            layer = "core"
            phases = ["implement"]
            task_types = ["feature"]
        "#;
        let catalog = parse_catalog(doc).unwrap();
        let agent = catalog.get("generalist").unwrap();
        assert_eq!(agent.stacks, StackScope::Universal);
        assert_eq!(agent.modes, Mode::all().to_vec());
    }

    #[test]
    fn duplicate_agent_is_a_load_error() {
        let doc = r#"
            [[agent]]
            name = "twin"
            tier = "light"
            layer = "process"

            [[agent]]
            name = "twin"
            tier = "light"
            layer = "process"
        "#;
        assert!(matches!(
            parse_catalog(doc),
            Err(CatalogLoadError::Invalid(_))
        ));
    }

    #[test]
    fn routing_entry_naming_unknown_agent_is_a_load_error() {
        let doc = r#"
            [[agent]]
            name = "lonely"
            tier = "light"
            layer = "process"

            [routing]
            feature = ["ghost"]
        "#;
        assert!(matches!(
            parse_catalog(doc),
            Err(CatalogLoadError::Invalid(_))
        ));
    }
}
