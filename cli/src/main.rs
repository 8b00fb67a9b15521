//! CLI entrypoint for copilot-foreman
//!
//! This is the main binary that wires together all layers using
//! dependency injection: the TOML catalog source and file session store
//! from the infrastructure layer feed the routing use case and the
//! delivery coordinator, and results are rendered by the presentation
//! layer. Each invocation is short-lived; all continuity lives in the
//! session state document.

use anyhow::{Context, Result};
use clap::Parser;
use foreman_application::ports::catalog_source::CatalogSource;
use foreman_application::{DeliveryCoordinator, RouteTaskUseCase};
use foreman_domain::{
    AgentName, CatalogFilter, DeliveryState, Mode, Phase, RoutingRequest, SessionId, Stack,
    TaskType,
};
use foreman_infrastructure::{ConfigLoader, FileConfig, FileSessionStore, TomlCatalogSource};
use foreman_presentation::{Cli, Command, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Show config file locations without touching catalog or state.
    if matches!(cli.command, Command::ShowConfig) {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    // The catalog and routing table are loaded once and frozen; a refresh
    // is the next invocation doing its own full load.
    let catalog = Arc::new(TomlCatalogSource::new(config.catalog.path.clone()).load()?);

    let state_dir = cli
        .state_dir
        .clone()
        .unwrap_or_else(|| config.state.dir.clone());
    let store = Arc::new(FileSessionStore::new(state_dir));
    let session = resolve_session(cli.session.as_deref())?;
    info!(session = %session, "session resolved");
    let coordinator = DeliveryCoordinator::new(store, session);

    match cli.command {
        Command::Status => match coordinator.status() {
            Some(state) => print_state(&state, cli.output),
            None => match cli.output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_no_delivery()),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_no_delivery_json());
                }
            },
        },
        Command::Start { slug, mode, plan } => {
            let mode = match mode {
                Some(label) => parse_mode(&label)?,
                None => config.delivery.default_mode,
            };
            let state = coordinator.start(slug, mode, plan)?;
            print_state(&state, cli.output);
        }
        Command::Advance => {
            let state = coordinator.advance()?;
            print_state(&state, cli.output);
        }
        Command::Skip { reason } => {
            let state = coordinator.skip(&reason)?;
            print_state(&state, cli.output);
        }
        Command::Route {
            task_type,
            available,
            require_write,
            no_prefer_delivery,
            phase,
            mode,
            stack,
        } => {
            let request = build_request(
                &config,
                &task_type,
                available,
                require_write,
                no_prefer_delivery,
                phase.as_deref(),
                mode.as_deref(),
                stack.as_deref(),
            )?;

            // Drift detection runs against the session's active phase.
            let active_phase = coordinator
                .status()
                .filter(|state| !state.is_complete())
                .map(|state| state.current_phase);

            let routed = RouteTaskUseCase::new(catalog.clone()).execute(&request, active_phase)?;
            let warning = routed.warning.as_deref();
            match cli.output {
                OutputFormat::Text => {
                    print!(
                        "{}",
                        ConsoleFormatter::format_route(routed.agent.as_str(), warning)
                    );
                }
                OutputFormat::Json => {
                    println!(
                        "{}",
                        ConsoleFormatter::format_route_json(routed.agent.as_str(), warning)
                    );
                }
            }
        }
        Command::Agents { task, phase, writers } => {
            let filter = CatalogFilter {
                task_type: task.as_deref().map(parse_task_type).transpose()?,
                phase: phase.as_deref().map(parse_phase).transpose()?,
                layer: None,
                writers_only: writers,
            };
            let agents = catalog.list(&filter);
            match cli.output {
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_agents(&agents)),
                OutputFormat::Json => {
                    println!("{}", ConsoleFormatter::format_agents_json(&agents));
                }
            }
        }
        // Handled before config loading.
        Command::ShowConfig => {}
    }

    Ok(())
}

/// Explicit session id, or the working directory name as a fallback.
fn resolve_session(explicit: Option<&str>) -> Result<SessionId> {
    if let Some(label) = explicit {
        return Ok(SessionId::from_label(label));
    }
    let cwd = std::env::current_dir().context("could not determine working directory")?;
    let label = cwd
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(SessionId::from_label(&label))
}

#[allow(clippy::too_many_arguments)]
fn build_request(
    config: &FileConfig,
    task_type: &str,
    available: Option<Vec<String>>,
    require_write: bool,
    no_prefer_delivery: bool,
    phase: Option<&str>,
    mode: Option<&str>,
    stack: Option<&str>,
) -> Result<RoutingRequest> {
    let mut request = RoutingRequest::new(parse_task_type(task_type)?);
    if let Some(agents) = available {
        request = request.with_available(agents.into_iter().map(AgentName::new).collect());
    }
    if require_write {
        request = request.requiring_write();
    }
    let prefer_delivery = !no_prefer_delivery && config.routing.prefer_delivery;
    if !prefer_delivery {
        request = request.without_delivery_preference();
    }
    if let Some(label) = phase {
        request = request.with_phase(parse_phase(label)?);
    }
    if let Some(label) = mode {
        request = request.with_mode(parse_mode(label)?);
    }
    if let Some(label) = stack {
        request = request.with_stack(parse_stack(label)?);
    }
    Ok(request)
}

fn print_state(state: &DeliveryState, output: OutputFormat) {
    match output {
        OutputFormat::Text => print!("{}", ConsoleFormatter::format_state(state)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_state_json(state)),
    }
}

fn parse_task_type(label: &str) -> Result<TaskType> {
    label.parse().map_err(anyhow::Error::msg)
}

fn parse_phase(label: &str) -> Result<Phase> {
    label.parse().map_err(anyhow::Error::msg)
}

fn parse_mode(label: &str) -> Result<Mode> {
    label.parse().map_err(anyhow::Error::msg)
}

fn parse_stack(label: &str) -> Result<Stack> {
    label.parse().map_err(anyhow::Error::msg)
}
