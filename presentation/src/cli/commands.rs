//! CLI command definitions.
//!
//! Label-valued arguments (task types, phases, modes, stacks) stay as
//! strings here and are parsed into domain types by the binary, so the
//! error messages can say which argument carried the bad label.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// JSON document
    Json,
}

/// CLI arguments for copilot-foreman
#[derive(Parser, Debug)]
#[command(name = "copilot-foreman")]
#[command(author, version, about = "Deterministic task routing and delivery tracking")]
#[command(long_about = r#"
copilot-foreman is the routing and delivery core of an AI pair-programming
companion. It assigns each unit of work to exactly one specialist agent
from a fixed capability catalog, and tracks one delivery per session
through its phase order (plan -> implement -> verify by default), with
state persisted between invocations.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./foreman.toml      Project-level config
3. ~/.config/copilot-foreman/config.toml   Global config

Example:
  copilot-foreman start checkout-flow --mode delivery
  copilot-foreman route feature --stack rust --require-write
  copilot-foreman advance
  copilot-foreman skip --reason "blocked on design review"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Session identifier (defaults to the working directory name)
    #[arg(long, global = true, value_name = "ID")]
    pub session: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Override the session state directory
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the session's delivery state
    Status,

    /// Start a new delivery for this session
    Start {
        /// Human identifier for the delivery
        slug: String,

        /// Operating mode (delivery, quickfix, spike)
        #[arg(long, value_name = "MODE")]
        mode: Option<String>,

        /// Reference to a plan document
        #[arg(long, value_name = "PATH")]
        plan: Option<String>,
    },

    /// Complete the current phase and move to the next
    Advance,

    /// Skip the current phase with a reason
    Skip {
        /// Why the phase is being skipped
        #[arg(long, value_name = "TEXT")]
        reason: String,
    },

    /// Select the agent for a unit of work
    Route {
        /// Task type (feature, bugfix, refactor, review, test, docs,
        /// performance, release)
        task_type: String,

        /// Restrict to these agents (comma-separated allow-list)
        #[arg(long, value_name = "AGENT", value_delimiter = ',')]
        available: Option<Vec<String>>,

        /// Only consider agents allowed to modify the workspace
        #[arg(long)]
        require_write: bool,

        /// Disable the delivery-family preference
        #[arg(long)]
        no_prefer_delivery: bool,

        /// Only consider agents declared for this phase
        #[arg(long, value_name = "PHASE")]
        phase: Option<String>,

        /// Only consider agents supporting this mode
        #[arg(long, value_name = "MODE")]
        mode: Option<String>,

        /// Only consider agents applicable to this stack
        #[arg(long, value_name = "STACK")]
        stack: Option<String>,
    },

    /// List the agent roster
    Agents {
        /// Only agents serving this task type
        #[arg(long, value_name = "TASK")]
        task: Option<String>,

        /// Only agents declared for this phase
        #[arg(long, value_name = "PHASE")]
        phase: Option<String>,

        /// Only agents allowed to modify the workspace
        #[arg(long)]
        writers: bool,
    },

    /// Show configuration file locations
    ShowConfig,
}
