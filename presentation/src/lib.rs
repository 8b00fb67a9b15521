//! Presentation layer for copilot-foreman
//!
//! This crate contains CLI definitions and output formatters. It renders
//! domain state; it never decides anything.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
