//! Infrastructure layer for copilot-foreman
//!
//! This crate contains the adapters behind the application ports: the
//! declarative TOML catalog source, the file-backed session state store,
//! and the multi-source configuration loader.

pub mod catalog;
pub mod config;
pub mod state;

// Re-export commonly used types
pub use catalog::TomlCatalogSource;
pub use config::{ConfigLoader, FileConfig};
pub use state::FileSessionStore;
