//! Declarative catalog source.

pub mod toml_catalog;

pub use toml_catalog::{DEFAULT_CATALOG, TomlCatalogSource};
