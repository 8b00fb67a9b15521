//! Port for loading the capability catalog.
//!
//! The catalog comes from an external declarative source (in practice a
//! TOML document). It is loaded once per process; a failed load is fatal
//! to the triggering call and is never retried here; the caller decides
//! whether to try again.

use foreman_domain::{CapabilityCatalog, CatalogError};
use thiserror::Error;

/// Why a catalog could not be produced.
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("could not read catalog source {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog document is malformed: {0}")]
    Malformed(String),

    #[error("unknown {field} label '{value}' ({context})")]
    UnknownLabel {
        field: &'static str,
        value: String,
        context: String,
    },

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Port producing a validated, read-only catalog.
pub trait CatalogSource {
    fn load(&self) -> Result<CapabilityCatalog, CatalogLoadError>;
}
