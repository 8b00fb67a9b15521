//! Application layer for copilot-foreman
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer; adapters for the ports live in the infrastructure
//! layer and are injected by the binary.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    catalog_source::{CatalogLoadError, CatalogSource},
    session_store::{InMemorySessionStore, SessionStore, SessionStoreError},
};
pub use use_cases::delivery_coordinator::{DeliveryCoordinator, DeliveryError};
pub use use_cases::route_task::{RouteTaskUseCase, RoutedTask};
