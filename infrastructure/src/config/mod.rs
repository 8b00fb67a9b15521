//! Configuration loading.

pub mod file_config;
pub mod loader;

pub use file_config::{
    FileCatalogConfig, FileConfig, FileDeliveryConfig, FileOutputConfig, FileRoutingConfig,
    FileStateConfig,
};
pub use loader::ConfigLoader;
