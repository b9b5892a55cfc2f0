//! Configuration library for Vidly.
//!
//! Resolves where the settings come from (explicit path, environment, default
//! file locations or built-in defaults), applies `VIDLY_*` environment
//! overrides, and runs guard rails before the CLI builds its catalog client
//! and list view from the result.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{ApiConfig, Config, ConfigMetadata, ConfigSource, ListConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
