//! Configuration module for gwcosmology-names.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Public/private access levels
//! - Configuration validation

pub mod access;
pub mod loader;
pub mod validation;

pub use access::Access;
pub use loader::{Config, OutputConfig, DEFAULT_PUBLIC_HTML};
pub use validation::validate_config;
