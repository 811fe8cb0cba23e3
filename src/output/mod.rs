//! Output module for console output.
//!
//! Provides:
//! - Colored status messages
//! - Name printing for the CLI

pub mod console;

pub use console::{name_json, print_artifact_names, print_error, print_info, print_name, print_warning};
