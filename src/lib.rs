//! gwcosmology-names - standard filenames for the gravitational-wave cosmology pipeline
//!
//! This library builds the names the H0 pipeline uses to find its artifacts.
//!
//! # Features
//!
//! - Galaxy catalog filenames
//! - Public and proprietary H0 posterior locations
//! - H0 plot filenames
//! - Public and private manifest locations
//! - Configurable web root instead of a fixed home directory
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use gwcosmology_names::{galaxy_name, h0_name, Config};
//!
//! let config = Config::with_public_html("/srv/www");
//!
//! assert_eq!(galaxy_name("S190814bv", "glade"), "galaxy-S190814bv-glade.json");
//! assert_eq!(
//!     h0_name(&config, "S190814bv", "bayestar.fits.gz", "glade", false),
//!     PathBuf::from("/srv/www/cgi-bin/H0-public-S190814bv-bayestar-glade.json"),
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use config::{Access, Config};
pub use error::{Error, Result};
pub use fs::{
    distance_name, galaxy_name, h0_files_dict_name, h0_name, h0_plot_name, skymap_name,
    ArtifactNames,
};
