//! Filesystem naming module.
//!
//! Provides:
//! - Standard filenames for pipeline artifacts
//! - Output locations under the configured web root

pub mod artifacts;
pub mod naming;
pub mod paths;

pub use artifacts::ArtifactNames;
pub use naming::{
    distance_name, galaxy_name, h0_plot_name, h0_proprietary_filename, h0_public_filename,
    manifest_filename, skymap_name, DISTANCE_COLUMN,
};
pub use paths::{h0_files_dict_name, h0_name};
