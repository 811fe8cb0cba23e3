//! Every standard name for one event/skymap/galaxy combination.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::{Access, Config};
use crate::fs::naming::{distance_name, galaxy_name, h0_plot_name, skymap_name};
use crate::fs::paths::{h0_files_dict_name, h0_name};

/// All names the pipeline uses for a single analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactNames {
    pub graceid: String,
    pub skymap: String,
    pub galaxy: String,
    pub distance_column: String,
    pub galaxy_file: String,
    pub h0_public: PathBuf,
    pub h0_proprietary: PathBuf,
    pub h0_plot: String,
    pub manifest_public: PathBuf,
    pub manifest_private: PathBuf,
}

impl ArtifactNames {
    /// Resolve every name for `graceid` with the given skymap and galaxy.
    pub fn new(config: &Config, graceid: &str, skymap: &str, galaxy: &str) -> Self {
        tracing::debug!(
            "Resolving names for {} (skymap {}, galaxy {})",
            graceid,
            skymap,
            galaxy
        );

        Self {
            graceid: graceid.to_string(),
            skymap: skymap_name(skymap).to_string(),
            galaxy: galaxy.to_string(),
            distance_column: distance_name().to_string(),
            galaxy_file: galaxy_name(graceid, galaxy),
            h0_public: h0_name(config, graceid, skymap, galaxy, Access::Public),
            h0_proprietary: h0_name(config, graceid, skymap, galaxy, Access::Private),
            h0_plot: h0_plot_name(graceid, skymap, galaxy),
            manifest_public: h0_files_dict_name(config, Access::Public),
            manifest_private: h0_files_dict_name(config, Access::Private),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_names() {
        let config = Config::with_public_html("/srv/www");
        let names = ArtifactNames::new(&config, "S200105ae", "bayestar.fits.gz", "glade");

        assert_eq!(names.skymap, "bayestar");
        assert_eq!(names.distance_column, "distance");
        assert_eq!(names.galaxy_file, "galaxy-S200105ae-glade.json");
        assert_eq!(
            names.h0_public,
            PathBuf::from("/srv/www/cgi-bin/H0-public-S200105ae-bayestar-glade.json")
        );
        assert_eq!(
            names.h0_proprietary,
            PathBuf::from("H0-proprietary-S200105ae-bayestar-glade.json")
        );
        assert_eq!(names.h0_plot, "H0-S200105ae-bayestar-glade.png");
        assert_ne!(names.manifest_public, names.manifest_private);
    }

    #[test]
    fn test_serializes_to_json() {
        let config = Config::with_public_html("/srv/www");
        let names = ArtifactNames::new(&config, "e", "s.fits", "g");
        let value = serde_json::to_value(&names).unwrap();

        assert_eq!(value["h0_plot"], "H0-e-s-g.png");
        assert_eq!(value["manifest_private"], "/srv/www/manifest-private.json");
    }
}
