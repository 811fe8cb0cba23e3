//! Output locations for H0 posteriors and manifests.

use std::path::PathBuf;

use crate::config::{Access, Config};
use crate::fs::naming::{h0_proprietary_filename, h0_public_filename, manifest_filename};

/// Standard location for an H0 posterior.
///
/// Public posteriors live in the web root's cgi-bin directory. Proprietary
/// ones (from PE samples) are a bare relative filename.
pub fn h0_name(
    config: &Config,
    graceid: &str,
    skymap: &str,
    galaxy: &str,
    pe_samples: impl Into<Access>,
) -> PathBuf {
    match pe_samples.into() {
        Access::Public => config
            .cgi_bin_dir()
            .join(h0_public_filename(graceid, skymap, galaxy)),
        Access::Private => PathBuf::from(h0_proprietary_filename(graceid, skymap, galaxy)),
    }
}

/// Standard location for the manifest of all available H0 likelihoods.
pub fn h0_files_dict_name(config: &Config, private: impl Into<Access>) -> PathBuf {
    config
        .public_html_dir()
        .join(manifest_filename(private))
}
