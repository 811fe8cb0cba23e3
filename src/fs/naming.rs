//! Standard filename generation.
//!
//! Identifiers are interpolated exactly as given. Nothing here validates or
//! sanitizes input, so every function is total.

use crate::config::Access;

/// Name of the distance column in the PE samples file.
pub const DISTANCE_COLUMN: &str = "distance";

/// Returns [`DISTANCE_COLUMN`].
pub fn distance_name() -> &'static str {
    DISTANCE_COLUMN
}

/// Base name of a skymap: everything before the first `.`.
///
/// `"bayestar.fits.gz"` becomes `"bayestar"`. A name without a dot is
/// returned whole; a name starting with a dot yields `""`.
pub fn skymap_name(skymap: &str) -> &str {
    skymap.split('.').next().unwrap_or(skymap)
}

/// Standard filename for galaxy information.
pub fn galaxy_name(graceid: &str, galaxy: &str) -> String {
    format!("galaxy-{}-{}.json", graceid, galaxy)
}

/// Filename of a public H0 posterior, without its directory.
pub fn h0_public_filename(graceid: &str, skymap: &str, galaxy: &str) -> String {
    format!(
        "H0-public-{}-{}-{}.json",
        graceid,
        skymap_name(skymap),
        galaxy
    )
}

/// Filename of a proprietary H0 posterior built from PE samples.
pub fn h0_proprietary_filename(graceid: &str, skymap: &str, galaxy: &str) -> String {
    format!(
        "H0-proprietary-{}-{}-{}.json",
        graceid,
        skymap_name(skymap),
        galaxy
    )
}

/// Standard filename for an H0 plot.
pub fn h0_plot_name(graceid: &str, skymap: &str, galaxy: &str) -> String {
    format!("H0-{}-{}-{}.png", graceid, skymap_name(skymap), galaxy)
}

/// Filename of the manifest listing every available H0 likelihood.
pub fn manifest_filename(access: impl Into<Access>) -> &'static str {
    match access.into() {
        Access::Private => "manifest-private.json",
        Access::Public => "manifest-public.json",
    }
}
