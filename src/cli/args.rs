//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Standard filenames for the gravitational-wave cosmology pipeline.
#[derive(Parser, Debug)]
#[command(
    name = "gwcosmology-names",
    version,
    about = "Print standard filenames for H0 pipeline artifacts",
    long_about = "Print the standard filenames and paths used by the gravitational-wave \
                  cosmology pipeline.\n\n\
                  Covers galaxy catalogs, H0 posteriors, H0 plots, and manifests."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, global = true, default_value = "gwcosmology.toml")]
    pub config: PathBuf,

    /// Public web root (overrides the config file).
    #[arg(long = "public-html", global = true, env = "GWCOSMOLOGY_PUBLIC_HTML")]
    pub public_html: Option<PathBuf>,

    /// Subdirectory of the web root for public H0 posteriors.
    #[arg(long = "cgi-bin", global = true)]
    pub cgi_bin: Option<String>,

    /// Print output as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Name to print.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Name of the distance column in the PE file.
    Distance,
    /// Galaxy information filename.
    Galaxy { graceid: String, galaxy: String },
    /// H0 posterior location.
    H0 {
        graceid: String,
        skymap: String,
        galaxy: String,
        /// Posterior built from proprietary PE samples.
        #[arg(long)]
        pe_samples: bool,
    },
    /// H0 plot filename.
    Plot {
        graceid: String,
        skymap: String,
        galaxy: String,
    },
    /// Manifest of all available H0 likelihoods.
    Manifest {
        /// Use the private manifest.
        #[arg(long)]
        private: bool,
    },
    /// Every name for one analysis.
    All {
        graceid: String,
        skymap: String,
        galaxy: String,
    },
}

impl Command {
    /// Key used for this command's value in JSON output.
    pub fn output_key(&self) -> &'static str {
        match self {
            Command::Distance => "distance",
            Command::Galaxy { .. } => "galaxy",
            Command::H0 { .. } => "h0",
            Command::Plot { .. } => "plot",
            Command::Manifest { .. } => "manifest",
            Command::All { .. } => "all",
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.public_html {
            config.output.public_html = Some(dir.clone());
        }

        if let Some(cgi_bin) = &self.cgi_bin {
            config.output.cgi_bin = cgi_bin.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_h0_command() {
        let args = Args::try_parse_from([
            "gwcosmology-names",
            "h0",
            "S190814bv",
            "bayestar.fits.gz",
            "glade",
            "--pe-samples",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Command::H0 {
                graceid: "S190814bv".to_string(),
                skymap: "bayestar.fits.gz".to_string(),
                galaxy: "glade".to_string(),
                pe_samples: true,
            }
        );
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "gwcosmology-names",
            "manifest",
            "--private",
            "--json",
            "--public-html",
            "/srv/www",
        ])
        .unwrap();

        assert!(args.json);
        assert_eq!(args.command, Command::Manifest { private: true });
        assert_eq!(args.public_html, Some(PathBuf::from("/srv/www")));
    }

    #[test]
    fn test_missing_positional_rejected() {
        assert!(Args::try_parse_from(["gwcosmology-names", "galaxy", "S190814bv"]).is_err());
    }

    #[test]
    fn test_output_keys() {
        let parse = |argv: &[&str]| Args::try_parse_from(argv.iter().copied()).unwrap().command.output_key();
        assert_eq!(parse(&["gwcosmology-names", "distance"]), "distance");
        assert_eq!(parse(&["gwcosmology-names", "galaxy", "e", "g"]), "galaxy");
        assert_eq!(parse(&["gwcosmology-names", "h0", "e", "s", "g"]), "h0");
        assert_eq!(parse(&["gwcosmology-names", "plot", "e", "s", "g"]), "plot");
        assert_eq!(parse(&["gwcosmology-names", "manifest"]), "manifest");
    }

    #[test]
    fn test_merge_into_config() {
        let args = Args::try_parse_from([
            "gwcosmology-names",
            "distance",
            "--public-html",
            "/srv/www",
            "--cgi-bin",
            "h0",
        ])
        .unwrap();

        let mut config = Config::default();
        args.merge_into_config(&mut config);
        assert_eq!(config.output.public_html, Some(PathBuf::from("/srv/www")));
        assert_eq!(config.output.cgi_bin, "h0");
    }
}
