//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory used when no web root is configured.
pub const DEFAULT_PUBLIC_HTML: &str = "public_html";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output location configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Public web root holding the manifests. Must be absolute.
    #[serde(default)]
    pub public_html: Option<PathBuf>,

    /// Subdirectory of the web root holding public H0 posteriors.
    #[serde(default = "default_cgi_bin")]
    pub cgi_bin: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            public_html: None,
            cgi_bin: default_cgi_bin(),
        }
    }
}

fn default_cgi_bin() -> String {
    "cgi-bin".to_string()
}

fn default_public_html(home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) => home.join(DEFAULT_PUBLIC_HTML),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_PUBLIC_HTML),
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, or `None` if it does not exist.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!("No configuration file at {}", path.display());
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective public web root.
    ///
    /// Falls back to `~/public_html`, then to `public_html` under the current
    /// directory when no home directory can be determined.
    pub fn public_html_dir(&self) -> PathBuf {
        self.output.public_html.clone().unwrap_or_else(|| {
            let dirs = UserDirs::new();
            default_public_html(dirs.as_ref().map(|d| d.home_dir()))
        })
    }

    /// Get the directory public H0 posteriors are written to.
    pub fn cgi_bin_dir(&self) -> PathBuf {
        self.public_html_dir().join(&self.output.cgi_bin)
    }

    /// Build a config rooted at the given web root.
    pub fn with_public_html(public_html: impl Into<PathBuf>) -> Self {
        Self {
            output: OutputConfig {
                public_html: Some(public_html.into()),
                ..OutputConfig::default()
            },
        }
    }
}
