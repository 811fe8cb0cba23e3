//! Access level definitions.

use std::fmt;
use std::str::FromStr;

/// Whether an artifact goes to the public web root or stays private.
///
/// H0 posteriors built from PE samples and the private manifest are
/// `Private`; everything served from the web root is `Public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
    /// Served from the public web root (default).
    #[default]
    Public,
    /// Proprietary output (PE samples) or the private manifest.
    Private,
}

impl From<bool> for Access {
    /// `true` selects `Private`, matching the `PE_samples` and `private` flags.
    fn from(private: bool) -> Self {
        if private {
            Access::Private
        } else {
            Access::Public
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Public => write!(f, "public"),
            Access::Private => write!(f, "private"),
        }
    }
}

impl FromStr for Access {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "public" => Ok(Access::Public),
            "private" | "proprietary" => Ok(Access::Private),
            _ => Err(format!("Unknown access level: {}", s)),
        }
    }
}
