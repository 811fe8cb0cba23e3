//! Configuration validation logic.

use std::path::{Component, Path};

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_public_html(&config.public_html_dir())?;
    validate_cgi_bin(&config.output.cgi_bin)?;

    Ok(())
}

/// Validate the public web root.
pub fn validate_public_html(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "public_html".to_string(),
            message: "Web root cannot be empty".to_string(),
        });
    }

    if !path.is_absolute() {
        return Err(Error::ConfigValidation {
            field: "public_html".to_string(),
            message: format!("Web root must be an absolute path (got '{}')", path.display()),
        });
    }

    Ok(())
}

/// Validate the cgi-bin subdirectory name.
///
/// Must be exactly one normal path component.
pub fn validate_cgi_bin(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "cgi_bin".to_string(),
            message: "Subdirectory name cannot be empty".to_string(),
        });
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::ConfigValidation {
            field: "cgi_bin".to_string(),
            message: format!(
                "'{}' must be a single relative directory name without '..'",
                name
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_relative_public_html_rejected() {
        let config = Config::with_public_html("public_html");
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { ref field, .. } if field == "public_html"));
    }

    #[test]
    fn test_default_web_root_is_absolute() {
        let config = Config::default();
        assert!(config.public_html_dir().is_absolute());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_absolute_public_html_accepted() {
        assert!(validate_public_html(&PathBuf::from("/srv/www")).is_ok());
    }

    #[test]
    fn test_cgi_bin_names() {
        assert!(validate_cgi_bin("cgi-bin").is_ok());
        assert!(validate_cgi_bin("").is_err());
        assert!(validate_cgi_bin("  ").is_err());
        assert!(validate_cgi_bin("..").is_err());
        assert!(validate_cgi_bin("a/b").is_err());
        assert!(validate_cgi_bin("/cgi-bin").is_err());
    }
}
