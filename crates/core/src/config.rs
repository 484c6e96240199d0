//! Configuration via `stashkit.toml`
//!
//! Applications embedding stashes and rules keep their tunables in a small
//! TOML file. Every field has a default, so an empty file is valid.

use crate::error::{Error, Result};
use crate::limits::Limits;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "stashkit.toml";

/// Configuration loaded from `stashkit.toml`.
///
/// # Example
///
/// ```toml
/// [limits]
/// max_key_bytes = 1024
/// max_source_bytes = 65536
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashkitConfig {
    /// Size limits for stash validation and rule compilation.
    #[serde(default)]
    pub limits: Limits,
}

impl StashkitConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# stashkit configuration

[limits]
# Maximum stash key length in bytes
max_key_bytes = 1024

# Maximum length of a string value in bytes (16MB)
max_string_bytes = 16777216

# Maximum nesting depth of a stored value
max_nesting_depth = 128

# Maximum rule expression source length in bytes (64KB)
max_source_bytes = 65536
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the text is not valid TOML for this schema.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|e| {
            Error::Config(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(target: "stashkit::config", path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
            debug!(target: "stashkit::config", path = %path.display(), "Wrote default config");
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
