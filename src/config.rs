//! User defaults loaded from `~/.config/glyphgrid/config.toml`.
//!
//! Every key is optional; command-line flags take precedence.
//!
//! ```toml
//! fill = "."
//! timeout_secs = 30
//! border_title = "My Art"
//! user_agent = "my-agent/1.0"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GlyphError, Result};
use crate::fetch::DEFAULT_TIMEOUT_SECS;
use crate::render::DEFAULT_TITLE;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fill for empty grid positions. Validated by the caller.
    pub fill: String,
    pub timeout_secs: u64,
    pub border_title: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fill: " ".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            border_title: DEFAULT_TITLE.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load the default config file, or defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load `path`, or defaults if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| GlyphError::Config(format!("invalid TOML in {}: {e}", path.display())))
    }
}

pub fn default_user_agent() -> String {
    format!("glyphgrid/{}", crate::VERSION)
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("glyphgrid")
        .join("config.toml")
}
