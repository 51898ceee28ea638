//! Configuration loading and discovery
//!
//! Settings come from `importune.toml`, from a `[tool.importune]` table in
//! `pyproject.toml`, or from the user configuration directory, in that
//! order. Command-line flags override whatever the files provide.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use etcetera::{BaseStrategy, choose_base_strategy};
use log::debug;
use serde::Deserialize;

/// File name looked up during discovery and in the user config directory.
const CONFIG_FILE: &str = "importune.toml";

/// Direction in which relative-import levels compare.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum RelativeOrder {
    /// Place "closer" imports (fewer leading dots) before "further" imports
    /// (more leading dots).
    #[default]
    ClosestToFurthest,
    /// Place "further" imports (more leading dots) before "closer" imports
    /// (fewer leading dots).
    FurthestToClosest,
}

/// Pipeline configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// Ordered module prefixes whose imports sort into later buckets than
    /// everything unmatched. Earlier entries win when several match.
    #[serde(default)]
    pub defer: Vec<String>,
    /// Comparison direction for relative-import levels.
    #[serde(default)]
    pub relative_order: RelativeOrder,
}

impl Config {
    /// Load from an explicit TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Walk `start` and its ancestors looking for `importune.toml`, then for
    /// a `[tool.importune]` table in `pyproject.toml`; fall back to the user
    /// configuration directory. First hit wins; absent everywhere, defaults.
    pub fn discover(start: &Path) -> Result<Self> {
        for dir in start.ancestors() {
            let explicit = dir.join(CONFIG_FILE);
            if explicit.is_file() {
                debug!("using configuration from {}", explicit.display());
                return Self::from_file(&explicit);
            }
            let pyproject = dir.join("pyproject.toml");
            if pyproject.is_file() {
                if let Some(config) = Self::from_pyproject(&pyproject)? {
                    debug!("using configuration from {}", pyproject.display());
                    return Ok(config);
                }
            }
        }
        if let Some(config) = Self::from_user_dir()? {
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Read the `[tool.importune]` table; `None` when the file carries no
    /// table for us.
    fn from_pyproject(path: &Path) -> Result<Option<Self>> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let pyproject: PyProject = toml::from_str(&text)
            .with_context(|| format!("invalid TOML in {}", path.display()))?;
        Ok(pyproject.tool.and_then(|tool| tool.importune))
    }

    fn from_user_dir() -> Result<Option<Self>> {
        let Ok(strategy) = choose_base_strategy() else {
            return Ok(None);
        };
        let path = strategy.config_dir().join("importune").join(CONFIG_FILE);
        if path.is_file() {
            debug!("using configuration from {}", path.display());
            return Self::from_file(&path).map(Some);
        }
        Ok(None)
    }
}

#[derive(Deserialize)]
struct PyProject {
    tool: Option<ToolTable>,
}

#[derive(Deserialize)]
struct ToolTable {
    importune: Option<Config>,
}
