//! Configuration model for ospec.
//!
//! This module defines the Config struct that represents an optional
//! `.ospec.yaml` file in the working directory. It supports
//! forward-compatible YAML parsing (unknown fields are ignored) and sensible
//! defaults for every field, so a missing file behaves like an empty one.
//!
//! # File Format
//!
//! ```yaml
//! binary: openspec
//! package_manager: pnpm
//! ```

use crate::error::{OspecError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the optional configuration file, looked up in the resolved
/// working directory.
pub const CONFIG_FILE_NAME: &str = ".ospec.yaml";

fn default_binary() -> String {
    "openspec".to_string()
}

fn default_package_manager() -> String {
    "pnpm".to_string()
}

/// Configuration for validator invocations.
///
/// Defaults reproduce the canonical fallback plan: `openspec <args>` first,
/// then `pnpm exec openspec <args>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the OpenSpec executable tried directly on PATH.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Package manager used for the local-dependency fallback (`<pm> exec`).
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            package_manager: default_package_manager(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// Call sites treat a missing or unreadable file as defaults via
    /// `Config::load(path).unwrap_or_default()`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            OspecError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            OspecError::UserError(format!(
                "failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
