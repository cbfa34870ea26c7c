//! Configuration for the conformance harness
//!
//! Handles loading `typeseq.toml`. Every key is optional:
//!
//! ```toml
//! print_ok = true          # report passing checks too
//! print_expression = true  # show the checked expression after OK
//! full_path = false        # print source paths in full, not just the file name
//! color = "auto"           # auto | always | never
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "typeseq.toml";

// ============================================================================
// Color
// ============================================================================

/// When to colour OK/FAIL markers and the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }

    /// Applies the mode to the global `colored` switch.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// HarnessConfig
// ============================================================================

/// Output options of the harness
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub print_ok: bool,
    pub print_expression: bool,
    pub full_path: bool,
    pub color: ColorMode,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            print_ok: true,
            print_expression: true,
            full_path: false,
            color: ColorMode::Auto,
        }
    }
}

impl HarnessConfig {
    /// Load `typeseq.toml` from the working directory, or the defaults when
    /// there is none
    pub fn load() -> Result<Self, Error> {
        match Self::load_from(Path::new(CONFIG_FILE)) {
            Err(Error::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load from specific path
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(path.into())
            } else {
                Error::Io(path.into(), e)
            }
        })?;

        let config = Self::parse(&content).map_err(|e| Error::Parse(path.into(), e))?;
        tracing::debug!(path = %path.display(), ?config, "loaded harness config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}

pub type ConfigError = Error;

// ============================================================================
// Tests
// ============================================================================
