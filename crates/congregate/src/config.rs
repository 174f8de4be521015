//! # Configuration
//!
//! Engine configuration is declared with [`confique`], which gives every key a
//! compiled default and an environment override. The library never goes looking
//! for configuration on its own: the integrating application decides whether to
//! call [`EngineConfig::load`], parse an embedded document with
//! [`EngineConfig::from_toml_str`], or just use [`EngineConfig::default`].
//!
//! ## Resolution order for `load`
//!
//! 1. **Environment variables**: `CONGREGATE_UPCOMING_DAYS`, etc.
//! 2. **TOML file**: the optional path handed to `load`.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `upcoming_days` | `90` | Length of the `upcoming` timeframe window |
//! | `recent_days` | `30` | Length of the `recent` timeframe window |
//! | `collapse_policy` | `retain` | What happens to an expanded row hidden by a filter |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::expansion::CollapsePolicy;
use crate::timeframe::{DEFAULT_RECENT_DAYS, DEFAULT_UPCOMING_DAYS};

/// Configuration for list filtering, stored in `congregate.toml` when persisted.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of days after today covered by the `upcoming` timeframe.
    #[config(default = 90, env = "CONGREGATE_UPCOMING_DAYS")]
    pub upcoming_days: u32,

    /// Number of days before today covered by the `recent` timeframe.
    #[config(default = 30, env = "CONGREGATE_RECENT_DAYS")]
    pub recent_days: u32,

    /// Whether an expanded row stays expanded after a filter hides it.
    #[config(default = "retain", env = "CONGREGATE_COLLAPSE_POLICY")]
    pub collapse_policy: CollapsePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            recent_days: DEFAULT_RECENT_DAYS,
            collapse_policy: CollapsePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Resolve configuration from the environment, an optional TOML file and
    /// the compiled defaults, in that order of precedence.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        tracing::debug!(?config, "loaded engine config");
        Ok(config)
    }

    /// Parse an in-memory TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
