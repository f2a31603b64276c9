//! Layered configuration for the solver.
//!
//! Sources, lowest priority first: built-in defaults, a TOML file, then
//! `POSTMAN_` environment variables (`__` separates nested keys, e.g.
//! `POSTMAN_WALK__MAX_ATTEMPTS=50`).
//!
//! ```toml
//! [walk]
//! max_attempts = 1000
//! seed = 42
//!
//! [pairing]
//! strategy = "brute_force"
//! max_odd_nodes = 8
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::eulerize::pairing::DEFAULT_MAX_ODD_NODES;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "postman.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "POSTMAN_";

/// Default cap on walk attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Complete solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostmanConfig {
    /// Circuit walker settings.
    pub walk: WalkConfig,
    /// Odd-node pairing settings.
    pub pairing: PairingConfig,
}

/// `[walk]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Independent attempts before giving up.
    pub max_attempts: usize,
    /// Fixed RNG seed; `None` draws one from the OS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Which pairing strategy the eulerizer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingStrategyKind {
    /// Exhaustive, optimal, bounded by `max_odd_nodes`.
    #[default]
    BruteForce,
    /// Cheapest-pair-first approximation.
    Greedy,
}

impl PairingStrategyKind {
    /// Configuration spelling of the strategy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::Greedy => "greedy",
        }
    }
}

/// `[pairing]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairingConfig {
    /// Strategy used to pair odd-degree nodes.
    pub strategy: PairingStrategyKind,
    /// Ceiling on odd nodes for the brute-force strategy.
    pub max_odd_nodes: usize,
}

impl Default for PairingConfig {
    fn default() -> Self {
        Self {
            strategy: PairingStrategyKind::default(),
            max_odd_nodes: DEFAULT_MAX_ODD_NODES,
        }
    }
}

impl PostmanConfig {
    /// Loads `postman.toml` from the working directory plus the environment.
    ///
    /// # Errors
    ///
    /// `Error::Config` if a source is malformed or a value is out of range.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Loads defaults, then `path` (skipped if missing), then the environment.
    ///
    /// # Errors
    ///
    /// `Error::Config` if a source is malformed or a value is out of range.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// `Error::Config` on parse failure or out-of-range values.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml).map_err(|e| Error::Config(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// `Error::Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize to TOML: {e}")))
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// `Error::Config` naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.walk.max_attempts == 0 {
            return Err(Error::Config(
                "walk.max_attempts must be at least 1".to_string(),
            ));
        }
        let max_odd = self.pairing.max_odd_nodes;
        if max_odd < 2 || max_odd % 2 == 1 {
            return Err(Error::Config(format!(
                "pairing.max_odd_nodes must be even and at least 2, got {max_odd}"
            )));
        }
        Ok(())
    }
}
