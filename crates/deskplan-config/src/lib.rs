//! Deskplan Config - Planner configuration
//!
//! Configuration loads from TOML or YAML files (picked by extension) or is
//! assembled in code via the builder methods. Every field has a default, so
//! partial files are fine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors arising while reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Tuning knobs for a single planner run.
///
/// # Example
///
/// ```
/// use deskplan_config::PlannerConfig;
///
/// let config = PlannerConfig::new().with_seed(7).with_top_k(5);
/// assert_eq!(config.seed, 7);
/// assert_eq!(config.construction.top_k, 5);
/// assert!(config.local_search.enabled);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Seed for every random decision the planner makes.
    pub seed: u64,
    pub construction: ConstructionConfig,
    pub local_search: LocalSearchConfig,
}

/// Greedy construction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionConfig {
    /// Shuffle seating order and draw among the best candidates.
    pub randomize: bool,
    /// Size of the candidate window a randomized draw picks from.
    pub top_k: usize,
}

/// Swap-based local search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalSearchConfig {
    pub enabled: bool,
    /// Swap trials to attempt.
    pub iterations: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            seed: 42,
            construction: ConstructionConfig::default(),
            local_search: LocalSearchConfig::default(),
        }
    }
}

impl Default for ConstructionConfig {
    fn default() -> Self {
        ConstructionConfig {
            randomize: true,
            top_k: 3,
        }
    }
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        LocalSearchConfig {
            enabled: true,
            iterations: 1000,
        }
    }
}

impl PlannerConfig {
    /// A configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` parse as YAML; everything else parses as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables randomized construction.
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.construction.randomize = randomize;
        self
    }

    /// Sets the candidate window for randomized construction.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.construction.top_k = top_k;
        self
    }

    /// Enables or disables local search.
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.local_search.enabled = enabled;
        self
    }

    /// Sets the number of swap trials.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.local_search.iterations = iterations;
        self
    }
}
