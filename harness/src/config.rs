//! TOML configuration for the `octile` CLI.
//!
//! ```toml
//! [search]
//! max_expansions = 200000
//!
//! [benchmark]
//! scenario_count = 100
//! walk_length = 25
//! seed = 7
//! heuristics = ["h1", "h3"]
//! ```
//!
//! Every key is optional. CLI flags override file values.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use octile_kernel::heuristic::{HeuristicKind, UnknownHeuristic};
use octile_search::policy::SearchPolicy;

/// Top-level structure of `octile.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub benchmark: BenchmarkSection,
}

/// `[search]`: engine budget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSection {
    /// Expansion cap; absent means unbounded.
    #[serde(default)]
    pub max_expansions: Option<u64>,
}

impl SearchSection {
    #[must_use]
    pub fn to_policy(&self) -> SearchPolicy {
        SearchPolicy {
            max_expansions: self.max_expansions,
        }
    }
}

/// `[benchmark]`: generated scenario sets and heuristic selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkSection {
    /// Number of random-walk scenarios to generate.
    #[serde(default = "default_scenario_count")]
    pub scenario_count: usize,

    /// Moves per random walk.
    #[serde(default = "default_walk_length")]
    pub walk_length: usize,

    /// Seed for scenario generation.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Heuristic keys to benchmark (`h1`..`h4`).
    #[serde(default = "default_heuristics")]
    pub heuristics: Vec<String>,
}

fn default_scenario_count() -> usize {
    100
}
fn default_walk_length() -> usize {
    25
}
fn default_seed() -> u64 {
    0
}
fn default_heuristics() -> Vec<String> {
    HeuristicKind::ALL
        .iter()
        .map(|k| k.key().to_string())
        .collect()
}

impl Default for BenchmarkSection {
    fn default() -> Self {
        Self {
            scenario_count: default_scenario_count(),
            walk_length: default_walk_length(),
            seed: default_seed(),
            heuristics: default_heuristics(),
        }
    }
}

impl BenchmarkSection {
    /// Resolve the configured keys, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownHeuristic`] for the first unknown key.
    pub fn heuristic_kinds(&self) -> Result<Vec<HeuristicKind>, ConfigError> {
        parse_heuristics(self.heuristics.iter().map(String::as_str))
    }
}

/// Parse a list of heuristic keys.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownHeuristic`] for the first unknown key.
pub fn parse_heuristics<'a, I>(keys: I) -> Result<Vec<HeuristicKind>, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter()
        .map(|key| key.parse().map_err(ConfigError::UnknownHeuristic))
        .collect()
}

/// Typed failure for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: String, detail: String },
    Parse { path: String, detail: String },
    UnknownHeuristic(UnknownHeuristic),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read config {path}: {detail}"),
            Self::Parse { path, detail } => write!(f, "invalid config {path}: {detail}"),
            Self::UnknownHeuristic(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl HarnessConfig {
    /// Parse TOML text. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            detail: e.to_string(),
        })
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`HarnessConfig::parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: origin.clone(),
            detail: e.to_string(),
        })?;
        let config = Self::parse(&text, &origin)?;
        tracing::info!(path = %origin, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise defaults.
    ///
    /// # Errors
    ///
    /// As [`HarnessConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
