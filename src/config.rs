use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use ergode_matrix::{DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS, InitialDistribution};

/// Default config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "ergode.toml";

/// Top-level ergode configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErgodeConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// Initial distribution settings.
    #[serde(default)]
    pub distribution: DistributionToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// Convergence threshold for power iteration.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Hard cap on power iterations.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Apply transitive reduction to the condensation edges.
    #[serde(default = "default_true")]
    pub transitive_reduction: bool,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            transitive_reduction: true,
        }
    }
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}
fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}
fn default_true() -> bool {
    true
}

/// TOML form of the initial distribution selection.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistributionToml {
    /// Strategy: "single", "weighted", "uniform", or "random".
    #[serde(default)]
    pub strategy: Option<String>,
    /// State for the "single" strategy.
    #[serde(default)]
    pub state: Option<usize>,
    /// `[state, weight]` pairs for the "weighted" strategy.
    #[serde(default)]
    pub weights: Option<Vec<(usize, f64)>>,
    /// Steps to propagate.
    #[serde(default)]
    pub steps: Option<usize>,
}

impl DistributionToml {
    /// Resolves the configured strategy, if any, into an
    /// [`InitialDistribution`].
    pub fn resolve(&self) -> Result<Option<InitialDistribution>> {
        let Some(strategy) = self.strategy.as_deref() else {
            return Ok(None);
        };
        let dist = match strategy {
            "single" => {
                let state = self
                    .state
                    .context("strategy \"single\" requires [distribution].state")?;
                InitialDistribution::SingleState(state)
            }
            "weighted" => {
                let weights = self
                    .weights
                    .clone()
                    .context("strategy \"weighted\" requires [distribution].weights")?;
                InitialDistribution::Weighted(weights)
            }
            "uniform" => InitialDistribution::Uniform,
            "random" => InitialDistribution::Random,
            other => bail!("unknown distribution strategy {other:?}"),
        };
        Ok(Some(dist))
    }
}

/// Loads the configuration.
///
/// An explicit `--config` path must exist; otherwise `ergode.toml` is used
/// when present and built-in defaults when not.
pub fn load(explicit: Option<&Path>) -> Result<ErgodeConfig> {
    let path = match explicit {
        Some(p) => p,
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if !default.exists() {
                return Ok(ErgodeConfig::default());
            }
            default
        }
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
}
