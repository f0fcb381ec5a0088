//! Configuration for the analysis engine
//!
//! Every calibration constant the algorithms use lives here and is passed in
//! explicitly, so callers and tests can vary them independently.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Confidence assumed for edges without an explicit weight
pub const DEFAULT_EDGE_WEIGHT: f64 = 0.7;

/// Neighbor search radius
pub const DEFAULT_MAX_HOPS: usize = 3;

/// Neighbor salience lost per hop
pub const DEFAULT_HOP_DECAY: f64 = 0.4;

/// Normalizes tension against roughly five significant edges per side
pub const DEFAULT_TENSION_DIVISOR: f64 = 5.0;

/// Salience above which a label is shown
pub const DEFAULT_LABEL_THRESHOLD: f64 = 0.4;

/// Configuration for the analysis engine
///
/// # Examples
///
/// ```
/// use truthmines_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.default_weight, 0.7);
/// assert_eq!(config.max_hops, 3);
///
/// let config = EngineConfig::from_toml_str("max_hops = 2\n[salience]\ntension = 0.0\n").unwrap();
/// assert_eq!(config.max_hops, 2);
/// assert_eq!(config.salience.tension, 0.0);
/// assert_eq!(config.salience.focus, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Weight used for edges that carry none
    /// Default: 0.7
    pub default_weight: f64,

    /// Neighbor search radius in hops
    /// Default: 3
    pub max_hops: usize,

    /// Fraction of neighbor salience lost per hop
    /// Default: 0.4 (1-hop 0.6, 2-hop 0.2, 3-hop 0.0)
    pub hop_decay: f64,

    /// Divisor applied to the geometric mean of support and attack
    /// Default: 5.0
    pub tension_divisor: f64,

    /// Salience strictly above this shows a label
    /// Default: 0.4
    pub label_threshold: f64,

    /// Weights of the salience signals
    pub salience: SalienceWeights,
}

/// Contribution of each signal to a node's salience
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalienceWeights {
    /// The selected node
    pub focus: f64,
    /// Nodes on the strongest justification path
    pub path: f64,
    /// Nodes near the selection, before hop decay
    pub neighbor: f64,
    /// Multiplier on the node's tension score
    pub tension: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_EDGE_WEIGHT,
            max_hops: DEFAULT_MAX_HOPS,
            hop_decay: DEFAULT_HOP_DECAY,
            tension_divisor: DEFAULT_TENSION_DIVISOR,
            label_threshold: DEFAULT_LABEL_THRESHOLD,
            salience: SalienceWeights::default(),
        }
    }
}

impl Default for SalienceWeights {
    fn default() -> Self {
        Self {
            focus: 1.0,
            path: 0.9,
            neighbor: 0.5,
            tension: 0.6,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the algorithms cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.default_weight > 0.0 && self.default_weight <= 1.0) {
            return Err(EngineError::Config(format!(
                "default_weight must be in (0, 1], got {}",
                self.default_weight
            )));
        }

        if !(self.tension_divisor > 0.0) || !self.tension_divisor.is_finite() {
            return Err(EngineError::Config(format!(
                "tension_divisor must be positive, got {}",
                self.tension_divisor
            )));
        }

        if !(self.hop_decay >= 0.0) {
            return Err(EngineError::Config(format!(
                "hop_decay must be non-negative, got {}",
                self.hop_decay
            )));
        }

        let weights = [
            ("focus", self.salience.focus),
            ("path", self.salience.path),
            ("neighbor", self.salience.neighbor),
            ("tension", self.salience.tension),
        ];
        for (name, value) in weights {
            if !(value >= 0.0) {
                return Err(EngineError::Config(format!(
                    "salience.{name} must be non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}
