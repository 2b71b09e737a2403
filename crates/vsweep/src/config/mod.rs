//! Serializable sweep descriptions
//!
//! A `SweepConfig` names a strategy and its parameters. It can be loaded from
//! YAML and turned into a ready-to-run [`AnySweep`]:
//!
//! ```ignore
//! use vsweep::config::SweepConfig;
//!
//! let config = SweepConfig::from_yaml(
//!     "kind: linear\nstart: 0.0\nstop: 10.0\nmax_step_size: 0.5\nroundtrip: true\n",
//! )?;
//! let mut sweep = config.build()?;
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adaptive::AdaptiveSweep;
use crate::error::{Result, SweepError};
use crate::spaced::{
    LinearSweep, LogSweep, steps_for_max_step_factor, steps_for_max_step_size,
};
use crate::sweep::{AnySweep, Sweep};
use crate::vector::VectorSweep;

fn default_npasses() -> usize {
    1
}

/// Description of a sweep, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SweepConfig {
    /// Fixed list of x values
    Vector {
        values: Vec<f64>,
        #[serde(default)]
        roundtrip: bool,
        #[serde(default = "default_npasses")]
        npasses: usize,
    },

    /// Uniform spacing; `max_step_size` wins over `nsteps` when both are set
    Linear {
        start: f64,
        stop: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nsteps: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_step_size: Option<f64>,
        #[serde(default)]
        roundtrip: bool,
        #[serde(default = "default_npasses")]
        npasses: usize,
    },

    /// Geometric spacing; `max_step_factor` wins over `nsteps` when both are set
    Log {
        start: f64,
        stop: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nsteps: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_step_factor: Option<f64>,
        #[serde(default)]
        roundtrip: bool,
        #[serde(default = "default_npasses")]
        npasses: usize,
    },

    /// Engine-driven placement with a fixed point budget
    Adaptive { start: f64, stop: f64, nsteps: usize },
}

impl SweepConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> std::result::Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }

    /// Short name of the strategy
    pub fn kind(&self) -> &'static str {
        match self {
            SweepConfig::Vector { .. } => "vector",
            SweepConfig::Linear { .. } => "linear",
            SweepConfig::Log { .. } => "log",
            SweepConfig::Adaptive { .. } => "adaptive",
        }
    }

    /// Step count of the described sweep, without building it
    pub fn step_count(&self) -> Result<usize> {
        let (forward, roundtrip, npasses) = match self {
            SweepConfig::Vector {
                values,
                roundtrip,
                npasses,
            } => (values.len(), *roundtrip, *npasses),
            SweepConfig::Linear {
                start,
                stop,
                nsteps,
                max_step_size,
                roundtrip,
                npasses,
            } => {
                let n = match (max_step_size, nsteps) {
                    (Some(max), _) => steps_for_max_step_size(*start, *stop, *max)?,
                    (None, Some(n)) => *n,
                    (None, None) => return Err(missing_step_count("linear", "max_step_size")),
                };
                (n, *roundtrip, *npasses)
            }
            SweepConfig::Log {
                start,
                stop,
                nsteps,
                max_step_factor,
                roundtrip,
                npasses,
            } => {
                let n = match (max_step_factor, nsteps) {
                    (Some(max), _) => steps_for_max_step_factor(*start, *stop, *max)?,
                    (None, Some(n)) => *n,
                    (None, None) => return Err(missing_step_count("log", "max_step_factor")),
                };
                (n, *roundtrip, *npasses)
            }
            SweepConfig::Adaptive { nsteps, .. } => return Ok(*nsteps),
        };

        let total = forward * npasses;
        Ok(if roundtrip { total * 2 } else { total })
    }

    /// Validate and build the described sweep
    pub fn build(&self) -> Result<AnySweep> {
        let sweep: AnySweep = match self {
            SweepConfig::Vector {
                values,
                roundtrip,
                npasses,
            } => VectorSweep::new(values.iter().copied())
                .roundtrip(*roundtrip)
                .passes(*npasses)
                .into(),
            SweepConfig::Linear {
                start,
                stop,
                nsteps,
                max_step_size,
                roundtrip,
                npasses,
            } => {
                let sweep = match (max_step_size, nsteps) {
                    (Some(max), _) => LinearSweep::with_max_step_size(*start, *stop, *max)?,
                    (None, Some(n)) => LinearSweep::with_steps(*start, *stop, *n),
                    (None, None) => return Err(missing_step_count("linear", "max_step_size")),
                };
                sweep.roundtrip(*roundtrip).passes(*npasses).into()
            }
            SweepConfig::Log {
                start,
                stop,
                nsteps,
                max_step_factor,
                roundtrip,
                npasses,
            } => {
                let sweep = match (max_step_factor, nsteps) {
                    (Some(max), _) => LogSweep::with_max_step_factor(*start, *stop, *max)?,
                    (None, Some(n)) => LogSweep::with_steps(*start, *stop, *n)?,
                    (None, None) => return Err(missing_step_count("log", "max_step_factor")),
                };
                sweep.roundtrip(*roundtrip).passes(*npasses).into()
            }
            SweepConfig::Adaptive {
                start,
                stop,
                nsteps,
            } => AdaptiveSweep::new(*start, *stop, *nsteps)?.into(),
        };

        debug!(kind = self.kind(), steps = sweep.len(), "Built sweep");
        Ok(sweep)
    }
}

fn missing_step_count(kind: &str, alternative: &str) -> SweepError {
    SweepError::Config(format!(
        "{kind} sweep needs either nsteps or {alternative}"
    ))
}

impl TryFrom<&SweepConfig> for AnySweep {
    type Error = SweepError;

    fn try_from(config: &SweepConfig) -> Result<Self> {
        config.build()
    }
}
