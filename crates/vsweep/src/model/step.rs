//! A single visited point of a sweep
//!
//! The sweep owns the step while it is pending; the caller only writes `y`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One (x, y) unit of a sweep plus its bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepStep {
    /// The x value chosen by the sweep
    pub x: f64,
    /// The measured value, filled in by the caller
    pub y: Option<f64>,
    /// Position of the step in the traversal
    pub index: Option<usize>,
    /// Total number of steps in the traversal, when known
    pub total: Option<usize>,
    /// Time since the current run started
    pub elapsed: Option<Duration>,
}

impl SweepStep {
    /// Create a bare step with only `x` set
    #[must_use]
    pub fn new(x: f64) -> Self {
        Self {
            x,
            y: None,
            index: None,
            total: None,
            elapsed: None,
        }
    }

    #[must_use]
    pub fn with_index(mut self, index: usize, total: usize) -> Self {
        self.index = Some(index);
        self.total = Some(total);
        self
    }

    #[must_use]
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    /// Record the measured value for this step
    pub fn set_y(&mut self, y: f64) {
        self.y = Some(y);
    }
}

impl fmt::Display for SweepStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = self.index.map(|n| match self.total {
            Some(total) => format!("{n} / {total}"),
            None => format!("{n} / ?"),
        });

        let rows: Vec<(&str, String)> = [
            ("x", Some(format!("{:e}", self.x))),
            ("y", self.y.map(|y| format!("{y:e}"))),
            ("step", progress),
            (
                "elapsed time",
                self.elapsed.map(|e| format!("{:e}", e.as_secs_f64())),
            ),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect();

        let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

        write!(f, "--- Sweep step ---")?;
        for (key, value) in rows {
            write!(f, "\n{key:>width$} : {value}")?;
        }
        Ok(())
    }
}
