//! Uniform and geometric sweeps
//!
//! Both strategies only compute a vector of x values and hand it to a
//! [`VectorSweep`], so roundtrip, passes and the update callback behave the
//! same way as for a plain vector.

use crate::error::{Result, SweepError};
use crate::model::{SweepResult, SweepStep};
use crate::sweep::{Sweep, UpdateCallback};
use crate::vector::VectorSweep;

/// Largest step count a derived sweep may have
pub const MAX_DERIVED_STEPS: usize = 100_000_000;

/// `nsteps` evenly spaced values from `start` to `stop`, both included
///
/// The last value is exactly `stop`. `nsteps == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, nsteps: usize) -> Vec<f64> {
    match nsteps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (nsteps - 1) as f64;
            let mut values: Vec<f64> = (0..nsteps).map(|i| start + step * i as f64).collect();
            values[nsteps - 1] = stop;
            values
        }
    }
}

/// `nsteps` values evenly spaced in log10 from `start` to `stop`, both included
///
/// The end points are exactly `start` and `stop`. Both must be positive.
pub fn logspace(start: f64, stop: f64, nsteps: usize) -> Vec<f64> {
    let mut values: Vec<f64> = linspace(start.log10(), stop.log10(), nsteps)
        .into_iter()
        .map(|exponent| 10f64.powf(exponent))
        .collect();

    if let Some(first) = values.first_mut() {
        *first = start;
    }
    if nsteps > 1 {
        values[nsteps - 1] = stop;
    }
    values
}

/// Smallest step count keeping every gap at or below `max_step_size`
pub fn steps_for_max_step_size(start: f64, stop: f64, max_step_size: f64) -> Result<usize> {
    if max_step_size.is_nan() || max_step_size <= 0.0 {
        return Err(SweepError::invalid(
            "max_step_size",
            max_step_size,
            "must be > 0",
        ));
    }
    check_finite("start", start)?;
    check_finite("stop", stop)?;

    let intervals = ((stop - start) / max_step_size).abs().ceil();
    derived_step_count("max_step_size", max_step_size, intervals)
}

/// Smallest step count keeping every ratio at or below `max_step_factor`
pub fn steps_for_max_step_factor(start: f64, stop: f64, max_step_factor: f64) -> Result<usize> {
    if max_step_factor.is_nan() || max_step_factor <= 1.0 {
        return Err(SweepError::invalid(
            "max_step_factor",
            max_step_factor,
            "must be > 1",
        ));
    }
    check_log_bound("start", start)?;
    check_log_bound("stop", stop)?;

    let intervals = ((stop / start).ln().abs() / max_step_factor.ln()).ceil();
    derived_step_count("max_step_factor", max_step_factor, intervals)
}

/// Interval count plus the closing point, rejecting counts that cannot be allocated
fn derived_step_count(param: &'static str, value: f64, intervals: f64) -> Result<usize> {
    let too_many = || SweepError::invalid(param, value, "gives too many steps");
    if !intervals.is_finite() || intervals >= MAX_DERIVED_STEPS as f64 {
        return Err(too_many());
    }
    (intervals as usize).checked_add(1).ok_or_else(too_many)
}

fn check_finite(param: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SweepError::invalid(param, value, "must be finite"))
    }
}

fn check_log_bound(param: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SweepError::invalid(
            param,
            value,
            "must be finite and > 0 for a logarithmic sweep",
        ))
    }
}

/// Uniformly spaced sweep
#[derive(Debug)]
pub struct LinearSweep {
    start: f64,
    stop: f64,
    inner: VectorSweep,
}

impl LinearSweep {
    /// `nsteps` uniformly spaced values, descending when `start > stop`
    pub fn with_steps(start: f64, stop: f64, nsteps: usize) -> Self {
        Self {
            start,
            stop,
            inner: VectorSweep::new(linspace(start, stop, nsteps)),
        }
    }

    /// As many values as needed so no gap exceeds `max_step_size`
    pub fn with_max_step_size(start: f64, stop: f64, max_step_size: f64) -> Result<Self> {
        let nsteps = steps_for_max_step_size(start, stop, max_step_size)?;
        Ok(Self::with_steps(start, stop, nsteps))
    }

    pub fn start_value(&self) -> f64 {
        self.start
    }

    pub fn stop_value(&self) -> f64 {
        self.stop
    }
}

/// Logarithmically spaced sweep
#[derive(Debug)]
pub struct LogSweep {
    start: f64,
    stop: f64,
    inner: VectorSweep,
}

impl LogSweep {
    /// `nsteps` values uniform in log10, descending when `start > stop`
    pub fn with_steps(start: f64, stop: f64, nsteps: usize) -> Result<Self> {
        check_log_bound("start", start)?;
        check_log_bound("stop", stop)?;
        Ok(Self {
            start,
            stop,
            inner: VectorSweep::new(logspace(start, stop, nsteps)),
        })
    }

    /// As many values as needed so no ratio exceeds `max_step_factor`
    pub fn with_max_step_factor(start: f64, stop: f64, max_step_factor: f64) -> Result<Self> {
        let nsteps = steps_for_max_step_factor(start, stop, max_step_factor)?;
        Self::with_steps(start, stop, nsteps)
    }

    pub fn start_value(&self) -> f64 {
        self.start
    }

    pub fn stop_value(&self) -> f64 {
        self.stop
    }
}

macro_rules! spaced_sweep {
    ($name:ident) => {
        impl $name {
            #[must_use]
            pub fn roundtrip(mut self, roundtrip: bool) -> Self {
                self.inner = self.inner.roundtrip(roundtrip);
                self
            }

            #[must_use]
            pub fn passes(mut self, npasses: usize) -> Self {
                self.inner = self.inner.passes(npasses);
                self
            }

            #[must_use]
            pub fn on_update(mut self, update: impl FnMut(&SweepStep) + Send + 'static) -> Self {
                self.inner = self.inner.on_update(update);
                self
            }

            /// The generated x values for a single forward pass
            pub fn values(&self) -> &[f64] {
                self.inner.vector()
            }

            pub fn as_vector(&self) -> &VectorSweep {
                &self.inner
            }
        }

        impl Sweep for $name {
            fn start(&mut self) {
                self.inner.start();
            }

            fn next_step(&mut self) -> Option<&mut SweepStep> {
                self.inner.next_step()
            }

            fn finish(&mut self) {
                self.inner.finish();
            }

            fn result(&self) -> SweepResult {
                self.inner.result()
            }

            fn len(&self) -> usize {
                self.inner.len()
            }

            fn set_update(&mut self, update: UpdateCallback) {
                self.inner.set_update(update);
            }
        }
    };
}

spaced_sweep!(LinearSweep);
spaced_sweep!(LogSweep);
