//! One-dimensional sweeps for measurement and simulation loops
//!
//! A sweep hands out x positions one step at a time; the caller measures y at
//! each of them and the sweep collects the (x, y) pairs into a
//! [`SweepResult`]. Strategies:
//! - [`VectorSweep`]: a fixed list of x values, optionally roundtrip and
//!   repeated
//! - [`LinearSweep`]: uniform spacing from a step count or a maximum step size
//! - [`LogSweep`]: geometric spacing from a step count or a maximum factor
//! - [`AdaptiveSweep`]: points chosen by a [`SamplingEngine`] from the values
//!   measured so far
//!
//! # Example
//!
//! ```ignore
//! use vsweep::{LinearSweep, Sweep};
//!
//! let mut sweep = LinearSweep::with_max_step_size(0.0, 5.0, 0.25)?
//!     .roundtrip(true)
//!     .on_update(|step| println!("{step}"));
//!
//! let result = sweep.run(|step| step.set_y(instrument.read(step.x)));
//! let [x, y] = result.to_array()?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod adaptive;
pub mod error;
pub mod spaced;
pub mod sweep;
pub mod vector;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use adaptive::{AdaptiveSweep, Learner1D, SamplingEngine};
pub use config::SweepConfig;
pub use error::SweepError;
pub use model::{AsNumeric, SweepResult, SweepStep};
pub use spaced::{LinearSweep, LogSweep, linspace, logspace};
pub use sweep::{AnySweep, Sweep, UpdateCallback};
pub use vector::VectorSweep;
