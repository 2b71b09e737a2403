//! The iteration protocol shared by every sweep strategy
//!
//! A run is pull-based: the caller asks for a step, writes its `y`, and asks
//! again. The step handed out last is *pending* until the next request,
//! exhaustion, or [`Sweep::finish`], at which point its (x, y) is committed.
//!
//! ```ignore
//! use vsweep::{LinearSweep, Sweep};
//!
//! let mut sweep = LinearSweep::with_steps(0.0, 1.0, 11);
//! sweep.start();
//! while let Some(step) = sweep.next_step() {
//!     step.set_y(measure(step.x));
//! }
//! let (x, y) = sweep.result().into_parts();
//! ```

use crate::adaptive::AdaptiveSweep;
use crate::model::{SweepResult, SweepStep};
use crate::spaced::{LinearSweep, LogSweep};
use crate::vector::VectorSweep;

/// Per-step callback
///
/// Called once for every produced step, after `x` is fixed and before the
/// step is handed to the caller. `y` is not set yet at that point.
pub type UpdateCallback = Box<dyn FnMut(&SweepStep) + Send>;

/// A restartable sequence of x positions with a result accumulator
pub trait Sweep {
    /// Begin a new run, dropping the previous result
    fn start(&mut self);

    /// Commit the pending step and produce the next one
    ///
    /// Returns `None` once the sweep is exhausted; the run is finalized at
    /// that point. A sweep that was never started is started first.
    fn next_step(&mut self) -> Option<&mut SweepStep>;

    /// Commit the pending step and end the run early
    fn finish(&mut self);

    /// Everything committed so far in the current run
    fn result(&self) -> SweepResult;

    /// Total number of steps, known without iterating
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set_update(&mut self, update: UpdateCallback);

    /// Drive a full run, letting `measure` fill in each step
    fn run<F>(&mut self, mut measure: F) -> SweepResult
    where
        F: FnMut(&mut SweepStep),
        Self: Sized,
    {
        self.start();
        while let Some(step) = self.next_step() {
            measure(step);
        }
        self.result()
    }

    /// Like [`Sweep::run`], but stops at the first measurement error
    ///
    /// The run is finalized before the error is returned, so `result()`
    /// still holds every step up to and including the failing one.
    fn try_run<E, F>(&mut self, mut measure: F) -> Result<SweepResult, E>
    where
        F: FnMut(&mut SweepStep) -> Result<(), E>,
        Self: Sized,
    {
        self.start();
        while let Some(step) = self.next_step() {
            if let Err(err) = measure(step) {
                self.finish();
                return Err(err);
            }
        }
        Ok(self.result())
    }
}

/// Any of the built-in sweep strategies
#[derive(Debug)]
pub enum AnySweep {
    Vector(VectorSweep),
    Linear(LinearSweep),
    Log(LogSweep),
    Adaptive(AdaptiveSweep),
}

impl AnySweep {
    /// Short name of the strategy, as used in sweep descriptions
    pub fn kind(&self) -> &'static str {
        match self {
            AnySweep::Vector(_) => "vector",
            AnySweep::Linear(_) => "linear",
            AnySweep::Log(_) => "log",
            AnySweep::Adaptive(_) => "adaptive",
        }
    }

    #[must_use]
    pub fn on_update(mut self, update: impl FnMut(&SweepStep) + Send + 'static) -> Self {
        self.set_update(Box::new(update));
        self
    }
}

macro_rules! dispatch {
    ($self:expr, $sweep:ident => $body:expr) => {
        match $self {
            AnySweep::Vector($sweep) => $body,
            AnySweep::Linear($sweep) => $body,
            AnySweep::Log($sweep) => $body,
            AnySweep::Adaptive($sweep) => $body,
        }
    };
}

impl Sweep for AnySweep {
    fn start(&mut self) {
        dispatch!(self, sweep => sweep.start())
    }

    fn next_step(&mut self) -> Option<&mut SweepStep> {
        dispatch!(self, sweep => sweep.next_step())
    }

    fn finish(&mut self) {
        dispatch!(self, sweep => sweep.finish())
    }

    fn result(&self) -> SweepResult {
        dispatch!(self, sweep => sweep.result())
    }

    fn len(&self) -> usize {
        dispatch!(self, sweep => sweep.len())
    }

    fn set_update(&mut self, update: UpdateCallback) {
        dispatch!(self, sweep => sweep.set_update(update))
    }
}

impl From<VectorSweep> for AnySweep {
    fn from(sweep: VectorSweep) -> Self {
        AnySweep::Vector(sweep)
    }
}

impl From<LinearSweep> for AnySweep {
    fn from(sweep: LinearSweep) -> Self {
        AnySweep::Linear(sweep)
    }
}

impl From<LogSweep> for AnySweep {
    fn from(sweep: LogSweep) -> Self {
        AnySweep::Log(sweep)
    }
}

impl From<AdaptiveSweep> for AnySweep {
    fn from(sweep: AdaptiveSweep) -> Self {
        AnySweep::Adaptive(sweep)
    }
}
