//! Adaptive sweep
//!
//! Point placement is delegated to a [`SamplingEngine`]. The sweep reports
//! every measured (x, y) back to the engine before asking for the next x, so
//! later points concentrate where y varies most. The engine may propose
//! points in any order; the result is always sorted by x. A run hands out at
//! most `nsteps` steps, even when the engine repeats itself.

mod engine;
mod learner;

pub use engine::SamplingEngine;
pub use learner::Learner1D;

use std::fmt;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::error::{Result, SweepError};
use crate::model::{SweepResult, SweepStep};
use crate::sweep::{Sweep, UpdateCallback};

/// Sweep whose x values are chosen by a sampling engine
pub struct AdaptiveSweep<E = Learner1D> {
    start: f64,
    stop: f64,
    nsteps: usize,
    engine: E,
    update: Option<UpdateCallback>,
    pending: Option<SweepStep>,
    /// Steps handed out in the current run
    produced: usize,
    started: Option<Instant>,
    finished: bool,
}

impl AdaptiveSweep<Learner1D> {
    /// Adaptive sweep over `[start, stop]` with the default engine
    pub fn new(start: f64, stop: f64, nsteps: usize) -> Result<Self> {
        Self::with_engine(start, stop, nsteps, Learner1D::new((start, stop)))
    }
}

impl<E: SamplingEngine> AdaptiveSweep<E> {
    /// Adaptive sweep over `[start, stop]` backed by `engine`
    pub fn with_engine(start: f64, stop: f64, nsteps: usize, engine: E) -> Result<Self> {
        for (param, value) in [("start", start), ("stop", stop)] {
            if !value.is_finite() {
                return Err(SweepError::invalid(param, value, "must be finite"));
            }
        }
        if start == stop {
            return Err(SweepError::invalid(
                "stop",
                stop,
                "must differ from start for an adaptive sweep",
            ));
        }

        Ok(Self {
            start,
            stop,
            nsteps,
            engine,
            update: None,
            pending: None,
            produced: 0,
            started: None,
            finished: false,
        })
    }

    #[must_use]
    pub fn on_update(mut self, update: impl FnMut(&SweepStep) + Send + 'static) -> Self {
        self.update = Some(Box::new(update));
        self
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.start, self.stop)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn report_pending(&mut self) {
        let Some(step) = self.pending.take() else {
            return;
        };

        let before = self.engine.npoints();
        self.engine.tell(step.x, step.y);
        if self.engine.npoints() <= before {
            warn!(
                x = step.x,
                npoints = before,
                "Sampling engine did not record a new observation"
            );
        }
    }

    fn end_run(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        debug!(
            points = self.engine.npoints(),
            elapsed = ?self.started.map(|s| s.elapsed()),
            "Adaptive sweep finished"
        );
    }
}

impl<E: SamplingEngine> Sweep for AdaptiveSweep<E> {
    fn start(&mut self) {
        debug!(
            start = self.start,
            stop = self.stop,
            nsteps = self.nsteps,
            "Starting adaptive sweep"
        );
        self.engine.reset((self.start, self.stop));
        self.pending = None;
        self.produced = 0;
        self.started = Some(Instant::now());
        self.finished = false;
    }

    fn next_step(&mut self) -> Option<&mut SweepStep> {
        let started = match self.started {
            Some(started) => started,
            None => {
                self.start();
                self.started?
            }
        };
        self.report_pending();

        if self.finished {
            return None;
        }

        // an engine that repeats points never reaches nsteps observations
        let told = self.engine.npoints();
        if told >= self.nsteps || self.produced >= self.nsteps {
            self.end_run();
            return None;
        }

        let Some(x) = self.engine.ask(1).into_iter().next() else {
            warn!(npoints = told, "Sampling engine proposed no point");
            self.end_run();
            return None;
        };

        let step = SweepStep::new(x)
            .with_index(told, self.nsteps)
            .with_elapsed(started.elapsed());
        self.produced += 1;
        trace!(index = told, x, "Adaptive sweep step");

        if let Some(update) = self.update.as_mut() {
            update(&step);
        }

        Some(self.pending.insert(step))
    }

    fn finish(&mut self) {
        self.report_pending();
        self.end_run();
    }

    fn result(&self) -> SweepResult {
        let mut observations = self.engine.observations();
        observations.sort_by(|a, b| a.0.total_cmp(&b.0));
        observations.into_iter().collect()
    }

    fn len(&self) -> usize {
        self.nsteps
    }

    fn set_update(&mut self, update: UpdateCallback) {
        self.update = Some(update);
    }
}

impl<E: fmt::Debug> fmt::Debug for AdaptiveSweep<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveSweep")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("nsteps", &self.nsteps)
            .field("engine", &self.engine)
            .field("has_update", &self.update.is_some())
            .finish_non_exhaustive()
    }
}
