//! Sweep over a fixed vector of x values
//!
//! The traversal is rebuilt at every [`Sweep::start`] from the vector, the
//! roundtrip flag and the number of passes:
//!
//! - plain: the vector repeated `npasses` times
//! - roundtrip: forward then backward without repeating the turning points,
//!   repeated `npasses` times, closed by the first element
//!   (`[1, 2, 3]` gives `[1, 2, 3, 2, 1]`)

use std::fmt;
use std::time::Instant;

use tracing::{debug, trace};

use crate::model::{SweepResult, SweepStep};
use crate::sweep::{Sweep, UpdateCallback};

/// State of one run over the traversal
struct Run {
    traversal: Vec<f64>,
    position: usize,
    started: Instant,
    pending: Option<SweepStep>,
    finished: bool,
}

/// Sweep iterating over a fixed vector of x values
pub struct VectorSweep {
    vector: Vec<f64>,
    roundtrip: bool,
    npasses: usize,
    update: Option<UpdateCallback>,
    run: Option<Run>,
    result: SweepResult,
}

impl VectorSweep {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            vector: values.into_iter().collect(),
            roundtrip: false,
            npasses: 1,
            update: None,
            run: None,
            result: SweepResult::new(),
        }
    }

    /// Visit the vector forward then backward on every pass
    #[must_use]
    pub fn roundtrip(mut self, roundtrip: bool) -> Self {
        self.roundtrip = roundtrip;
        self
    }

    /// Number of times the vector (or the roundtrip) is traversed
    #[must_use]
    pub fn passes(mut self, npasses: usize) -> Self {
        self.npasses = npasses;
        self
    }

    #[must_use]
    pub fn on_update(mut self, update: impl FnMut(&SweepStep) + Send + 'static) -> Self {
        self.update = Some(Box::new(update));
        self
    }

    pub fn vector(&self) -> &[f64] {
        &self.vector
    }

    pub fn is_roundtrip(&self) -> bool {
        self.roundtrip
    }

    pub fn npasses(&self) -> usize {
        self.npasses
    }

    /// The x values a full run visits, in order
    pub fn traversal(&self) -> Vec<f64> {
        if !self.roundtrip {
            let total = self.vector.len() * self.npasses;
            return self.vector.iter().copied().cycle().take(total).collect();
        }

        let Some(&first) = self.vector.first() else {
            return Vec::new();
        };

        // forward, then backward without either end
        let inner = match self.vector.len() {
            0..=2 => &[][..],
            n => &self.vector[1..n - 1],
        };
        let lap: Vec<f64> = self
            .vector
            .iter()
            .chain(inner.iter().rev())
            .copied()
            .collect();

        let mut traversal = Vec::with_capacity(lap.len() * self.npasses + 1);
        for _ in 0..self.npasses {
            traversal.extend_from_slice(&lap);
        }
        traversal.push(first);
        traversal
    }

    /// Exact number of steps a full run produces
    ///
    /// [`Sweep::len`] counts `2 * len(vector)` per roundtrip pass, which
    /// overestimates the roundtrip traversal by the skipped turning points.
    pub fn traversal_len(&self) -> usize {
        let n = self.vector.len();
        match (self.roundtrip, n) {
            (false, _) => n * self.npasses,
            (true, 0) => 0,
            (true, n) => (n + n.saturating_sub(2)) * self.npasses + 1,
        }
    }

    fn commit_pending(&mut self) {
        if let Some(step) = self.run.as_mut().and_then(|run| run.pending.take()) {
            self.result.push(step.x, step.y);
        }
    }

    fn end_run(&mut self) {
        if let Some(run) = self.run.as_mut().filter(|run| !run.finished) {
            run.finished = true;
            debug!(
                points = self.result.len(),
                elapsed = ?run.started.elapsed(),
                "Vector sweep finished"
            );
        }
    }
}

impl Sweep for VectorSweep {
    fn start(&mut self) {
        let traversal = self.traversal();
        debug!(
            steps = traversal.len(),
            roundtrip = self.roundtrip,
            npasses = self.npasses,
            "Starting vector sweep"
        );

        self.result = SweepResult::new();
        self.run = Some(Run {
            traversal,
            position: 0,
            started: Instant::now(),
            pending: None,
            finished: false,
        });
    }

    fn next_step(&mut self) -> Option<&mut SweepStep> {
        if self.run.is_none() {
            self.start();
        }
        self.commit_pending();

        let exhausted = self
            .run
            .as_ref()
            .is_none_or(|run| run.finished || run.position >= run.traversal.len());
        if exhausted {
            self.end_run();
            return None;
        }

        let run = self.run.as_mut()?;
        let index = run.position;
        let step = SweepStep::new(run.traversal[index])
            .with_index(index, run.traversal.len())
            .with_elapsed(run.started.elapsed());
        run.position += 1;

        trace!(index, x = step.x, "Sweep step");
        if let Some(update) = self.update.as_mut() {
            update(&step);
        }

        Some(run.pending.insert(step))
    }

    fn finish(&mut self) {
        self.commit_pending();
        self.end_run();
    }

    fn result(&self) -> SweepResult {
        self.result.clone()
    }

    fn len(&self) -> usize {
        let total = self.vector.len() * self.npasses;
        if self.roundtrip { total * 2 } else { total }
    }

    fn set_update(&mut self, update: UpdateCallback) {
        self.update = Some(update);
    }
}

impl fmt::Debug for VectorSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorSweep")
            .field("vector", &self.vector)
            .field("roundtrip", &self.roundtrip)
            .field("npasses", &self.npasses)
            .field("has_update", &self.update.is_some())
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
