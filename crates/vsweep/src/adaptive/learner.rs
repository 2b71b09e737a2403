//! Default sampling engine
//!
//! `Learner1D` places the two bounds first, then repeatedly bisects the
//! interval with the largest loss. The loss of an interval is its length in
//! the (x, y) plane after scaling x by the domain width and y by the observed
//! y range, so points gather where the curve moves the most.

use serde::{Deserialize, Serialize};

use super::engine::SamplingEngine;

/// Interval-bisecting sampler over a closed 1D domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Learner1D {
    bounds: (f64, f64),
    /// Told observations, sorted by x
    data: Vec<(f64, Option<f64>)>,
    /// Asked but not yet told
    pending: Vec<f64>,
}

impl Learner1D {
    #[must_use]
    pub fn new(bounds: (f64, f64)) -> Self {
        Self {
            bounds,
            data: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// Largest interval loss over all known and pending points
    pub fn loss(&self) -> f64 {
        self.intervals()
            .map(|(loss, _, _)| loss)
            .fold(0.0, f64::max)
    }

    fn x_scale(&self) -> f64 {
        let width = (self.bounds.1 - self.bounds.0).abs();
        if width > 0.0 { width } else { 1.0 }
    }

    fn y_scale(&self) -> f64 {
        let (min, max) = self
            .data
            .iter()
            .filter_map(|(_, y)| y.filter(|y| y.is_finite()))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            });
        if max > min { max - min } else { 0.0 }
    }

    /// Intervals shorter than this cannot be split any further
    fn dx_eps(&self) -> f64 {
        2.0 * self.bounds.0.abs().max(self.bounds.1.abs()) * f64::EPSILON
    }

    /// Every known and pending x with its usable y, sorted by x
    fn points(&self) -> Vec<(f64, Option<f64>)> {
        let mut points: Vec<(f64, Option<f64>)> = self
            .data
            .iter()
            .map(|&(x, y)| (x, y.filter(|y| y.is_finite())))
            .chain(self.pending.iter().map(|&x| (x, None)))
            .collect();
        if !self.pending.is_empty() {
            points.sort_by(|a, b| a.0.total_cmp(&b.0));
        }
        points
    }

    /// (loss, left, right) of every interval between neighbouring points
    fn intervals(&self) -> impl Iterator<Item = (f64, f64, f64)> {
        let x_scale = self.x_scale();
        let y_scale = self.y_scale();
        let eps = self.dx_eps();
        let points = self.points();

        (1..points.len()).map(move |i| {
            let (x0, y0) = points[i - 1];
            let (x1, y1) = points[i];
            let dx = x1 - x0;
            let loss = if dx < eps {
                0.0
            } else {
                match (y0, y1) {
                    (Some(y0), Some(y1)) if y_scale > 0.0 => {
                        (dx / x_scale).hypot((y1 - y0) / y_scale)
                    }
                    _ => dx / x_scale,
                }
            };
            (loss, x0, x1)
        })
    }

    fn contains(&self, x: f64) -> bool {
        self.data.iter().any(|&(known, _)| known == x) || self.pending.contains(&x)
    }

    /// Next x to sample, or `None` once no interval can be split
    fn next_point(&self) -> Option<f64> {
        let (lo, hi) = self.bounds;
        for bound in [lo, hi] {
            if !self.contains(bound) {
                return Some(bound);
            }
        }

        // leftmost interval wins ties
        self.intervals()
            .filter_map(|(loss, x0, x1)| {
                let mid = f64::midpoint(x0, x1);
                (loss > 0.0 && x0 < mid && mid < x1).then_some((loss, mid))
            })
            .reduce(|best, next| if next.0 > best.0 { next } else { best })
            .map(|(_, mid)| mid)
    }
}

impl SamplingEngine for Learner1D {
    fn reset(&mut self, bounds: (f64, f64)) {
        self.bounds = bounds;
        self.data.clear();
        self.pending.clear();
    }

    fn tell(&mut self, x: f64, y: Option<f64>) {
        self.pending.retain(|&p| p != x);
        match self.data.binary_search_by(|(known, _)| known.total_cmp(&x)) {
            Ok(i) => self.data[i].1 = y,
            Err(i) => self.data.insert(i, (x, y)),
        }
    }

    /// Fewer than `n` points come back once the domain is resolved to
    /// floating-point precision
    fn ask(&mut self, n: usize) -> Vec<f64> {
        (0..n)
            .map_while(|_| {
                let x = self.next_point()?;
                self.pending.push(x);
                Some(x)
            })
            .collect()
    }

    fn npoints(&self) -> usize {
        self.data.len()
    }

    fn observations(&self) -> Vec<(f64, Option<f64>)> {
        self.data.clone()
    }
}
