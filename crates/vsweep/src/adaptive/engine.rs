/// A one-dimensional adaptive sampler driven by (x, y) feedback
///
/// The sweep owns the budget and the feedback loop; the engine only decides
/// where the next point goes. Any type with these operations can back an
/// [`AdaptiveSweep`](super::AdaptiveSweep).
pub trait SamplingEngine {
    /// Forget every observation and sample over `bounds` from now on
    fn reset(&mut self, bounds: (f64, f64));

    /// Record the value measured at `x`
    fn tell(&mut self, x: f64, y: Option<f64>);

    /// Propose `n` new x values to sample
    fn ask(&mut self, n: usize) -> Vec<f64>;

    /// Number of observations told so far
    fn npoints(&self) -> usize;

    /// All observations, in no particular order
    fn observations(&self) -> Vec<(f64, Option<f64>)>;
}
