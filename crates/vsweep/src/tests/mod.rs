//! Crate-level tests for the sweep strategies
//!
//! Tests are organized by topic:
//! - `result` - Result container construction, equality and concatenation
//! - `protocol` - Iteration contract shared by all sweeps (lazy commit, callback, restart)
//! - `vector` - Vector traversal, roundtrip and passes
//! - `spaced` - Linear and logarithmic sweeps
//! - `adaptive` - Adaptive sweep with the default and a scripted engine
//! - `config` - YAML sweep descriptions

mod result;
mod vector;

/// Relative comparison for generated grids
pub(crate) fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let tolerance = 1e-9 * e.abs().max(1.0);
        assert!(
            (a - e).abs() <= tolerance,
            "element {i} differs: got {a}, expected {e}"
        );
    }
}
