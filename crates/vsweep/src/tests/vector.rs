//! VectorSweep tests
//!
//! Checks that x follows the given vector, that y values are stored, and the
//! traversal order for passes and roundtrips.

use crate::sweep::Sweep;
use crate::vector::VectorSweep;

#[test]
fn test_single_vector_sweep() {
    let mut sweep = VectorSweep::new([1.0, 2.0, 3.0]);

    let result = sweep.run(|step| step.set_y(step.x * step.x));

    assert_eq!(result.x(), &[1.0, 2.0, 3.0]);
    assert_eq!(result.y(), &[Some(1.0), Some(4.0), Some(9.0)]);
    assert_eq!(sweep.result(), result);
}

#[test]
fn test_multiple_passes() {
    let mut sweep = VectorSweep::new([2.0, 3.0, 4.0]).passes(3);

    let result = sweep.run(|_| {});

    assert_eq!(
        result.x(),
        &[2.0, 3.0, 4.0, 2.0, 3.0, 4.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn test_roundtrip() {
    let mut sweep = VectorSweep::new([1.0, 2.0, 3.0]).roundtrip(true);

    let result = sweep.run(|_| {});

    assert_eq!(result.x(), &[1.0, 2.0, 3.0, 2.0, 1.0]);
}

#[test]
fn test_roundtrip_multiple_passes() {
    let mut sweep = VectorSweep::new([2.0, 3.0, 4.0]).roundtrip(true).passes(3);

    let result = sweep.run(|_| {});

    assert_eq!(
        result.x(),
        &[2.0, 3.0, 4.0, 3.0, 2.0, 3.0, 4.0, 3.0, 2.0, 3.0, 4.0, 3.0, 2.0]
    );
}

#[test]
fn test_len() {
    let sweep = VectorSweep::new([1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(sweep.len(), 5);

    let sweep = VectorSweep::new([1.0, 2.0, 3.0]).passes(2);
    assert_eq!(sweep.len(), 6);

    let sweep = VectorSweep::new([1.0, 2.0, 3.0]).roundtrip(true).passes(2);
    assert_eq!(sweep.len(), 12);
    assert_eq!(sweep.traversal_len(), 9);
}

#[test]
fn test_step_total_is_traversal_length() {
    let mut sweep = VectorSweep::new([1.0, 2.0, 3.0]).roundtrip(true);
    let mut totals = Vec::new();

    sweep.run(|step| totals.push((step.index, step.total)));

    assert_eq!(
        totals,
        (0..5).map(|i| (Some(i), Some(5))).collect::<Vec<_>>()
    );
}

#[test]
fn test_empty_vector() {
    let mut sweep = VectorSweep::new(Vec::new());
    let mut calls = 0;

    let result = sweep.run(|_| calls += 1);

    assert_eq!(calls, 0);
    assert!(result.is_empty());
}

#[test]
fn test_zero_passes() {
    let mut sweep = VectorSweep::new([1.0, 2.0]).passes(0);
    assert!(sweep.is_empty());
    assert!(sweep.run(|_| {}).is_empty());
}
