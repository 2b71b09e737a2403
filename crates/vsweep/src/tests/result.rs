//! Tests for SweepResult
//!
//! These tests verify:
//! - Conversion to a numeric array
//! - Equality on both sequences
//! - Concatenation with `+`
//! - Unpacking and accessors
//! - Non-numeric contents and `None` coercion

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SweepError;
use crate::model::SweepResult;

fn random_values(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.random::<f64>()).collect()
}

#[test]
fn test_conversion_to_array() {
    let mut rng = StdRng::seed_from_u64(7);
    let x = random_values(&mut rng, 10);
    let y = random_values(&mut rng, 10);

    let result = SweepResult::from_parts(x.clone(), y.clone()).unwrap();
    let [ax, ay] = result.to_array().unwrap();

    assert_eq!(ax, x);
    assert_eq!(ay, y);
}

#[test]
fn test_equal() {
    let mut rng = StdRng::seed_from_u64(11);
    let x1 = random_values(&mut rng, 10);
    let x2 = random_values(&mut rng, 10);
    let y1 = random_values(&mut rng, 10);
    let y2 = random_values(&mut rng, 10);

    let result = |x: &Vec<f64>, y: &Vec<f64>| SweepResult::from_parts(x.clone(), y.clone()).unwrap();

    assert_eq!(result(&x1, &y1), result(&x1, &y1));
    assert_ne!(result(&x1, &y1), result(&x2, &y1));
    assert_ne!(result(&x1, &y1), result(&x1, &y2));
    assert_ne!(result(&x1, &y1), result(&x2, &y2));
}

#[test]
fn test_concatenate() {
    let mut rng = StdRng::seed_from_u64(3);
    let x1 = random_values(&mut rng, 10);
    let y1 = random_values(&mut rng, 10);
    let x2 = random_values(&mut rng, 10);
    let y2 = random_values(&mut rng, 10);

    let result1 = SweepResult::from_parts(x1.clone(), y1.clone()).unwrap();
    let result2 = SweepResult::from_parts(x2.clone(), y2.clone()).unwrap();

    let expected = SweepResult::from_parts(
        x1.iter().chain(&x2).copied(),
        y1.iter().chain(&y2).copied(),
    )
    .unwrap();

    assert_eq!(&result1 + &result2, expected);
    assert_eq!(result1 + result2, expected);
}

#[test]
fn test_concatenate_is_associative() {
    let a = SweepResult::single(1.0, Some(1.0));
    let b = SweepResult::single(2.0, None);
    let c = SweepResult::single(3.0, Some(9.0));

    assert_eq!((&a + &b) + c.clone(), a + (b + c));
}

#[test]
fn test_unpacking() {
    let mut rng = StdRng::seed_from_u64(5);
    let x = random_values(&mut rng, 10);
    let y = random_values(&mut rng, 10);

    let result = SweepResult::from_parts(x.clone(), y.clone()).unwrap();
    let (x0, y0): (Vec<f64>, Vec<f64>) = result.into();

    assert_eq!(x0, x);
    assert_eq!(y0, y);
}

#[test]
fn test_attributes() {
    let x = vec![0.5, 1.5, 2.5];
    let y = vec![Some(1.0), None, Some(3.0)];

    let result = SweepResult::try_from((x.clone(), y.clone())).unwrap();

    assert_eq!(result.x(), x.as_slice());
    assert_eq!(result.y(), y.as_slice());
    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
}

#[test]
fn test_non_numerical_contents() {
    let x1 = vec![None, Some("abc")];
    let y1 = vec![vec![2, 3, 4, 5], vec![]];
    let result1 = SweepResult::from_parts(x1.clone(), y1.clone()).unwrap();

    let x2 = vec![Some("xyz")];
    let y2 = vec![vec![42]];
    let result2 = SweepResult::from_parts(x2.clone(), y2.clone()).unwrap();

    let expected = SweepResult::from_parts(
        x1.into_iter().chain(x2),
        y1.into_iter().chain(y2),
    )
    .unwrap();

    assert_eq!(result1 + result2, expected);
}

#[test]
fn test_none_y() {
    let result = SweepResult::single(42, None::<f64>);

    assert_eq!(result.y(), &[None]);
    assert_eq!(result.x(), &[42]);
}

#[test]
fn test_missing_y_is_not_numeric() {
    let result = SweepResult::single(42, None::<f64>);
    assert_eq!(
        result.to_array().unwrap_err(),
        SweepError::NotNumeric { axis: "y", index: 0 }
    );
}

#[test]
fn test_length_mismatch() {
    let err = SweepResult::try_from((vec![1.0, 2.0, 3.0], vec![1.0])).unwrap_err();
    assert_eq!(err, SweepError::LengthMismatch { x_len: 3, y_len: 1 });
}

#[test]
fn test_iter_pairs() {
    let result: SweepResult = [(1.0, Some(2.0)), (3.0, None)].into_iter().collect();
    let pairs: Vec<(f64, Option<f64>)> = result.iter().map(|(x, y)| (*x, *y)).collect();
    assert_eq!(pairs, vec![(1.0, Some(2.0)), (3.0, None)]);
}
