//! Accumulated (x, y) series of a sweep
//!
//! `SweepResult` is a positional pair of sequences. It does not care what the
//! elements are; only [`SweepResult::to_array`] asks for numbers.

use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::error::{Result, SweepError};

/// Paired x and y sequences of a sweep, always the same length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult<X = f64, Y = Option<f64>> {
    x: Vec<X>,
    y: Vec<Y>,
}

impl<X, Y> Default for SweepResult<X, Y> {
    fn default() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }
}

impl<X, Y> SweepResult<X, Y> {
    /// Create an empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a result from two sequences of equal length
    pub fn from_parts(
        x: impl IntoIterator<Item = X>,
        y: impl IntoIterator<Item = Y>,
    ) -> Result<Self> {
        let x: Vec<X> = x.into_iter().collect();
        let y: Vec<Y> = y.into_iter().collect();
        if x.len() != y.len() {
            return Err(SweepError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// Wrap a single pair into one-element sequences
    ///
    /// A `None` y is kept as `[None]`.
    #[must_use]
    pub fn single(x: X, y: Y) -> Self {
        Self {
            x: vec![x],
            y: vec![y],
        }
    }

    pub fn x(&self) -> &[X] {
        &self.x
    }

    pub fn y(&self) -> &[Y] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Append one pair at the end
    pub fn push(&mut self, x: X, y: Y) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Iterate over (x, y) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&X, &Y)> {
        self.x.iter().zip(self.y.iter())
    }

    /// Unpack into the x and y sequences
    pub fn into_parts(self) -> (Vec<X>, Vec<Y>) {
        (self.x, self.y)
    }
}

impl<X: AsNumeric, Y: AsNumeric> SweepResult<X, Y> {
    /// Numeric 2×N view: `[x, y]`
    ///
    /// Fails on the first element without a numeric representation.
    pub fn to_array(&self) -> Result<[Vec<f64>; 2]> {
        Ok([numeric_row("x", &self.x)?, numeric_row("y", &self.y)?])
    }
}

fn numeric_row<T: AsNumeric>(axis: &'static str, values: &[T]) -> Result<Vec<f64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, v)| v.as_f64().ok_or(SweepError::NotNumeric { axis, index }))
        .collect()
}

impl<X, Y> TryFrom<(Vec<X>, Vec<Y>)> for SweepResult<X, Y> {
    type Error = SweepError;

    fn try_from((x, y): (Vec<X>, Vec<Y>)) -> Result<Self> {
        Self::from_parts(x, y)
    }
}

impl<X, Y> From<SweepResult<X, Y>> for (Vec<X>, Vec<Y>) {
    fn from(result: SweepResult<X, Y>) -> Self {
        result.into_parts()
    }
}

impl<X, Y> FromIterator<(X, Y)> for SweepResult<X, Y> {
    fn from_iter<I: IntoIterator<Item = (X, Y)>>(iter: I) -> Self {
        let (x, y) = iter.into_iter().unzip();
        Self { x, y }
    }
}

impl<X, Y> Extend<(X, Y)> for SweepResult<X, Y> {
    fn extend<I: IntoIterator<Item = (X, Y)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.push(x, y);
        }
    }
}

impl<X, Y> Add for SweepResult<X, Y> {
    type Output = SweepResult<X, Y>;

    fn add(mut self, other: SweepResult<X, Y>) -> Self::Output {
        self += other;
        self
    }
}

impl<X: Clone, Y: Clone> Add for &SweepResult<X, Y> {
    type Output = SweepResult<X, Y>;

    fn add(self, other: Self) -> Self::Output {
        self.clone() + other.clone()
    }
}

impl<X, Y> AddAssign for SweepResult<X, Y> {
    fn add_assign(&mut self, other: SweepResult<X, Y>) {
        self.x.extend(other.x);
        self.y.extend(other.y);
    }
}

/// Values that have an `f64` representation for the numeric view
pub trait AsNumeric {
    fn as_f64(&self) -> Option<f64>;
}

macro_rules! impl_as_numeric {
    ($($t:ty),*) => {
        $(
            impl AsNumeric for $t {
                fn as_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl AsNumeric for f64 {
    fn as_f64(&self) -> Option<f64> {
        Some(*self)
    }
}

impl_as_numeric!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: AsNumeric> AsNumeric for Option<T> {
    fn as_f64(&self) -> Option<f64> {
        self.as_ref().and_then(AsNumeric::as_f64)
    }
}
