use std::fmt;

/// Errors raised while configuring a sweep or converting its result
#[derive(Debug, Clone, PartialEq)]
pub enum SweepError {
    /// A constructor argument is outside its valid range
    InvalidArgument {
        param: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// A result was built from x and y sequences of different lengths
    LengthMismatch { x_len: usize, y_len: usize },
    /// A result element has no numeric representation
    NotNumeric { axis: &'static str, index: usize },
    /// Sweep description is incomplete or inconsistent
    Config(String),
}

impl SweepError {
    pub(crate) fn invalid(param: &'static str, value: f64, reason: &'static str) -> Self {
        SweepError::InvalidArgument {
            param,
            value,
            reason,
        }
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::InvalidArgument {
                param,
                value,
                reason,
            } => write!(f, "invalid {param} ({value}): {reason}"),
            SweepError::LengthMismatch { x_len, y_len } => {
                write!(f, "x and y lengths differ (x={x_len}, y={y_len})")
            }
            SweepError::NotNumeric { axis, index } => {
                write!(f, "{axis}[{index}] is not numeric")
            }
            SweepError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for SweepError {}

pub type Result<T> = std::result::Result<T, SweepError>;
