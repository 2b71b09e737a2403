mod result;
mod step;

pub use result::{AsNumeric, SweepResult};
pub use step::SweepStep;
