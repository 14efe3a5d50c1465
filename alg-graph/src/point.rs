use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sampled point, with both coordinates rounded to two decimal places.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Sample {
    /// Creates a new sample.
    pub const fn new(x: f64, y: f64) -> Sample {
        Sample { x, y }
    }
}
