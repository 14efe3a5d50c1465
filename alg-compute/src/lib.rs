//! Numerical evaluation, monomial simplification and linear solving for parsed algebraic
//! expressions.
//!
//! Every operation here is a pure function of its input: nothing is cached between calls, and
//! no operation performs I/O.

pub mod numerical;
pub mod practice;
pub mod solve;
pub mod symbolic;

/// Rounds the value to two decimal places, with halfway cases rounded away from zero.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;

    // normalize `-0.0`, so that it never displays as `-0`
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
