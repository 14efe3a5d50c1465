//! Samples an expression over an evenly spaced range of values, producing the `(x, y)` points
//! to plot it with.
//!
//! Points where the expression cannot be evaluated, such as `sqrt(x)` for negative `x`, are
//! skipped; sampling only fails if no point at all can be evaluated.
//!
//! ```
//! use alg_graph::{sample, SampleOptions};
//! use alg_parser::parse_expr;
//!
//! let expr = parse_expr("x^2").unwrap();
//! let samples = sample(&expr, &SampleOptions::default().range(-2.0, 2.0).step(1.0)).unwrap();
//! let ys = samples.into_iter().map(|sample| sample.y).collect::<Vec<_>>();
//! assert_eq!(ys, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
//! ```

mod error;
mod opts;
mod point;
mod sampler;

pub use error::{InvalidSamplingOptions, NoValidSamples};
pub use opts::{SampleOptions, MAX_SAMPLES};
pub use point::Sample;
pub use sampler::{sample, Samples};
