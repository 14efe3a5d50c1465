#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximum number of points a single call to [`sample`](crate::sample) may produce.
pub const MAX_SAMPLES: usize = 10_000;

/// Options to use when sampling an expression.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleOptions {
    /// The variable that takes each sampled value.
    ///
    /// The default value is `'x'`.
    pub variable: char,

    /// The inclusive `(start, end)` range of values to sample.
    ///
    /// The default value is `(-10.0, 10.0)`.
    pub range: (f64, f64),

    /// The distance between two sampled values.
    ///
    /// The default value is `0.5`.
    pub step: f64,
}

/// The default options for sampling. Returns a [`SampleOptions`] with the following values:
///
/// - [`variable`](SampleOptions::variable): `'x'`
/// - [`range`](SampleOptions::range): `(-10.0, 10.0)`
/// - [`step`](SampleOptions::step): `0.5`
impl Default for SampleOptions {
    fn default() -> SampleOptions {
        SampleOptions {
            variable: 'x',
            range: (-10.0, 10.0),
            step: 0.5,
        }
    }
}

impl SampleOptions {
    /// Set the sampled variable. Returns an updated [`SampleOptions`] for chaining.
    pub fn variable(mut self, variable: char) -> Self {
        self.variable = variable;
        self
    }

    /// Set the inclusive range to sample. Returns an updated [`SampleOptions`] for chaining.
    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    /// Set the distance between sampled values. Returns an updated [`SampleOptions`] for
    /// chaining.
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Returns the index of the last sample, such that the sampled values are
    /// `start + i * step` for `i` in `0..=last`, or a description of why the options are invalid.
    pub(crate) fn last_index(&self) -> Result<usize, String> {
        let (start, end) = self.range;
        if !self.variable.is_ascii_alphabetic() {
            return Err(format!("`{}` is not a variable name", self.variable));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err("the range must be finite".to_string());
        }
        if start > end {
            return Err(format!("the range start {} is greater than its end {}", start, end));
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(format!("the step must be a positive number, but it is {}", self.step));
        }

        // the epsilon keeps `end` in the range when `(end - start) / step` is an integer that
        // came out slightly below itself
        let last = ((end - start) / self.step + 1e-9).floor();
        if last + 1.0 > MAX_SAMPLES as f64 {
            return Err(format!("the options would produce more than {} samples", MAX_SAMPLES));
        }
        Ok(last as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let opts = SampleOptions::default();
        assert_eq!(opts.variable, 'x');
        assert_eq!(opts.range, (-10.0, 10.0));
        assert_eq!(opts.step, 0.5);
        assert_eq!(opts.last_index(), Ok(40));
    }

    #[test]
    fn chaining() {
        let opts = SampleOptions::default().variable('t').range(0.0, 1.0).step(0.1);
        assert_eq!(opts, SampleOptions { variable: 't', range: (0.0, 1.0), step: 0.1 });
        assert_eq!(opts.last_index(), Ok(10));
    }

    #[test]
    fn single_point() {
        assert_eq!(SampleOptions::default().range(3.0, 3.0).last_index(), Ok(0));
    }

    #[test]
    fn invalid() {
        let opts = SampleOptions::default();
        assert!(opts.step(0.0).last_index().is_err());
        assert!(opts.step(-1.0).last_index().is_err());
        assert!(opts.step(f64::NAN).last_index().is_err());
        assert!(opts.range(5.0, -5.0).last_index().is_err());
        assert!(opts.range(0.0, f64::INFINITY).last_index().is_err());
        assert!(opts.variable('1').last_index().is_err());
        assert!(opts.step(0.001).last_index().is_err());
    }
}
