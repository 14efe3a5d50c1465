use alg_compute::{
    numerical::{ctxt::Ctxt, evaluate},
    round2,
};
use alg_error::Error;
use alg_parser::parser::ast::expr::Expr;
use crate::{
    error::{InvalidSamplingOptions, NoValidSamples},
    opts::SampleOptions,
    point::Sample,
};
use rayon::prelude::*;
use tracing::{debug, trace};

/// The points produced by [`sample`], in increasing order of `x`.
///
/// Iterating over [`Samples`] consumes them; use [`Samples::as_slice`] to look at the points
/// without giving them up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    points: Vec<Sample>,
}

impl Samples {
    /// Returns the points as a slice.
    pub fn as_slice(&self) -> &[Sample] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl IntoIterator for Samples {
    type Item = Sample;
    type IntoIter = std::vec::IntoIter<Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Evaluates the expression at `start + i * step` for every `i` such that the value is within
/// the range, in parallel.
///
/// Points where evaluation fails or produces a non-finite value are skipped. Both coordinates of
/// the remaining points are rounded to two decimal places.
pub fn sample(expr: &Expr, options: &SampleOptions) -> Result<Samples, Error> {
    let last = options.last_index()
        .map_err(|reason| Error::new(Vec::new(), InvalidSamplingOptions { reason }))?;
    let (start, end) = options.range;
    let variable = options.variable;

    let points = (0..last + 1)
        .into_par_iter()
        .filter_map(|i| {
            let x = start + i as f64 * options.step;
            let mut ctxt = Ctxt::new();
            ctxt.add_var(variable, x);

            match evaluate(expr, &ctxt) {
                Ok(y) if y.is_finite() => Some(Sample::new(round2(x), round2(y))),
                Ok(y) => {
                    trace!(x, y, "skipping non-finite sample");
                    None
                },
                Err(err) => {
                    trace!(x, %err, "skipping sample");
                    None
                },
            }
        })
        .collect::<Vec<_>>();

    debug!(kept = points.len(), skipped = last + 1 - points.len(), "sampled expression");

    if points.is_empty() {
        return Err(Error::new(vec![expr.span()], NoValidSamples { variable, start, end }));
    }

    Ok(Samples { points })
}
