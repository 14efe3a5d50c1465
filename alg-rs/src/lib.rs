//! An algebra engine: solves single-variable linear equations with the steps taken, simplifies
//! expressions into a canonical sum of like terms, and samples expressions for graphing.
//!
//! Every operation takes the text as the user wrote it and returns either a result value or an
//! [`Error`], whose spans point into that text. The operations are pure and keep no state
//! between calls, so they can be called from any number of threads at once.
//!
//! ```
//! let solution = alg_rs::solve("2x + 5 = 13").unwrap();
//! assert_eq!(solution.variable, 'x');
//! assert_eq!(solution.value, 4.0);
//! assert_eq!(solution.steps.len(), 5);
//!
//! let simplified = alg_rs::simplify("5a + 2b - 3a + b").unwrap();
//! assert_eq!(simplified.simplified, "2a+3b");
//! ```

pub mod command;

use alg_compute::numerical::{self, ctxt::Ctxt};
use alg_parser::{parse_equation, parse_expr};
use tracing::debug;

pub use alg_compute::{
    practice::{check_answer, generate_problem, AnswerCheck, Problem, ANSWER_TOLERANCE},
    round2,
    solve::{Solution, Step},
    symbolic::Simplification,
};
pub use alg_error::{Category, Error};
pub use alg_graph::{Sample, SampleOptions, Samples, MAX_SAMPLES};

/// Solves a linear equation in one variable, such as `2x + 5 = 13`.
pub fn solve(text: &str) -> Result<Solution, Error> {
    debug!(text, "solve");
    let equation = parse_equation(text)?;
    alg_compute::solve::solve(&equation, text)
}

/// Simplifies an expression by combining its like terms, such as `2x + 3x` into `5x`.
pub fn simplify(text: &str) -> Result<Simplification, Error> {
    debug!(text, "simplify");
    let expr = parse_expr(text)?;
    alg_compute::symbolic::simplify_text(text, &expr)
}

/// Samples an expression over the range given by the options, skipping the points where it
/// cannot be evaluated.
pub fn graph(text: &str, options: &SampleOptions) -> Result<Samples, Error> {
    debug!(text, ?options, "graph");
    let expr = parse_expr(text)?;
    alg_graph::sample(&expr, options)
}

/// Evaluates an expression with the given variable bindings.
pub fn evaluate(text: &str, bindings: &[(char, f64)]) -> Result<f64, Error> {
    debug!(text, ?bindings, "evaluate");
    let expr = parse_expr(text)?;
    let ctxt = bindings.iter().copied().collect::<Ctxt>();
    numerical::evaluate(&expr, &ctxt)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn evaluate_with_bindings() {
        assert_eq!(evaluate("3x^2 - y", &[('x', 2.0), ('y', 1.0)]).unwrap(), 11.0);
        assert_eq!(evaluate("sqrt(16) + 1", &[]).unwrap(), 5.0);
    }

    #[test]
    fn evaluate_unbound() {
        let err = evaluate("x + 1", &[]).unwrap_err();
        assert_eq!(err.category(), Category::UnboundVariable);
        assert_eq!(err.spans, vec![0..1]);
    }

    #[test]
    fn syntax_errors_surface_first() {
        assert_eq!(solve("x + = 3").unwrap_err().category(), Category::Syntax);
        assert_eq!(simplify("2x +").unwrap_err().category(), Category::Syntax);
        assert_eq!(graph("(x", &SampleOptions::default()).unwrap_err().category(), Category::Syntax);
    }
}
