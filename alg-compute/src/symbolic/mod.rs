//! Simplification of expressions into a canonical sum of monomials.
//!
//! Only additive like-terms are combined: `2x + 3x` becomes `5x`, while products, quotients
//! and powers that contain variables are kept as opaque terms (`x^2 + x^2` becomes `2x^2`, but
//! `(x + 1)^2` is never expanded).

pub mod flatten;
pub mod step_collector;
pub mod term;

use alg_error::Error;
use alg_parser::parser::ast::expr::Expr;
use crate::numerical::error::NumericOverflow;
use std::fmt;
use step_collector::StepCollector;
use term::Terms;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A step taken by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SimplifyStep {
    /// The expression was split into its additive terms, each with a coefficient and a key.
    IdentifyLikeTerms,

    /// The coefficients of terms with the same key were added together.
    CombineCoefficients,

    /// Numeric sub-expressions were evaluated and the constants were summed.
    SimplifyConstants,
}

impl SimplifyStep {
    /// Returns the human-readable description of this step.
    pub fn description(&self) -> &'static str {
        match self {
            SimplifyStep::IdentifyLikeTerms => "Identify like terms",
            SimplifyStep::CombineCoefficients => "Combine coefficients of like terms",
            SimplifyStep::SimplifyConstants => "Simplify constants",
        }
    }
}

impl fmt::Display for SimplifyStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// The result of simplifying a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Simplification {
    /// The text that was simplified, as given.
    pub original: String,

    /// The simplified expression.
    pub simplified: String,

    /// The descriptions of the steps taken.
    pub steps: Vec<String>,
}

/// Simplifies the expression into its like-term buckets.
pub fn simplify(expr: &Expr) -> Result<Terms, Error> {
    simplify_with_steps(expr, &mut ())
}

/// Simplifies the expression into its like-term buckets, reporting the steps taken to the given
/// collector.
pub fn simplify_with_steps(
    expr: &Expr,
    steps: &mut impl StepCollector<SimplifyStep>,
) -> Result<Terms, Error> {
    let mut terms = Terms::new();
    flatten::flatten(expr, 1.0, &mut terms)?;

    // every coefficient was finite on its own, but adding them up can still overflow
    if terms.iter().any(|monomial| !monomial.coefficient.is_finite()) {
        return Err(Error::new(vec![expr.span()], NumericOverflow));
    }

    debug!(%terms, "simplified expression");
    steps.push(SimplifyStep::IdentifyLikeTerms);
    steps.push(SimplifyStep::CombineCoefficients);
    steps.push(SimplifyStep::SimplifyConstants);
    Ok(terms)
}

/// Simplifies the expression and renders the result, together with the original text and the
/// descriptions of the steps taken.
pub fn simplify_text(original: &str, expr: &Expr) -> Result<Simplification, Error> {
    let mut steps = Vec::new();
    let terms = simplify_with_steps(expr, &mut steps)?;
    Ok(Simplification {
        original: original.to_string(),
        simplified: terms.to_string(),
        steps: steps.iter().map(|step| step.description().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use alg_error::Category;
    use alg_parser::parse_expr;
    use crate::numerical::{
        ctxt::Ctxt,
        error::{DivisionByZero, SqrtOfNegative},
        eval::Eval,
    };
    use pretty_assertions::assert_eq;

    fn simplified(input: &str) -> String {
        simplify(&parse_expr(input).unwrap()).unwrap().to_string()
    }

    #[test]
    fn like_terms() {
        assert_eq!(simplified("2x + 3x"), "5x");
        assert_eq!(simplified("5a + 2b - 3a + b"), "2a+3b");
        assert_eq!(simplified("4x + 2 - x + 5"), "3x+7");
    }

    #[test]
    fn unit_coefficients() {
        assert_eq!(simplified("2x - x"), "x");
        assert_eq!(simplified("y - 2y + 1"), "-y+1");
    }

    #[test]
    fn constants_last() {
        assert_eq!(simplified("3 + z + a"), "a+z+3");
        assert_eq!(simplified("-3 + x"), "x-3");
    }

    #[test]
    fn cancellation() {
        assert_eq!(simplified("x - x"), "0");
        assert_eq!(simplified("2 - 2"), "0");
        assert_eq!(simplified("x + 1 - x"), "1");
    }

    #[test]
    fn distribution() {
        assert_eq!(simplified("-(x + 1)"), "-x-1");
        assert_eq!(simplified("3(x + 1)"), "3x+3");
        assert_eq!(simplified("(x + 4)/2"), "0.5x+2");
        assert_eq!(simplified("2(3(a - b))"), "6a-6b");
    }

    #[test]
    fn opaque_terms() {
        assert_eq!(simplified("x^2 + x^2 + x"), "x+2x^2");
        assert_eq!(simplified("2sin(x) - sin(x)"), "sin(x)");
        assert_eq!(simplified("x y + 2y x"), "x*y+2y*x");
        assert_eq!(simplified("4/x - 1/x"), "3/x");
        assert_eq!(simplified("x(x + 1)"), "x*(x+1)");
    }

    #[test]
    fn opaque_terms_with_numeric_base() {
        assert_eq!(simplified("3*2^x"), "3*2^x");
        assert_eq!(simplified("2^x + 2^x"), "2*2^x");
        assert_eq!(simplified("-2 * 1.5^x"), "-2*1.5^x");
        assert_eq!(simplified("3 * 2^x / y"), "3*2^x/y");
        assert_eq!(simplified("2^x - 2 * 2^x"), "-2^x");
    }

    #[test]
    fn simplified_text_keeps_value() {
        let bindings = [('x', 1.5), ('y', -0.5)];
        let ctxt = bindings.into_iter().collect::<Ctxt>();
        for input in ["3*2^x", "2^x + 2^x", "1.5^x - 4 * 1.5^x + x", "3 * 2^x / y", "2 / x^2 + 0.5^y"] {
            let before = parse_expr(input).unwrap().eval(&ctxt).unwrap();
            let after = parse_expr(&simplified(input)).unwrap().eval(&ctxt).unwrap();
            assert!((before - after).abs() < 1e-9, "input: {}, {} != {}", input, before, after);
        }
    }

    #[test]
    fn numeric_subexpressions() {
        assert_eq!(simplified("2^3 x + sqrt(4)"), "8x+2");
        assert_eq!(simplified("0.1 + 0.2"), "0.30000000000000004");
    }

    #[test]
    fn evaluation_errors_abort() {
        let err = simplify(&parse_expr("x + 1/0").unwrap()).unwrap_err();
        assert!(err.is::<DivisionByZero>());

        let err = simplify(&parse_expr("x + sqrt(-1)").unwrap()).unwrap_err();
        assert!(err.is::<SqrtOfNegative>());
        assert_eq!(err.category(), Category::Domain);
    }

    #[test]
    fn idempotent() {
        for input in ["5a + 2b - 3a + b", "x^2 - 4/x + 3(x - 1)", "-(y + x) / 4", "0.1x + 0.2x", "sin(2x) - 7", "3*2^x + 1.5^x"] {
            let once = simplified(input);
            assert_eq!(simplified(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn text_with_steps() {
        let expr = parse_expr("2x + 3x").unwrap();
        let simplification = simplify_text("2x + 3x", &expr).unwrap();
        assert_eq!(simplification, Simplification {
            original: "2x + 3x".to_string(),
            simplified: "5x".to_string(),
            steps: vec![
                "Identify like terms".to_string(),
                "Combine coefficients of like terms".to_string(),
                "Simplify constants".to_string(),
            ],
        });
    }
}
