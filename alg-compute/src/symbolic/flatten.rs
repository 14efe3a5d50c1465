//! Flattening of an expression into a sum of like-term buckets.

use alg_error::Error;
use alg_parser::parser::{
    ast::{binary::Binary, expr::Expr, literal::LitNum},
    op::{BinOp, BinOpKind},
};
use crate::numerical::{
    error::{DivisionByZero, NumericOverflow},
    eval::Eval,
};
use super::term::{TermKey, Terms};
use tracing::trace;

/// Evaluates a variable-free divisor, failing if it is zero.
fn eval_divisor(divisor: &Expr) -> Result<f64, Error> {
    let value = divisor.eval_default()?;
    if value == 0.0 {
        Err(Error::new(vec![divisor.span()], DivisionByZero))
    } else {
        Ok(value)
    }
}

/// Returns `scale` if it is finite, and an overflow error pointing at `expr` otherwise.
fn check_scale(scale: f64, expr: &Expr) -> Result<f64, Error> {
    if scale.is_finite() {
        Ok(scale)
    } else {
        Err(Error::new(vec![expr.span()], NumericOverflow))
    }
}

/// Builds the product of two optional non-numeric parts.
fn product(lhs: Option<Expr>, rhs: Option<Expr>) -> Option<Expr> {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => {
            let span = lhs.span().start..rhs.span().end;
            Some(Expr::Binary(Binary {
                op: BinOp {
                    kind: BinOpKind::Mul,
                    implicit: false,
                    span: lhs.span().end..rhs.span().start,
                },
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            }))
        },
        (part, None) | (None, part) => part,
    }
}

/// Splits a single term into its numeric coefficient and the remaining non-numeric part.
///
/// Numeric factors are pulled out of chains of `*`, negations, and divisions by a variable-free
/// divisor. If the term is entirely numeric, the remaining part is [`None`]. A term with a
/// non-numeric divisor keeps the divisor in the remaining part, with a numerator of `1` if the
/// numerator was entirely numeric (so `2/x` splits into `2` and `1/x`).
pub fn split(expr: &Expr) -> Result<(f64, Option<Expr>), Error> {
    if expr.is_constant() {
        return Ok((expr.eval_default()?, None));
    }

    match expr {
        Expr::Unary(unary) => {
            let (coefficient, rest) = split(&unary.operand)?;
            Ok((-coefficient, rest))
        },
        Expr::Binary(binary) if binary.op.kind == BinOpKind::Mul => {
            let (lhs_coefficient, lhs_rest) = split(&binary.lhs)?;
            let (rhs_coefficient, rhs_rest) = split(&binary.rhs)?;
            let coefficient = check_scale(lhs_coefficient * rhs_coefficient, expr)?;
            Ok((coefficient, product(lhs_rest, rhs_rest)))
        },
        Expr::Binary(binary) if binary.op.kind == BinOpKind::Div => {
            let (coefficient, numerator) = split(&binary.lhs)?;
            if binary.rhs.is_constant() {
                let divisor = eval_divisor(&binary.rhs)?;
                return Ok((check_scale(coefficient / divisor, expr)?, numerator));
            }

            let numerator = numerator.unwrap_or_else(|| Expr::Literal(LitNum {
                value: 1.0,
                span: binary.lhs.span(),
            }));
            Ok((coefficient, Some(Expr::Binary(Binary {
                lhs: Box::new(numerator),
                op: binary.op.clone(),
                rhs: binary.rhs.clone(),
                span: binary.span(),
            }))))
        },
        _ => Ok((1.0, Some(expr.clone()))),
    }
}

/// Flattens the expression into an additive list of terms, each multiplied by `scale`, and
/// accumulates them into `terms`.
///
/// Sums and differences are split apart, and a negation or a variable-free factor is
/// distributed over everything it multiplies (`-(x + 1)` gives `-x` and `-1`, `3(x + 1)` gives
/// `3x` and `3`). Products of two parts that both contain variables are never expanded.
pub fn flatten(expr: &Expr, scale: f64, terms: &mut Terms) -> Result<(), Error> {
    if expr.is_constant() {
        let value = expr.eval_default()?;
        terms.add(TermKey::Constant, check_scale(scale * value, expr)?);
        return Ok(());
    }

    match expr {
        Expr::Binary(binary) => match binary.op.kind {
            BinOpKind::Add => {
                flatten(&binary.lhs, scale, terms)?;
                flatten(&binary.rhs, scale, terms)
            },
            BinOpKind::Sub => {
                flatten(&binary.lhs, scale, terms)?;
                flatten(&binary.rhs, -scale, terms)
            },
            BinOpKind::Mul if binary.lhs.is_constant() => {
                let factor = binary.lhs.eval_default()?;
                flatten(&binary.rhs, check_scale(scale * factor, expr)?, terms)
            },
            BinOpKind::Mul if binary.rhs.is_constant() => {
                let factor = binary.rhs.eval_default()?;
                flatten(&binary.lhs, check_scale(scale * factor, expr)?, terms)
            },
            BinOpKind::Div if binary.rhs.is_constant() => {
                let divisor = eval_divisor(&binary.rhs)?;
                flatten(&binary.lhs, check_scale(scale / divisor, expr)?, terms)
            },
            _ => add_term(expr, scale, terms),
        },
        Expr::Unary(unary) => flatten(&unary.operand, -scale, terms),
        _ => add_term(expr, scale, terms),
    }
}

/// Adds a single term that cannot be flattened any further.
fn add_term(expr: &Expr, scale: f64, terms: &mut Terms) -> Result<(), Error> {
    let (coefficient, rest) = split(expr)?;
    let coefficient = check_scale(scale * coefficient, expr)?;
    let key = match rest {
        Some(rest) => TermKey::Symbol(rest.to_string()),
        None => TermKey::Constant,
    };
    trace!(?key, coefficient, "accumulated term");
    terms.add(key, coefficient);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use alg_parser::parse_expr;
    use pretty_assertions::assert_eq;

    fn split_str(input: &str) -> (f64, Option<String>) {
        let (coefficient, rest) = split(&parse_expr(input).unwrap()).unwrap();
        (coefficient, rest.map(|rest| rest.to_string()))
    }

    #[test]
    fn split_products() {
        assert_eq!(split_str("3x"), (3.0, Some("x".to_string())));
        assert_eq!(split_str("2x*3y"), (6.0, Some("x*y".to_string())));
        assert_eq!(split_str("-x^2"), (-1.0, Some("x^2".to_string())));
        assert_eq!(split_str("2^3 x"), (8.0, Some("x".to_string())));
        assert_eq!(split_str("sqrt(4)sin(x)"), (2.0, Some("sin(x)".to_string())));
    }

    #[test]
    fn split_quotients() {
        assert_eq!(split_str("x/4"), (0.25, Some("x".to_string())));
        assert_eq!(split_str("6/x"), (6.0, Some("1/x".to_string())));
        assert_eq!(split_str("6x/(2y)"), (6.0, Some("x/(2*y)".to_string())));
        assert_eq!(split_str("-3/(x+1)"), (-3.0, Some("1/(x+1)".to_string())));
    }

    #[test]
    fn split_numeric() {
        assert_eq!(split_str("2^3 + 1"), (9.0, None));
    }

    #[test]
    fn flatten_distributes_numeric_factors() {
        let mut terms = Terms::new();
        flatten(&parse_expr("3(x + 1) - (x - 2)/2").unwrap(), 1.0, &mut terms).unwrap();
        assert_eq!(terms.coefficient(&TermKey::variable('x')), 2.5);
        assert_eq!(terms.constant(), 4.0);
    }

    #[test]
    fn flatten_keeps_zero_coefficients() {
        let mut terms = Terms::new();
        flatten(&parse_expr("0x + 5").unwrap(), 1.0, &mut terms).unwrap();
        assert!(terms.contains(&TermKey::variable('x')));
        assert_eq!(terms.coefficient(&TermKey::variable('x')), 0.0);
    }

    #[test]
    fn flatten_division_by_zero() {
        let mut terms = Terms::new();
        let err = flatten(&parse_expr("x/(3 - 3)").unwrap(), 1.0, &mut terms).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.spans, vec![3..8]);
    }
}
