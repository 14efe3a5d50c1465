//! Numerical evaluation of expressions.
//!
//! Only the operators of the expression language and the whitelisted functions can be
//! evaluated; there is no other way to run code through an expression.

pub mod ctxt;
pub mod error;
pub mod eval;

use alg_error::Error;
use alg_parser::parser::ast::expr::Expr;
use ctxt::Ctxt;

pub use eval::Eval;

/// Evaluates the expression using the variable bindings of the given context.
pub fn evaluate(expr: &Expr, ctxt: &Ctxt) -> Result<f64, Error> {
    expr.eval(ctxt)
}
