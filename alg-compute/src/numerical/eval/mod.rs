mod binary;
mod call;
mod literal;
mod unary;

use alg_error::Error;
use alg_parser::parser::ast::expr::Expr;
use super::ctxt::Ctxt;

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a number, using an empty context. This only succeeds
    /// for expressions without variables.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::new())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Variable(variable) => variable.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
        }
    }
}
