use alg_error::Error;
use alg_parser::parser::ast::unary::Unary;
use crate::numerical::{ctxt::Ctxt, eval::Eval};

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        Ok(-self.operand.eval(ctxt)?)
    }
}
