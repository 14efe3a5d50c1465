use alg_error::Error;
use alg_parser::parser::ast::literal::{LitNum, LitSym};
use crate::numerical::{ctxt::Ctxt, error::UnboundVariable, eval::Eval};

impl Eval for LitNum {
    fn eval(&self, _: &Ctxt) -> Result<f64, Error> {
        Ok(self.value)
    }
}

impl Eval for LitSym {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        ctxt.get_var(self.name)
            .ok_or_else(|| Error::new(vec![self.span.clone()], UnboundVariable { name: self.name }))
    }
}
