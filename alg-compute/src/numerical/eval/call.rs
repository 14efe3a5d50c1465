use alg_error::Error;
use alg_parser::{parser::ast::call::Call, tokenizer::Func};
use crate::numerical::{ctxt::Ctxt, error::SqrtOfNegative, eval::Eval};

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let arg = self.arg.eval(ctxt)?;
        match self.func {
            Func::Sin => Ok(arg.sin()),
            Func::Cos => Ok(arg.cos()),
            Func::Sqrt if arg < 0.0 => Err(Error::new(
                vec![self.arg.span()],
                SqrtOfNegative { value: arg },
            )),
            Func::Sqrt => Ok(arg.sqrt()),
        }
    }
}
