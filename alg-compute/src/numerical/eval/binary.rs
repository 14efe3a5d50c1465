use alg_error::Error;
use alg_parser::parser::{ast::binary::Binary, op::BinOpKind};
use crate::numerical::{
    ctxt::Ctxt,
    error::{DivisionByZero, NonRealPower, NumericOverflow},
    eval::Eval,
};

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;

        let result = match self.op.kind {
            BinOpKind::Add => left + right,
            BinOpKind::Sub => left - right,
            BinOpKind::Mul => left * right,
            BinOpKind::Div => {
                if right == 0.0 {
                    return Err(Error::new(vec![self.rhs.span()], DivisionByZero));
                }
                left / right
            },
            BinOpKind::Exp => {
                let result = left.powf(right);
                if result.is_nan() {
                    return Err(Error::new(vec![self.span()], NonRealPower {
                        base: left,
                        exponent: right,
                    }));
                }

                // `0^-n` is a division by zero in disguise
                if result.is_infinite() && left == 0.0 {
                    return Err(Error::new(vec![self.lhs.span()], DivisionByZero));
                }
                result
            },
        };

        // operands are always finite, so a non-finite result means the result was too large
        if result.is_finite() {
            Ok(result)
        } else {
            Err(Error::new(vec![self.span()], NumericOverflow))
        }
    }
}
