use alg_error::Error;
use crate::{
    parser::{ast::expr::Expr, error::UnexpectedToken, Parser},
    tokenizer::{Func, TokenKind},
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A call to one of the whitelisted functions, such as `sqrt(x + 1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function being called.
    pub func: Func,

    /// The single argument passed to the function.
    pub arg: Box<Expr>,

    /// The region of the source code that the function name was parsed from.
    pub name_span: Range<usize>,

    /// The region of the source code that this call was parsed from, including the closing
    /// parenthesis.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses the parenthesized argument of a function call. The function name has already been
    /// consumed from the stream.
    pub fn parse_args(input: &mut Parser, func: Func, name_span: Range<usize>) -> Result<Self, Error> {
        let open = input.next_token()?;
        if open.kind != TokenKind::LParen {
            return Err(Error::new(vec![open.span], UnexpectedToken {
                expected: "`(` after the function name",
                found: open.kind,
            }));
        }

        let (arg, close_span) = Expr::parse_group(input, open.span)?;
        Ok(Self {
            func,
            arg: Box::new(arg),
            span: name_span.start..close_span.end,
            name_span,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.func, self.arg)
    }
}
