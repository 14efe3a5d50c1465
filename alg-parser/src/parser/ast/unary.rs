use alg_error::Error;
use crate::{
    parser::{
        ast::{binary::Binary, expr::Expr},
        fmt::fmt_operand,
        Parser,
        Precedence,
    },
    tokenizer::{Operator, Token, TokenKind},
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary negation, such as `-x`. Negation is the only unary operator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The negated operand.
    pub operand: Box<Expr>,

    /// The region of the source code that the `-` was parsed from.
    pub op_span: Range<usize>,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or lower precedence expressions.
    ///
    /// The operand of the `-` is parsed with [`Precedence::Neg`], so it captures
    /// exponentiation but not multiplication: `-x^2` is `-(x^2)`, while `-2x` is `(-2)x`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let op_span = match input.current_token() {
            Some(Token { kind: TokenKind::Operator(Operator::Sub), span }) => span.clone(),
            _ => return Expr::parse_primary(input),
        };
        input.next_token()?;

        let operand = input.nested(&op_span, |input| {
            let lhs = Self::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, Precedence::Neg)
        })?;
        let span = op_span.start..operand.span().end;
        Ok(Expr::Unary(Self {
            operand: Box::new(operand),
            op_span,
            span,
        }))
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "-")?;
        fmt_operand(f, &self.operand, self.operand.precedence() < Precedence::Neg)
    }
}
