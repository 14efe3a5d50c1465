use alg_error::Error;
use crate::{
    parser::{
        ast::expr::Expr,
        error::{MissingEqualsSign, MultipleEqualsSigns},
        Parser,
    },
    tokenizer::{tokenize, TokenKind},
};
use std::{fmt, ops::Range};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation: two expressions joined by a single `=`, such as `2x + 5 = 13`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation.
    pub rhs: Expr,

    /// The region of the source code that the `=` was parsed from.
    pub eq_span: Range<usize>,

    /// The region of the source code that this equation was parsed from.
    pub span: Range<usize>,
}

impl Equation {
    /// Returns the span of the equation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Tokenizes the given source, splits the tokens on the single `=` and parses each side
    /// independently.
    pub fn parse_source(source: &str) -> Result<Self, Error> {
        let mut tokens = tokenize(source)?;
        let equals = tokens.iter()
            .filter(|token| token.kind == TokenKind::Equals)
            .map(|token| token.span.clone())
            .collect::<Vec<_>>();

        let eq_span = match equals.len() {
            0 => return Err(Error::new(vec![0..source.len()], MissingEqualsSign)),
            1 => equals[0].clone(),
            count => return Err(Error::new(equals, MultipleEqualsSigns { count })),
        };

        let split = tokens.iter()
            .position(|token| token.kind == TokenKind::Equals)
            .unwrap_or(tokens.len());
        let rhs_tokens = tokens.split_off(split + 1);
        tokens.truncate(split);
        debug!(lhs = tokens.len(), rhs = rhs_tokens.len(), "split equation");

        // a missing side is reported at the `=` for the left, and at the end of input for the
        // right
        let lhs = Parser::from_tokens(tokens, eq_span.clone()).try_parse_full::<Expr>()?;
        let rhs = Parser::from_tokens(rhs_tokens, source.len()..source.len()).try_parse_full::<Expr>()?;

        Ok(Self {
            span: lhs.span().start..rhs.span().end,
            lhs,
            rhs,
            eq_span,
        })
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.lhs, self.rhs)
    }
}
