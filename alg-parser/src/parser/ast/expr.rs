use alg_error::Error;
use crate::{
    parser::{
        ast::{binary::Binary, call::Call, literal::{LitNum, LitSym}, unary::Unary},
        error::{EmptyParentheses, UnbalancedParentheses, UnexpectedToken},
        iter::ExprIter,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number literal, such as `2.5`.
    Literal(LitNum),

    /// A variable, such as `x`.
    Variable(LitSym),

    /// A binary expression, such as `1 + 2` or the implicit product `3x`.
    Binary(Binary),

    /// A negation, such as `-x`.
    Unary(Unary),

    /// A function call, such as `sin(x)`.
    Call(Call),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Variable(variable) => variable.span(),
            Expr::Binary(binary) => binary.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Call(call) => call.span(),
        }
    }

    /// Returns the precedence of the expression, used to decide where parentheses are needed
    /// when it is displayed.
    pub fn precedence(&self) -> Precedence {
        match self {
            // a negative literal is written with a leading `-`
            Expr::Literal(literal) if literal.value.is_sign_negative() => Precedence::Neg,
            Expr::Literal(_) | Expr::Variable(_) | Expr::Call(_) => Precedence::Primary,
            Expr::Binary(binary) => binary.op.precedence(),
            Expr::Unary(_) => Precedence::Neg,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns true if the expression contains no variables, meaning it evaluates to the same
    /// number every time.
    pub fn is_constant(&self) -> bool {
        !self.post_order_iter().any(|expr| matches!(expr, Expr::Variable(_)))
    }

    /// Parses a literal, variable, function call, or parenthesized group.
    pub(crate) fn parse_primary(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Literal(LitNum { value, span: token.span })),
            TokenKind::Identifier(name) => Ok(Expr::Variable(LitSym { name, span: token.span })),
            TokenKind::Function(func) => Call::parse_args(input, func, token.span).map(Expr::Call),
            TokenKind::LParen => Self::parse_group(input, token.span).map(|(expr, _)| expr),
            TokenKind::RParen if input.depth == 0 => Err(Error::new(
                vec![token.span],
                UnbalancedParentheses { opening: false },
            )),
            found @ (TokenKind::RParen | TokenKind::Operator(_) | TokenKind::Equals) => {
                Err(Error::new(vec![token.span], UnexpectedToken {
                    expected: "an expression",
                    found,
                }))
            },
        }
    }

    /// Parses the inside of a parenthesized group and its closing parenthesis. The opening
    /// parenthesis has already been consumed, and is located at `open_span`.
    ///
    /// Returns the inner expression and the span of the closing parenthesis.
    pub(crate) fn parse_group(
        input: &mut Parser,
        open_span: Range<usize>,
    ) -> Result<(Self, Range<usize>), Error> {
        if input.peek_kind() == Some(TokenKind::RParen) {
            let close_span = input.span();
            return Err(Error::new(vec![open_span.start..close_span.end], EmptyParentheses));
        }

        input.depth += 1;
        let expr = input.nested(&open_span, |input| input.try_parse::<Self>());
        input.depth -= 1;
        let expr = expr?;

        match input.next_token() {
            Ok(token) if token.kind == TokenKind::RParen => Ok((expr, token.span)),
            Ok(token) => Err(Error::new(vec![token.span], UnexpectedToken {
                expected: "`)`",
                found: token.kind,
            })),
            Err(_) => Err(Error::new(vec![open_span], UnbalancedParentheses { opening: true })),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Variable(variable) => variable.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Call(call) => call.fmt(f),
        }
    }
}
