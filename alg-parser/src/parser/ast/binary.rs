use alg_error::Error;
use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    fmt::{fmt_operand, needs_parens, Side},
    op::BinOp,
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// If we are parsing the expression `1 + 2 * 3`, we will first parse the left-hand-side `1`,
    /// then the operator `+`, then the right-hand-side `2`. However, before we build the
    /// corresponding AST node, we should check if the operator after `2` has higher precedence
    /// than `+` (if it exists).
    ///
    /// If it does, we should parse the expression starting with `2` first, so that we get `2 * 3`
    /// as the right-hand-side to the `1 +` node. This works by calling into [`Self::parse_expr`]
    /// again, but with `rhs` (`2` in this case) as the `lhs` argument. A following operator of
    /// the same precedence is also parsed first if it is right-associative, which is how
    /// `2^3^2` becomes `2^(3^2)`.
    ///
    /// Implicit multiplication takes part in this like any other operator: [`BinOp::peek`]
    /// reports it whenever an operand directly follows `rhs`.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        while let Some(next_op) = BinOp::peek(input) {
            let next_precedence = next_op.precedence();
            let binds_tighter = next_precedence > precedence
                || (next_precedence == precedence && next_op.associativity() == Associativity::Right);
            if !binds_tighter {
                // this operator has lower precedence, or equal precedence and
                // left-associativity, so let `lhs op rhs` be built first
                break;
            }

            rhs = input.nested(&next_op.span, |input| Self::parse_expr(input, rhs, next_precedence))?;
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// After parsing the left-hand-side of a potential binary expression, parse ahead to see if
    /// there are binary operators of at least the given precedence and their right-hand-sides.
    ///
    /// Every operator in the chain makes the tree one level deeper, which counts towards
    /// [`MAX_DEPTH`](crate::parser::MAX_DEPTH).
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        let tree_depth = input.tree_depth();

        // closure workaround allows us to use `?` and still reset the tree depth
        let result = (|| -> Result<Expr, Error> {
            while let Some(op) = BinOp::peek(input) {
                if op.precedence() < precedence {
                    break;
                }

                input.grow_tree(&op.span)?;
                op.consume(input);
                let rhs = Unary::parse_or_lower(input)?;
                lhs = Self::complete_rhs(input, lhs, op, rhs)?;
            }

            Ok(lhs)
        })();

        input.reset_tree_depth(tree_depth);
        result
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (precedence, associativity) = (self.op.precedence(), self.op.associativity());
        fmt_operand(f, &self.lhs, needs_parens(&self.lhs, precedence, associativity, Side::Left))?;
        write!(f, "{}", self.op)?;
        fmt_operand(f, &self.rhs, needs_parens(&self.rhs, precedence, associativity, Side::Right))
    }
}
