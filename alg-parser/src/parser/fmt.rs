//! Helpers to display expressions with the minimum parentheses needed to parse them back.

use std::fmt::{Display, Formatter, Result};
use super::{ast::expr::Expr, Associativity, Precedence};

/// The side of a binary operator that an operand is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Returns true if `operand` must be wrapped in parentheses when displayed on the given side of
/// an operator with the given precedence and associativity.
///
/// A negation on the right of an operator is always wrapped, so that `2*(-x)` is never printed
/// as `2*-x`.
pub fn needs_parens(
    operand: &Expr,
    precedence: Precedence,
    associativity: Associativity,
    side: Side,
) -> bool {
    let operand_precedence = operand.precedence();
    if side == Side::Right && operand_precedence == Precedence::Neg {
        return true;
    }

    match operand_precedence.cmp(&precedence) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => matches!(
            (associativity, side),
            (Associativity::Left, Side::Right) | (Associativity::Right, Side::Left)
        ),
    }
}

/// Writes `operand`, wrapped in parentheses if `parens` is true.
pub fn fmt_operand(f: &mut Formatter, operand: &impl Display, parens: bool) -> Result {
    if parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}
