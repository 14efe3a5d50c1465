//! Errors that can occur while evaluating an expression.

use alg_attrs::ErrorKind;
use alg_error::EXPR;
use ariadne::Fmt;

/// A division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this evaluates to zero"],
    category = DivisionByZero,
)]
pub struct DivisionByZero;

/// The square root of a negative number was taken.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot take the square root of {}", value),
    labels = [format!("this argument evaluates to {}", value)],
    help = format!("{} is only defined for non-negative numbers", "sqrt".fg(EXPR)),
    category = Domain,
)]
pub struct SqrtOfNegative {
    /// The value of the argument.
    pub value: f64,
}

/// A power has no real value, such as `(-8)^(1/3)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("{}^{} is not a real number", base, exponent),
    labels = ["this power"],
    help = "a negative base can only be raised to an integer exponent",
    category = Domain,
)]
pub struct NonRealPower {
    /// The base of the power.
    pub base: f64,

    /// The exponent of the power.
    pub exponent: f64,
}

/// The result of an operation is too large to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "numeric overflow",
    labels = ["the result of this expression is too large"],
    category = Domain,
)]
pub struct NumericOverflow;

/// A variable was used with no value bound to it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unbound variable `{}`", name),
    labels = ["this variable has no value"],
    help = format!("give `{}` a value before evaluating the expression", name),
    category = UnboundVariable,
)]
pub struct UnboundVariable {
    /// The name of the variable.
    pub name: char,
}
