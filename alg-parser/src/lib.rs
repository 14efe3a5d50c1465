//! Tokenizer and parser for algebraic expressions and equations.
//!
//! The input language is small: numbers, single-letter variables, the operators `+ - * / ^`,
//! parentheses, the functions `sin`, `cos` and `sqrt`, and a single `=` in equations.
//! Multiplication may be implicit, so `3x`, `2(x + 1)` and `x sin(x)` are all products.
//!
//! ```
//! use alg_parser::{parse_equation, parse_expr};
//!
//! let expr = parse_expr("3x^2 - 2(x + 1)").unwrap();
//! assert_eq!(expr.to_string(), "3*x^2-2*(x+1)");
//!
//! let equation = parse_equation("2x + 5 = 13").unwrap();
//! assert_eq!(equation.to_string(), "2*x+5=13");
//! ```

pub mod parser;
pub mod tokenizer;

use alg_error::Error;
use parser::{ast::{equation::Equation, expr::Expr}, Parser};

pub use tokenizer::tokenize;

/// Parses the given text as a single expression.
pub fn parse_expr(input: &str) -> Result<Expr, Error> {
    Parser::new(input)?.try_parse_full::<Expr>()
}

/// Parses the given text as an equation: two expressions joined by exactly one `=`.
pub fn parse_equation(input: &str) -> Result<Equation, Error> {
    Equation::parse_source(input)
}
