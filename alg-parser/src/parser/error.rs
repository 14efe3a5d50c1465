//! Errors that can occur while parsing an expression or equation.

use alg_attrs::ErrorKind;
use alg_error::EXPR;
use ariadne::Fmt;
use crate::tokenizer::TokenKind;

/// The end of the input was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
    category = Syntax,
)]
pub struct UnexpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected {}", found),
    labels = [format!("expected {} here", expected)],
    category = Syntax,
)]
pub struct UnexpectedToken {
    /// A description of what was expected, starting with an article or a quoted token.
    pub expected: &'static str,

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was opened but never closed, or closed without being opened.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unbalanced parentheses",
    labels = [if *opening {
        "this parenthesis is never closed"
    } else {
        "this parenthesis has no matching `(`"
    }],
    help = if *opening {
        "add a `)` to close the group"
    } else {
        "remove the `)`, or add a `(` before it"
    },
    category = Syntax,
)]
pub struct UnbalancedParentheses {
    /// The unmatched parenthesis is an opening one. (Otherwise, it is a closing one.)
    pub opening: bool,
}

/// There was nothing to parse.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = [format!("expected an {} here", "expression".fg(EXPR))],
    category = Syntax,
)]
pub struct EmptyExpression;

/// A pair of parentheses contains nothing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty parentheses",
    labels = ["there is nothing inside these parentheses"],
    help = format!("put an {} inside the parentheses, or remove them", "expression".fg(EXPR)),
    category = Syntax,
)]
pub struct EmptyParentheses;

/// An equation was expected, but the input has no `=` sign.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing `=` in equation",
    labels = ["this is an expression, not an equation"],
    help = "write the equation with both sides, such as `2x + 5 = 13`",
    category = Syntax,
)]
pub struct MissingEqualsSign;

/// An equation contains more than one `=` sign.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "an equation must contain exactly one `=`",
    labels = vec!["this `=`"; *count],
    help = format!("found {} `=` signs", count),
    category = Syntax,
)]
pub struct MultipleEqualsSigns {
    /// The number of `=` signs found.
    pub count: usize,
}

/// The parser finished an expression, but input remained after it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected trailing input",
    labels = [format!("I could not understand the remaining {} here", "input".fg(EXPR))],
    category = Syntax,
)]
pub struct TrailingInput;

/// The expression is nested too deeply, or is a chain of too many operators, to be processed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = ["the nesting limit is reached here"],
    help = format!("at most {} levels of nesting are supported; try splitting the {} into smaller parts", limit, "expression".fg(EXPR)),
    category = Syntax,
)]
pub struct NestingTooDeep {
    /// The limit that was reached.
    pub limit: usize,
}
