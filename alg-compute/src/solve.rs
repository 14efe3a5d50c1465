//! Solving of single-variable linear equations, with human-readable steps.
//!
//! An equation is solvable when its left side simplifies to `a·x + b`, with at most one
//! variable, and its right side simplifies to a constant `c`. The solution is `x = (c − b) / a`.

use alg_attrs::ErrorKind;
use alg_error::{Category, Error, EXPR};
use alg_parser::parser::ast::{equation::Equation, expr::Expr};
use ariadne::Fmt;
use crate::{
    numerical::error::NumericOverflow,
    round2,
    symbolic::{simplify, step_collector::StepCollector, term::{Monomial, TermKey, Terms}},
};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The equation cannot be reduced to the form `a·x + b = c`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unsupported equation shape",
    labels = [reason],
    help = format!("only linear equations of the form {} can be solved", "a·x + b = c".fg(EXPR)),
    category = UnsupportedEquationShape,
)]
pub struct UnsupportedEquationShape {
    /// Why this side of the equation is not supported.
    pub reason: String,
}

/// The variable cancels out of the equation, and the remaining constants differ, so no value of
/// the variable satisfies it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the equation has no solution",
    labels = [format!("the coefficient of `{}` here is zero", variable)],
    help = format!("this side always equals {}, but the other side is {}", lhs, rhs),
    category = DivisionByZero,
)]
pub struct NoSolution {
    /// The variable that was solved for.
    pub variable: char,

    /// The constant value of the left side.
    pub lhs: f64,

    /// The constant value of the right side.
    pub rhs: f64,
}

/// The variable cancels out of the equation, and both sides are equal, so every value of the
/// variable satisfies it.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the equation has infinitely many solutions",
    labels = [format!("the coefficient of `{}` here is zero", variable)],
    help = "both sides are always equal, so there is no unique solution",
    category = DivisionByZero,
)]
pub struct InfiniteSolutions {
    /// The variable that was solved for.
    pub variable: char,
}

/// The states the solver moves through. Every solve ends in [`SolveState::Solved`] or
/// [`SolveState::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    Parsed,
    SimplifiedBothSides,
    ShapeChecked,
    Solved,
    Failed(Category),
}

impl SolveState {
    /// Records the transition into this state.
    fn enter(self) {
        debug!(state = ?self, "solver state");
    }
}

/// A step of the solution: the equation at that point and what was done to get there.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// The equation after this step.
    pub equation: String,

    /// What was done in this step.
    pub description: String,
}

impl Step {
    fn new(equation: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            equation: equation.into(),
            description: description.into(),
        }
    }
}

/// The solution of a linear equation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// The variable that was solved for.
    pub variable: char,

    /// The value of the variable, unrounded.
    pub value: f64,

    /// The steps taken to find the value, in order.
    pub steps: Vec<Step>,
}

/// The coefficients of a linear equation `a·x + b = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Linear {
    variable: char,
    a: f64,
    b: f64,
    c: f64,
}

/// Formats `value` for use after an operator, wrapping it in parentheses if it is negative.
fn operand(value: f64) -> String {
    if value < 0.0 {
        format!("({})", value)
    } else {
        value.to_string()
    }
}

/// Formats the term `a·x` the way the simplifier writes monomials.
fn monomial(a: f64, variable: char) -> String {
    if a == 1.0 {
        variable.to_string()
    } else if a == -1.0 {
        format!("-{}", variable)
    } else {
        format!("{}{}", a, variable)
    }
}

/// Creates the shape error for the given side of the equation.
fn unsupported(side: &Expr, reason: impl Into<String>) -> Error {
    Error::new(vec![side.span()], UnsupportedEquationShape { reason: reason.into() })
}

/// Checks that the simplified sides have the shape `a·x + b = c`, and extracts the coefficients.
fn check_shape(equation: &Equation, lhs: &Terms, rhs: &Terms) -> Result<Linear, Error> {
    let rhs_symbol = rhs.iter().find_map(|monomial| match monomial.key {
        TermKey::Symbol(text) => Some(text),
        TermKey::Constant => None,
    });
    if let Some(text) = rhs_symbol {
        return Err(unsupported(
            &equation.rhs,
            format!("this side must be a constant, but it contains `{}`", text),
        ));
    }

    let symbols = lhs.iter()
        .filter(|monomial| !monomial.key.is_constant())
        .collect::<Vec<_>>();
    let (variable, a) = match symbols.as_slice() {
        [] => {
            // the variable may still be present with a coefficient of zero, as in `0x + 5`
            let variable = lhs.keys().find_map(TermKey::as_variable).unwrap_or('x');
            (variable, 0.0)
        },
        [monomial] => match monomial.key.as_variable() {
            Some(variable) => (variable, monomial.coefficient),
            None => return Err(unsupported(&equation.lhs, format!("`{}` is not linear", symbols_text(&symbols)))),
        },
        _ => return Err(unsupported(
            &equation.lhs,
            format!("this side has more than one distinct term: {}", symbols_text(&symbols)),
        )),
    };

    Ok(Linear {
        variable,
        a,
        b: lhs.constant(),
        c: rhs.constant(),
    })
}

/// Lists the keys of the given monomials for an error message.
fn symbols_text(symbols: &[Monomial]) -> String {
    symbols.iter()
        .filter_map(|monomial| match &monomial.key {
            TermKey::Symbol(text) => Some(format!("`{}`", text)),
            TermKey::Constant => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Solves the linear equation, reporting the steps to the given collector. `text` is the
/// equation as the user wrote it, and is used as the first step.
///
/// Returns the variable solved for and its unrounded value.
pub fn solve_with_steps(
    equation: &Equation,
    text: &str,
    steps: &mut impl StepCollector<Step>,
) -> Result<(char, f64), Error> {
    SolveState::Parsed.enter();

    // closure workaround allows us to use `?` and still record the final state
    let result = (|| -> Result<(char, f64), Error> {
        let lhs = simplify(&equation.lhs)?;
        let rhs = simplify(&equation.rhs)?;
        SolveState::SimplifiedBothSides.enter();

        let Linear { variable, a, b, c } = check_shape(equation, &lhs, &rhs)?;
        SolveState::ShapeChecked.enter();
        debug!(%variable, a, b, c, "extracted coefficients");

        if a == 0.0 {
            return if b == c {
                Err(Error::new(vec![equation.lhs.span()], InfiniteSolutions { variable }))
            } else {
                Err(Error::new(vec![equation.lhs.span()], NoSolution { variable, lhs: b, rhs: c }))
            };
        }

        let difference = c - b;
        let value = difference / a;
        if !value.is_finite() {
            return Err(Error::new(vec![equation.span()], NumericOverflow));
        }

        if steps.is_collecting() {
            let ax = monomial(a, variable);
            steps.push(Step::new(text.trim(), "Original equation"));
            steps.push(Step::new(
                format!("{} = {} - {}", ax, c, operand(b)),
                format!("Subtract {} from both sides", b),
            ));
            steps.push(Step::new(format!("{} = {}", ax, difference), "Simplify"));
            steps.push(Step::new(
                format!("{} = {} / {}", variable, difference, operand(a)),
                format!("Divide both sides by {}", a),
            ));
            steps.push(Step::new(format!("{} = {:.2}", variable, round2(value)), "Solution"));
        }

        Ok((variable, value))
    })();

    match &result {
        Ok(_) => SolveState::Solved.enter(),
        Err(err) => SolveState::Failed(err.category()).enter(),
    }
    result
}

/// Solves the linear equation. `text` is the equation as the user wrote it, and is used as the
/// first step.
pub fn solve(equation: &Equation, text: &str) -> Result<Solution, Error> {
    let mut steps = Vec::new();
    let (variable, value) = solve_with_steps(equation, text, &mut steps)?;
    Ok(Solution { variable, value, steps })
}
