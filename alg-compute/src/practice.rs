//! Practice problems: random linear equations and checking of submitted answers.
//!
//! The caller owns the random source, so problems are reproducible with a seeded generator.

use crate::round2;
use rand::Rng;
use std::fmt;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximum distance between a submitted answer and the correct answer for the submitted
/// answer to count as correct.
pub const ANSWER_TOLERANCE: f64 = 0.01;

/// A practice problem.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Problem {
    /// The equation to solve, such as `3x + 4 = 10`.
    pub equation: String,

    /// The solution, rounded to two decimal places.
    pub answer: f64,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.equation)
    }
}

/// Generates a problem of the form `a·x + b = c`, with `a` in `1..=10`, `b` in `-10..=9` and `c`
/// in `1..=20`.
pub fn generate_problem(rng: &mut impl Rng) -> Problem {
    let a: i32 = rng.gen_range(1..=10);
    let b: i32 = rng.gen_range(-10..=9);
    let c: i32 = rng.gen_range(1..=20);

    let equation = match b {
        0 => format!("{}x = {}", a, c),
        b if b < 0 => format!("{}x - {} = {}", a, -b, c),
        b => format!("{}x + {} = {}", a, b, c),
    };
    let answer = round2(f64::from(c - b) / f64::from(a));
    debug!(%equation, answer, "generated problem");

    Problem { equation, answer }
}

/// The verdict on a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnswerCheck {
    /// Whether the answer was within [`ANSWER_TOLERANCE`] of the correct answer.
    pub correct: bool,

    /// A message for the user.
    pub message: String,
}

/// Checks a submitted answer against the correct answer.
pub fn check_answer(user_answer: f64, correct_answer: f64) -> AnswerCheck {
    let correct = (user_answer - correct_answer).abs() < ANSWER_TOLERANCE;
    let message = if correct {
        "Correct! Great job!".to_string()
    } else {
        format!("Incorrect. The correct answer is {}", correct_answer)
    };
    AnswerCheck { correct, message }
}
