//! Parsing of the line-based commands accepted by the REPL and script runner.
//!
//! A line is a command name followed by its argument, such as `solve 2x + 5 = 13`. A line with
//! no command name is solved if it contains `=`, and simplified otherwise.

use alg_graph::SampleOptions;
use alg_parser::parse_expr;
use std::fmt;

/// The help text listing every command.
pub const HELP: &str = "\
commands:
  solve <equation>                   solve a linear equation, such as `2x + 5 = 13`
  simplify <expression>              combine like terms, such as `2x + 3x`
  graph <expression> [<from> <to> [<step>]]
                                     sample an expression over a range (default -10 to 10, step 0.5)
  eval <expression> [<var>=<value>]...
                                     evaluate an expression, such as `eval 3x^2 x=2`
  practice                           generate a practice problem
  check <answer>                     check an answer to the last practice problem
  help                               show this message

a line without a command is solved if it contains `=`, and simplified otherwise";

/// A parsed command. Text arguments borrow from the line they were parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// Solve the equation.
    Solve(&'a str),

    /// Simplify the expression.
    Simplify(&'a str),

    /// Sample the expression with the given options.
    Graph(&'a str, SampleOptions),

    /// Evaluate the expression with the given variable bindings.
    Eval(&'a str, Vec<(char, f64)>),

    /// Generate a new practice problem.
    Practice,

    /// Check an answer to the current practice problem.
    Check(f64),

    /// Print the help text.
    Help,

    /// The line was blank.
    Empty,
}

/// A line that could not be understood as a command. The argument text of an understood
/// command is never rejected here; the engine reports errors in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// The command needs an argument, but none was given.
    MissingArgument(&'static str),

    /// The command takes no argument, but one was given.
    UnexpectedArgument(&'static str),

    /// The answer passed to `check` is not a number.
    InvalidAnswer(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UsageError::MissingArgument(command) => write!(f, "`{}` needs an argument; type `help` for usage", command),
            UsageError::UnexpectedArgument(command) => write!(f, "`{}` takes no argument", command),
            UsageError::InvalidAnswer(answer) => write!(f, "`{}` is not a number", answer),
        }
    }
}

impl std::error::Error for UsageError {}

impl<'a> Command<'a> {
    /// Parses a line into a command.
    pub fn parse(line: &'a str) -> Result<Self, UsageError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }

        let (name, rest) = line.split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((line, ""));

        let needs_argument = |command: &'static str| {
            if rest.is_empty() {
                Err(UsageError::MissingArgument(command))
            } else {
                Ok(rest)
            }
        };
        let no_argument = |command: &'static str, parsed: Command<'a>| {
            if rest.is_empty() {
                Ok(parsed)
            } else {
                Err(UsageError::UnexpectedArgument(command))
            }
        };

        match name {
            "solve" => needs_argument("solve").map(Command::Solve),
            "simplify" => needs_argument("simplify").map(Command::Simplify),
            "graph" => needs_argument("graph").map(parse_graph),
            "eval" => needs_argument("eval").map(parse_eval),
            "check" => {
                let answer = needs_argument("check")?;
                answer.parse::<f64>()
                    .map(Command::Check)
                    .map_err(|_| UsageError::InvalidAnswer(answer.to_string()))
            },
            "practice" => no_argument("practice", Command::Practice),
            "help" => no_argument("help", Command::Help),
            _ if line.contains('=') => Ok(Command::Solve(line)),
            _ => Ok(Command::Simplify(line)),
        }
    }
}

/// Splits the last whitespace-separated word off the text, returning the text before it and
/// the word.
fn split_last_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_end();
    let (head, word) = text.rsplit_once(char::is_whitespace)?;
    Some((head.trim_end(), word))
}

/// Parses `<expression> [<from> <to> [<step>]]`.
///
/// Trailing numbers are ambiguous with the end of the expression (`x - 1 2 3`), so the longest
/// reading whose expression still parses wins.
fn parse_graph(argument: &str) -> Command {
    for count in [3, 2] {
        let mut head = argument;
        let mut numbers = Vec::with_capacity(count);
        for _ in 0..count {
            match split_last_word(head).and_then(|(rest, word)| Some((rest, word.parse::<f64>().ok()?))) {
                Some((rest, number)) => {
                    head = rest;
                    numbers.push(number);
                },
                None => break,
            }
        }

        if numbers.len() == count && parse_expr(head).is_ok() {
            numbers.reverse();
            let mut options = SampleOptions::default().range(numbers[0], numbers[1]);
            if let Some(&step) = numbers.get(2) {
                options = options.step(step);
            }
            return Command::Graph(head, options);
        }
    }

    Command::Graph(argument, SampleOptions::default())
}

/// Parses a `<var>=<value>` binding.
fn parse_binding(word: &str) -> Option<(char, f64)> {
    let (name, value) = word.split_once('=')?;
    let mut chars = name.chars();
    let name = chars.next().filter(char::is_ascii_alphabetic)?;
    if chars.next().is_some() {
        return None;
    }
    Some((name, value.parse().ok()?))
}

/// Parses `<expression> [<var>=<value>]...`.
fn parse_eval(argument: &str) -> Command {
    let mut head = argument;
    let mut bindings = Vec::new();
    while let Some((rest, binding)) = split_last_word(head)
        .and_then(|(rest, word)| Some((rest, parse_binding(word)?)))
    {
        head = rest;
        bindings.push(binding);
    }

    bindings.reverse();
    Command::Eval(head, bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn named_commands() {
        assert_eq!(Command::parse("solve 2x + 5 = 13"), Ok(Command::Solve("2x + 5 = 13")));
        assert_eq!(Command::parse("  simplify   2x + 3x "), Ok(Command::Simplify("2x + 3x")));
        assert_eq!(Command::parse("practice"), Ok(Command::Practice));
        assert_eq!(Command::parse("check 2.5"), Ok(Command::Check(2.5)));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("   "), Ok(Command::Empty));
    }

    #[test]
    fn bare_lines() {
        assert_eq!(Command::parse("3x - 4 = 11"), Ok(Command::Solve("3x - 4 = 11")));
        assert_eq!(Command::parse("4x + 2 - x + 5"), Ok(Command::Simplify("4x + 2 - x + 5")));
        assert_eq!(Command::parse("x"), Ok(Command::Simplify("x")));
    }

    #[test]
    fn usage_errors() {
        assert_eq!(Command::parse("solve"), Err(UsageError::MissingArgument("solve")));
        assert_eq!(Command::parse("graph  "), Err(UsageError::MissingArgument("graph")));
        assert_eq!(Command::parse("practice now"), Err(UsageError::UnexpectedArgument("practice")));
        assert_eq!(Command::parse("check four"), Err(UsageError::InvalidAnswer("four".to_string())));
    }

    #[test]
    fn graph_defaults() {
        assert_eq!(Command::parse("graph x^2"), Ok(Command::Graph("x^2", SampleOptions::default())));
        assert_eq!(Command::parse("graph x - 3"), Ok(Command::Graph("x - 3", SampleOptions::default())));
    }

    #[test]
    fn graph_range() {
        assert_eq!(
            Command::parse("graph x^2 -3 3"),
            Ok(Command::Graph("x^2", SampleOptions::default().range(-3.0, 3.0))),
        );
        assert_eq!(
            Command::parse("graph sqrt(x) 0 4 1"),
            Ok(Command::Graph("sqrt(x)", SampleOptions::default().range(0.0, 4.0).step(1.0))),
        );
    }

    #[test]
    fn graph_ambiguous_numbers() {
        // `x +` does not parse, so the last two numbers are the range
        assert_eq!(
            Command::parse("graph x + 1 -5 5"),
            Ok(Command::Graph("x + 1", SampleOptions::default().range(-5.0, 5.0))),
        );
    }

    #[test]
    fn eval_bindings() {
        assert_eq!(
            Command::parse("eval 3x^2 - y x=2 y=1.5"),
            Ok(Command::Eval("3x^2 - y", vec![('x', 2.0), ('y', 1.5)])),
        );
        assert_eq!(Command::parse("eval sin(0)"), Ok(Command::Eval("sin(0)", Vec::new())));
        assert_eq!(Command::parse("eval x = 2"), Ok(Command::Eval("x = 2", Vec::new())));
    }
}
