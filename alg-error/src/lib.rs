//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an error kind with the regions of the input it
//! points at.

#[cfg(test)]
extern crate self as alg_error;

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, io, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad class an error belongs to.
///
/// Front ends use this to decide how to present a failure without having to know every concrete
/// error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    /// The input could not be tokenized or parsed.
    Syntax,

    /// The equation parsed, but is not of the form the solver understands.
    UnsupportedEquationShape,

    /// A division by zero was required, either during evaluation or while solving.
    DivisionByZero,

    /// A value fell outside the domain of an operation, such as the square root of a negative
    /// number.
    Domain,

    /// A variable had no value bound to it during evaluation.
    UnboundVariable,

    /// Sampling an expression produced no finite points.
    NoValidSamples,

    /// The options given to an operation were invalid.
    InvalidOptions,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Category::Syntax => "syntax error",
            Category::UnsupportedEquationShape => "unsupported equation shape",
            Category::DivisionByZero => "division by zero",
            Category::Domain => "domain error",
            Category::UnboundVariable => "unbound variable",
            Category::NoValidSamples => "no valid samples",
            Category::InvalidOptions => "invalid options",
        };
        write!(f, "{}", name)
    }
}

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually implemented with `#[derive(ErrorKind)]` from the `alg-attrs` crate.
pub trait ErrorKind: Debug + Send + Sync + Any {
    /// The message displayed at the top of the error.
    fn message(&self) -> String;

    /// The label texts for each span of the error, in the same order as the spans.
    fn labels(&self) -> Vec<String>;

    /// Optional help text describing how to fix the error.
    fn help(&self) -> Option<String> {
        None
    }

    /// The category of this error.
    fn category(&self) -> Category;

    /// Returns `self` as [`Any`], so that callers can downcast to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map_or(0, |span| span.start);
        let labels = self.labels()
            .into_iter()
            .zip(spans)
            .map(|(label_str, span)| {
                let label = Label::new((src_id, span.clone())).with_color(EXPR);
                if label_str.is_empty() {
                    label
                } else {
                    label.with_message(label_str)
                }
            });

        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(labels);

        if let Some(help) = self.help() {
            builder.set_help(help);
        }

        builder.finish()
    }
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the category of the underlying error kind.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// Returns true if the underlying error kind is of type `K`.
    pub fn is<K: ErrorKind>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the underlying error kind if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error against the given input and writes it to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Renders the report for this error against the given input into the given writer.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, w: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    use alg_attrs::ErrorKind;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, ErrorKind)]
    #[error(
        message = "unexpected token",
        labels = ["this token"],
        category = Syntax,
    )]
    struct Unexpected;

    #[derive(Debug, Clone, PartialEq, ErrorKind)]
    #[error(
        message = format!("cannot take the square root of {}", value),
        labels = ["here", ""],
        help = "only non-negative numbers have real square roots",
        category = Domain,
    )]
    struct NegativeRoot {
        value: f64,
    }

    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn derived_fields() {
        let kind = NegativeRoot { value: -4.0 };
        assert_eq!(kind.message(), "cannot take the square root of -4");
        assert_eq!(kind.labels(), vec!["here".to_string(), String::new()]);
        assert_eq!(kind.help().as_deref(), Some("only non-negative numbers have real square roots"));
        assert_eq!(kind.category(), Category::Domain);
        assert_eq!(Unexpected.help(), None);
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![0..1], Unexpected);
        assert!(err.is::<Unexpected>());
        assert!(!err.is::<NegativeRoot>());
        assert_eq!(err.downcast_ref::<Unexpected>(), Some(&Unexpected));
        assert_eq!(err.category(), Category::Syntax);
    }

    #[test]
    fn display() {
        let err = Error::new(vec![5..9], NegativeRoot { value: -1.5 });
        assert_eq!(err.to_string(), "domain error: cannot take the square root of -1.5");
    }

    #[test]
    fn report_contents() {
        let input = "sqrt(-4)";
        let err = Error::new(vec![0..8, 5..7], NegativeRoot { value: -4.0 });
        let report = render(&err, input);
        assert!(report.contains("cannot take the square root of -4"));
        assert!(report.contains("here"));
        assert!(report.contains("only non-negative numbers have real square roots"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(Vec::new(), Unexpected);
        let report = render(&err, "");
        assert!(report.contains("unexpected token"));
    }
}
