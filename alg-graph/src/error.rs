use alg_attrs::ErrorKind;

/// No point in the sampled range could be evaluated.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("no valid points between {} and {}", start, end),
    labels = ["this expression could not be evaluated at any sampled point"],
    help = format!("check that the expression only uses `{}`, and try a different range", variable),
    category = NoValidSamples,
)]
pub struct NoValidSamples {
    /// The sampled variable.
    pub variable: char,

    /// The start of the sampled range.
    pub start: f64,

    /// The end of the sampled range.
    pub end: f64,
}

/// The sampling options are invalid.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid sampling options",
    help = reason,
    category = InvalidOptions,
)]
pub struct InvalidSamplingOptions {
    /// Why the options are invalid.
    pub reason: String,
}
