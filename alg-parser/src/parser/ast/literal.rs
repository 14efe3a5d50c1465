use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal, such as `2` or `0.5`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl LitNum {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A single-letter variable, such as `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the variable.
    pub name: char,

    /// The region of the source code that this variable was parsed from.
    pub span: Range<usize>,
}

impl LitSym {
    /// Returns the span of the variable.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
