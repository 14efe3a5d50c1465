//! The sum-of-monomials form produced by the simplifier.

use std::{collections::BTreeMap, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The identity of a like-term bucket.
///
/// Keys are ordered by the text of the symbol, in byte order, with the constant bucket last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TermKey {
    /// A single variable such as `x`, or a non-linear part of a term that is kept as-is, such as
    /// `x^2` or `sin(x)`. The text is the canonical display of that part.
    Symbol(String),

    /// The bucket of terms without any variable.
    Constant,
}

impl TermKey {
    /// Creates the key of a single variable.
    pub fn variable(name: char) -> Self {
        TermKey::Symbol(name.to_string())
    }

    /// Returns the variable name if this key is a single variable.
    pub fn as_variable(&self) -> Option<char> {
        let TermKey::Symbol(text) = self else {
            return None;
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(name), None) if name.is_ascii_alphabetic() => Some(name),
            _ => None,
        }
    }

    /// Returns true if this is the constant bucket.
    pub fn is_constant(&self) -> bool {
        matches!(self, TermKey::Constant)
    }
}

/// A single entry of [`Terms`]: a key and its accumulated coefficient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial {
    pub key: TermKey,
    pub coefficient: f64,
}

impl Monomial {
    /// Writes this monomial as it appears in a sum. The first monomial of a sum never gets a
    /// leading `+`.
    fn fmt_in_sum(&self, f: &mut fmt::Formatter, first: bool) -> fmt::Result {
        let coefficient = self.coefficient;
        if !first && coefficient >= 0.0 {
            write!(f, "+")?;
        }

        match &self.key {
            TermKey::Constant => write!(f, "{}", coefficient),
            // `1/e` is written with the coefficient as the numerator
            TermKey::Symbol(text) if text.starts_with("1/") => write!(f, "{}{}", coefficient, &text[1..]),
            TermKey::Symbol(text) if coefficient == 1.0 => write!(f, "{}", text),
            TermKey::Symbol(text) if coefficient == -1.0 => write!(f, "-{}", text),
            // `3` next to `2^x` would read as `32^x`
            TermKey::Symbol(text) if text.starts_with(|c: char| c.is_ascii_digit() || c == '.') => {
                write!(f, "{}*{}", coefficient, text)
            },
            TermKey::Symbol(text) => write!(f, "{}{}", coefficient, text),
        }
    }
}

/// A simplified expression: a mapping from each like-term bucket to its accumulated coefficient.
///
/// Coefficients of zero are kept while terms are being accumulated, but are skipped by
/// [`Terms::iter`] and by the [`Display`](fmt::Display) implementation. An expression whose
/// terms all cancel displays as `0`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Terms {
    terms: BTreeMap<TermKey, f64>,
}

impl Terms {
    /// Creates an empty sum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the coefficient to the bucket with the given key.
    pub fn add(&mut self, key: TermKey, coefficient: f64) {
        *self.terms.entry(key).or_insert(0.0) += coefficient;
    }

    /// Returns the accumulated coefficient of the given key, or zero if there is none.
    pub fn coefficient(&self, key: &TermKey) -> f64 {
        self.terms.get(key).copied().unwrap_or(0.0)
    }

    /// Returns the constant term.
    pub fn constant(&self) -> f64 {
        self.coefficient(&TermKey::Constant)
    }

    /// Returns true if the given key was accumulated, even if its coefficient is zero.
    pub fn contains(&self, key: &TermKey) -> bool {
        self.terms.contains_key(key)
    }

    /// Returns every accumulated key in order, including those whose coefficient is zero.
    pub fn keys(&self) -> impl Iterator<Item = &TermKey> {
        self.terms.keys()
    }

    /// Returns the monomials with a non-zero coefficient, in display order.
    pub fn iter(&self) -> impl Iterator<Item = Monomial> + '_ {
        self.terms
            .iter()
            .filter(|(_, coefficient)| **coefficient != 0.0)
            .map(|(key, coefficient)| Monomial { key: key.clone(), coefficient: *coefficient })
    }

    /// Returns true if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl fmt::Display for Terms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for monomial in self.iter() {
            monomial.fmt_in_sum(f, first)?;
            first = false;
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn key_order() {
        let mut keys = vec![
            TermKey::Constant,
            TermKey::variable('b'),
            TermKey::Symbol("x^2".to_string()),
            TermKey::variable('a'),
            TermKey::variable('B'),
        ];
        keys.sort();
        assert_eq!(keys, vec![
            TermKey::variable('B'),
            TermKey::variable('a'),
            TermKey::variable('b'),
            TermKey::Symbol("x^2".to_string()),
            TermKey::Constant,
        ]);
    }

    #[test]
    fn as_variable() {
        assert_eq!(TermKey::variable('y').as_variable(), Some('y'));
        assert_eq!(TermKey::Symbol("x^2".to_string()).as_variable(), None);
        assert_eq!(TermKey::Constant.as_variable(), None);
    }

    #[test]
    fn render() {
        let mut terms = Terms::new();
        terms.add(TermKey::Constant, 7.0);
        terms.add(TermKey::variable('x'), 4.0);
        terms.add(TermKey::variable('x'), -1.0);
        terms.add(TermKey::variable('a'), -1.0);
        terms.add(TermKey::variable('b'), 1.0);
        assert_eq!(terms.to_string(), "-a+b+3x+7");
    }

    #[test]
    fn render_reciprocal() {
        let mut terms = Terms::new();
        terms.add(TermKey::Symbol("1/x".to_string()), -2.5);
        terms.add(TermKey::Symbol("1/(x+1)".to_string()), 1.0);
        assert_eq!(terms.to_string(), "1/(x+1)-2.5/x");
    }

    #[test]
    fn render_numeric_base() {
        let mut terms = Terms::new();
        terms.add(TermKey::Symbol("2^x".to_string()), 3.0);
        terms.add(TermKey::Symbol("1.5^y".to_string()), -2.0);
        terms.add(TermKey::Symbol("0.5^x".to_string()), 1.0);
        terms.add(TermKey::Symbol("3^x".to_string()), -1.0);
        assert_eq!(terms.to_string(), "0.5^x-2*1.5^y+3*2^x-3^x");
    }

    #[test]
    fn zero_terms_are_dropped() {
        let mut terms = Terms::new();
        terms.add(TermKey::variable('x'), 2.0);
        terms.add(TermKey::variable('x'), -2.0);
        assert!(terms.contains(&TermKey::variable('x')));
        assert!(terms.is_zero());
        assert_eq!(terms.to_string(), "0");
        assert_eq!(Terms::new().to_string(), "0");
    }

    #[test]
    fn negative_constant_after_terms() {
        let mut terms = Terms::new();
        terms.add(TermKey::variable('x'), 0.5);
        terms.add(TermKey::Constant, -3.0);
        assert_eq!(terms.to_string(), "0.5x-3");
    }
}
