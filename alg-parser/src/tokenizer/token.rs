use logos::Logos;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The raw lexemes recognized by the lexer. Letter runs are split into functions and identifiers
/// afterwards by [`super::tokenize`].
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Lexeme {
    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r"[a-zA-Z]+")]
    Letters,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("=")]
    Equals,
}

/// One of the five arithmetic operator symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl Operator {
    /// Returns the symbol used to write the operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Exp => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The whitelisted functions that may be called in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Sqrt,
}

impl Func {
    /// Every callable function.
    pub const ALL: [Func; 3] = [Func::Sin, Func::Cos, Func::Sqrt];

    /// Returns the name of the function as written in source code.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Sqrt => "sqrt",
        }
    }

    /// Returns the function with the given name, if it is one of the whitelisted functions. The
    /// name must match exactly.
    pub fn from_name(name: &str) -> Option<Func> {
        Func::ALL.into_iter().find(|func| func.name() == name)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A decimal number, such as `3`, `2.5` or `.5`.
    Number(f64),

    /// A single-letter variable name. Names are case-sensitive.
    Identifier(char),

    Operator(Operator),

    LParen,

    RParen,

    /// The name of a whitelisted function.
    Function(Func),

    Equals,
}

impl TokenKind {
    /// Returns true if a token of this kind can begin an operand. Such a token directly after a
    /// complete operand means implicit multiplication.
    pub fn starts_atom(self) -> bool {
        matches!(
            self,
            TokenKind::Number(_) | TokenKind::Identifier(_) | TokenKind::Function(_) | TokenKind::LParen
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(num) => write!(f, "number `{}`", num),
            TokenKind::Identifier(name) => write!(f, "variable `{}`", name),
            TokenKind::Operator(op) => write!(f, "operator `{}`", op),
            TokenKind::LParen => write!(f, "`(`"),
            TokenKind::RParen => write!(f, "`)`"),
            TokenKind::Function(func) => write!(f, "function `{}`", func),
            TokenKind::Equals => write!(f, "`=`"),
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,
}
