//! Structs to help parse binary operators.

use crate::tokenizer::{Operator, Token, TokenKind};
use std::{fmt, ops::Range};
use super::{Associativity, Parser, Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Mul | Self::Div | Self::Add | Self::Sub => Associativity::Left,
        }
    }
}

impl From<Operator> for BinOpKind {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Add => Self::Add,
            Operator::Sub => Self::Sub,
            Operator::Mul => Self::Mul,
            Operator::Div => Self::Div,
            Operator::Exp => Self::Exp,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Exp => write!(f, "^"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
        }
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// Whether the operator was implied, as in `2x`. Only multiplication can be implicit.
    pub implicit: bool,

    /// The region of the source code that this operator was parsed from. For implicit
    /// multiplication, this is the empty span between the two operands.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operator.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Returns the associativity of the binary operator.
    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }

    /// Looks at the current token and returns the binary operator it represents, without moving
    /// the cursor.
    ///
    /// An explicit operator token is returned as-is. A token that begins an operand means that
    /// an operand directly follows another, so implicit multiplication is returned. Anything
    /// else, including the end of the stream, is not an operator.
    pub fn peek(input: &Parser) -> Option<Self> {
        let Token { span, kind } = input.current_token()?;
        match kind {
            TokenKind::Operator(op) => Some(Self {
                kind: (*op).into(),
                implicit: false,
                span: span.clone(),
            }),
            kind if kind.starts_atom() => Some(Self {
                kind: BinOpKind::Mul,
                implicit: true,
                span: span.start..span.start,
            }),
            _ => None,
        }
    }

    /// Consumes the token of this operator, if there is one.
    pub fn consume(&self, input: &mut Parser) {
        if !self.implicit {
            // the token was peeked by `BinOp::peek`, so it exists
            let _ = input.next_token();
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.kind.fmt(f)
    }
}
