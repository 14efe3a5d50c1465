pub mod ast;
pub mod error;
pub mod fmt;
pub mod iter;
pub mod op;

use alg_error::{Error, ErrorKind};
use crate::tokenizer::{tokenize, Token, TokenKind};
use std::ops::Range;

/// The maximum number of levels of parentheses, negations and right-associative operators that
/// can enclose a part of an expression.
pub const MAX_NESTING: usize = 256;

/// The maximum depth of the tree of expressions built by the parser. Long chains of operators,
/// such as `x + x + ... + x`, count towards this limit as well.
pub const MAX_DEPTH: usize = 512;

/// The precedence of an operator or expression, from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence. Parsing at this level accepts every operator.
    Any,

    /// Addition and subtraction.
    Term,

    /// Multiplication and division, explicit or implicit.
    Factor,

    /// Unary negation.
    Neg,

    /// Exponentiation.
    Exp,

    /// Literals, variables, function calls and parenthesized groups.
    Primary,
}

/// The associativity of a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// Left-associative: `a op b op c` is `(a op b) op c`.
    Left,

    /// Right-associative: `a op b op c` is `a op (b op c)`.
    Right,
}

/// Any type that can be parsed from a stream of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by private parsing functions. Prefer [`Parser::try_parse`]
    /// otherwise, as it will backtrack the cursor on failure.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// A high-level parser over a stream of tokens. This is the type to use to parse a piece of text
/// into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The span reported when the end of the stream is reached unexpectedly.
    eof: Range<usize>,

    /// The number of parentheses that are currently open.
    pub(crate) depth: usize,

    /// The number of nested constructs the parser is currently inside of.
    nesting: usize,

    /// An upper bound on the depth of the tree above the expression currently being parsed.
    tree_depth: usize,
}

impl Parser {
    /// Tokenizes the given source and creates a parser over the whole of it.
    pub fn new(source: &str) -> Result<Self, Error> {
        let tokens = tokenize(source)?;
        Ok(Self::from_tokens(tokens, source.len()..source.len()))
    }

    /// Creates a parser over an already tokenized region of source code. `eof` is the span to
    /// report when more tokens were expected after the last one.
    pub fn from_tokens(tokens: impl Into<Box<[Token]>>, eof: Range<usize>) -> Self {
        Self {
            tokens: tokens.into(),
            cursor: 0,
            eof,
            depth: 0,
            nesting: 0,
            tree_depth: 0,
        }
    }

    /// Fails with [`error::NestingTooDeep`] at `span` if the tree has reached [`MAX_DEPTH`], or
    /// if `nested` and the parser is already [`MAX_NESTING`] levels deep.
    fn check_depth(&self, span: &Range<usize>, nested: bool) -> Result<(), Error> {
        if nested && self.nesting >= MAX_NESTING {
            Err(Error::new(vec![span.clone()], error::NestingTooDeep { limit: MAX_NESTING }))
        } else if self.tree_depth >= MAX_DEPTH {
            Err(Error::new(vec![span.clone()], error::NestingTooDeep { limit: MAX_DEPTH }))
        } else {
            Ok(())
        }
    }

    /// Runs `f` one level of nesting deeper. The construct being entered starts at `span`.
    pub(crate) fn nested<T>(
        &mut self,
        span: &Range<usize>,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.check_depth(span, true)?;
        self.nesting += 1;
        self.tree_depth += 1;
        let result = f(self);
        self.nesting -= 1;
        self.tree_depth -= 1;
        result
    }

    /// Records that the tree grew one level deeper without the parser recursing, as when the
    /// left-hand side of `a + b + c` is wrapped into another binary expression. The growth lasts
    /// until the tree depth is reset with [`Parser::reset_tree_depth`].
    pub(crate) fn grow_tree(&mut self, span: &Range<usize>) -> Result<(), Error> {
        self.check_depth(span, false)?;
        self.tree_depth += 1;
        Ok(())
    }

    /// Returns the current tree depth, to be restored later.
    pub(crate) fn tree_depth(&self) -> usize {
        self.tree_depth
    }

    /// Restores a tree depth returned by [`Parser::tree_depth`].
    pub(crate) fn reset_tree_depth(&mut self, tree_depth: usize) {
        self.tree_depth = tree_depth;
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the region being parsed.
    pub fn eof_span(&self) -> Range<usize> {
        self.eof.clone()
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns true if every token has been consumed.
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the current token without moving the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                Ok(token.clone())
            },
            None => Err(self.error(error::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        T::parse(self).map_err(|err| {
            self.cursor = start;
            err
        })
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        if self.is_eof() {
            return Err(Error::new(vec![self.eof_span()], error::EmptyExpression));
        }

        let value = self.try_parse::<T>()?;

        match self.current_token() {
            None => Ok(value),
            Some(Token { kind: TokenKind::RParen, span }) => Err(Error::new(
                vec![span.clone()],
                error::UnbalancedParentheses { opening: false },
            )),
            Some(token) => {
                let end = self.tokens.last().map_or(token.span.end, |last| last.span.end);
                Err(Error::new(vec![token.span.start..end], error::TrailingInput))
            },
        }
    }
}
