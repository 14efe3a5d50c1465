pub mod token;

use alg_attrs::ErrorKind;
use alg_error::Error;
use logos::Logos;
use token::Lexeme;
use tracing::trace;

pub use token::{Func, Operator, Token, TokenKind};

/// A character that is not part of the expression language was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character),
    labels = ["this character"],
    help = "expressions may only contain numbers, letters, `+ - * / ^ ( ) =` and whitespace",
    category = Syntax,
)]
pub struct InvalidCharacter {
    /// The character that was found.
    pub character: char,
}

/// A number literal is too large to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "number is too large",
    labels = ["this number"],
    help = "numbers must be smaller than about 1.8e308",
    category = Syntax,
)]
pub struct NumberTooLarge;

/// Converts the input text into a sequence of tokens. Whitespace is skipped.
///
/// A run of letters becomes a single [`TokenKind::Function`] if the whole run is the name of a
/// whitelisted function, and one [`TokenKind::Identifier`] per letter otherwise.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexeme::lexer(input);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let Ok(lexeme) = lexeme else {
            // the error span starts on a char boundary, since every lexeme before it is ASCII
            let character = input[span.start..].chars().next().unwrap_or('\u{FFFD}');
            let span = span.start..span.start + character.len_utf8();
            return Err(Error::new(vec![span], InvalidCharacter { character }));
        };

        let kind = match lexeme {
            Lexeme::Number(num) if num.is_finite() => TokenKind::Number(num),
            Lexeme::Number(_) => return Err(Error::new(vec![span], NumberTooLarge)),
            Lexeme::Letters => {
                let letters = lexer.slice();
                if let Some(func) = Func::from_name(letters) {
                    TokenKind::Function(func)
                } else {
                    tokens.extend(letters.char_indices().map(|(i, name)| Token {
                        span: span.start + i..span.start + i + 1,
                        kind: TokenKind::Identifier(name),
                    }));
                    continue;
                }
            },
            Lexeme::Add => TokenKind::Operator(Operator::Add),
            Lexeme::Sub => TokenKind::Operator(Operator::Sub),
            Lexeme::Mul => TokenKind::Operator(Operator::Mul),
            Lexeme::Div => TokenKind::Operator(Operator::Div),
            Lexeme::Exp => TokenKind::Operator(Operator::Exp),
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::Equals => TokenKind::Equals,
        };
        tokens.push(Token { span, kind });
    }

    trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    /// Compares the token kinds produced by the tokenizer to the expected kinds.
    fn compare_kinds<const N: usize>(input: &str, expected: [TokenKind; N]) {
        let kinds = tokenize(input)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect::<Vec<_>>();
        assert_eq!(kinds, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_kinds("1 + 2", [
            TokenKind::Number(1.0),
            TokenKind::Operator(Operator::Add),
            TokenKind::Number(2.0),
        ]);
    }

    #[test]
    fn equation() {
        compare_kinds("2x + 5 = 13", [
            TokenKind::Number(2.0),
            TokenKind::Identifier('x'),
            TokenKind::Operator(Operator::Add),
            TokenKind::Number(5.0),
            TokenKind::Equals,
            TokenKind::Number(13.0),
        ]);
    }

    #[test]
    fn decimals() {
        compare_kinds("2.5 .5 3. 1.2.3", [
            TokenKind::Number(2.5),
            TokenKind::Number(0.5),
            TokenKind::Number(3.0),
            TokenKind::Number(1.2),
            TokenKind::Number(0.3),
        ]);
    }

    #[test]
    fn functions_and_letter_runs() {
        compare_kinds("sqrt(x) sinx Xy", [
            TokenKind::Function(Func::Sqrt),
            TokenKind::LParen,
            TokenKind::Identifier('x'),
            TokenKind::RParen,
            TokenKind::Identifier('s'),
            TokenKind::Identifier('i'),
            TokenKind::Identifier('n'),
            TokenKind::Identifier('x'),
            TokenKind::Identifier('X'),
            TokenKind::Identifier('y'),
        ]);
    }

    #[test]
    fn spans() {
        let tokens = tokenize(" ab\t+cos").unwrap();
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![1..2, 2..3, 4..5, 5..8]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(tokenize("  \n ").unwrap(), Vec::new());
    }

    #[test]
    fn invalid_character() {
        let err = tokenize("2x + $").unwrap_err();
        assert_eq!(err.spans, vec![5..6]);
        assert_eq!(err.downcast_ref::<InvalidCharacter>(), Some(&InvalidCharacter { character: '$' }));
    }

    #[test]
    fn huge_number() {
        let input = "9".repeat(400);
        let err = tokenize(&input).unwrap_err();
        assert!(err.is::<NumberTooLarge>());
        assert_eq!(err.spans, vec![0..400]);
    }

    #[test]
    fn invalid_multibyte_character() {
        let err = tokenize("x × 2").unwrap_err();
        assert_eq!(err.spans, vec![2..4]);
        assert_eq!(err.category(), alg_error::Category::Syntax);
    }
}
