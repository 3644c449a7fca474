use crate::common::*;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+(\.[0-9]*)?", number)]
    #[regex(r"\.[0-9]+", |lex| lex.slice().parse())]
    Number(Float),

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,

    #[token("++")]
    #[token("--")]
    ErrIncrement,

    #[error]
    Error,
}

/// Digits after a leading zero (`08`, `00.5`) are not a number.
fn number(lex: &mut LogosLexer<TokenKind>) -> Option<Float> {
    let slice = lex.slice();
    match slice.as_bytes() {
        [b'0', b'0'..=b'9', ..] => None,
        _ => slice.parse().ok(),
    }
}

impl TokenKind {
    pub const UNARY_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub const ADDITION_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub const MULTIPLICATION_OPS: &'static [Self] = &[Self::Star, Self::Slash];

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;

        match self {
            Number(_) => "<number>",
            LeftParen => "'('",
            RightParen => "')'",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            StarStar => "'**'",
            Slash => "'/'",
            ErrIncrement | Error => "<error>",
        }
    }

    pub fn as_unary_op(&self) -> Option<UnaryOperator> {
        use UnaryOperator::*;
        Some(match self {
            Self::Plus => Pos,
            Self::Minus => Neg,
            _ => return None,
        })
    }

    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            Self::StarStar => Pow,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn tokens(s: &str) -> Vec<TokenKind> {
        TokenKind::lexer(s).collect()
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokens("42"), vec![Number(42.0)]);
        assert_eq!(tokens("1.5"), vec![Number(1.5)]);
        assert_eq!(tokens("1."), vec![Number(1.0)]);
        assert_eq!(tokens(".25"), vec![Number(0.25)]);
        assert_eq!(tokens("0"), vec![Number(0.0)]);
        assert_eq!(tokens("0.5"), vec![Number(0.5)]);
        assert_eq!(tokens("10"), vec![Number(10.0)]);
    }

    #[test]
    fn test_leading_zero_is_an_error_token() {
        assert_eq!(tokens("08"), vec![Error]);
        assert_eq!(tokens("00.5"), vec![Error]);
        assert_eq!(tokens("1+010"), vec![Number(1.0), Plus, Error]);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            tokens("(1+2)*3/4-5**6"),
            vec![
                LeftParen,
                Number(1.0),
                Plus,
                Number(2.0),
                RightParen,
                Star,
                Number(3.0),
                Slash,
                Number(4.0),
                Minus,
                Number(5.0),
                StarStar,
                Number(6.0),
            ]
        );
    }

    #[test]
    fn test_increment_is_an_error_token() {
        assert_eq!(tokens("2--3"), vec![Number(2.0), ErrIncrement, Number(3.0)]);
        assert_eq!(tokens("2++3"), vec![Number(2.0), ErrIncrement, Number(3.0)]);
        assert_eq!(tokens("2-+3"), vec![Number(2.0), Minus, Plus, Number(3.0)]);
    }

    #[test]
    fn test_dangling_dot() {
        assert_eq!(tokens("."), vec![Error]);
        assert_eq!(tokens("1.2.3"), vec![Number(1.2), Number(0.3)]);
    }
}
