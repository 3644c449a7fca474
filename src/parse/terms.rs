//! First pass over a normalized expression: split it into dice terms and the
//! literal text between them.

use crate::common::UInt;
use logos::Logos;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
enum TermKind {
    #[regex(r"[0-9]+[dD][0-9]+")]
    Dice,
    #[regex(r"[0-9]+")]
    Digits,
    #[regex(r"[^0-9]+")]
    Text,

    #[error]
    Error,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Term<'a> {
    Dice(DiceTerm<'a>),
    /// Everything between two dice terms, verbatim.
    Fragment(&'a str),
}

/// A `<count>d<sides>` match. Either half is `None` when it does not fit in
/// its integer type; such a term can never be in bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DiceTerm<'a> {
    pub notation: &'a str,
    pub num: Option<usize>,
    pub sides: Option<UInt>,
}

impl<'a> DiceTerm<'a> {
    fn new(notation: &'a str) -> Self {
        let (num, sides) = notation
            .split_once(is_dice_letter)
            .map_or((None, None), |(n, s)| (n.parse().ok(), s.parse().ok()));
        Self {
            notation,
            num,
            sides,
        }
    }
}

/// Splits `s` into terms, left to right. Adjacent non-dice text is merged
/// into a single fragment.
pub fn terms(s: &str) -> Vec<Term<'_>> {
    let mut out = Vec::new();
    let mut fragment_start = None;
    let mut lexer = TermKind::lexer(s);

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        if kind == TermKind::Dice {
            if let Some(start) = fragment_start.take() {
                out.push(Term::Fragment(&s[start..span.start]));
            }
            out.push(Term::Dice(DiceTerm::new(lexer.slice())));
        } else {
            fragment_start.get_or_insert(span.start);
        }
    }

    if let Some(start) = fragment_start {
        out.push(Term::Fragment(&s[start..]));
    }
    out
}

/// Whether `s` contains at least one dice term.
pub fn has_dice(s: &str) -> bool {
    TermKind::lexer(s).any(|kind| kind == TermKind::Dice)
}

pub(crate) fn is_dice_letter(c: char) -> bool {
    c == 'd' || c == 'D'
}

pub(crate) fn is_arithmetic(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.')
}
