use std::fmt::{self, Write};
use std::num::{NonZeroU32, NonZeroUsize};
pub use vec1::vec1;

pub type Int = i32;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

pub type Float = f64;

/// The number of dice in a single term.
pub type Num = NonZeroUsize;

pub type NonEmpty<T> = vec1::Vec1<T>;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOperator {
    Pos,
    Neg,
}

impl UnaryOperator {
    pub(crate) fn apply(self, x: Float) -> Float {
        match self {
            Self::Pos => x,
            Self::Neg => -x,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Pos => '+',
            Self::Neg => '-',
        };
        f.write_char(c)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        f.write_str(s)
    }
}
