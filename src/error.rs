use crate::common::UInt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an expression was rejected.
///
/// Every variant is an expected outcome of bad user input. The messages are
/// fixed and safe to show in chat.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RollError {
    #[error("empty expression")]
    EmptyExpression,
    /// `notation` is the first out-of-bounds dice term, if the failure came
    /// from one rather than from a stray `d`.
    #[error("invalid dice format")]
    InvalidDiceFormat { notation: Option<String> },
    #[error("expression contains invalid characters")]
    InvalidCharacters,
    #[error("invalid arithmetic expression")]
    MalformedArithmetic,
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("invalid result")]
    InvalidResult,
}

impl RollError {
    pub(crate) fn bad_dice(notation: Option<&str>) -> Self {
        Self::InvalidDiceFormat {
            notation: notation.map(str::to_owned),
        }
    }

    /// The offending dice term, when there is one.
    pub fn notation(&self) -> Option<&str> {
        match self {
            Self::InvalidDiceFormat { notation } => notation.as_deref(),
            _ => None,
        }
    }
}

/// A failure of the random source itself. Unlike [RollError] this is not
/// caused by the expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("random source ran out of values")]
    Exhausted,
    #[error("random source produced {value}, which is not a face of a d{sides}")]
    OutOfRange { value: UInt, sides: UInt },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("not enough momentum: {available} available, {required} required")]
    InsufficientMomentum { available: UInt, required: UInt },
}

/// Internal union so the evaluation pipeline can use `?` for both kinds.
#[derive(Debug)]
pub(crate) enum EvalError {
    Roll(RollError),
    Source(SourceError),
}

impl From<RollError> for EvalError {
    fn from(e: RollError) -> Self {
        Self::Roll(e)
    }
}

impl From<SourceError> for EvalError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}
