//! Evaluates dice expressions such as `2d6+3` or `4d4*2-1d8`.
//!
//! Every `<count>d<sides>` term is rolled and replaced by its sum, and the
//! remaining arithmetic (`+ - * / ** ( )`) is evaluated by a dedicated parser.
//! Anything else is rejected with a [RollError].
//!
//! ```
//! use dice_expr::{roll_with, ScriptedRoller};
//!
//! let outcome = roll_with("2d6+3", ScriptedRoller::new([3, 4])).unwrap();
//! let result = outcome.unwrap();
//! assert_eq!(result.evaluated, "7+3");
//! assert_eq!(result.result, 10.0);
//! ```

pub mod check;
pub mod command;
mod common;
pub mod error;
pub mod parse;
pub mod roll;

pub use common::{Float, Int, NonEmpty, NonZeroUInt, UInt};
pub use error::{CheckError, RollError, SourceError};
pub use roll::{
    Limits, MarkdownStringifier, Outcome, RollContext, RollDetail, RollResult, Roller,
    ScriptedRoller, SimpleStringifier, Stringify,
};

/// Evaluates `input` with the thread-local RNG.
pub fn roll(input: &str) -> Result<Outcome, SourceError> {
    roll::eval(input, rand::thread_rng())
}

/// Evaluates `input` with the given roller.
pub fn roll_with<R: Roller>(input: &str, roller: R) -> Result<Outcome, SourceError> {
    roll::eval(input, roller)
}
