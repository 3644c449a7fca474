mod ctx;
mod limits;
mod result;
mod roller;
mod stringify;

pub use ctx::{DefaultRoller, RollContext};
pub use limits::Limits;
pub use result::{Outcome, RollDetail, RollResult};
pub use roller::{RollIter, Roller, ScriptedRoller};
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};

use crate::error::SourceError;

/// Evaluates `input` once with `roller` and the default [Limits].
pub fn eval<R: Roller>(input: &str, roller: R) -> Result<Outcome, SourceError> {
    RollContext::new(roller).evaluate(input)
}
