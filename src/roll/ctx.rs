use super::{
    limits::Limits,
    result::{truncate, Outcome, RollDetail, RollResult},
    roller::Roller,
};
use crate::check::{CheckResult, SkillCheck};
use crate::common::*;
use crate::error::{EvalError, RollError, SourceError};
use crate::parse::{
    self,
    ast::Eval,
    terms::{is_arithmetic, is_dice_letter},
    Term,
};

pub type DefaultRoller = rand::prelude::ThreadRng;

/// What to do with each term once the expression has been validated.
enum Step<'a> {
    Copy(&'a str),
    Roll(&'a str, Num, NonZeroUInt),
}

/// Evaluates dice expressions against an owned [Roller].
pub struct RollContext<R = DefaultRoller> {
    limits: Limits,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(roller: R) -> Self {
        Self::with_limits(Limits::default(), roller)
    }

    pub fn with_limits(limits: Limits, roller: R) -> Self {
        Self { limits, roller }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn roller_mut(&mut self) -> &mut R {
        &mut self.roller
    }

    pub fn into_roller(self) -> R {
        self.roller
    }

    /// Evaluates `input`.
    ///
    /// The inner [Outcome] is the answer for the user: either a
    /// [RollResult] or the [RollError] explaining why the expression was
    /// rejected. The outer error is reserved for failures of the roller.
    pub fn evaluate(&mut self, input: &str) -> Result<Outcome, SourceError> {
        let expression: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        match self.try_evaluate(expression) {
            Ok(result) => {
                tracing::debug!(
                    expression = %result.expression,
                    evaluated = %result.evaluated,
                    result = result.result,
                    "roll evaluated"
                );
                Ok(Ok(result))
            }
            Err(EvalError::Roll(error)) => {
                tracing::debug!(input, %error, "roll rejected");
                Ok(Err(error))
            }
            Err(EvalError::Source(error)) => {
                tracing::warn!(input, %error, "random source failed");
                Err(error)
            }
        }
    }

    /// Rolls an attribute + skill check with this context's roller.
    pub fn check(&mut self, check: &SkillCheck) -> Result<CheckResult, SourceError> {
        check.roll(&mut self.roller)
    }

    fn try_evaluate(&mut self, expression: String) -> Result<RollResult, EvalError> {
        if expression.is_empty() {
            return Err(RollError::EmptyExpression.into());
        }

        let plan = self.plan(&expression)?;

        let mut details = Vec::new();
        let mut evaluated = String::with_capacity(expression.len());
        for step in plan {
            match step {
                Step::Copy(text) => evaluated.push_str(text),
                Step::Roll(notation, num, sides) => {
                    let detail = self.roll_term(notation, num, sides)?;
                    evaluated.push_str(&detail.sum.to_string());
                    details.push(detail);
                }
            }
        }

        let raw = parse::parse(&evaluated)?.eval()?;
        if !raw.is_finite() {
            return Err(RollError::InvalidResult.into());
        }

        Ok(RollResult {
            expression,
            evaluated,
            details,
            result: truncate(raw),
        })
    }

    /// Checks everything that does not depend on the dice, so that a
    /// rejected expression rolls nothing.
    fn plan<'a>(&self, expression: &'a str) -> Result<Vec<Step<'a>>, RollError> {
        let terms = parse::terms(expression);

        let mut plan = Vec::with_capacity(terms.len());
        let mut out_of_bounds = None;
        let mut stray_letter = false;
        let mut illegal = false;

        for term in terms {
            match term {
                Term::Dice(dice) => match self.limits.dice(&dice) {
                    Some((num, sides)) => plan.push(Step::Roll(dice.notation, num, sides)),
                    None => {
                        out_of_bounds.get_or_insert(dice.notation);
                    }
                },
                Term::Fragment(text) => {
                    stray_letter |= text.chars().any(is_dice_letter);
                    illegal |= !text.chars().all(is_arithmetic);
                    plan.push(Step::Copy(text));
                }
            }
        }

        if out_of_bounds.is_some() || stray_letter {
            Err(RollError::bad_dice(out_of_bounds))
        } else if illegal {
            Err(RollError::InvalidCharacters)
        } else {
            Ok(plan)
        }
    }

    fn roll_term(
        &mut self,
        notation: &str,
        num: Num,
        sides: NonZeroUInt,
    ) -> Result<RollDetail, SourceError> {
        let mut draws = self.roller.roll_iter(num.get(), sides);

        let first = draws.next().unwrap_or(Err(SourceError::Exhausted))?;
        let mut rolls = vec1![first];
        for draw in draws {
            rolls.push(draw?);
        }

        let detail = RollDetail::new(notation, rolls);
        tracing::trace!(
            notation,
            rolls = ?detail.rolls,
            sum = detail.sum,
            "rolled dice term"
        );
        Ok(detail)
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}
