//! Attribute + skill checks: a pool of d20s, each compared against a
//! target number.

use crate::common::*;
use crate::error::{CheckError, SourceError};
use crate::roll::Roller;
use serde::{Deserialize, Serialize};

/// Every check rolls at least this many dice.
pub const BASE_DICE: usize = 2;

const D20: NonZeroUInt = match NonZeroUInt::new(20) {
    Some(x) => x,
    None => panic!("20 is not zero"),
};

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SkillCheck {
    pub attribute: Int,
    pub skill: Int,
    /// Extra dice bought with momentum.
    pub purchased: UInt,
    /// Personal truths invoked; each one adds a die.
    pub truths: Vec<String>,
    /// Only recorded, it does not change the dice.
    pub focus: Option<String>,
}

impl SkillCheck {
    pub fn new(attribute: Int, skill: Int) -> Self {
        Self {
            attribute,
            skill,
            ..Self::default()
        }
    }

    pub fn purchase(mut self, dice: UInt) -> Self {
        self.purchased = dice;
        self
    }

    pub fn truth(mut self, truth: impl Into<String>) -> Self {
        self.truths.push(truth.into());
        self
    }

    pub fn truths<I>(mut self, truths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.truths.extend(truths.into_iter().map(Into::into));
        self
    }

    pub fn focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = Some(focus.into());
        self
    }

    /// A die succeeds when it rolls at or under this number.
    pub fn target(&self) -> Int {
        self.attribute.saturating_add(self.skill)
    }

    pub fn dice(&self) -> usize {
        BASE_DICE + self.purchased as usize + self.truths.len()
    }

    /// Pays for the purchased dice out of `momentum`, returning what is left.
    pub fn spend(&self, momentum: UInt) -> Result<UInt, CheckError> {
        momentum
            .checked_sub(self.purchased)
            .ok_or(CheckError::InsufficientMomentum {
                available: momentum,
                required: self.purchased,
            })
    }

    pub fn roll<R: Roller + ?Sized>(&self, roller: &mut R) -> Result<CheckResult, SourceError> {
        let target = self.target();
        let mut draws = roller.roll_iter(self.dice(), D20);

        let first = draws.next().unwrap_or(Err(SourceError::Exhausted))?;
        let mut dice = vec1![CheckDie::new(first, target)];
        for draw in draws {
            dice.push(CheckDie::new(draw?, target));
        }

        let result = CheckResult {
            focus: self.focus.clone(),
            purchased: self.purchased,
            truths: self.truths.clone(),
            ..CheckResult::new(target, dice)
        };
        tracing::debug!(
            target_number = target,
            successes = result.successes,
            complications = result.complications,
            focus = ?result.focus,
            "check rolled"
        );
        Ok(result)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CheckDie {
    pub value: UInt,
    pub success: bool,
}

impl CheckDie {
    fn new(value: UInt, target: Int) -> Self {
        Self {
            value,
            success: i64::from(value) <= i64::from(target),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub target: Int,
    pub focus: Option<String>,
    pub dice: NonEmpty<CheckDie>,
    pub successes: usize,
    pub complications: usize,
    pub purchased: UInt,
    pub truths: Vec<String>,
}

impl CheckResult {
    fn new(target: Int, dice: NonEmpty<CheckDie>) -> Self {
        let successes = dice.iter().filter(|d| d.success).count();
        let complications = dice.len() - successes;
        Self {
            target,
            focus: None,
            dice,
            successes,
            complications,
            purchased: 0,
            truths: Vec::new(),
        }
    }
}
