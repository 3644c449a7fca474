use crate::common::{NonZeroUInt, Num, UInt};
use crate::parse::DiceTerm;
use serde::{Deserialize, Serialize};

/// Upper bounds for a single dice term. The lower bound of both is 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_dice: usize,
    pub max_sides: UInt,
}

impl Limits {
    pub const DEFAULT_MAX_DICE: usize = 100;
    pub const DEFAULT_MAX_SIDES: UInt = 1000;

    pub fn new(max_dice: usize, max_sides: UInt) -> Self {
        Self {
            max_dice,
            max_sides,
        }
    }

    /// The count and die size of `term`, or `None` if either is out of bounds.
    pub fn dice(&self, term: &DiceTerm<'_>) -> Option<(Num, NonZeroUInt)> {
        let num = term
            .num
            .filter(|&n| n <= self.max_dice)
            .and_then(Num::new)?;
        let sides = term
            .sides
            .filter(|&s| s <= self.max_sides)
            .and_then(NonZeroUInt::new)?;
        Some((num, sides))
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DICE, Self::DEFAULT_MAX_SIDES)
    }
}
