use crate::common::{NonZeroUInt, UInt};
use crate::error::SourceError;
use rand::Rng;
use std::collections::VecDeque;

/// A source of die faces.
pub trait Roller {
    /// Produces one face of a die with `sides` sides. Implementations should
    /// return a value in `1..=sides`; anything else is reported as
    /// [SourceError::OutOfRange] by [RollIter].
    fn roll(&mut self, sides: NonZeroUInt) -> Result<UInt, SourceError>;

    fn roll_iter(&mut self, num: usize, sides: NonZeroUInt) -> RollIter<'_, Self> {
        RollIter {
            roller: self,
            num,
            sides,
        }
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> Result<UInt, SourceError> {
        Ok(self.gen_range(1..=sides.get()))
    }
}

/// `num` checked draws from a [Roller].
pub struct RollIter<'a, R: ?Sized> {
    roller: &'a mut R,
    num: usize,
    sides: NonZeroUInt,
}

impl<R: Roller + ?Sized> Iterator for RollIter<'_, R> {
    type Item = Result<UInt, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.num == 0 {
            return None;
        }
        self.num -= 1;

        let sides = self.sides.get();
        Some(self.roller.roll(self.sides).and_then(|value| {
            if (1..=sides).contains(&value) {
                Ok(value)
            } else {
                Err(SourceError::OutOfRange { value, sides })
            }
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.num, Some(self.num))
    }
}

/// Replays a fixed sequence of faces, e.g. physical dice typed in by a player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedRoller {
    values: VecDeque<UInt>,
}

impl ScriptedRoller {
    pub fn new(values: impl IntoIterator<Item = UInt>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, _sides: NonZeroUInt) -> Result<UInt, SourceError> {
        self.values.pop_front().ok_or(SourceError::Exhausted)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
