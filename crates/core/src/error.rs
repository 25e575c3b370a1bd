//! Error types for frame construction and game appends.

use thiserror::Error;

use crate::types::{MAX_FRAMES, PINS};

/// A frame whose pin counts cannot occur on a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidFrame {
    /// A roll knocked down a negative number of pins.
    #[error("roll slot {slot} is negative ({pins})")]
    NegativeRoll { slot: usize, pins: i32 },

    /// A roll knocked down more pins than a rack holds.
    #[error("roll slot {slot} knocks down {pins} pins, more than {max}", max = PINS)]
    RollOutOfRange { slot: usize, pins: i32 },

    /// The first two throws against one rack exceed the pins standing.
    #[error("first two rolls ({roll1} + {roll2}) exceed {max} pins", max = PINS)]
    TooManyPins { roll1: i32, roll2: i32 },
}

impl InvalidFrame {
    pub fn code(self) -> &'static str {
        match self {
            InvalidFrame::NegativeRoll { .. } => "negative_roll",
            InvalidFrame::RollOutOfRange { .. } => "roll_out_of_range",
            InvalidFrame::TooManyPins { .. } => "too_many_pins",
        }
    }
}

/// Why a fill roll was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FillRollViolation {
    /// The frame would not be the tenth frame. `frame_number` is one-based.
    #[error("fill roll in frame {frame_number}, only the tenth frame may carry one")]
    NotFinalFrame { frame_number: usize },

    /// The first two throws left pins standing.
    #[error("fill roll not earned, first two rolls downed only {pins} pins")]
    NotEarned { pins: u8 },
}

/// A frame rejected in the context of the game it was appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game already holds all of its frames.
    #[error("game already holds {max} frames", max = MAX_FRAMES)]
    TooManyFrames,

    /// A fill roll is present but not legal here.
    #[error("illegal fill roll: {0}")]
    IllegalFillRoll(#[from] FillRollViolation),
}

impl GameError {
    pub fn code(self) -> &'static str {
        match self {
            GameError::TooManyFrames => "too_many_frames",
            GameError::IllegalFillRoll(_) => "illegal_fill_roll",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = InvalidFrame::TooManyPins { roll1: 9, roll2: 2 };
        assert_eq!(err.to_string(), "first two rolls (9 + 2) exceed 10 pins");

        let err = GameError::from(FillRollViolation::NotEarned { pins: 5 });
        assert_eq!(
            err.to_string(),
            "illegal fill roll: fill roll not earned, first two rolls downed only 5 pins"
        );
        assert_eq!(GameError::TooManyFrames.to_string(), "game already holds 10 frames");
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(InvalidFrame::NegativeRoll { slot: 0, pins: -1 }.code(), "negative_roll");
        assert_eq!(InvalidFrame::RollOutOfRange { slot: 2, pins: 11 }.code(), "roll_out_of_range");
        assert_eq!(GameError::TooManyFrames.code(), "too_many_frames");
        assert_eq!(
            GameError::IllegalFillRoll(FillRollViolation::NotFinalFrame { frame_number: 2 }).code(),
            "illegal_fill_roll"
        );
    }
}
