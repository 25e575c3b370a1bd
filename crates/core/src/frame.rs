//! Frame module - one frame's rolls and their classification
//!
//! A frame stores three roll slots `[roll1, roll2, fill]`. The fill slot is 0
//! unless the frame is the tenth frame of a game and earned a bonus throw.
//!
//! A frame validates only what it can see on its own: pin counts per roll and,
//! without a fill roll, the pins left for the second throw. Whether a fill roll is legal depends
//! on the frame's position, which only the owning [`Game`](crate::Game) knows.

use crate::error::InvalidFrame;
use crate::types::{FrameKind, FILL_SLOT, PINS, ROLL1_SLOT, ROLL2_SLOT, ROLLS_PER_FRAME};

/// One frame of a game, immutable once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    rolls: [u8; ROLLS_PER_FRAME],
}

impl Frame {
    /// Create a frame of up to two throws with no fill roll
    ///
    /// A strike is written `Frame::new(10, 0)`.
    pub fn new(roll1: i32, roll2: i32) -> Result<Self, InvalidFrame> {
        Self::with_fill(roll1, roll2, 0)
    }

    /// Create a frame that may carry a fill roll
    ///
    /// A non-zero fill roll marks a tenth frame, where `roll2` may be a bonus
    /// throw against a fresh rack, so `roll1 + roll2` is not capped at 10.
    /// Whether the fill roll was earned is checked by the game.
    pub fn with_fill(roll1: i32, roll2: i32, fill: i32) -> Result<Self, InvalidFrame> {
        let raw = [roll1, roll2, fill];
        let mut rolls = [0u8; ROLLS_PER_FRAME];
        for (slot, &pins) in raw.iter().enumerate() {
            rolls[slot] = pin_count(slot, pins)?;
        }

        if rolls[FILL_SLOT] == 0 && rolls[ROLL1_SLOT] + rolls[ROLL2_SLOT] > PINS {
            return Err(InvalidFrame::TooManyPins { roll1, roll2 });
        }

        Ok(Self { rolls })
    }

    /// A strike: all ten pins on the first throw
    pub const fn strike() -> Self {
        Self {
            rolls: [PINS, 0, 0],
        }
    }

    /// The three roll slots in throw order
    pub fn rolls(&self) -> [u8; ROLLS_PER_FRAME] {
        self.rolls
    }

    pub fn first_roll(&self) -> u8 {
        self.rolls[ROLL1_SLOT]
    }

    pub fn fill_roll(&self) -> u8 {
        self.rolls[FILL_SLOT]
    }

    pub fn has_fill_roll(&self) -> bool {
        self.fill_roll() != 0
    }

    /// Pins downed by the first two throws
    pub fn first_two(&self) -> u32 {
        self.rolls[ROLL1_SLOT] as u32 + self.rolls[ROLL2_SLOT] as u32
    }

    /// Pins downed across all three slots
    pub fn pins(&self) -> u32 {
        self.rolls.iter().map(|&r| r as u32).sum()
    }

    pub fn is_strike(&self) -> bool {
        self.rolls[ROLL1_SLOT] == PINS
    }

    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.first_two() == PINS as u32
    }

    pub fn is_open_frame(&self) -> bool {
        self.first_two() < PINS as u32
    }

    /// Classify the frame
    pub fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }
}

impl TryFrom<[i32; ROLLS_PER_FRAME]> for Frame {
    type Error = InvalidFrame;

    fn try_from([roll1, roll2, fill]: [i32; ROLLS_PER_FRAME]) -> Result<Self, Self::Error> {
        Self::with_fill(roll1, roll2, fill)
    }
}

impl TryFrom<(i32, i32)> for Frame {
    type Error = InvalidFrame;

    fn try_from((roll1, roll2): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(roll1, roll2)
    }
}

/// Check a single roll slot against the rack size
fn pin_count(slot: usize, pins: i32) -> Result<u8, InvalidFrame> {
    if pins < 0 {
        return Err(InvalidFrame::NegativeRoll { slot, pins });
    }
    if pins > PINS as i32 {
        return Err(InvalidFrame::RollOutOfRange { slot, pins });
    }
    Ok(pins as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strike_constructor_matches_new() {
        assert_eq!(Frame::strike(), Frame::new(10, 0).unwrap());
        assert_eq!(Frame::strike().rolls(), [10, 0, 0]);
    }

    #[test]
    fn test_pin_count_bounds() {
        assert_eq!(pin_count(0, 0), Ok(0));
        assert_eq!(pin_count(1, 10), Ok(10));
        assert_eq!(
            pin_count(1, -3),
            Err(InvalidFrame::NegativeRoll { slot: 1, pins: -3 })
        );
        assert_eq!(
            pin_count(2, 11),
            Err(InvalidFrame::RollOutOfRange { slot: 2, pins: 11 })
        );
    }

    #[test]
    fn test_tenth_frame_strike_accepts_second_rack() {
        let frame = Frame::with_fill(10, 4, 10).unwrap();
        assert_eq!(frame.rolls(), [10, 4, 10]);
        assert_eq!(frame.pins(), 24);
        assert!(frame.is_strike());
    }

    #[test]
    fn test_fill_roll_lifts_the_two_throw_cap() {
        let frame = Frame::with_fill(5, 10, 3).unwrap();
        assert_eq!(frame.rolls(), [5, 10, 3]);
        assert_eq!(frame.first_two(), 15);

        let frame = Frame::with_fill(9, 2, 5).unwrap();
        assert_eq!(frame.pins(), 16);

        // The cap still applies without a fill roll.
        assert_eq!(
            Frame::new(9, 2),
            Err(InvalidFrame::TooManyPins { roll1: 9, roll2: 2 })
        );
    }

    #[test]
    fn test_unearned_fill_is_left_to_the_game() {
        let frame = Frame::with_fill(2, 3, 9).unwrap();
        assert!(frame.has_fill_roll());
        assert!(frame.is_open_frame());
    }

    #[test]
    fn test_try_from_raw_rolls() {
        assert_eq!(Frame::try_from([7, 3, 5]), Frame::with_fill(7, 3, 5));
        assert_eq!(Frame::try_from((4, 3)), Frame::new(4, 3));
        assert!(Frame::try_from((9, 2)).is_err());
    }
}
