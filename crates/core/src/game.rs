//! Game module - an ordered, append-only sequence of up to ten frames
//!
//! The game owns the checks a frame cannot make about itself: how many frames
//! have been bowled and whether a fill roll sits in the tenth frame after a
//! strike or spare. All scores are derived from the frames on each call.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::error::{FillRollViolation, GameError};
use crate::frame::Frame;
use crate::scoring::{self, FrameScore};
use crate::snapshot::GameSnapshot;
use crate::types::{FINAL_FRAME_INDEX, MAX_FRAMES, PERFECT_SCORE, PINS};

/// A single player's game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    frames: ArrayVec<Frame, MAX_FRAMES>,
}

impl Game {
    /// Create an empty game
    pub fn new() -> Self {
        Self {
            frames: ArrayVec::new(),
        }
    }

    /// Build a game by appending frames in order
    ///
    /// Stops at the first frame the game refuses.
    pub fn from_frames<I>(frames: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Frame>,
    {
        let mut game = Self::new();
        for frame in frames {
            game.add_frame(frame)?;
        }
        Ok(game)
    }

    /// Append the next frame
    ///
    /// Fails with [`GameError::TooManyFrames`] once ten frames are held, and
    /// with [`GameError::IllegalFillRoll`] when a fill roll appears outside the
    /// tenth frame or without a strike or spare. The count is checked first.
    /// A rejected frame leaves the game untouched.
    pub fn add_frame(&mut self, frame: Frame) -> Result<(), GameError> {
        let position = self.frames.len();

        if let Err(err) = self.check_frame(&frame) {
            debug!(position, rolls = ?frame.rolls(), error = %err, "frame rejected");
            return Err(err);
        }

        self.frames.push(frame);
        debug!(position, rolls = ?frame.rolls(), kind = frame.kind().as_str(), "frame added");
        trace!(total = self.total_score(), "running total");
        Ok(())
    }

    fn check_frame(&self, frame: &Frame) -> Result<(), GameError> {
        if self.frames.is_full() {
            return Err(GameError::TooManyFrames);
        }

        if frame.has_fill_roll() {
            let position = self.frames.len();
            if position != FINAL_FRAME_INDEX {
                return Err(FillRollViolation::NotFinalFrame {
                    frame_number: position + 1,
                }
                .into());
            }
            if frame.first_two() < PINS as u32 {
                return Err(FillRollViolation::NotEarned {
                    pins: frame.first_two() as u8,
                }
                .into());
            }
        }

        Ok(())
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All ten frames have been bowled
    pub fn is_complete(&self) -> bool {
        self.frames.is_full()
    }

    pub fn remaining_frames(&self) -> usize {
        self.frames.remaining_capacity()
    }

    /// Total score, recomputed from the frames
    pub fn total_score(&self) -> u32 {
        scoring::total_score(&self.frames)
    }

    /// Running score sheet, one entry per frame held
    pub fn frame_scores(&self) -> ArrayVec<FrameScore, MAX_FRAMES> {
        scoring::score_sheet(&self.frames)
    }

    /// Every frame is a strike and the score is 300
    pub fn is_perfect_game(&self) -> bool {
        self.frames.iter().all(Frame::is_strike) && self.total_score() == PERFECT_SCORE
    }

    /// No pins scored so far
    ///
    /// Holds for an empty game and for any all-zero prefix, not only for a
    /// finished game.
    pub fn is_gutter_game(&self) -> bool {
        self.total_score() == 0
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
