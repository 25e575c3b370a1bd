//! Scoring module - strike and spare bonuses over a sequence of frames
//!
//! Scores are never stored. Every query walks the frames again, which at ten
//! frames per game is cheaper than keeping a cache consistent.
//!
//! Rules, for the frame at index `i`:
//! - Strike: own pins, plus the first two rolls of frame `i+1`, plus the first
//!   roll of frame `i+2` when frame `i+1` is also a strike.
//! - Spare: own pins, plus the first roll of frame `i+1`.
//! - Open: own pins.
//!
//! "Own pins" includes the fill roll, so the tenth frame carries its own bonus.
//! A lookup past the last frame contributes nothing.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::types::{FrameKind, FINAL_FRAME_INDEX, MAX_FRAMES};

/// One line of the score sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    /// Zero-based frame index
    pub index: usize,
    pub kind: FrameKind,
    /// Own pins plus any bonus credited so far
    pub points: u32,
    /// Total through this frame
    pub running_total: u32,
    /// A bonus depends on frames not yet added
    pub bonus_pending: bool,
}

/// Points credited to the frame at `index`
///
/// Returns 0 for an index past the end.
pub fn frame_points(frames: &[Frame], index: usize) -> u32 {
    let Some(frame) = frames.get(index) else {
        return 0;
    };

    let next = frames.get(index + 1);
    let own = frame.pins();

    match frame.kind() {
        FrameKind::Strike => {
            let mut bonus = next.map_or(0, Frame::first_two);
            if next.is_some_and(Frame::is_strike) {
                bonus += frames.get(index + 2).map_or(0, |f| f.first_roll() as u32);
            }
            own + bonus
        }
        FrameKind::Spare => own + next.map_or(0, |f| f.first_roll() as u32),
        FrameKind::Open => own,
    }
}

/// Whether the frame at `index` is still waiting on later frames for its bonus
///
/// The tenth frame never waits; its bonus throws are its own fill rolls.
pub fn bonus_pending(frames: &[Frame], index: usize) -> bool {
    let Some(frame) = frames.get(index) else {
        return false;
    };
    if index >= FINAL_FRAME_INDEX {
        return false;
    }

    match frame.kind() {
        FrameKind::Strike => match frames.get(index + 1) {
            None => true,
            // A tenth-frame strike supplies both bonus rolls itself.
            Some(next) => {
                next.is_strike() && index + 1 < FINAL_FRAME_INDEX && frames.get(index + 2).is_none()
            }
        },
        FrameKind::Spare => frames.get(index + 1).is_none(),
        FrameKind::Open => false,
    }
}

/// Build the running score sheet, one entry per frame
pub fn score_sheet(frames: &[Frame]) -> ArrayVec<FrameScore, MAX_FRAMES> {
    let mut sheet = ArrayVec::new();
    let mut running_total: u32 = 0;

    for (index, frame) in frames.iter().take(MAX_FRAMES).enumerate() {
        let points = frame_points(frames, index);
        running_total = running_total.saturating_add(points);
        sheet.push(FrameScore {
            index,
            kind: frame.kind(),
            points,
            running_total,
            bonus_pending: bonus_pending(frames, index),
        });
    }

    sheet
}

/// Total score across all frames
pub fn total_score(frames: &[Frame]) -> u32 {
    (0..frames.len()).fold(0u32, |total, index| {
        total.saturating_add(frame_points(frames, index))
    })
}
