//! Core types module - shared rule constants and frame classification
//!
//! This module defines the fundamental types used throughout the score engine.
//! Everything here is plain data, usable by the rule engine, a renderer, or any
//! caller that feeds rolls into a game.
//!
//! # Lane Rules
//!
//! Ten-pin bowling constants:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PINS` | 10 | Pins standing at the start of each rack |
//! | `MAX_FRAMES` | 10 | Frames in one game |
//! | `FINAL_FRAME_INDEX` | 9 | Zero-based index of the tenth frame |
//! | `ROLLS_PER_FRAME` | 3 | Roll slots stored per frame (two throws plus fill) |
//! | `PERFECT_SCORE` | 300 | Score of twelve consecutive strikes |
//!
//! # Roll Slots
//!
//! Each frame stores three slots, in throw order:
//!
//! - `ROLL1_SLOT` (0): first throw
//! - `ROLL2_SLOT` (1): second throw, or the first bonus throw after a tenth-frame strike
//! - `FILL_SLOT` (2): fill roll, only used in the tenth frame
//!
//! # Examples
//!
//! ```
//! use bowling_score_types::{FrameKind, MAX_FRAMES, PERFECT_SCORE, PINS};
//!
//! // Parse from string (case-insensitive)
//! let kind = FrameKind::from_str("Strike").unwrap();
//! assert_eq!(kind, FrameKind::Strike);
//! assert_eq!(kind.as_str(), "strike");
//!
//! // Rules
//! assert_eq!(PINS, 10);
//! assert_eq!(MAX_FRAMES, 10);
//! assert_eq!(PERFECT_SCORE, 300);
//! ```

use serde::{Deserialize, Serialize};

/// Pins standing at the start of each rack (10)
pub const PINS: u8 = 10;

/// Frames in one game (10)
pub const MAX_FRAMES: usize = 10;

/// Zero-based index of the tenth frame, the only one allowed a fill roll
pub const FINAL_FRAME_INDEX: usize = MAX_FRAMES - 1;

/// Roll slots stored per frame
pub const ROLLS_PER_FRAME: usize = 3;

/// Slot of the first throw
pub const ROLL1_SLOT: usize = 0;

/// Slot of the second throw
pub const ROLL2_SLOT: usize = 1;

/// Slot of the tenth-frame fill roll
pub const FILL_SLOT: usize = 2;

/// Score of a perfect game (twelve strikes)
pub const PERFECT_SCORE: u32 = 300;


/// Classification of a frame
///
/// - **Strike**: all ten pins on the first throw
/// - **Spare**: all ten pins across the first two throws, not a strike
/// - **Open**: pins left standing after two throws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Strike,
    Spare,
    Open,
}

impl FrameKind {
    /// Parse frame kind from string (case-insensitive)
    ///
    /// Also accepts the score sheet marks `x` (strike) and `/` (spare).
    ///
    /// # Examples
    ///
    /// ```
    /// use bowling_score_types::FrameKind;
    ///
    /// assert_eq!(FrameKind::from_str("strike"), Some(FrameKind::Strike));
    /// assert_eq!(FrameKind::from_str("/"), Some(FrameKind::Spare));
    /// assert_eq!(FrameKind::from_str("OPEN"), Some(FrameKind::Open));
    /// assert_eq!(FrameKind::from_str("turkey"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strike" | "x" => Some(FrameKind::Strike),
            "spare" | "/" => Some(FrameKind::Spare),
            "open" | "-" => Some(FrameKind::Open),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Strike => "strike",
            FrameKind::Spare => "spare",
            FrameKind::Open => "open",
        }
    }

    /// Whether all ten pins fell within the first two throws
    pub fn clears_rack(&self) -> bool {
        !matches!(self, FrameKind::Open)
    }
}
