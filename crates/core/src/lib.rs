//! Core score engine - pure, deterministic, and testable
//!
//! This crate holds the rules of ten-pin bowling: which rolls make a valid
//! frame, where a fill roll may appear, and how strike and spare bonuses reach
//! into later frames. It has **no I/O**; a caller feeds frames in and reads
//! scores out.
//!
//! # Module Structure
//!
//! - [`frame`]: one frame's rolls, range validation and strike/spare/open classification
//! - [`game`]: up to ten frames, append-time checks, score queries
//! - [`scoring`]: bonus look-ahead and the running score sheet
//! - [`snapshot`]: serializable view of a game
//! - [`error`]: frame and game rejection reasons
//!
//! # Validation
//!
//! Validation happens in two phases:
//!
//! 1. [`Frame`] checks its own pin counts (each roll in `0..=10`, and the two
//!    throws against one rack at most 10 pins).
//! 2. [`Game::add_frame`] checks the frame in context (at most ten frames, fill
//!    roll only in the tenth frame and only after a strike or spare).
//!
//! # Example
//!
//! ```
//! use bowling_score_core::{Frame, Game};
//!
//! let mut game = Game::new();
//! game.add_frame(Frame::strike()).unwrap();
//! game.add_frame(Frame::new(5, 3).unwrap()).unwrap();
//! game.add_frame(Frame::new(6, 3).unwrap()).unwrap();
//!
//! assert_eq!(game.total_score(), 35);
//! assert!(!game.is_gutter_game());
//! ```

pub mod error;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use bowling_score_types as types;

// Re-export commonly used types for convenience
pub use error::{FillRollViolation, GameError, InvalidFrame};
pub use frame::Frame;
pub use game::Game;
pub use scoring::{score_sheet, total_score, FrameScore};
pub use snapshot::GameSnapshot;
