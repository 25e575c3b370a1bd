//! Bowling score (workspace facade crate).
//!
//! This package exposes `bowling_score::{core,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use bowling_score_core as core;
pub use bowling_score_types as types;

pub use bowling_score_core::{Frame, Game, GameError, InvalidFrame};
