use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::scoring::FrameScore;
use crate::types::ROLLS_PER_FRAME;

/// Plain-data view of a game, for renderers and JSON consumers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub frames: Vec<[u8; ROLLS_PER_FRAME]>,
    pub sheet: Vec<FrameScore>,
    pub total_score: u32,
    pub complete: bool,
    pub perfect_game: bool,
    pub gutter_game: bool,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            frames: game.frames().iter().map(|f| f.rolls()).collect(),
            sheet: game.frame_scores().into_iter().collect(),
            total_score: game.total_score(),
            complete: game.is_complete(),
            perfect_game: game.is_perfect_game(),
            gutter_game: game.is_gutter_game(),
        }
    }
}

impl GameSnapshot {
    /// Running total after the last frame that no longer waits on a bonus
    pub fn settled_total(&self) -> u32 {
        self.sheet
            .iter()
            .take_while(|s| !s.bonus_pending)
            .last()
            .map_or(0, |s| s.running_total)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::from(&Game::new())
    }
}
