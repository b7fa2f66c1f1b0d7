//! Commands sent from the outside (input layer, frontend) to the
//! simulation. Queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// All externally triggered actions the core accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Start a fresh game: reset player record, wave state, pool.
    StartGame,
    Pause,
    Resume,
    /// Toggle the player's fire. Enabling is ignored while invincible.
    SetFiring { firing: bool },
    /// Move the player ship (already input-mapped; clamped to bounds).
    MovePlayer { position: Vec2 },
}
