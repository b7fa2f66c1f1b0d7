//! Events emitted by the simulation for audio/UI feedback and for
//! external collaborators (scene transition listens for PlayerDied).

use serde::{Deserialize, Serialize};

use crate::enums::{BonusKind, EntityKind};

/// One-shot events drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave's quotas were computed and spawning begins.
    WaveStarted { wave: u32 },
    /// An enemy died; score already awarded.
    EnemyDestroyed { kind: EntityKind, score: u32 },
    /// A bonus pickup dropped at an enemy death position.
    BonusDropped { kind: BonusKind },
    /// The player collected a bonus.
    BonusCollected { kind: BonusKind },
    /// The player took a hit.
    PlayerHit { life_remaining: i32 },
    /// Life reached zero — the scene-transition signal.
    PlayerDied { survival_secs: f64 },
    /// A boss beam switched on for the given duration.
    BeamOn { duration_secs: f64 },
    BeamOff,
}
