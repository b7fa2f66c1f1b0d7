//! Game state snapshot — the complete visible state handed to the
//! presentation layer each tick. The core never inspects visuals; it
//! only reports which entities are active and where.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{SimTime, Vec2};

/// Complete state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub director: DirectorView,
    /// Every active pooled entity.
    pub entities: Vec<EntityView>,
    /// Active beam hazards (not pooled).
    pub beams: Vec<BeamView>,
    pub events: Vec<GameEvent>,
}

/// Player status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub score: u32,
    pub life: i32,
    pub wave: u32,
    pub firing: bool,
    pub invincible: bool,
    /// Blink state while invincible; always true otherwise.
    pub visible: bool,
    pub pattern: PlayerPattern,
    pub projectiles_per_wave: u32,
}

/// Wave director status for display and tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorView {
    pub phase: DirectorPhase,
    pub active_enemies: u32,
    /// Remaining spawn quota per enemy kind.
    pub remaining: Vec<(EntityKind, u32)>,
    /// Kinds still eligible for the random draw.
    pub eligible: Vec<EntityKind>,
}

/// One active pooled entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub position: Vec2,
    /// Heading in radians for projectiles, 0.0 otherwise.
    pub rotation: f64,
    /// Bonus tag for pickups — sprite selection is driven by this.
    pub bonus: Option<BonusKind>,
}

/// One active beam hazard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamView {
    pub position: Vec2,
    pub half_width: f64,
}
