//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Pooled entity category. Assigned once at pool construction and
/// immutable for the lifetime of the instance — the pool key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Basic enemy: flies to a point, fires aimed shots.
    #[default]
    Fighter,
    /// Heavier enemy with radial and lane patterns.
    Bomber,
    /// Boss enemy: fixed engagement point, full pattern roster.
    Boss,
    /// Straight-flying projectile.
    Ball,
    /// Projectile with a lateral-offset curve (weaving trajectory).
    CurveBall,
    /// Short-lived explosion visual at a death position.
    Explosion,
    /// Collectible bonus pickup, drifts toward the player side.
    Bonus,
}

impl EntityKind {
    /// Whether this kind is an enemy archetype (drawn by the wave director).
    pub fn is_enemy(self) -> bool {
        matches!(self, EntityKind::Fighter | EntityKind::Bomber | EntityKind::Boss)
    }

    /// Whether this kind is a projectile (owned by the motion model).
    pub fn is_projectile(self) -> bool {
        matches!(self, EntityKind::Ball | EntityKind::CurveBall)
    }
}

/// Projectile emission shape for enemy shooters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    /// N projectiles evenly spaced by 360/N degrees around the shooter.
    Radial,
    /// N projectiles each aimed at the player's current position.
    Aimed,
    /// N+1 projectiles spread across a horizontal band, moving straight down.
    Lane,
    /// Timed on/off toggle of the shooter's beam hazard (no projectiles).
    Beam,
}

/// Wave director lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectorPhase {
    /// No wave active, no quotas remaining.
    #[default]
    Idle,
    /// Inter-wave delay timer running.
    WaitingBetweenWaves,
    /// Quotas evaluated from curves, eligible set populated.
    QuotaComputed,
    /// Draining quotas in capped batches.
    BatchSpawning,
}

/// Bonus pickup effect, assigned as a tag when the pickup is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusKind {
    /// +1 player life.
    ExtraLife,
    /// +1 projectile per player shot wave.
    ExtraProjectile,
    /// Switch the player to the front pattern (or speed it up).
    FrontPattern,
    /// Switch the player to the fan pattern (or speed it up).
    FanPattern,
}

/// All bonus kinds in draw order (index 0 = life, 1 = extra projectile).
pub const BONUS_KINDS: [BonusKind; 4] = [
    BonusKind::ExtraLife,
    BonusKind::ExtraProjectile,
    BonusKind::FrontPattern,
    BonusKind::FanPattern,
];

/// The player's own emission shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerPattern {
    /// Parallel up-shots across a narrow spread.
    #[default]
    Front,
    /// Shots fanned over the forward semicircle.
    Fan,
}

/// Who fired a projectile — decides what it can collide with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for StartGame.
    #[default]
    Ready,
    Active,
    Paused,
    /// Player life reached zero; survival time recorded.
    GameOver,
}
