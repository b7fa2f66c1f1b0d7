//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; logic lives in
//! systems. Every pooled instance carries `Pooled` — an explicit
//! category tag plus the active flag — so the pool never has to probe
//! which behavior component is attached.

use serde::{Deserialize, Serialize};

use crate::config::{MotionProfile, ShootPattern};
use crate::enums::{BonusKind, EntityKind, Owner};
use crate::types::Vec2;

/// Pool bookkeeping attached to every pooled instance.
///
/// Invariant: an instance is either in the pool (`active == false`,
/// handle queued) or active with exactly one logical owner — never both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pooled {
    pub kind: EntityKind,
    pub active: bool,
}

/// World position. Newtype so hecs can tell it apart from other DVec2s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Per-projectile motion state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: Owner,
    /// Normalized travel direction.
    pub direction: Vec2,
    /// Heading in radians. The lateral-offset curve is applied along
    /// this rotation's local +X so rotated projectiles curve in their
    /// own frame, not world space.
    pub rotation: f64,
    /// Sim seconds at activation; curves are sampled at now − spawn.
    pub spawn_secs: f64,
}

/// The projectile's authored motion curves, cloned from its kind's
/// profile at pool construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MotionCurves(pub MotionProfile);

/// Enemy combat state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub score: u32,
    pub max_health: i32,
    pub health: i32,
    /// Approach speed toward `target`.
    pub speed: f64,
    /// Engagement point assigned by the wave director.
    pub target: Vec2,
    /// Set once the enemy reaches its target; firing starts then.
    pub arrived: bool,
    /// Guard so the death hook runs at most once per activation.
    pub death_processed: bool,
}

/// Per-shooter attack engine state (one per enemy instance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShooterState {
    /// Authored pattern roster for this archetype.
    pub patterns: Vec<ShootPattern>,
    pub pattern_index: usize,
    /// Shot waves fired under the current pattern.
    pub wave_index: u32,
    /// Gate before the next wave of shots (sim seconds).
    pub wait_until: f64,
    /// Gate before the next individual shot wave (sim seconds).
    pub fire_at: f64,
    pub firing: bool,
}

impl ShooterState {
    pub fn new(patterns: Vec<ShootPattern>) -> Self {
        Self {
            patterns,
            pattern_index: 0,
            wave_index: 0,
            wait_until: 0.0,
            fire_at: 0.0,
            firing: false,
        }
    }

    pub fn current(&self) -> &ShootPattern {
        &self.patterns[self.pattern_index]
    }
}

/// Bonus pickup tag, assigned at activation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BonusPickup {
    pub kind: BonusKind,
}

/// Explosion effect lifetime.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Explosion {
    /// Sim seconds at which the effect returns to the pool.
    pub release_at: f64,
}

/// Back-reference from a boss to its dedicated beam hazard entity.
#[derive(Debug, Clone, Copy)]
pub struct BeamEmitter {
    pub beam: hecs::Entity,
}

/// Beam hazard strip extending downward from its owner.
#[derive(Debug, Clone, Copy)]
pub struct BeamHazard {
    pub owner: hecs::Entity,
    pub active: bool,
    /// Deactivation deadline (sim seconds), valid while active.
    pub off_at: f64,
    pub half_width: f64,
}
