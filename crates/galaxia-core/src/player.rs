//! Player-owned state: the shared record and the ship's combat state.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::PlayerPattern;
use crate::types::Vec2;

/// The player's persistent record: score, lives, wave, survival time.
///
/// Owned by the engine and passed by reference to the components that
/// mutate it (wave director, death hook, collision handler) — all
/// writes go through these entry points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub score: u32,
    pub life: i32,
    pub wave: u32,
    /// Survival time in seconds, set once at death.
    pub survival_secs: f64,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            score: 0,
            life: PLAYER_START_LIFE,
            wave: 0,
            survival_secs: 0.0,
        }
    }
}

impl PlayerRecord {
    pub fn add_score(&mut self, amount: u32) {
        self.score += amount;
    }

    pub fn add_life(&mut self) {
        self.life += 1;
    }

    /// Take one hit; returns the remaining life.
    pub fn take_life(&mut self) -> i32 {
        self.life -= 1;
        self.life
    }

    /// Advance to the next wave; returns the new wave number.
    pub fn next_wave(&mut self) -> u32 {
        self.wave += 1;
        self.wave
    }

    /// Record the survival time. Only the first call sticks.
    pub fn mark_death(&mut self, elapsed_secs: f64) {
        if self.survival_secs == 0.0 {
            self.survival_secs = elapsed_secs;
        }
    }
}

/// The player ship's position and attack-engine state.
///
/// Movement and fire input arrive as commands (input mapping is an
/// external collaborator); bonuses mutate the weapon fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip {
    pub position: Vec2,
    pub firing: bool,
    /// Gate before the next shot wave (sim seconds).
    pub fire_at: f64,
    pub pattern: PlayerPattern,
    /// Shots per wave; grown by the extra-projectile bonus.
    pub projectiles_per_wave: u32,
    /// Delay between shot waves; shortened by repeated pattern bonuses.
    pub fire_interval_secs: f64,
    /// Invincibility deadline (sim seconds).
    pub invincible_until: f64,
    /// Sim seconds of the last hit, drives the blink phase.
    pub hit_at: f64,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self {
            position: Vec2::new(0.0, -8.0),
            firing: false,
            fire_at: 0.0,
            pattern: PlayerPattern::default(),
            projectiles_per_wave: PLAYER_BASE_PROJECTILES,
            fire_interval_secs: PLAYER_BASE_FIRE_INTERVAL,
            invincible_until: 0.0,
            hit_at: 0.0,
        }
    }
}

impl PlayerShip {
    pub fn is_invincible(&self, now: f64) -> bool {
        now < self.invincible_until
    }

    /// Drop all weapon bonuses (called when the player takes a hit).
    pub fn reset_weapon(&mut self) {
        self.projectiles_per_wave = PLAYER_BASE_PROJECTILES;
        self.fire_interval_secs = PLAYER_BASE_FIRE_INTERVAL;
    }

    /// Shorten the fire interval (repeated pattern bonus), floored.
    pub fn speed_up(&mut self) {
        self.fire_interval_secs =
            (self.fire_interval_secs * PLAYER_SPEED_BONUS_FACTOR).max(PLAYER_MIN_FIRE_INTERVAL);
    }

    /// Blink visibility while invincible (presentational only).
    pub fn blink_visible(&self, now: f64) -> bool {
        if !self.is_invincible(now) {
            return true;
        }
        let phase = ((now - self.hit_at) / BLINK_INTERVAL_SECS) as u64;
        phase % 2 == 0
    }
}
