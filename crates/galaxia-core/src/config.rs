//! Authored game configuration.
//!
//! Everything here is externally authored data: pool sizing, spawn
//! areas, per-wave quota curves, shoot patterns, and projectile motion
//! profiles. `GameConfig::default_game()` is the shipped tuning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::enums::{EntityKind, PatternKind};
use crate::types::{Rect, Vec2};

/// Fatal configuration error detected at startup. The engine refuses
/// to run rather than operate on a partially initialized pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The pool's kind list and instance-count list differ in length.
    PoolListMismatch { kinds: usize, counts: usize },
    /// A pooled projectile kind has no motion profile.
    MissingMotionProfile(EntityKind),
    /// A pooled enemy kind has no shoot configuration.
    MissingShootConfig(EntityKind),
    /// A pooled enemy kind has no combat stats.
    MissingEnemyStats(EntityKind),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PoolListMismatch { kinds, counts } => write!(
                f,
                "pool kind list ({kinds}) and instance count list ({counts}) differ in length"
            ),
            ConfigError::MissingMotionProfile(kind) => {
                write!(f, "no motion profile configured for {kind:?}")
            }
            ConfigError::MissingShootConfig(kind) => {
                write!(f, "no shoot configuration for enemy kind {kind:?}")
            }
            ConfigError::MissingEnemyStats(kind) => {
                write!(f, "no combat stats for enemy kind {kind:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Pool sizing: parallel lists of kind and pre-warmed instance count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolConfig {
    pub kinds: Vec<EntityKind>,
    pub counts: Vec<usize>,
}

impl PoolConfig {
    /// Validate the parallel lists. Length mismatch is fatal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.kinds.len() != self.counts.len() {
            return Err(ConfigError::PoolListMismatch {
                kinds: self.kinds.len(),
                counts: self.counts.len(),
            });
        }
        Ok(())
    }

    /// Iterate (kind, count) pairs. Call `validate` first.
    pub fn entries(&self) -> impl Iterator<Item = (EntityKind, usize)> + '_ {
        self.kinds.iter().copied().zip(self.counts.iter().copied())
    }
}

/// One record of an enemy's pattern roster: which shape, which
/// projectile, and the timing/batch parameters. Immutable, authored
/// per shooter archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShootPattern {
    pub pattern: PatternKind,
    /// Projectile kind drawn from the pool for this pattern.
    pub projectile: EntityKind,
    /// Wait before the next wave of shots (also the beam's on-duration).
    pub wait_secs: f64,
    /// Delay between individual shot waves within the pattern.
    pub fire_interval_secs: f64,
    /// Number of shot waves before re-drawing a pattern.
    pub wave_count: u32,
    /// Projectiles emitted per shot wave.
    pub projectiles_per_wave: u32,
}

/// Projectile motion tuning: lateral-offset and speed over flight time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionProfile {
    pub lateral: Curve,
    pub speed: Curve,
}

/// Per-enemy-kind stats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: i32,
    pub score: u32,
    /// Approach speed toward the engagement point.
    pub speed: f64,
}

/// Wave director tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorConfig {
    /// Area enemies appear in (above the visible field).
    pub spawn_rect: Rect,
    /// Area enemies fly to before opening fire.
    pub engagement_rect: Rect,
    /// Fixed engagement point for the boss.
    pub boss_anchor: Vec2,
    /// Inter-wave delay (seconds).
    pub time_between_waves_secs: f64,
    /// Concurrency cap on one spawn batch.
    pub max_batch: u32,
    /// Per-kind wave-number → quota curves (ceil-rounded at runtime).
    /// Vec keeps draw bookkeeping deterministic.
    pub quota_curves: Vec<(EntityKind, Curve)>,
}

/// Complete authored configuration for a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub pool: PoolConfig,
    pub director: DirectorConfig,
    /// The rectangular play-field; leaving it on any axis despawns a
    /// projectile silently.
    pub bounds: Rect,
    pub enemy_stats: Vec<(EntityKind, EnemyStats)>,
    pub shoot_configs: Vec<(EntityKind, Vec<ShootPattern>)>,
    pub motion_profiles: Vec<(EntityKind, MotionProfile)>,
}

impl GameConfig {
    pub fn enemy_stats(&self, kind: EntityKind) -> Option<&EnemyStats> {
        self.enemy_stats.iter().find(|(k, _)| *k == kind).map(|(_, s)| s)
    }

    pub fn shoot_config(&self, kind: EntityKind) -> Option<&[ShootPattern]> {
        self.shoot_configs
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_slice())
    }

    pub fn motion_profile(&self, kind: EntityKind) -> Option<&MotionProfile> {
        self.motion_profiles
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, m)| m)
    }

    /// The shipped default tuning.
    pub fn default_game() -> Self {
        let pool = PoolConfig {
            kinds: vec![
                EntityKind::Fighter,
                EntityKind::Bomber,
                EntityKind::Boss,
                EntityKind::Ball,
                EntityKind::CurveBall,
                EntityKind::Explosion,
                EntityKind::Bonus,
            ],
            counts: vec![12, 8, 2, 140, 60, 12, 8],
        };

        let director = DirectorConfig {
            spawn_rect: Rect::new(Vec2::new(-8.0, 10.5), Vec2::new(8.0, 9.0)),
            engagement_rect: Rect::new(Vec2::new(-8.0, 8.5), Vec2::new(8.0, 2.0)),
            boss_anchor: Vec2::new(-2.5, 3.8),
            time_between_waves_secs: 5.0,
            max_batch: 10,
            quota_curves: vec![
                (
                    EntityKind::Fighter,
                    Curve::from_keys(&[(1.0, 3.0), (5.0, 6.0), (12.0, 12.0)]),
                ),
                (
                    EntityKind::Bomber,
                    Curve::from_keys(&[(1.0, 0.0), (2.0, 0.0), (3.0, 2.0), (12.0, 8.0)]),
                ),
                (
                    EntityKind::Boss,
                    Curve::from_keys(&[(1.0, 0.0), (5.0, 0.0), (6.0, 1.0), (12.0, 2.0)]),
                ),
            ],
        };

        let enemy_stats = vec![
            (
                EntityKind::Fighter,
                EnemyStats {
                    health: 2,
                    score: 100,
                    speed: 3.0,
                },
            ),
            (
                EntityKind::Bomber,
                EnemyStats {
                    health: 5,
                    score: 250,
                    speed: 2.0,
                },
            ),
            (
                EntityKind::Boss,
                EnemyStats {
                    health: 40,
                    score: 2000,
                    speed: 1.5,
                },
            ),
        ];

        let shoot_configs = vec![
            (
                EntityKind::Fighter,
                vec![ShootPattern {
                    pattern: PatternKind::Aimed,
                    projectile: EntityKind::Ball,
                    wait_secs: 2.0,
                    fire_interval_secs: 0.4,
                    wave_count: 2,
                    projectiles_per_wave: 1,
                }],
            ),
            (
                EntityKind::Bomber,
                vec![
                    ShootPattern {
                        pattern: PatternKind::Radial,
                        projectile: EntityKind::Ball,
                        wait_secs: 2.5,
                        fire_interval_secs: 0.8,
                        wave_count: 2,
                        projectiles_per_wave: 12,
                    },
                    ShootPattern {
                        pattern: PatternKind::Lane,
                        projectile: EntityKind::CurveBall,
                        wait_secs: 2.0,
                        fire_interval_secs: 1.0,
                        wave_count: 1,
                        projectiles_per_wave: 6,
                    },
                ],
            ),
            (
                EntityKind::Boss,
                vec![
                    ShootPattern {
                        pattern: PatternKind::Radial,
                        projectile: EntityKind::CurveBall,
                        wait_secs: 3.0,
                        fire_interval_secs: 0.6,
                        wave_count: 3,
                        projectiles_per_wave: 24,
                    },
                    ShootPattern {
                        pattern: PatternKind::Aimed,
                        projectile: EntityKind::Ball,
                        wait_secs: 2.0,
                        fire_interval_secs: 0.25,
                        wave_count: 6,
                        projectiles_per_wave: 3,
                    },
                    ShootPattern {
                        pattern: PatternKind::Lane,
                        projectile: EntityKind::CurveBall,
                        wait_secs: 2.5,
                        fire_interval_secs: 1.2,
                        wave_count: 2,
                        projectiles_per_wave: 8,
                    },
                    ShootPattern {
                        pattern: PatternKind::Beam,
                        projectile: EntityKind::Ball,
                        wait_secs: 3.0,
                        fire_interval_secs: 1.0,
                        wave_count: 1,
                        projectiles_per_wave: 0,
                    },
                ],
            ),
        ];

        let motion_profiles = vec![
            (
                EntityKind::Ball,
                MotionProfile {
                    lateral: Curve::constant(0.0),
                    speed: Curve::constant(3.5),
                },
            ),
            (
                EntityKind::CurveBall,
                MotionProfile {
                    // Zig-zag weave in the projectile's own frame.
                    lateral: Curve::from_keys(&[
                        (0.0, 0.0),
                        (0.5, 1.2),
                        (1.0, 0.0),
                        (1.5, -1.2),
                        (2.0, 0.0),
                    ]),
                    speed: Curve::from_keys(&[(0.0, 2.0), (1.0, 3.2)]),
                },
            ),
            (
                EntityKind::Bonus,
                MotionProfile {
                    lateral: Curve::constant(0.0),
                    speed: Curve::constant(1.5),
                },
            ),
        ];

        Self {
            pool,
            director,
            bounds: Rect::new(Vec2::new(-9.5, 11.5), Vec2::new(9.5, -11.5)),
            enemy_stats,
            shoot_configs,
            motion_profiles,
        }
    }
}
