//! The entity pool: a fixed-capacity reuse registry keyed by kind.
//!
//! Every instance is created exactly once at startup with its full
//! component bundle and is toggled active/inactive for the lifetime of
//! the process — never despawned until teardown. Acquire failure is
//! "spawn skipped", not an error; callers reconcile their own counters.

use std::collections::{HashMap, VecDeque};

use hecs::{Entity, World};
use tracing::debug;

use galaxia_core::components::*;
use galaxia_core::config::{ConfigError, GameConfig};
use galaxia_core::constants::*;
use galaxia_core::enums::{BonusKind, EntityKind, Owner};
use galaxia_core::types::Vec2;

/// Fixed-capacity reuse registry. The only component that creates
/// entity instances.
pub struct EntityPool {
    free: HashMap<EntityKind, VecDeque<Entity>>,
    totals: HashMap<EntityKind, usize>,
}

impl EntityPool {
    /// Pre-warm the pool from the authored configuration.
    ///
    /// Validates the parallel kind/count lists and that every pooled
    /// kind has the tuning it needs; any mismatch is fatal here, before
    /// a single tick runs.
    pub fn build(world: &mut World, config: &GameConfig) -> Result<Self, ConfigError> {
        config.pool.validate()?;

        let mut free: HashMap<EntityKind, VecDeque<Entity>> = HashMap::new();
        let mut totals: HashMap<EntityKind, usize> = HashMap::new();

        for (kind, count) in config.pool.entries() {
            let queue = free.entry(kind).or_default();
            for _ in 0..count {
                let entity = spawn_instance(world, config, kind)?;
                queue.push_back(entity);
            }
            *totals.entry(kind).or_insert(0) += count;
        }

        Ok(Self { free, totals })
    }

    /// Take an inactive instance of `kind`, mark it active, position it,
    /// and reset its reactivation state. Returns `None` when the kind's
    /// queue is empty — the caller skips the spawn.
    pub fn acquire(
        &mut self,
        world: &mut World,
        kind: EntityKind,
        position: Vec2,
        now: f64,
    ) -> Option<Entity> {
        let entity = self.free.get_mut(&kind)?.pop_front()?;

        if let Ok(mut pooled) = world.get::<&mut Pooled>(entity) {
            pooled.active = true;
        }
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.0 = position;
        }
        reset_on_acquire(world, entity, kind, now);

        Some(entity)
    }

    /// Acquire a bonus pickup and assign its effect tag.
    pub fn acquire_bonus(
        &mut self,
        world: &mut World,
        position: Vec2,
        bonus: BonusKind,
        now: f64,
    ) -> Option<Entity> {
        let entity = self.acquire(world, EntityKind::Bonus, position, now)?;
        if let Ok(mut pickup) = world.get::<&mut BonusPickup>(entity) {
            pickup.kind = bonus;
        }
        Some(entity)
    }

    /// Return an instance to its queue. The active flag is the
    /// double-release guard: releasing an already-inactive instance is
    /// a no-op and returns false.
    pub fn release(&mut self, world: &mut World, entity: Entity) -> bool {
        let kind = {
            let mut pooled = match world.get::<&mut Pooled>(entity) {
                Ok(p) => p,
                Err(_) => return false,
            };
            if !pooled.active {
                debug!(?entity, "release of inactive instance ignored");
                return false;
            }
            pooled.active = false;
            pooled.kind
        };

        if kind.is_enemy() {
            // Reactivation path: a released shooter never keeps firing.
            if let Ok(mut shooter) = world.get::<&mut ShooterState>(entity) {
                shooter.firing = false;
            }
            let beam = world.get::<&BeamEmitter>(entity).map(|e| e.beam).ok();
            if let Some(beam) = beam {
                if let Ok(mut hazard) = world.get::<&mut BeamHazard>(beam) {
                    hazard.active = false;
                }
            }
        }

        self.free.entry(kind).or_default().push_back(entity);
        true
    }

    /// Total pre-warmed instances of a kind.
    pub fn total(&self, kind: EntityKind) -> usize {
        self.totals.get(&kind).copied().unwrap_or(0)
    }

    /// Instances currently queued (inactive).
    pub fn free(&self, kind: EntityKind) -> usize {
        self.free.get(&kind).map(VecDeque::len).unwrap_or(0)
    }

    /// Instances currently active: total − queued.
    pub fn active(&self, kind: EntityKind) -> usize {
        self.total(kind) - self.free(kind)
    }
}

/// Spawn one inactive instance with the component bundle its kind needs.
fn spawn_instance(
    world: &mut World,
    config: &GameConfig,
    kind: EntityKind,
) -> Result<Entity, ConfigError> {
    let pooled = Pooled { kind, active: false };
    let position = Position(Vec2::ZERO);

    let entity = if kind.is_enemy() {
        let stats = config
            .enemy_stats(kind)
            .copied()
            .ok_or(ConfigError::MissingEnemyStats(kind))?;
        let patterns = config
            .shoot_config(kind)
            .ok_or(ConfigError::MissingShootConfig(kind))?
            .to_vec();

        let enemy = Enemy {
            score: stats.score,
            max_health: stats.health,
            health: stats.health,
            speed: stats.speed,
            target: Vec2::ZERO,
            arrived: false,
            death_processed: false,
        };

        let entity = world.spawn((pooled, position, enemy, ShooterState::new(patterns)));

        // Bosses carry a dedicated beam hazard entity, off by default.
        if kind == EntityKind::Boss {
            let beam = world.spawn((
                BeamHazard {
                    owner: entity,
                    active: false,
                    off_at: 0.0,
                    half_width: BEAM_HALF_WIDTH,
                },
                Position(Vec2::ZERO),
            ));
            let _ = world.insert_one(entity, BeamEmitter { beam });
        }
        entity
    } else if kind.is_projectile() || kind == EntityKind::Bonus {
        let profile = config
            .motion_profile(kind)
            .cloned()
            .ok_or(ConfigError::MissingMotionProfile(kind))?;
        let projectile = Projectile {
            owner: Owner::Enemy,
            direction: Vec2::NEG_Y,
            rotation: 0.0,
            spawn_secs: 0.0,
        };
        if kind == EntityKind::Bonus {
            world.spawn((
                pooled,
                position,
                projectile,
                MotionCurves(profile),
                BonusPickup { kind: BonusKind::ExtraLife },
            ))
        } else {
            world.spawn((pooled, position, projectile, MotionCurves(profile)))
        }
    } else {
        world.spawn((pooled, position, Explosion::default()))
    };

    Ok(entity)
}

/// Reset the per-kind reactivation state, the way a pooled object
/// re-arms itself when toggled back on.
fn reset_on_acquire(world: &mut World, entity: Entity, kind: EntityKind, now: f64) {
    if kind.is_enemy() {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            enemy.health = enemy.max_health;
            enemy.arrived = false;
            enemy.death_processed = false;
        }
        if let Ok(mut shooter) = world.get::<&mut ShooterState>(entity) {
            shooter.wave_index = 0;
            shooter.firing = false;
            shooter.wait_until = 0.0;
            shooter.fire_at = 0.0;
        }
    } else if kind.is_projectile() || kind == EntityKind::Bonus {
        if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
            projectile.spawn_secs = now;
            projectile.rotation = 0.0;
            projectile.direction = Vec2::NEG_Y;
            projectile.owner = Owner::Enemy;
        }
    } else if let Ok(mut explosion) = world.get::<&mut Explosion>(entity) {
        explosion.release_at = now + EXPLOSION_LIFETIME_SECS;
    }
}
