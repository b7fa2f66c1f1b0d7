//! Collision handling and the enemy death/reward hook.
//!
//! Circle-overlap checks between projectiles, enemies, the beam strip,
//! bonus pickups, and the player ship. The death hook is guarded by the
//! enemy's processed flag so it runs at most once per activation.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use galaxia_core::components::*;
use galaxia_core::constants::*;
use galaxia_core::enums::{BonusKind, EntityKind, GamePhase, Owner, PlayerPattern, BONUS_KINDS};
use galaxia_core::events::GameEvent;
use galaxia_core::player::{PlayerRecord, PlayerShip};
use galaxia_core::types::Vec2;

use crate::pool::EntityPool;
use crate::systems::director::WaveDirector;

/// Run all collision checks for one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    pool: &mut EntityPool,
    rng: &mut ChaCha8Rng,
    director: &mut WaveDirector,
    record: &mut PlayerRecord,
    ship: &mut PlayerShip,
    phase: &mut GamePhase,
    now: f64,
    events: &mut Vec<GameEvent>,
) {
    // Snapshot active projectiles and enemies up front; all mutation
    // happens after the query borrows end.
    let mut player_bullets: Vec<(Entity, Vec2)> = Vec::new();
    let mut enemy_bullets: Vec<(Entity, Vec2)> = Vec::new();
    let mut bonuses: Vec<(Entity, Vec2, BonusKind)> = Vec::new();
    {
        let mut query = world.query::<(&Pooled, &Position, &Projectile, Option<&BonusPickup>)>();
        for (entity, (pooled, pos, projectile, pickup)) in query.iter() {
            if !pooled.active {
                continue;
            }
            if pooled.kind == EntityKind::Bonus {
                if let Some(pickup) = pickup {
                    bonuses.push((entity, pos.0, pickup.kind));
                }
            } else if projectile.owner == Owner::Player {
                player_bullets.push((entity, pos.0));
            } else {
                enemy_bullets.push((entity, pos.0));
            }
        }
    }

    let enemies: Vec<(Entity, Vec2, EntityKind)> = {
        let mut query = world.query::<(&Pooled, &Position, &Enemy)>();
        query
            .iter()
            .filter(|(_, (pooled, _, _))| pooled.active)
            .map(|(entity, (pooled, pos, _))| (entity, pos.0, pooled.kind))
            .collect()
    };

    // Player bullets vs enemies: one hit consumes the bullet.
    let mut bullet_hits: Vec<(Entity, Entity)> = Vec::new();
    for &(bullet, bullet_pos) in &player_bullets {
        for &(enemy, enemy_pos, kind) in &enemies {
            let radius = enemy_radius(kind) + PROJECTILE_HIT_RADIUS;
            if bullet_pos.distance_squared(enemy_pos) <= radius * radius {
                bullet_hits.push((bullet, enemy));
                break;
            }
        }
    }
    for (bullet, enemy) in bullet_hits {
        pool.release(world, bullet);
        damage_enemy(world, pool, rng, director, record, ship, enemy, 1, now, events);
    }

    // Enemy body vs player: non-boss contact is an instant kill for the
    // enemy; the player takes a hit either way (invincibility permitting).
    for &(enemy, enemy_pos, kind) in &enemies {
        let radius = enemy_radius(kind) + PLAYER_HIT_RADIUS;
        if enemy_pos.distance_squared(ship.position) > radius * radius {
            continue;
        }
        if kind != EntityKind::Boss {
            kill_enemy(world, pool, rng, director, record, ship, enemy, now, events);
        }
        player_hit(record, ship, phase, now, events);
    }

    // Enemy bullets vs player.
    for &(bullet, bullet_pos) in &enemy_bullets {
        if ship.is_invincible(now) || *phase != GamePhase::Active {
            break;
        }
        let radius = PLAYER_HIT_RADIUS + PROJECTILE_HIT_RADIUS;
        if bullet_pos.distance_squared(ship.position) <= radius * radius {
            pool.release(world, bullet);
            player_hit(record, ship, phase, now, events);
        }
    }

    // Beam strip vs player: the hazard extends downward from its owner.
    let beam_strips: Vec<(Vec2, f64)> = {
        let mut query = world.query::<(&BeamHazard, &Position)>();
        query
            .iter()
            .filter(|(_, (hazard, _))| hazard.active)
            .map(|(_, (hazard, pos))| (pos.0, hazard.half_width))
            .collect()
    };
    for (beam_pos, half_width) in beam_strips {
        if (ship.position.x - beam_pos.x).abs() <= half_width + PLAYER_HIT_RADIUS
            && ship.position.y <= beam_pos.y
        {
            player_hit(record, ship, phase, now, events);
        }
    }

    // Bonus pickups vs player.
    for (pickup, pickup_pos, kind) in bonuses {
        let radius = BONUS_PICKUP_RADIUS + PLAYER_HIT_RADIUS;
        if pickup_pos.distance_squared(ship.position) <= radius * radius {
            pool.release(world, pickup);
            apply_bonus(kind, record, ship);
            events.push(GameEvent::BonusCollected { kind });
        }
    }
}

fn enemy_radius(kind: EntityKind) -> f64 {
    if kind == EntityKind::Boss {
        BOSS_HIT_RADIUS
    } else {
        ENEMY_HIT_RADIUS
    }
}

/// Apply damage to an enemy and run the death hook once health depletes.
#[allow(clippy::too_many_arguments)]
pub(crate) fn damage_enemy(
    world: &mut World,
    pool: &mut EntityPool,
    rng: &mut ChaCha8Rng,
    director: &mut WaveDirector,
    record: &mut PlayerRecord,
    ship: &mut PlayerShip,
    entity: Entity,
    amount: i32,
    now: f64,
    events: &mut Vec<GameEvent>,
) {
    let death_score = {
        let active = world.get::<&Pooled>(entity).map(|p| p.active).unwrap_or(false);
        if !active {
            return;
        }
        let Ok(mut enemy) = world.get::<&mut Enemy>(entity) else {
            return;
        };
        enemy.health -= amount;
        if enemy.health <= 0 && !enemy.death_processed {
            enemy.death_processed = true;
            Some(enemy.score)
        } else {
            None
        }
    };

    let Some(score) = death_score else { return };

    let kind = world.get::<&Pooled>(entity).map(|p| p.kind).unwrap_or_default();
    let death_pos = world.get::<&Position>(entity).map(|p| p.0).unwrap_or(Vec2::ZERO);

    director.notify_death();
    pool.release(world, entity);
    pool.acquire(world, EntityKind::Explosion, death_pos, now);
    record.add_score(score);
    debug!(?kind, score, "enemy destroyed");
    events.push(GameEvent::EnemyDestroyed { kind, score });

    if let Some(bonus) = roll_bonus(rng, record.life, ship.projectiles_per_wave) {
        if pool.acquire_bonus(world, death_pos, bonus, now).is_some() {
            events.push(GameEvent::BonusDropped { kind: bonus });
        }
    }
}

/// Force an enemy's health to zero (player contact) and run the hook.
#[allow(clippy::too_many_arguments)]
pub(crate) fn kill_enemy(
    world: &mut World,
    pool: &mut EntityPool,
    rng: &mut ChaCha8Rng,
    director: &mut WaveDirector,
    record: &mut PlayerRecord,
    ship: &mut PlayerShip,
    entity: Entity,
    now: f64,
    events: &mut Vec<GameEvent>,
) {
    if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
        enemy.health = enemy.health.min(0);
    }
    damage_enemy(world, pool, rng, director, record, ship, entity, 0, now, events);
}

/// One player hit: lose a life, drop weapon bonuses, start the
/// invincibility window. Life at zero records the survival time and
/// flips the phase — the PlayerDied event is the scene-transition signal.
pub(crate) fn player_hit(
    record: &mut PlayerRecord,
    ship: &mut PlayerShip,
    phase: &mut GamePhase,
    now: f64,
    events: &mut Vec<GameEvent>,
) {
    if ship.is_invincible(now) || *phase != GamePhase::Active {
        return;
    }
    let life = record.take_life();
    ship.reset_weapon();
    ship.firing = false;
    ship.invincible_until = now + INVINCIBLE_DURATION_SECS;
    ship.hit_at = now;
    events.push(GameEvent::PlayerHit { life_remaining: life });

    if life <= 0 {
        record.mark_death(now);
        *phase = GamePhase::GameOver;
        events.push(GameEvent::PlayerDied {
            survival_secs: record.survival_secs,
        });
    }
}

/// 10% drop chance, then a uniform kind draw, subject to suppression.
/// A suppressed draw yields nothing — it is not re-rolled.
pub(crate) fn roll_bonus(
    rng: &mut ChaCha8Rng,
    life: i32,
    projectiles_per_wave: u32,
) -> Option<BonusKind> {
    let roll = rng.gen_range(0..BONUS_ROLL_BOUND);
    if roll >= BONUS_DROP_CHANCE {
        return None;
    }
    let index = rng.gen_range(0..BONUS_KINDS.len());
    select_bonus(roll, index, life, projectiles_per_wave)
}

/// Pure selection rule: which bonus (if any) a winning roll yields.
pub(crate) fn select_bonus(
    roll: u32,
    kind_index: usize,
    life: i32,
    projectiles_per_wave: u32,
) -> Option<BonusKind> {
    if roll >= BONUS_DROP_CHANCE {
        return None;
    }
    let kind = BONUS_KINDS[kind_index % BONUS_KINDS.len()];
    match kind {
        BonusKind::ExtraLife if life > LIFE_BONUS_CAP => None,
        BonusKind::ExtraProjectile if projectiles_per_wave > PROJECTILE_BONUS_CAP => None,
        kind => Some(kind),
    }
}

/// Apply a collected bonus. Re-collecting a pattern already in use
/// speeds the fire interval up instead.
pub(crate) fn apply_bonus(kind: BonusKind, record: &mut PlayerRecord, ship: &mut PlayerShip) {
    match kind {
        BonusKind::ExtraLife => record.add_life(),
        BonusKind::ExtraProjectile => ship.projectiles_per_wave += 1,
        BonusKind::FrontPattern => switch_pattern(ship, PlayerPattern::Front),
        BonusKind::FanPattern => switch_pattern(ship, PlayerPattern::Fan),
    }
}

fn switch_pattern(ship: &mut PlayerShip, pattern: PlayerPattern) {
    if ship.pattern != pattern {
        ship.pattern = pattern;
        ship.fire_interval_secs = PLAYER_BASE_FIRE_INTERVAL;
    } else {
        ship.speed_up();
    }
}
