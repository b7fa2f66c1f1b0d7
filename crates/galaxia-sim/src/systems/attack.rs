//! Attack engine — per-shooter pattern cycles and projectile emission.
//!
//! Each active shooter owns a pattern cycle index and two deadline
//! timers: the gate before the next wave of shots and the gate before
//! the next individual shot wave. Emission geometry is pure math over
//! the shooter position.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use galaxia_core::components::*;
use galaxia_core::config::ShootPattern;
use galaxia_core::constants::*;
use galaxia_core::enums::{EntityKind, Owner, PatternKind, PlayerPattern};
use galaxia_core::events::GameEvent;
use galaxia_core::player::PlayerShip;
use galaxia_core::types::Vec2;

use crate::pool::EntityPool;

/// Enable or disable a shooter. Enabling re-arms the inter-wave gate so
/// a shooter newly allowed to fire always waits out one full delay
/// before its first shot.
pub fn set_firing(shooter: &mut ShooterState, firing: bool, now: f64) {
    shooter.firing = firing;
    if !shooter.patterns.is_empty() {
        shooter.wait_until = now + shooter.current().wait_secs;
    }
}

struct Emission {
    origin: Vec2,
    pattern: ShootPattern,
    beam: Option<Entity>,
}

/// Run every enemy shooter's pattern cycle and emit due shot waves.
pub fn run_enemies(
    world: &mut World,
    pool: &mut EntityPool,
    rng: &mut ChaCha8Rng,
    player_pos: Vec2,
    now: f64,
    events: &mut Vec<GameEvent>,
) {
    let mut emissions: Vec<Emission> = Vec::new();

    for (_entity, (pooled, pos, shooter, emitter)) in world.query_mut::<(
        &Pooled,
        &Position,
        &mut ShooterState,
        Option<&BeamEmitter>,
    )>() {
        if !pooled.active || !shooter.firing || shooter.patterns.is_empty() {
            continue;
        }

        if shooter.wave_index >= shooter.current().wave_count {
            // Pattern finished: rest, then cycle to a random pattern.
            shooter.wait_until = now + shooter.current().wait_secs;
            shooter.wave_index = 0;
            shooter.pattern_index = draw_pattern_index(rng, shooter.patterns.len());
        } else if now >= shooter.wait_until && now >= shooter.fire_at {
            let pattern = *shooter.current();
            shooter.fire_at = now + pattern.fire_interval_secs;
            shooter.wave_index += 1;
            emissions.push(Emission {
                origin: pos.0,
                pattern,
                beam: emitter.map(|e| e.beam),
            });
        }
    }

    for emission in emissions {
        match emission.pattern.pattern {
            PatternKind::Radial => fire_radial(world, pool, emission.origin, &emission.pattern, now),
            PatternKind::Aimed => {
                fire_aimed(world, pool, emission.origin, &emission.pattern, player_pos, now)
            }
            PatternKind::Lane => fire_lane(world, pool, emission.origin, &emission.pattern, now),
            PatternKind::Beam => fire_beam(world, emission.beam, &emission.pattern, now, events),
        }
    }
}

/// Run the player's own fire cycle.
pub fn run_player(world: &mut World, pool: &mut EntityPool, ship: &mut PlayerShip, now: f64) {
    if !ship.firing || now < ship.fire_at {
        return;
    }
    ship.fire_at = now + ship.fire_interval_secs;

    let n = ship.projectiles_per_wave;
    match ship.pattern {
        PlayerPattern::Front => {
            for i in 0..n {
                let offset = (i as f64 - (n as f64 - 1.0) / 2.0) * PLAYER_FRONT_SPACING;
                let origin = ship.position + Vec2::new(offset, 0.0);
                spawn_projectile(world, pool, EntityKind::Ball, origin, Vec2::Y, 0.0, Owner::Player, now);
            }
        }
        PlayerPattern::Fan => {
            for i in 0..n {
                let rotation = fan_rotation(i, n);
                let direction = Vec2::from_angle(rotation).rotate(Vec2::Y);
                spawn_projectile(
                    world,
                    pool,
                    EntityKind::Ball,
                    ship.position,
                    direction,
                    rotation,
                    Owner::Player,
                    now,
                );
            }
        }
    }
}

/// Uniform pattern re-draw; a roster of one always selects it.
fn draw_pattern_index(rng: &mut ChaCha8Rng, count: usize) -> usize {
    if count > 1 {
        rng.gen_range(0..count)
    } else {
        0
    }
}

/// Rotation of the i-th radial projectile: even 360/N spacing.
pub(crate) fn radial_rotation(i: u32, n: u32) -> f64 {
    i as f64 * TAU / n as f64
}

/// Spawn x-positions of the lane pattern: N+1 points spread evenly
/// across a fixed-width band centered on the shooter.
pub(crate) fn lane_xs(center_x: f64, n: u32) -> Vec<f64> {
    let spacing = LANE_BAND_WIDTH / n as f64;
    (0..=n)
        .map(|i| center_x - LANE_BAND_WIDTH / 2.0 + spacing * i as f64)
        .collect()
}

/// Rotation of the i-th fan shot, spread over the forward semicircle.
pub(crate) fn fan_rotation(i: u32, n: u32) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    PI * (i as f64 + 1.0) / (n as f64 + 1.0) - FRAC_PI_2
}

fn fire_radial(world: &mut World, pool: &mut EntityPool, origin: Vec2, pattern: &ShootPattern, now: f64) {
    let n = pattern.projectiles_per_wave;
    for i in 0..n {
        let rotation = radial_rotation(i, n);
        let direction = Vec2::from_angle(rotation).rotate(Vec2::Y);
        if spawn_projectile(world, pool, pattern.projectile, origin, direction, rotation, Owner::Enemy, now)
            .is_none()
        {
            break;
        }
    }
}

fn fire_aimed(
    world: &mut World,
    pool: &mut EntityPool,
    origin: Vec2,
    pattern: &ShootPattern,
    player_pos: Vec2,
    now: f64,
) {
    for _ in 0..pattern.projectiles_per_wave {
        // Recomputed per projectile; spawn positions may differ.
        let direction = (player_pos - origin).normalize_or(Vec2::NEG_Y);
        if spawn_projectile(world, pool, pattern.projectile, origin, direction, 0.0, Owner::Enemy, now)
            .is_none()
        {
            break;
        }
    }
}

fn fire_lane(world: &mut World, pool: &mut EntityPool, origin: Vec2, pattern: &ShootPattern, now: f64) {
    if pattern.projectiles_per_wave == 0 {
        return;
    }
    for x in lane_xs(origin.x, pattern.projectiles_per_wave) {
        let spawn = Vec2::new(x, origin.y);
        if spawn_projectile(world, pool, pattern.projectile, spawn, Vec2::NEG_Y, 0.0, Owner::Enemy, now)
            .is_none()
        {
            break;
        }
    }
}

/// Beam pattern: a single timed on/off toggle of the shooter's beam
/// hazard, not a projectile batch.
fn fire_beam(
    world: &mut World,
    beam: Option<Entity>,
    pattern: &ShootPattern,
    now: f64,
    events: &mut Vec<GameEvent>,
) {
    let Some(beam) = beam else { return };
    if let Ok(mut hazard) = world.get::<&mut BeamHazard>(beam) {
        hazard.active = true;
        hazard.off_at = now + pattern.wait_secs;
        events.push(GameEvent::BeamOn {
            duration_secs: pattern.wait_secs,
        });
    }
}

/// Acquire and arm one projectile. `None` means the pool is exhausted;
/// callers stop emitting the rest of the wave.
#[allow(clippy::too_many_arguments)]
fn spawn_projectile(
    world: &mut World,
    pool: &mut EntityPool,
    kind: EntityKind,
    origin: Vec2,
    direction: Vec2,
    rotation: f64,
    owner: Owner,
    now: f64,
) -> Option<Entity> {
    let entity = pool.acquire(world, kind, origin, now)?;
    if let Ok(mut projectile) = world.get::<&mut Projectile>(entity) {
        projectile.owner = owner;
        projectile.direction = direction;
        projectile.rotation = rotation;
    }
    Some(entity)
}
