//! Motion systems: enemy approach and the projectile motion model.

use hecs::{Entity, World};

use galaxia_core::components::*;
use galaxia_core::constants::{DT, ENEMY_ARRIVE_EPSILON};
use galaxia_core::types::{Rect, Vec2};

use crate::pool::EntityPool;
use crate::systems::attack;

/// Glide active enemies toward their engagement target; on arrival the
/// shooter is enabled, which arms its inter-wave wait.
pub fn run_enemies(world: &mut World, now: f64) {
    for (_entity, (pooled, pos, enemy, shooter)) in
        world.query_mut::<(&Pooled, &mut Position, &mut Enemy, &mut ShooterState)>()
    {
        if !pooled.active || enemy.arrived {
            continue;
        }

        let delta = enemy.target - pos.0;
        let distance = delta.length();
        if distance <= ENEMY_ARRIVE_EPSILON {
            enemy.arrived = true;
            attack::set_firing(shooter, true, now);
            continue;
        }

        let step = enemy.speed * DT;
        if step >= distance {
            pos.0 = enemy.target;
        } else {
            pos.0 += delta / distance * step;
        }
    }
}

/// Advance every active projectile (bonus pickups included) one tick:
///
/// `pos += normalize(direction + local_right * lateral(t)) * speed(t) * dt`
///
/// The lateral offset rides the projectile's own rightward axis so a
/// rotated projectile curves relative to its heading, not world space.
/// Leaving the play-field on any axis is a silent despawn back to the
/// pool, not a collision.
pub fn run_projectiles(world: &mut World, pool: &mut EntityPool, bounds: &Rect, now: f64) {
    let mut out_of_bounds: Vec<Entity> = Vec::new();

    for (entity, (pooled, pos, projectile, curves)) in
        world.query_mut::<(&Pooled, &mut Position, &Projectile, &MotionCurves)>()
    {
        if !pooled.active {
            continue;
        }

        let t = now - projectile.spawn_secs;
        let local_right = Vec2::from_angle(projectile.rotation).rotate(Vec2::X);
        let lateral = local_right * curves.0.lateral.evaluate(t);
        let direction = (projectile.direction + lateral).normalize_or_zero();
        pos.0 += direction * curves.0.speed.evaluate(t) * DT;

        if !bounds.contains(pos.0) {
            out_of_bounds.push(entity);
        }
    }

    for entity in out_of_bounds {
        pool.release(world, entity);
    }
}
