//! Effect timers: explosion lifetimes and beam hazard upkeep.
//!
//! All "suspended" behavior is a deadline timestamp re-checked each
//! tick; the deferred action runs on the tick the deadline passes.

use hecs::{Entity, World};

use galaxia_core::components::*;
use galaxia_core::events::GameEvent;

use crate::pool::EntityPool;

pub fn run(world: &mut World, pool: &mut EntityPool, now: f64, events: &mut Vec<GameEvent>) {
    // Expired explosions go back to the pool.
    let expired: Vec<Entity> = {
        let mut query = world.query::<(&Pooled, &Explosion)>();
        query
            .iter()
            .filter(|(_, (pooled, explosion))| pooled.active && now >= explosion.release_at)
            .map(|(entity, _)| entity)
            .collect()
    };
    for entity in expired {
        pool.release(world, entity);
    }

    // Beams track their owner and switch off at their deadline (or
    // immediately if the owner went back to the pool).
    let beams: Vec<(Entity, Entity)> = {
        let mut query = world.query::<&BeamHazard>();
        query
            .iter()
            .filter(|(_, hazard)| hazard.active)
            .map(|(entity, hazard)| (entity, hazard.owner))
            .collect()
    };
    for (beam, owner) in beams {
        let owner_pos = {
            let active = world.get::<&Pooled>(owner).map(|p| p.active).unwrap_or(false);
            if active {
                world.get::<&Position>(owner).map(|p| p.0).ok()
            } else {
                None
            }
        };

        match owner_pos {
            Some(pos) => {
                if let Ok(mut beam_pos) = world.get::<&mut Position>(beam) {
                    beam_pos.0 = pos;
                }
                let mut expired = false;
                if let Ok(mut hazard) = world.get::<&mut BeamHazard>(beam) {
                    if now >= hazard.off_at {
                        hazard.active = false;
                        expired = true;
                    }
                }
                if expired {
                    events.push(GameEvent::BeamOff);
                }
            }
            None => {
                if let Ok(mut hazard) = world.get::<&mut BeamHazard>(beam) {
                    hazard.active = false;
                }
            }
        }
    }
}
