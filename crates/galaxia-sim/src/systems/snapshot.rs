//! Snapshot system: queries the world and builds a GameStateSnapshot.
//!
//! Read-only — it never modifies the world.

use hecs::World;

use galaxia_core::components::*;
use galaxia_core::enums::{EntityKind, GamePhase};
use galaxia_core::events::GameEvent;
use galaxia_core::player::{PlayerRecord, PlayerShip};
use galaxia_core::state::*;
use galaxia_core::types::SimTime;

use crate::systems::director::WaveDirector;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    director: &WaveDirector,
    record: &PlayerRecord,
    ship: &PlayerShip,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let now = time.elapsed_secs;

    GameStateSnapshot {
        time: *time,
        phase,
        player: PlayerView {
            position: ship.position,
            score: record.score,
            life: record.life,
            wave: record.wave,
            firing: ship.firing,
            invincible: ship.is_invincible(now),
            visible: ship.blink_visible(now),
            pattern: ship.pattern,
            projectiles_per_wave: ship.projectiles_per_wave,
        },
        director: DirectorView {
            phase: director.phase(),
            active_enemies: director.active_enemies(),
            remaining: director.remaining().to_vec(),
            eligible: director.eligible().to_vec(),
        },
        entities: build_entities(world),
        beams: build_beams(world),
        events,
    }
}

fn build_entities(world: &World) -> Vec<EntityView> {
    let mut query = world.query::<(&Pooled, &Position, Option<&Projectile>, Option<&BonusPickup>)>();
    let mut entities: Vec<EntityView> = query
        .iter()
        .filter(|(_, (pooled, ..))| pooled.active)
        .map(|(_, (pooled, pos, projectile, pickup))| EntityView {
            kind: pooled.kind,
            position: pos.0,
            rotation: projectile.map(|p| p.rotation).unwrap_or(0.0),
            bonus: if pooled.kind == EntityKind::Bonus {
                pickup.map(|p| p.kind)
            } else {
                None
            },
        })
        .collect();
    // Stable order keeps equal worlds serializing identically.
    entities.sort_by(|a, b| {
        a.position
            .x
            .total_cmp(&b.position.x)
            .then(a.position.y.total_cmp(&b.position.y))
    });
    entities
}

fn build_beams(world: &World) -> Vec<BeamView> {
    let mut query = world.query::<(&BeamHazard, &Position)>();
    query
        .iter()
        .filter(|(_, (hazard, _))| hazard.active)
        .map(|(_, (hazard, pos))| BeamView {
            position: pos.0,
            half_width: hazard.half_width,
        })
        .collect()
}
