//! Tests for the simulation engine, entity pool, wave director, attack
//! patterns, and the death/reward pipeline.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use galaxia_core::commands::GameCommand;
use galaxia_core::components::{
    BeamEmitter, BeamHazard, Enemy, Pooled, Position, Projectile, ShooterState,
};
use galaxia_core::config::GameConfig;
use galaxia_core::constants::*;
use galaxia_core::enums::*;
use galaxia_core::events::GameEvent;
use galaxia_core::player::{PlayerRecord, PlayerShip};
use galaxia_core::types::Vec2;

use crate::engine::{SimConfig, SimulationEngine};
use crate::pool::EntityPool;
use crate::systems::director::WaveDirector;
use crate::systems::{attack, collision, effects, motion};

fn engine(seed: u64) -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    })
    .unwrap()
}

/// World + pool built from the default tuning, for direct system tests.
fn world_and_pool() -> (World, EntityPool, GameConfig) {
    let config = GameConfig::default_game();
    let mut world = World::new();
    let pool = EntityPool::build(&mut world, &config).unwrap();
    (world, pool, config)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = engine(12345);
    let mut engine_b = engine(12345);

    engine_a.queue_command(GameCommand::StartGame);
    engine_b.queue_command(GameCommand::StartGame);

    for _ in 0..600 {
        let snap_a = engine_a.tick();
        let snap_b = engine_b.tick();

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine(111);
    let mut engine_b = engine(222);

    engine_a.queue_command(GameCommand::StartGame);
    engine_b.queue_command(GameCommand::StartGame);

    // Early ticks are identical (the inter-wave delay is fixed); the
    // first spawn batch consumes seed-dependent draws and diverges.
    let mut diverged = false;
    for _ in 0..600 {
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds never diverged");
}

// ---- Engine lifecycle ----

#[test]
fn test_start_game_activates() {
    let mut engine = engine(1);
    assert_eq!(engine.phase(), GamePhase::Ready);

    engine.queue_command(GameCommand::StartGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Active);
    assert_eq!(snap.player.life, PLAYER_START_LIFE);
    assert_eq!(snap.player.wave, 0);
}

#[test]
fn test_pause_freezes_time() {
    let mut engine = engine(1);
    engine.queue_command(GameCommand::StartGame);
    for _ in 0..10 {
        engine.tick();
    }
    let tick_at_pause = engine.time().tick;

    engine.queue_command(GameCommand::Pause);
    for _ in 0..20 {
        engine.tick();
    }
    assert_eq!(engine.time().tick, tick_at_pause);

    engine.queue_command(GameCommand::Resume);
    engine.tick();
    assert_eq!(engine.time().tick, tick_at_pause + 1);
}

#[test]
fn test_move_player_clamped_to_bounds() {
    let mut engine = engine(1);
    engine.queue_command(GameCommand::StartGame);
    engine.queue_command(GameCommand::MovePlayer {
        position: Vec2::new(100.0, -100.0),
    });
    let snap = engine.tick();

    let bounds = engine.config().bounds;
    assert!(bounds.contains(snap.player.position));
    assert_eq!(snap.player.position.x, bounds.max().x);
    assert_eq!(snap.player.position.y, bounds.min().y);
}

#[test]
fn test_restart_releases_active_entities() {
    let mut engine = engine(3);
    engine.queue_command(GameCommand::StartGame);
    for _ in 0..400 {
        engine.tick();
    }
    assert!(engine.pool().active(EntityKind::Fighter) > 0);

    {
        let (_, _, _, _, _, _, phase) = engine.parts_mut();
        *phase = GamePhase::GameOver;
    }
    engine.queue_command(GameCommand::StartGame);
    engine.tick();

    assert_eq!(engine.pool().active(EntityKind::Fighter), 0);
    assert_eq!(engine.pool().active(EntityKind::Ball), 0);
    assert_eq!(engine.director().active_enemies(), 0);
    assert_eq!(engine.record().score, 0);
    assert_eq!(engine.record().wave, 0);
    assert_eq!(engine.time().tick, 1);
}

#[test]
fn test_engine_refuses_mismatched_pool_config() {
    let mut game = GameConfig::default_game();
    game.pool.counts.pop();
    assert!(SimulationEngine::new(SimConfig { seed: 1, game }).is_err());
}

// ---- Entity pool ----

#[test]
fn test_pool_prewarms_configured_counts() {
    let (world, pool, config) = world_and_pool();
    for (kind, count) in config.pool.entries() {
        assert_eq!(pool.total(kind), count);
        assert_eq!(pool.free(kind), count);
        assert_eq!(pool.active(kind), 0);
    }
    // Every instance exists in the world, inactive.
    let inactive = world
        .query::<&Pooled>()
        .iter()
        .filter(|(_, p)| !p.active)
        .count();
    let expected: usize = config.pool.counts.iter().sum();
    assert_eq!(inactive, expected);
}

#[test]
fn test_pool_acquire_release_cycle() {
    let (mut world, mut pool, _) = world_and_pool();
    let total = pool.total(EntityKind::Ball);

    let entity = pool
        .acquire(&mut world, EntityKind::Ball, Vec2::new(1.0, 2.0), 0.0)
        .unwrap();
    assert_eq!(pool.active(EntityKind::Ball), 1);
    assert_eq!(pool.free(EntityKind::Ball), total - 1);
    assert!(world.get::<&Pooled>(entity).unwrap().active);
    assert_eq!(world.get::<&Position>(entity).unwrap().0, Vec2::new(1.0, 2.0));

    assert!(pool.release(&mut world, entity));
    assert_eq!(pool.free(EntityKind::Ball), total);

    // Releasing an already-queued instance is a no-op.
    assert!(!pool.release(&mut world, entity));
    assert_eq!(pool.free(EntityKind::Ball), total);
}

#[test]
fn test_pool_exhaustion_returns_none() {
    let (mut world, mut pool, _) = world_and_pool();
    for _ in 0..pool.total(EntityKind::Boss) {
        assert!(pool
            .acquire(&mut world, EntityKind::Boss, Vec2::ZERO, 0.0)
            .is_some());
    }
    assert!(pool
        .acquire(&mut world, EntityKind::Boss, Vec2::ZERO, 0.0)
        .is_none());
}

#[test]
fn test_pool_reacquire_resets_enemy_state() {
    let (mut world, mut pool, _) = world_and_pool();
    let entity = pool
        .acquire(&mut world, EntityKind::Fighter, Vec2::ZERO, 0.0)
        .unwrap();
    {
        let mut enemy = world.get::<&mut Enemy>(entity).unwrap();
        enemy.health = 1;
        enemy.arrived = true;
        enemy.death_processed = true;
    }
    pool.release(&mut world, entity);

    let again = pool
        .acquire(&mut world, EntityKind::Fighter, Vec2::ZERO, 1.0)
        .unwrap();
    let enemy = world.get::<&Enemy>(again).unwrap();
    assert_eq!(enemy.health, enemy.max_health);
    assert!(!enemy.arrived);
    assert!(!enemy.death_processed);
}

// ---- Wave director ----

#[test]
fn test_wave_quotas_follow_curves() {
    let config = GameConfig::default_game();
    let mut director = WaveDirector::new();

    director.compute_quotas(&config.director, 1);
    assert_eq!(director.remaining(), &[
        (EntityKind::Fighter, 3),
        (EntityKind::Bomber, 0),
        (EntityKind::Boss, 0),
    ]);
    assert_eq!(director.eligible(), &[EntityKind::Fighter]);

    // Later waves pull in bombers and the boss.
    director.compute_quotas(&config.director, 6);
    assert_eq!(director.eligible().len(), 3);
    for (_, quota) in director.remaining() {
        assert!(*quota > 0);
    }
}

#[test]
fn test_quota_curve_ceils_fractional_values() {
    let config = GameConfig::default_game();
    let mut director = WaveDirector::new();

    // Fighter curve interpolates to 6.857 at wave 7; quota rounds up.
    director.compute_quotas(&config.director, 7);
    let fighters = director
        .remaining()
        .iter()
        .find(|(k, _)| *k == EntityKind::Fighter)
        .map(|(_, n)| *n)
        .unwrap();
    assert_eq!(fighters, 8);
}

#[test]
fn test_draw_respects_eligibility() {
    let config = GameConfig::default_game();
    let mut director = WaveDirector::new();
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    director.compute_quotas(&config.director, 1);
    for _ in 0..3 {
        assert_eq!(director.draw_one(&mut rng), EntityKind::Fighter);
    }
    assert!(director.eligible().is_empty());
    assert_eq!(director.total_remaining(), 0);

    // Exhausted quotas fall back to a fighter rather than stalling.
    assert_eq!(director.draw_one(&mut rng), EntityKind::Fighter);
}

#[test]
fn test_first_wave_spawns_after_delay() {
    let mut engine = engine(7);
    engine.queue_command(GameCommand::StartGame);

    let mut wave_started = false;
    for _ in 0..330 {
        let snap = engine.tick();
        if snap
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::WaveStarted { wave: 1 }))
        {
            wave_started = true;
        }
    }
    assert!(wave_started, "Wave 1 never started");
    assert_eq!(engine.director().active_enemies(), 3);
    assert_eq!(engine.pool().active(EntityKind::Fighter), 3);
}

#[test]
fn test_spawn_reconciles_on_pool_exhaustion() {
    // One pooled fighter against a wave-1 quota of three.
    let mut config = GameConfig::default_game();
    config.pool.counts[0] = 1;
    let mut world = World::new();
    let mut pool = EntityPool::build(&mut world, &config).unwrap();
    let mut director = WaveDirector::new();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut record = PlayerRecord::default();
    let mut events = Vec::new();

    director.run(&mut world, &mut pool, &mut rng, &mut record, &config.director, 0.0, &mut events);
    director.run(&mut world, &mut pool, &mut rng, &mut record, &config.director, 6.0, &mut events);
    director.run(&mut world, &mut pool, &mut rng, &mut record, &config.director, 6.0, &mut events);

    assert_eq!(pool.active(EntityKind::Fighter), 1);
    assert_eq!(director.active_enemies(), 1);
    assert_eq!(director.total_remaining(), 0);
}

// ---- Attack geometry ----

#[test]
fn test_radial_spacing_even() {
    let n = 8;
    for i in 1..n {
        let gap = attack::radial_rotation(i, n) - attack::radial_rotation(i - 1, n);
        assert!((gap - std::f64::consts::TAU / n as f64).abs() < 1e-12);
    }
}

#[test]
fn test_lane_positions_symmetric() {
    let xs = attack::lane_xs(0.0, 6);
    assert_eq!(xs.len(), 7);
    assert!((xs[0] + 6.0).abs() < 1e-12);
    assert!((xs[6] - 6.0).abs() < 1e-12);
    for pair in xs.windows(2) {
        assert!((pair[1] - pair[0] - 2.0).abs() < 1e-12);
    }
}

#[test]
fn test_fan_rotations_spread_forward() {
    assert_eq!(attack::fan_rotation(0, 1), 0.0);

    let rots: Vec<f64> = (0..3).map(|i| attack::fan_rotation(i, 3)).collect();
    assert!((rots[0] + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
    assert!(rots[1].abs() < 1e-12);
    assert!((rots[2] - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn test_shooter_waits_full_delay_before_first_shot() {
    let (mut world, mut pool, _) = world_and_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();

    let fighter = pool
        .acquire(&mut world, EntityKind::Fighter, Vec2::new(0.0, 5.0), 10.0)
        .unwrap();
    {
        let mut shooter = world.get::<&mut ShooterState>(fighter).unwrap();
        attack::set_firing(&mut shooter, true, 10.0);
        assert_eq!(shooter.wait_until, 12.0);
    }

    attack::run_enemies(&mut world, &mut pool, &mut rng, Vec2::new(0.0, -8.0), 11.0, &mut events);
    assert_eq!(pool.active(EntityKind::Ball), 0);

    attack::run_enemies(&mut world, &mut pool, &mut rng, Vec2::new(0.0, -8.0), 12.0, &mut events);
    assert_eq!(pool.active(EntityKind::Ball), 1);
}

#[test]
fn test_player_front_pattern_fires_row() {
    let (mut world, mut pool, _) = world_and_pool();
    let mut ship = PlayerShip {
        firing: true,
        projectiles_per_wave: 3,
        ..Default::default()
    };

    attack::run_player(&mut world, &mut pool, &mut ship, 0.0);
    assert_eq!(pool.active(EntityKind::Ball), 3);
    assert_eq!(ship.fire_at, PLAYER_BASE_FIRE_INTERVAL);

    // Gate holds until the interval elapses.
    attack::run_player(&mut world, &mut pool, &mut ship, 0.05);
    assert_eq!(pool.active(EntityKind::Ball), 3);
}

// ---- Beam hazard ----

#[test]
fn test_beam_pattern_toggles_hazard() {
    let (mut world, mut pool, _) = world_and_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut events = Vec::new();

    let boss = pool
        .acquire(&mut world, EntityKind::Boss, Vec2::new(-2.5, 3.8), 0.0)
        .unwrap();
    let beam = world.get::<&BeamEmitter>(boss).unwrap().beam;
    {
        // Force the beam entry of the boss roster, armed to fire now.
        let mut shooter = world.get::<&mut ShooterState>(boss).unwrap();
        shooter.firing = true;
        shooter.pattern_index = 3;
        shooter.wait_until = 0.0;
        shooter.fire_at = 0.0;
    }

    attack::run_enemies(&mut world, &mut pool, &mut rng, Vec2::ZERO, 1.0, &mut events);
    {
        let hazard = world.get::<&BeamHazard>(beam).unwrap();
        assert!(hazard.active);
        assert_eq!(hazard.off_at, 4.0);
    }
    assert!(events.iter().any(|e| matches!(e, GameEvent::BeamOn { .. })));

    effects::run(&mut world, &mut pool, 4.5, &mut events);
    assert!(!world.get::<&BeamHazard>(beam).unwrap().active);
    assert!(events.iter().any(|e| matches!(e, GameEvent::BeamOff)));
}

#[test]
fn test_beam_dies_with_owner() {
    let (mut world, mut pool, _) = world_and_pool();
    let boss = pool
        .acquire(&mut world, EntityKind::Boss, Vec2::ZERO, 0.0)
        .unwrap();
    let beam = world.get::<&BeamEmitter>(boss).unwrap().beam;
    world.get::<&mut BeamHazard>(beam).unwrap().active = true;

    pool.release(&mut world, boss);
    assert!(!world.get::<&BeamHazard>(beam).unwrap().active);
}

// ---- Motion ----

#[test]
fn test_enemy_approaches_and_arrives() {
    let (mut world, mut pool, _) = world_and_pool();
    let fighter = pool
        .acquire(&mut world, EntityKind::Fighter, Vec2::new(0.0, 10.0), 0.0)
        .unwrap();
    world.get::<&mut Enemy>(fighter).unwrap().target = Vec2::new(0.0, 9.0);

    let mut now = 0.0;
    for _ in 0..60 {
        motion::run_enemies(&mut world, now);
        now += DT;
    }

    let enemy = world.get::<&Enemy>(fighter).unwrap();
    assert!(enemy.arrived);
    let pos = world.get::<&Position>(fighter).unwrap().0;
    assert!((pos - enemy.target).length() <= ENEMY_ARRIVE_EPSILON);
    // Arrival opens fire.
    assert!(world.get::<&ShooterState>(fighter).unwrap().firing);
}

#[test]
fn test_curveball_weaves_laterally() {
    let (mut world, mut pool, config) = world_and_pool();
    let ball = pool
        .acquire(&mut world, EntityKind::CurveBall, Vec2::new(0.0, 5.0), 0.0)
        .unwrap();

    let mut now = 0.0;
    for _ in 0..30 {
        motion::run_projectiles(&mut world, &mut pool, &config.bounds, now);
        now += DT;
    }

    let pos = world.get::<&Position>(ball).unwrap().0;
    assert!(pos.y < 5.0, "CurveBall should still travel downward");
    assert!(pos.x > 0.01, "Lateral curve should push the ball sideways");
}

#[test]
fn test_projectile_released_out_of_bounds() {
    let (mut world, mut pool, config) = world_and_pool();
    let total = pool.total(EntityKind::Ball);
    let ball = pool
        .acquire(&mut world, EntityKind::Ball, Vec2::new(0.0, 11.4), 0.0)
        .unwrap();
    world.get::<&mut Projectile>(ball).unwrap().direction = Vec2::Y;

    let mut now = 0.0;
    for _ in 0..10 {
        motion::run_projectiles(&mut world, &mut pool, &config.bounds, now);
        now += DT;
    }
    assert_eq!(pool.free(EntityKind::Ball), total);
}

// ---- Death hook and rewards ----

#[test]
fn test_death_hook_runs_once() {
    let (mut world, mut pool, _) = world_and_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut director = WaveDirector::new();
    let mut record = PlayerRecord::default();
    let mut ship = PlayerShip::default();
    let mut events = Vec::new();

    let fighter = pool
        .acquire(&mut world, EntityKind::Fighter, Vec2::new(1.0, 4.0), 0.0)
        .unwrap();

    collision::damage_enemy(
        &mut world, &mut pool, &mut rng, &mut director, &mut record, &mut ship, fighter, 1, 0.5,
        &mut events,
    );
    assert_eq!(record.score, 0);
    assert_eq!(pool.active(EntityKind::Fighter), 1);

    collision::damage_enemy(
        &mut world, &mut pool, &mut rng, &mut director, &mut record, &mut ship, fighter, 1, 0.6,
        &mut events,
    );
    assert_eq!(record.score, 100);
    assert_eq!(pool.active(EntityKind::Fighter), 0);
    assert_eq!(pool.active(EntityKind::Explosion), 1);
    let destroyed = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1);

    // A late hit on the released instance is ignored wholesale.
    collision::damage_enemy(
        &mut world, &mut pool, &mut rng, &mut director, &mut record, &mut ship, fighter, 1, 0.7,
        &mut events,
    );
    assert_eq!(record.score, 100);
    let destroyed = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1);
}

#[test]
fn test_contact_kill_ignores_remaining_health() {
    let (mut world, mut pool, _) = world_and_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut director = WaveDirector::new();
    let mut record = PlayerRecord::default();
    let mut ship = PlayerShip::default();
    let mut events = Vec::new();

    let bomber = pool
        .acquire(&mut world, EntityKind::Bomber, Vec2::ZERO, 0.0)
        .unwrap();
    collision::kill_enemy(
        &mut world, &mut pool, &mut rng, &mut director, &mut record, &mut ship, bomber, 0.0,
        &mut events,
    );
    assert_eq!(record.score, 250);
    assert_eq!(pool.active(EntityKind::Bomber), 0);
}

#[test]
fn test_bonus_selection_suppression() {
    // A winning roll yields its drawn kind unless the cap suppresses it.
    assert_eq!(
        collision::select_bonus(5, 2, 3, 1),
        Some(BonusKind::FrontPattern)
    );
    assert_eq!(collision::select_bonus(5, 0, 6, 1), None);
    assert_eq!(collision::select_bonus(5, 1, 3, 6), None);
    // A losing roll never yields anything.
    assert_eq!(collision::select_bonus(50, 2, 3, 1), None);
    // At the cap (not above it) the bonus still drops.
    assert_eq!(collision::select_bonus(5, 0, 5, 1), Some(BonusKind::ExtraLife));
}

#[test]
fn test_apply_bonus_effects() {
    let mut record = PlayerRecord::default();
    let mut ship = PlayerShip::default();

    collision::apply_bonus(BonusKind::ExtraLife, &mut record, &mut ship);
    assert_eq!(record.life, PLAYER_START_LIFE + 1);

    collision::apply_bonus(BonusKind::ExtraProjectile, &mut record, &mut ship);
    assert_eq!(ship.projectiles_per_wave, PLAYER_BASE_PROJECTILES + 1);

    collision::apply_bonus(BonusKind::FanPattern, &mut record, &mut ship);
    assert_eq!(ship.pattern, PlayerPattern::Fan);
    assert_eq!(ship.fire_interval_secs, PLAYER_BASE_FIRE_INTERVAL);

    // Re-collecting the active pattern speeds the weapon up instead.
    collision::apply_bonus(BonusKind::FanPattern, &mut record, &mut ship);
    assert!(ship.fire_interval_secs < PLAYER_BASE_FIRE_INTERVAL);
}

#[test]
fn test_player_hit_grants_invincibility_window() {
    let mut record = PlayerRecord::default();
    let mut ship = PlayerShip {
        projectiles_per_wave: 3,
        ..Default::default()
    };
    let mut phase = GamePhase::Active;
    let mut events = Vec::new();

    collision::player_hit(&mut record, &mut ship, &mut phase, 0.0, &mut events);
    assert_eq!(record.life, PLAYER_START_LIFE - 1);
    assert_eq!(ship.projectiles_per_wave, PLAYER_BASE_PROJECTILES);
    assert!(ship.is_invincible(1.9));

    // A second hit inside the window does nothing.
    collision::player_hit(&mut record, &mut ship, &mut phase, 1.0, &mut events);
    assert_eq!(record.life, PLAYER_START_LIFE - 1);

    collision::player_hit(&mut record, &mut ship, &mut phase, 2.5, &mut events);
    assert_eq!(record.life, PLAYER_START_LIFE - 2);
}

#[test]
fn test_player_death_ends_game() {
    let mut record = PlayerRecord {
        life: 1,
        ..Default::default()
    };
    let mut ship = PlayerShip::default();
    let mut phase = GamePhase::Active;
    let mut events = Vec::new();

    collision::player_hit(&mut record, &mut ship, &mut phase, 42.0, &mut events);
    assert_eq!(phase, GamePhase::GameOver);
    assert_eq!(record.survival_secs, 42.0);
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::PlayerDied { survival_secs } if *survival_secs == 42.0
    )));
}

// ---- Integration ----

#[test]
fn test_pool_counts_match_world_state() {
    let mut engine = engine(8);
    engine.queue_command(GameCommand::StartGame);

    for tick in 0..1200 {
        engine.tick();
        if tick % 120 != 0 {
            continue;
        }
        for kind in [
            EntityKind::Fighter,
            EntityKind::Bomber,
            EntityKind::Boss,
            EntityKind::Ball,
            EntityKind::CurveBall,
            EntityKind::Explosion,
            EntityKind::Bonus,
        ] {
            let in_world = engine
                .world()
                .query::<&Pooled>()
                .iter()
                .filter(|(_, p)| p.active && p.kind == kind)
                .count();
            assert_eq!(
                in_world,
                engine.pool().active(kind),
                "pool ledger drifted for {kind:?}"
            );
            assert!(engine.pool().free(kind) <= engine.pool().total(kind));
        }
    }
}

#[test]
fn test_waves_progress_over_time() {
    let mut engine = engine(21);
    engine.queue_command(GameCommand::StartGame);
    // Keep the player out of harm's way; no firing, so waves only end
    // when enemies are cleared by contact kills against an unkillable
    // run length. Instead just assert wave 1 engages and fires back.
    let mut saw_enemy_fire = false;
    for _ in 0..1800 {
        engine.tick();
        if engine.pool().active(EntityKind::Ball) > 0
            || engine.pool().active(EntityKind::CurveBall) > 0
        {
            saw_enemy_fire = true;
            break;
        }
    }
    assert!(saw_enemy_fire, "No enemy ever opened fire");
    assert_eq!(engine.record().wave, 1);
}
