//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs world, the entity pool, the wave
//! director, and the player state. It processes queued commands, runs
//! all systems once per tick, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use galaxia_core::commands::GameCommand;
use galaxia_core::components::Pooled;
use galaxia_core::config::{ConfigError, GameConfig};
use galaxia_core::enums::GamePhase;
use galaxia_core::events::GameEvent;
use galaxia_core::player::{PlayerRecord, PlayerShip};
use galaxia_core::state::GameStateSnapshot;
use galaxia_core::types::SimTime;

use crate::pool::EntityPool;
use crate::systems;
use crate::systems::director::WaveDirector;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Authored game tuning.
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default_game(),
        }
    }
}

/// The simulation engine. Owns the world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    config: GameConfig,
    pool: EntityPool,
    director: WaveDirector,
    record: PlayerRecord,
    ship: PlayerShip,
    command_queue: VecDeque<GameCommand>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine, pre-warming the pool. A configuration
    /// mismatch is fatal here — the engine refuses to construct.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let mut world = World::new();
        let pool = EntityPool::build(&mut world, &config.game)?;
        Ok(Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.game,
            pool,
            director: WaveDirector::new(),
            record: PlayerRecord::default(),
            ship: PlayerShip::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.director,
            &self.record,
            &self.ship,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    pub fn director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn record(&self) -> &PlayerRecord {
        &self.record
    }

    pub fn ship(&self) -> &PlayerShip {
        &self.ship
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::StartGame => {
                if matches!(self.phase, GamePhase::Ready | GamePhase::GameOver) {
                    self.reset_game();
                    self.phase = GamePhase::Active;
                }
            }
            GameCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            GameCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            GameCommand::SetFiring { firing } => {
                if !firing || !self.ship.is_invincible(self.time.elapsed_secs) {
                    self.ship.firing = firing;
                }
            }
            GameCommand::MovePlayer { position } => {
                self.ship.position = self.config.bounds.clamp_point(position);
            }
        }
    }

    /// Return every active pooled instance and reset wave/player state.
    /// Pool instances survive restarts — they are only ever toggled.
    fn reset_game(&mut self) {
        let active: Vec<Entity> = {
            let mut query = self.world.query::<&Pooled>();
            query
                .iter()
                .filter(|(_, pooled)| pooled.active)
                .map(|(entity, _)| entity)
                .collect()
        };
        for entity in active {
            self.pool.release(&mut self.world, entity);
        }
        self.director.reset();
        self.record = PlayerRecord::default();
        self.ship = PlayerShip::default();
        self.time = SimTime::default();
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.elapsed_secs;

        // 1. Wave scheduling and enemy spawning
        self.director.run(
            &mut self.world,
            &mut self.pool,
            &mut self.rng,
            &mut self.record,
            &self.config.director,
            now,
            &mut self.events,
        );
        // 2. Enemy approach movement
        systems::motion::run_enemies(&mut self.world, now);
        // 3. Attack engines (enemies, then player)
        systems::attack::run_enemies(
            &mut self.world,
            &mut self.pool,
            &mut self.rng,
            self.ship.position,
            now,
            &mut self.events,
        );
        systems::attack::run_player(&mut self.world, &mut self.pool, &mut self.ship, now);
        // 4. Projectile motion + boundary despawn
        systems::motion::run_projectiles(&mut self.world, &mut self.pool, &self.config.bounds, now);
        // 5. Collisions and the death/reward hook
        systems::collision::run(
            &mut self.world,
            &mut self.pool,
            &mut self.rng,
            &mut self.director,
            &mut self.record,
            &mut self.ship,
            &mut self.phase,
            now,
            &mut self.events,
        );
        // 6. Effect timers (explosions, beams)
        systems::effects::run(&mut self.world, &mut self.pool, now, &mut self.events);
    }

    // --- test access ---

    #[cfg(test)]
    pub(crate) fn parts_mut(
        &mut self,
    ) -> (
        &mut World,
        &mut EntityPool,
        &mut ChaCha8Rng,
        &mut WaveDirector,
        &mut PlayerRecord,
        &mut PlayerShip,
        &mut GamePhase,
    ) {
        (
            &mut self.world,
            &mut self.pool,
            &mut self.rng,
            &mut self.director,
            &mut self.record,
            &mut self.ship,
            &mut self.phase,
        )
    }

    #[cfg(test)]
    pub(crate) fn config(&self) -> &GameConfig {
        &self.config
    }
}
