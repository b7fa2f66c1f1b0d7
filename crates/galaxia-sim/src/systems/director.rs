//! Wave director — the top-level spawn scheduler.
//!
//! Computes per-wave quotas from authored curves, then drains them in
//! capped batches by drawing kinds uniformly at random from the
//! eligible set. The wave number lives in the injected `PlayerRecord`.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use galaxia_core::components::Enemy;
use galaxia_core::config::DirectorConfig;
use galaxia_core::enums::{DirectorPhase, EntityKind};
use galaxia_core::events::GameEvent;
use galaxia_core::player::PlayerRecord;

use crate::pool::EntityPool;

/// Wave progression state machine.
///
/// `Idle` → `WaitingBetweenWaves` → `QuotaComputed` → `BatchSpawning`
/// → back to `Idle` once active count and remaining quota both hit zero.
#[derive(Debug, Clone, Default)]
pub struct WaveDirector {
    phase: DirectorPhase,
    /// Remaining spawn quota per enemy kind for the current wave.
    remaining: Vec<(EntityKind, u32)>,
    /// Kinds with quota left; the uniform draw is flat over this set,
    /// not weighted by remaining quota magnitude.
    eligible: Vec<EntityKind>,
    /// Speculative count of enemies spawned and not yet dead.
    active_enemies: u32,
    /// Inter-wave deadline (sim seconds), valid while waiting.
    wait_until: f64,
}

impl WaveDirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all wave state (game restart).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> DirectorPhase {
        self.phase
    }

    pub fn active_enemies(&self) -> u32 {
        self.active_enemies
    }

    pub fn remaining(&self) -> &[(EntityKind, u32)] {
        &self.remaining
    }

    pub fn eligible(&self) -> &[EntityKind] {
        &self.eligible
    }

    pub fn total_remaining(&self) -> u32 {
        self.remaining.iter().map(|(_, n)| n).sum()
    }

    /// Death notification path: one active enemy went back to the pool.
    pub fn notify_death(&mut self) {
        self.active_enemies = self.active_enemies.saturating_sub(1);
    }

    /// Advance the state machine by one tick.
    pub fn run(
        &mut self,
        world: &mut World,
        pool: &mut EntityPool,
        rng: &mut ChaCha8Rng,
        record: &mut PlayerRecord,
        config: &DirectorConfig,
        now: f64,
        events: &mut Vec<GameEvent>,
    ) {
        if self.active_enemies == 0 && self.total_remaining() == 0 {
            match self.phase {
                DirectorPhase::WaitingBetweenWaves => {
                    if now >= self.wait_until {
                        let wave = record.next_wave();
                        self.compute_quotas(config, wave);
                        self.phase = DirectorPhase::QuotaComputed;
                        info!(wave, quotas = ?self.remaining, "wave quotas computed");
                        events.push(GameEvent::WaveStarted { wave });
                    }
                }
                DirectorPhase::Idle => {
                    self.phase = DirectorPhase::WaitingBetweenWaves;
                    self.wait_until = now + config.time_between_waves_secs;
                }
                // Wave just cleared; pass through Idle before waiting.
                _ => self.phase = DirectorPhase::Idle,
            }
            return;
        }

        // Spawn the next batch once the field is nearly empty.
        if self.total_remaining() > 0 && self.active_enemies <= 1 {
            self.phase = DirectorPhase::BatchSpawning;
            let batch = self.total_remaining().min(config.max_batch);
            let kinds = self.draw_batch(rng, batch);
            self.active_enemies += batch;
            for kind in kinds {
                self.spawn_enemy(world, pool, rng, config, kind, now);
            }
        }
    }

    /// Evaluate each kind's quota curve at the wave number, ceiling to
    /// an integer quota; a kind is eligible iff its quota is positive.
    pub(crate) fn compute_quotas(&mut self, config: &DirectorConfig, wave: u32) {
        self.remaining.clear();
        self.eligible.clear();
        for (kind, curve) in &config.quota_curves {
            let quota = curve.evaluate(wave as f64).max(0.0).ceil() as u32;
            self.remaining.push((*kind, quota));
            if quota > 0 {
                self.eligible.push(*kind);
            }
        }
    }

    /// Draw `batch` kinds, decrementing quotas as we go. Each draw is
    /// uniform over the current eligible set and a kind leaves the set
    /// the moment its quota reaches zero.
    fn draw_batch(&mut self, rng: &mut ChaCha8Rng, batch: u32) -> Vec<EntityKind> {
        let mut kinds = Vec::with_capacity(batch as usize);
        for _ in 0..batch {
            kinds.push(self.draw_one(rng));
        }
        kinds
    }

    pub(crate) fn draw_one(&mut self, rng: &mut ChaCha8Rng) -> EntityKind {
        if self.eligible.is_empty() {
            // Forward-progress fallback when every quota is exhausted.
            return EntityKind::Fighter;
        }
        let index = rng.gen_range(0..self.eligible.len());
        let kind = self.eligible[index];
        if let Some((_, quota)) = self.remaining.iter_mut().find(|(k, _)| *k == kind) {
            *quota = quota.saturating_sub(1);
            if *quota == 0 {
                self.eligible.remove(index);
            }
        }
        kind
    }

    /// Acquire one enemy: random point in the spawn area, then a
    /// movement target in the engagement area (the boss gets its fixed
    /// anchor). Spawn and activation are not atomic — a failed acquire
    /// reconciles the speculative active count.
    fn spawn_enemy(
        &mut self,
        world: &mut World,
        pool: &mut EntityPool,
        rng: &mut ChaCha8Rng,
        config: &DirectorConfig,
        kind: EntityKind,
        now: f64,
    ) {
        let spawn_pos = config.spawn_rect.random_point(rng);
        match pool.acquire(world, kind, spawn_pos, now) {
            Some(entity) => {
                let target = if kind == EntityKind::Boss {
                    config.boss_anchor
                } else {
                    config.engagement_rect.random_point(rng)
                };
                if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
                    enemy.target = target;
                }
            }
            None => {
                self.active_enemies = self.active_enemies.saturating_sub(1);
                warn!(?kind, "enemy pool exhausted, spawn skipped");
            }
        }
    }
}
