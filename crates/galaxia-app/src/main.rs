//! Headless runner: seeds an engine, plays a scripted session, and
//! prints one snapshot per simulated second as JSON lines.
//!
//! Usage: `galaxia-app [seed] [ticks]`

use std::env;
use std::error::Error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use galaxia_core::commands::GameCommand;
use galaxia_core::constants::TICK_RATE;
use galaxia_core::types::Vec2;
use galaxia_sim::engine::{SimConfig, SimulationEngine};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("galaxia_sim=info".parse()?))
        .init();

    let args: Vec<String> = env::args().collect();
    let seed: u64 = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(42);
    let ticks: u64 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(3600);

    info!(seed, ticks, "starting headless session");

    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    })?;

    engine.queue_command(GameCommand::StartGame);
    engine.queue_command(GameCommand::SetFiring { firing: true });

    for tick in 0..ticks {
        // Sweep the player across the bottom of the field so aimed
        // patterns have a moving target.
        let t = tick as f64 / TICK_RATE as f64;
        engine.queue_command(GameCommand::MovePlayer {
            position: Vec2::new((t * 0.7).sin() * 6.0, -8.0),
        });

        let snapshot = engine.tick();
        if tick % u64::from(TICK_RATE) == 0 {
            println!("{}", serde_json::to_string(&snapshot)?);
        }
    }

    info!(
        score = engine.record().score,
        wave = engine.record().wave,
        "session finished"
    );
    Ok(())
}
