//! Simulation engine for GALAXIA.
//!
//! Owns the hecs world and the entity pool, runs systems at a fixed
//! tick rate, and produces `GameStateSnapshot`s for the presentation
//! layer. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod pool;
pub mod systems;

pub use engine::SimulationEngine;
pub use galaxia_core as core;

#[cfg(test)]
mod tests;
