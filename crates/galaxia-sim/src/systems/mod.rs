//! Simulation systems, run in a fixed order each tick by the engine.

pub mod attack;
pub mod collision;
pub mod director;
pub mod effects;
pub mod motion;
pub mod snapshot;
