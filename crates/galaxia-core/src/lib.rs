//! Core types and definitions for the GALAXIA entity lifecycle core.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, configuration, curves, state snapshots, events,
//! and constants. It has no dependency on the simulation engine or any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod curve;
pub mod enums;
pub mod events;
pub mod player;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
