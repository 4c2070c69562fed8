//! Simulation engine for STARSURGE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameSnapshots for the frontend.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::GameEngine;
pub use starsurge_core as core;
