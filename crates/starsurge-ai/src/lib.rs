//! AI behavior engine for STARSURGE.
//!
//! Implements the trigger-driven behavior state machine, the five
//! concrete behavior states, the per-agent controller (target
//! acquisition, steering, patrol routing), and archetype-driven
//! behavior profiles. Pure logic over core types; no ECS dependency.

pub mod context;
pub mod controller;
pub mod machine;
pub mod profiles;
pub mod states;

pub use controller::AiController;
pub use starsurge_core as core;

#[cfg(test)]
mod tests;
