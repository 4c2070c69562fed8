//! Core types and definitions for the STARSURGE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the ship model, weapons, components, commands, state snapshots,
//! events, and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod ship;
pub mod state;
pub mod types;
pub mod weapon;

#[cfg(test)]
mod tests;
