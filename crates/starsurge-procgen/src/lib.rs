//! Procedural generation for STARSURGE.
//!
//! Seeded star-system layout generation and per-level objective
//! generation and tracking. All randomness flows through an explicit
//! seeded generator threaded in by the caller.

pub mod generator;
pub mod objectives;

pub use generator::{GeneratorConfig, SystemLayout};
pub use objectives::ObjectiveManager;
pub use starsurge_core as core;
