//! Skill tree for STARSURGE.
//!
//! A DAG of unlockable upgrade nodes with AND-gate prerequisites,
//! atomic point spending, and multiplicative effect application.

pub mod effects;
pub mod factory;
pub mod node;
pub mod tree;

pub use starsurge_core as core;
pub use tree::SkillTree;
