//! ECS marker components.
//!
//! Plain data only; game logic lives in systems. The richer per-unit
//! state ([`crate::ship::ShipState`], the AI controller) attaches as
//! separate components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// Marks an entity as the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OwnShip;

/// Marks an entity as an AI-driven enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
}
