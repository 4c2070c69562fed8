//! Events emitted by the simulation for the presentation layer.
//!
//! The core never calls back into subscribers; systems push events into a
//! buffer that the engine drains into each tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Rotation, UnitId, Vec3};

/// Notifications published by the core each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A unit moved.
    PositionChanged { unit: UnitId, position: Vec3 },
    /// A unit turned.
    RotationChanged { unit: UnitId, rotation: Rotation },
    /// A unit fired its weapon.
    Fired { unit: UnitId },
    /// A unit's health changed (damage only; there is no heal).
    HealthChanged { unit: UnitId, health: f64 },
    /// A unit's hull reached zero. Emitted exactly once per unit.
    Destroyed { unit: UnitId },
    /// An AI agent switched behavior states.
    StateChanged {
        unit: UnitId,
        previous: StateId,
        next: StateId,
    },
    /// An AI agent acquired a target.
    TargetAcquired { unit: UnitId, target: UnitId },
    /// An AI agent lost its target.
    TargetDropped { unit: UnitId },
    /// The spawner produced a new enemy.
    EnemySpawned { unit: UnitId, kind: EnemyKind },
    /// An enemy was removed after destruction.
    EnemyDestroyed { unit: UnitId, kind: EnemyKind },
    /// A scripted wave finished spawning.
    WaveSpawned { count: u32 },
    /// The unspent skill point pool changed.
    SkillPointsChanged { points: u32 },
    /// A skill node went from locked to level 1.
    NodeUnlocked { id: String },
    /// A skill node's level changed (includes the unlock to level 1).
    NodeLevelChanged { id: String, level: u32 },
    /// An objective's progress changed.
    ObjectiveUpdated { index: usize, kind: ObjectiveKind },
    /// An objective reached its target. Emitted once per objective.
    ObjectiveCompleted { index: usize, kind: ObjectiveKind },
    /// Every current objective is complete.
    AllObjectivesCompleted,
}
