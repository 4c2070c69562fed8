//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{UnitId, Vec3};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a new game: generate the system layout and objectives,
    /// spawn the player ship, and begin spawning enemies.
    NewGame { difficulty: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,

    // --- Player ship ---
    /// Thrust along a world-space direction for this tick.
    Thrust { direction: Vec3 },
    /// Turn by a signed amount (scaled by the ship turn rate).
    Turn { amount: f64 },
    /// Fire the ship's weapon (subject to its cooldown).
    Fire,

    // --- Combat input from the collaborator (hit detection is external) ---
    /// Apply raw damage to a unit.
    DamageUnit { unit: UnitId, amount: f64 },
    /// Assign or clear an AI agent's target.
    AssignTarget {
        unit: UnitId,
        target: Option<UnitId>,
    },

    // --- Skill tree ---
    UnlockSkill { id: String },
    LevelUpSkill { id: String },
    GrantSkillPoints { amount: u32 },

    // --- Spawner ---
    /// (Re)start the periodic spawner; replaces any in-flight wait.
    StartSpawning,
    /// Stop the periodic spawner.
    StopSpawning,
    /// Spawn an exact wave inside a disc, independent of the cap.
    SpawnWave {
        fighters: u32,
        bombers: u32,
        scouts: u32,
        center: Vec3,
        radius: f64,
    },

    // --- Objectives ---
    /// Report external progress (item collected, escort step, ...).
    RecordProgress { kind: ObjectiveKind, amount: u32 },
}
