//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Rotation, SimTime, UnitId, Vec3};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: Option<ShipView>,
    pub enemies: Vec<EnemyView>,
    pub objectives: Vec<ObjectiveView>,
    pub skill_points: u32,
    pub events: Vec<GameEvent>,
}

/// The player ship on the tactical display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipView {
    pub unit: UnitId,
    pub position: Vec3,
    pub rotation: Rotation,
    pub velocity: Vec3,
    pub health: f64,
    pub max_health: f64,
    pub shield: f64,
    /// Mounted weapon kinds, in mount order.
    pub weapons: Vec<WeaponKind>,
}

/// One live enemy agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub unit: UnitId,
    pub kind: EnemyKind,
    pub position: Vec3,
    pub rotation: Rotation,
    pub health: f64,
    pub max_health: f64,
    /// Current behavior state, if the machine is initialized.
    pub state: Option<StateId>,
    pub target: Option<UnitId>,
}

/// Objective progress for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveView {
    pub kind: ObjectiveKind,
    pub description: String,
    pub target_amount: u32,
    pub current_amount: u32,
    pub completed: bool,
    /// Seconds, for timed objectives.
    pub time_limit: Option<f64>,
    pub target_location: Option<Vec3>,
}
