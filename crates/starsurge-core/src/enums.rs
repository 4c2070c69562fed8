//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline attacker, common.
    Fighter,
    /// Slow, heavy hull, hits hard.
    Bomber,
    /// Fast and fragile, long detection range.
    Scout,
    /// Upgraded fighter, rare.
    Elite,
    /// Remainder-bucket spawn: anything the weighted roll leaves over.
    Boss,
}

/// Event kinds consumed by the AI state machines.
///
/// Stateless; context (the spotted target) travels separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiTrigger {
    TargetSpotted,
    TargetLost,
    HealthLow,
    TakeDamage,
    AllyNeedsHelp,
    ReachedDestination,
    CommandReceived,
    NoAmmo,
}

/// The closed set of AI behavior states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateId {
    #[default]
    Idle,
    Patrol,
    Attack,
    Flee,
    Follow,
}

impl StateId {
    /// Display name used in state-changed notifications.
    pub fn name(&self) -> &'static str {
        match self {
            StateId::Idle => "Idle",
            StateId::Patrol => "Patrol",
            StateId::Attack => "Attack",
            StateId::Flee => "Flee",
            StateId::Follow => "Follow",
        }
    }
}

/// Weapon families unlockable through the skill tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Starting weapon.
    Cannon,
    LaserBeam,
    MissileLauncher,
    Shotgun,
    PlasmaCannon,
}

/// Level objective category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveKind {
    DestroyEnemies,
    CollectItems,
    SurviveTime,
    ReachLocation,
    DefendTarget,
    EscortAlly,
}

impl ObjectiveKind {
    /// All objective kinds, in generation-roll order.
    pub const ALL: [ObjectiveKind; 6] = [
        ObjectiveKind::DestroyEnemies,
        ObjectiveKind::CollectItems,
        ObjectiveKind::SurviveTime,
        ObjectiveKind::ReachLocation,
        ObjectiveKind::DefendTarget,
        ObjectiveKind::EscortAlly,
    ];
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    Complete,
}
