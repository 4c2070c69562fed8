//! Archetype-specific behavioral profiles.
//!
//! Consolidates per-archetype ship stats and AI tuning for the spawner.

use starsurge_core::constants::*;
use starsurge_core::enums::{EnemyKind, StateId};
use starsurge_core::ship::ShipStats;

use crate::context::AiConfig;

/// Full parameter set for one enemy archetype.
pub struct EnemyProfile {
    pub stats: ShipStats,
    pub ai: AiConfig,
}

/// Get the behavioral profile for a given archetype.
pub fn behavior_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Fighter => EnemyProfile {
            stats: ShipStats {
                max_health: 80.0,
                speed: 6.0,
                ..Default::default()
            },
            ai: AiConfig::default(),
        },
        EnemyKind::Bomber => EnemyProfile {
            stats: ShipStats {
                max_health: 150.0,
                speed: 3.5,
                turn_rate: SHIP_TURN_RATE * 0.6,
                fire_interval: 2.0,
                damage: 25.0,
                shield: 10.0,
                ..Default::default()
            },
            ai: AiConfig {
                detection_range: 80.0,
                attack_range: 40.0,
                flee_health_threshold: 0.2,
                ..Default::default()
            },
        },
        EnemyKind::Scout => EnemyProfile {
            stats: ShipStats {
                max_health: 40.0,
                speed: 9.0,
                turn_rate: SHIP_TURN_RATE * 1.5,
                fire_interval: 0.4,
                damage: 5.0,
                ..Default::default()
            },
            ai: AiConfig {
                detection_range: 150.0,
                attack_range: 30.0,
                // Scouts break off early and report back
                flee_health_threshold: 0.5,
                ..Default::default()
            },
        },
        EnemyKind::Elite => EnemyProfile {
            stats: ShipStats {
                max_health: 120.0,
                speed: 7.0,
                fire_interval: 0.35,
                damage: 15.0,
                shield: 20.0,
                ..Default::default()
            },
            ai: AiConfig {
                detection_range: 120.0,
                attack_range: 60.0,
                flee_health_threshold: 0.15,
                ..Default::default()
            },
        },
        EnemyKind::Boss => EnemyProfile {
            stats: ShipStats {
                max_health: 400.0,
                speed: 4.0,
                turn_rate: SHIP_TURN_RATE * 0.5,
                fire_interval: 1.0,
                damage: 30.0,
                shield: 50.0,
                ..Default::default()
            },
            ai: AiConfig {
                initial_behavior: StateId::Attack,
                detection_range: 200.0,
                attack_range: 80.0,
                flee_health_threshold: 0.05,
            },
        },
    }
}
