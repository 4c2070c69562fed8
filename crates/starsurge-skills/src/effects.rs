//! Skill effects applied to the player ship and loadout.
//!
//! The tree applies effects in unspecified iteration order, so every
//! effect must be order-independent: percentage boosts stack
//! multiplicatively against base stats and weapon unlocks are
//! idempotent. The engine recomputes from base stats after every tree
//! mutation rather than mutating live stats in place.

use serde::{Deserialize, Serialize};

use starsurge_core::enums::WeaponKind;
use starsurge_core::ship::ShipStats;
use starsurge_core::weapon::Loadout;

/// What an unlocked node does, scaled by its current level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SkillEffect {
    /// +percent ship speed per level.
    SpeedBoost { percent: f64 },
    /// +percent max hull per level.
    HealthBoost { percent: f64 },
    /// +percent weapon and ship damage per level.
    DamageBoost { percent: f64 },
    /// Mount a new weapon once unlocked.
    WeaponUnlock { kind: WeaponKind },
}

impl SkillEffect {
    /// Apply this effect at `level` against `stats` and `loadout`.
    pub fn apply(&self, level: u32, stats: &mut ShipStats, loadout: &mut Loadout) {
        if level == 0 {
            return;
        }
        match self {
            SkillEffect::SpeedBoost { percent } => {
                stats.speed *= boost_multiplier(*percent, level);
            }
            SkillEffect::HealthBoost { percent } => {
                stats.max_health *= boost_multiplier(*percent, level);
            }
            SkillEffect::DamageBoost { percent } => {
                let mult = boost_multiplier(*percent, level);
                stats.damage *= mult;
                for weapon in &mut loadout.weapons {
                    weapon.upgrade(mult, 1.0, 1.0);
                }
            }
            SkillEffect::WeaponUnlock { kind } => {
                loadout.add(*kind);
            }
        }
    }
}

/// `1 + percent * level / 100`.
fn boost_multiplier(percent: f64, level: u32) -> f64 {
    1.0 + percent * level as f64 / 100.0
}
