//! Weapon data model: per-weapon cooldowns and multiplicative upgrades.
//!
//! Projectile flight and hit detection belong to the presentation layer;
//! the core tracks damage, rate, range, and the upgrade math the skill
//! tree applies.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// One mounted weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub damage: f64,
    /// Minimum seconds between shots.
    pub fire_interval: f64,
    pub range: f64,
    last_fire_time: f64,
}

impl Weapon {
    /// Base parameters for each weapon family.
    pub fn of_kind(kind: WeaponKind) -> Self {
        let (damage, fire_interval, range) = match kind {
            WeaponKind::Cannon => (10.0, 0.5, 50.0),
            WeaponKind::LaserBeam => (15.0, 0.25, 80.0),
            WeaponKind::MissileLauncher => (40.0, 2.0, 120.0),
            WeaponKind::Shotgun => (25.0, 1.0, 30.0),
            WeaponKind::PlasmaCannon => (60.0, 1.5, 100.0),
        };
        Self {
            kind,
            damage,
            fire_interval,
            range,
            last_fire_time: f64::NEG_INFINITY,
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self.kind {
            WeaponKind::Cannon => "Cannon",
            WeaponKind::LaserBeam => "Precision Laser",
            WeaponKind::MissileLauncher => "Missile Launcher",
            WeaponKind::Shotgun => "Spread Cannon",
            WeaponKind::PlasmaCannon => "Plasma Cannon",
        }
    }

    /// Fire if this weapon's cooldown allows it.
    pub fn fire(&mut self, now: f64) -> bool {
        if now - self.last_fire_time < self.fire_interval {
            return false;
        }
        self.last_fire_time = now;
        true
    }

    /// Multiplicative upgrade. A rate multiplier above 1 shortens the
    /// interval between shots.
    pub fn upgrade(&mut self, damage_mult: f64, rate_mult: f64, range_mult: f64) {
        self.damage *= damage_mult;
        if rate_mult > 0.0 {
            self.fire_interval /= rate_mult;
        }
        self.range *= range_mult;
    }
}

/// The set of weapons mounted on a ship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Loadout {
    pub weapons: Vec<Weapon>,
}

impl Loadout {
    /// A loadout with the starting cannon.
    pub fn standard() -> Self {
        Self {
            weapons: vec![Weapon::of_kind(WeaponKind::Cannon)],
        }
    }

    /// Mount a weapon of `kind`. Duplicate kinds are ignored.
    /// Returns whether the weapon was added.
    pub fn add(&mut self, kind: WeaponKind) -> bool {
        if self.has(kind) {
            return false;
        }
        self.weapons.push(Weapon::of_kind(kind));
        true
    }

    pub fn has(&self, kind: WeaponKind) -> bool {
        self.weapons.iter().any(|w| w.kind == kind)
    }

    pub fn weapon_for(&self, kind: WeaponKind) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.kind == kind)
    }

    pub fn weapon_for_mut(&mut self, kind: WeaponKind) -> Option<&mut Weapon> {
        self.weapons.iter_mut().find(|w| w.kind == kind)
    }
}
