//! Ship state model — kinematics, hull, shield, and fire cooldown.
//!
//! Owned exclusively by its unit; AI and views observe it read-only.
//! Mutations publish [`GameEvent`]s into a caller-supplied buffer instead
//! of invoking subscribers directly.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::events::GameEvent;
use crate::types::{Rotation, UnitId, Vec3};

/// Tunable ship parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipStats {
    pub max_health: f64,
    /// Forward speed (units/s).
    pub speed: f64,
    /// Turn rate (radians/s).
    pub turn_rate: f64,
    /// Minimum seconds between shots.
    pub fire_interval: f64,
    /// Damage per shot.
    pub damage: f64,
    /// Flat reduction applied to every incoming hit.
    pub shield: f64,
}

impl Default for ShipStats {
    fn default() -> Self {
        Self {
            max_health: SHIP_MAX_HEALTH,
            speed: SHIP_SPEED,
            turn_rate: SHIP_TURN_RATE,
            fire_interval: SHIP_FIRE_INTERVAL,
            damage: SHIP_DAMAGE,
            shield: 0.0,
        }
    }
}

/// Live state of one ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipState {
    pub unit: UnitId,
    pub stats: ShipStats,
    pub position: Vec3,
    pub rotation: Rotation,
    /// Derived from the last thrust; read-only for observers.
    pub velocity: Vec3,
    pub health: f64,
    last_fire_time: f64,
    destroyed: bool,
}

impl ShipState {
    pub fn new(unit: UnitId, stats: ShipStats, position: Vec3) -> Self {
        Self {
            unit,
            health: stats.max_health,
            stats,
            position,
            rotation: Rotation::IDENTITY,
            velocity: Vec3::ZERO,
            last_fire_time: f64::NEG_INFINITY,
            destroyed: false,
        }
    }

    /// Forward axis of the current orientation.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Apply thrust along `direction` for `dt` seconds.
    pub fn thrust(&mut self, direction: Vec3, dt: f64, events: &mut Vec<GameEvent>) {
        let dir = direction.normalize_or_zero();
        self.velocity = dir * self.stats.speed;
        self.position += self.velocity * dt;
        events.push(GameEvent::PositionChanged {
            unit: self.unit,
            position: self.position,
        });
    }

    /// Yaw by `amount * turn_rate * dt` radians around the up axis.
    pub fn turn(&mut self, amount: f64, dt: f64, events: &mut Vec<GameEvent>) {
        let delta = Rotation::from_rotation_y(amount * self.stats.turn_rate * dt);
        self.rotation = (self.rotation * delta).normalize();
        events.push(GameEvent::RotationChanged {
            unit: self.unit,
            rotation: self.rotation,
        });
    }

    /// Fire if the ship cooldown allows it. `now` is elapsed simulation
    /// time in seconds. Returns whether a shot was released.
    pub fn fire(&mut self, now: f64, events: &mut Vec<GameEvent>) -> bool {
        if now - self.last_fire_time < self.stats.fire_interval {
            return false;
        }
        self.last_fire_time = now;
        events.push(GameEvent::Fired { unit: self.unit });
        true
    }

    /// Apply raw damage: health drops by `max(0, amount - shield)`,
    /// clamped at zero. Reaching zero emits `Destroyed` exactly once; a
    /// destroyed ship ignores further damage.
    pub fn take_damage(&mut self, amount: f64, events: &mut Vec<GameEvent>) {
        if self.destroyed {
            return;
        }

        let hull_damage = (amount - self.stats.shield).max(0.0);
        self.health = (self.health - hull_damage).max(0.0);
        events.push(GameEvent::HealthChanged {
            unit: self.unit,
            health: self.health,
        });

        if self.health <= 0.0 {
            self.destroyed = true;
            events.push(GameEvent::Destroyed { unit: self.unit });
        }
    }

    /// Fraction of hull remaining, in [0, 1].
    pub fn health_fraction(&self) -> f64 {
        if self.stats.max_health <= 0.0 {
            return 0.0;
        }
        self.health / self.stats.max_health
    }

    pub fn set_position(&mut self, position: Vec3, events: &mut Vec<GameEvent>) {
        self.position = position;
        events.push(GameEvent::PositionChanged {
            unit: self.unit,
            position,
        });
    }

    pub fn set_rotation(&mut self, rotation: Rotation, events: &mut Vec<GameEvent>) {
        self.rotation = rotation;
        events.push(GameEvent::RotationChanged {
            unit: self.unit,
            rotation,
        });
    }
}
