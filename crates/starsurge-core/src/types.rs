//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 3D position/direction in simulation space (abstract units, Cartesian).
/// x = East, z = North (forward), y = Up.
pub type Vec3 = glam::DVec3;

/// Orientation in simulation space.
pub type Rotation = glam::DQuat;

/// Stable identifier for a simulated unit (player ship or enemy agent).
///
/// Assigned by the engine at spawn time; never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Horizontal (XZ-plane) distance between two points.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f64 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}

/// Rotation whose forward axis (+Z) points along `direction`.
/// Returns identity for a zero direction.
pub fn look_rotation(direction: Vec3) -> Rotation {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Rotation::IDENTITY;
    }
    Rotation::from_rotation_arc(Vec3::Z, dir)
}
