//! Per-tick context handed to behavior states.
//!
//! Bundles the agent's ship, the resolved target, timing, the seeded
//! RNG, configuration, and the event buffer, plus the shared movement
//! and fire primitives every state issues intents through.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starsurge_core::constants::*;
use starsurge_core::enums::StateId;
use starsurge_core::events::GameEvent;
use starsurge_core::ship::ShipState;
use starsurge_core::types::{look_rotation, UnitId, Vec3};

/// A target candidate visible to an agent this tick.
#[derive(Debug, Clone, Copy)]
pub struct TargetInfo {
    pub unit: UnitId,
    pub position: Vec3,
}

/// Static AI tuning for one agent, supplied at construction.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub initial_behavior: StateId,
    pub detection_range: f64,
    pub attack_range: f64,
    /// Health fraction below which HealthLow is raised.
    pub flee_health_threshold: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            initial_behavior: StateId::Patrol,
            detection_range: AI_DETECTION_RANGE,
            attack_range: AI_ATTACK_RANGE,
            flee_health_threshold: AI_FLEE_HEALTH_THRESHOLD,
        }
    }
}

/// Round-robin patrol route. With no configured points, each request
/// degrades to a random point near the agent.
#[derive(Debug, Clone, Default)]
pub struct PatrolRoute {
    points: Vec<Vec3>,
    index: usize,
}

impl PatrolRoute {
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points, index: 0 }
    }

    /// Next waypoint: round-robin over configured points, or a random
    /// point within [`PATROL_FALLBACK_RADIUS`] of `from` if none are.
    pub fn next_point(&mut self, from: Vec3, rng: &mut ChaCha8Rng) -> Vec3 {
        if self.points.is_empty() {
            return from + random_in_disc(rng, PATROL_FALLBACK_RADIUS);
        }
        let point = self.points[self.index];
        self.index = (self.index + 1) % self.points.len();
        point
    }
}

/// Everything a behavior state may read or act on during one tick.
pub struct AiCtx<'a> {
    pub ship: &'a mut ShipState,
    /// The agent's target, resolved against this tick's candidates.
    pub target: Option<TargetInfo>,
    /// Elapsed simulation time (seconds).
    pub now: f64,
    /// Tick duration (seconds).
    pub dt: f64,
    pub rng: &'a mut ChaCha8Rng,
    pub config: &'a AiConfig,
    pub patrol: &'a mut PatrolRoute,
    pub events: &'a mut Vec<GameEvent>,
}

impl AiCtx<'_> {
    /// Shared movement primitive: thrust along the normalized direction
    /// to `point` and steer toward it without snapping. The turn rate is
    /// the remaining angle scaled by [`TURN_GAIN`], signed by the cross
    /// product of the forward vector and the target direction.
    pub fn move_towards(&mut self, point: Vec3) {
        let to_target = point - self.ship.position;
        let direction = to_target.normalize_or_zero();
        self.ship.thrust(direction, self.dt, self.events);

        if direction != Vec3::ZERO {
            let desired = look_rotation(to_target);
            let angle = self.ship.rotation.angle_between(desired);
            let steer = Vec3::Y.dot(self.ship.forward().cross(direction)).signum();
            self.ship.turn(steer * angle * TURN_GAIN, self.dt, self.events);
        }
    }

    /// Fire primitive; the ship's own cooldown applies on top of any
    /// per-state rate limit.
    pub fn fire(&mut self) -> bool {
        self.ship.fire(self.now, self.events)
    }

    /// Next patrol waypoint for this agent.
    pub fn next_patrol_point(&mut self) -> Vec3 {
        self.patrol.next_point(self.ship.position, self.rng)
    }
}

/// Uniform random point in the horizontal disc of `radius` around the origin.
pub fn random_in_disc(rng: &mut ChaCha8Rng, radius: f64) -> Vec3 {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let r = radius * rng.gen::<f64>().sqrt();
    Vec3::new(r * angle.sin(), 0.0, r * angle.cos())
}

/// Random horizontal unit direction.
pub fn random_horizontal_direction(rng: &mut ChaCha8Rng) -> Vec3 {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    Vec3::new(angle.sin(), 0.0, angle.cos())
}
