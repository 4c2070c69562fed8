//! Enemy spawning system — probabilistic population control.
//!
//! The periodic loop waits an initial delay, then repeatedly prunes
//! dead agents and, while the live count is under the cap, spawns one
//! enemy of a weighted-random kind on a circle around the current
//! target, sleeping a random interval between decisions. The wait is a
//! resumable clock, not a thread: `stop` cancels it and `start` always
//! replaces any in-flight wait.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use starsurge_core::components::Enemy;
use starsurge_core::constants::*;
use starsurge_core::enums::EnemyKind;
use starsurge_core::events::GameEvent;
use starsurge_core::ship::ShipState;
use starsurge_core::types::Vec3;

use starsurge_ai::context::TargetInfo;

use crate::world_setup::spawn_enemy;

/// Spawner tuning, supplied at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnerConfig {
    pub initial_delay_secs: f64,
    pub min_interval_secs: f64,
    pub max_interval_secs: f64,
    pub max_enemies_alive: usize,
    /// Radius of the spawn circle around the target.
    pub spawn_distance: f64,
    /// Cumulative type weights; the remainder falls through to Boss.
    pub fighter_probability: f64,
    pub bomber_probability: f64,
    pub scout_probability: f64,
    pub elite_probability: f64,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            initial_delay_secs: SPAWN_INITIAL_DELAY_SECS,
            min_interval_secs: SPAWN_MIN_INTERVAL_SECS,
            max_interval_secs: SPAWN_MAX_INTERVAL_SECS,
            max_enemies_alive: SPAWN_MAX_ENEMIES_ALIVE,
            spawn_distance: SPAWN_DISTANCE,
            fighter_probability: SPAWN_FIGHTER_PROBABILITY,
            bomber_probability: SPAWN_BOMBER_PROBABILITY,
            scout_probability: SPAWN_SCOUT_PROBABILITY,
            elite_probability: SPAWN_ELITE_PROBABILITY,
        }
    }
}

/// The resumable wait state of the periodic loop.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SpawnClock {
    Stopped,
    /// Counting down the initial delay.
    Delay { remaining: f64 },
    /// Counting down to the next spawn decision.
    Waiting { remaining: f64 },
}

/// Periodic enemy spawner.
pub struct EnemySpawner {
    config: SpawnerConfig,
    clock: SpawnClock,
}

impl EnemySpawner {
    pub fn new(config: SpawnerConfig) -> Self {
        Self {
            config,
            clock: SpawnClock::Stopped,
        }
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.clock != SpawnClock::Stopped
    }

    /// Start (or restart) the loop. Idempotent: any in-flight wait is
    /// replaced by a fresh initial delay.
    pub fn start(&mut self) {
        self.clock = SpawnClock::Delay {
            remaining: self.config.initial_delay_secs,
        };
    }

    /// Cancel the loop. No spawn decisions run while stopped.
    pub fn stop(&mut self) {
        self.clock = SpawnClock::Stopped;
    }

    /// Advance the clock by `dt`; on expiry, make one spawn decision and
    /// re-arm with a random interval.
    #[allow(clippy::too_many_arguments)]
    pub fn run(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        dt: f64,
        target: Option<TargetInfo>,
        now: f64,
        next_unit: &mut u32,
        events: &mut Vec<GameEvent>,
    ) {
        let expired = match &mut self.clock {
            SpawnClock::Stopped => return,
            SpawnClock::Delay { remaining } | SpawnClock::Waiting { remaining } => {
                *remaining -= dt;
                *remaining <= 0.0
            }
        };
        if !expired {
            return;
        }

        // Dead agents are pruned lazily, before the spawn decision
        if live_count(world) < self.config.max_enemies_alive {
            if let Some(target) = target {
                let kind = self.roll_kind(rng);
                let position = target.position + on_circle(rng, self.config.spawn_distance);
                spawn_enemy(
                    world,
                    rng,
                    kind,
                    position,
                    Some(target),
                    now,
                    next_unit,
                    events,
                );
            }
        }

        self.clock = SpawnClock::Waiting {
            remaining: rng.gen_range(self.config.min_interval_secs..self.config.max_interval_secs),
        };
    }

    /// Spawn an exact wave of three kinds at random points within a
    /// disc. Independent of the cap and the periodic clock.
    #[allow(clippy::too_many_arguments)]
    pub fn spawn_wave(
        world: &mut World,
        rng: &mut ChaCha8Rng,
        fighters: u32,
        bombers: u32,
        scouts: u32,
        center: Vec3,
        radius: f64,
        target: Option<TargetInfo>,
        now: f64,
        next_unit: &mut u32,
        events: &mut Vec<GameEvent>,
    ) {
        let batch = [
            (EnemyKind::Fighter, fighters),
            (EnemyKind::Bomber, bombers),
            (EnemyKind::Scout, scouts),
        ];
        for (kind, count) in batch {
            for _ in 0..count {
                let position = center + in_disc(rng, radius);
                spawn_enemy(world, rng, kind, position, target, now, next_unit, events);
            }
        }
        events.push(GameEvent::WaveSpawned {
            count: fighters + bombers + scouts,
        });
    }

    /// Cumulative-probability roll over the configured weights. Any
    /// roll beyond their sum lands in the Boss remainder bucket.
    pub fn roll_kind(&self, rng: &mut ChaCha8Rng) -> EnemyKind {
        let roll: f64 = rng.gen();
        kind_for_roll(&self.config, roll)
    }
}

/// Resolve a [0, 1) roll against cumulative weights.
pub fn kind_for_roll(config: &SpawnerConfig, roll: f64) -> EnemyKind {
    let mut cumulative = config.fighter_probability;
    if roll < cumulative {
        return EnemyKind::Fighter;
    }
    cumulative += config.bomber_probability;
    if roll < cumulative {
        return EnemyKind::Bomber;
    }
    cumulative += config.scout_probability;
    if roll < cumulative {
        return EnemyKind::Scout;
    }
    cumulative += config.elite_probability;
    if roll < cumulative {
        return EnemyKind::Elite;
    }
    EnemyKind::Boss
}

/// Count enemies that are still alive.
pub fn live_count(world: &World) -> usize {
    let mut query = world.query::<(&Enemy, &ShipState)>();
    query
        .iter()
        .filter(|(_, (_, ship))| !ship.is_destroyed())
        .count()
}

/// Random point ON the circle of `radius` (horizontal).
fn on_circle(rng: &mut ChaCha8Rng, radius: f64) -> Vec3 {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    Vec3::new(angle.sin(), 0.0, angle.cos()) * radius
}

/// Uniform random point WITHIN the disc of `radius` (horizontal).
fn in_disc(rng: &mut ChaCha8Rng, radius: f64) -> Vec3 {
    let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    let r = radius * rng.gen::<f64>().sqrt();
    Vec3::new(r * angle.sin(), 0.0, r * angle.cos())
}
