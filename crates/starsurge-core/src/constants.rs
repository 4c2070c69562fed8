//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Ship defaults ---

/// Default hull strength.
pub const SHIP_MAX_HEALTH: f64 = 100.0;

/// Default forward speed (units/s).
pub const SHIP_SPEED: f64 = 5.0;

/// Default turn rate (radians/s, half a revolution per second).
pub const SHIP_TURN_RATE: f64 = std::f64::consts::PI;

/// Minimum seconds between shots from the ship's own cooldown.
pub const SHIP_FIRE_INTERVAL: f64 = 0.5;

/// Default shot damage.
pub const SHIP_DAMAGE: f64 = 10.0;

// --- AI ---

/// Target scan cadence: one scan every N ticks.
pub const AI_SCAN_INTERVAL_TICKS: u64 = 30;

/// Default target detection range.
pub const AI_DETECTION_RANGE: f64 = 100.0;

/// Default weapons range.
pub const AI_ATTACK_RANGE: f64 = 50.0;

/// Health fraction below which HealthLow is raised.
pub const AI_FLEE_HEALTH_THRESHOLD: f64 = 0.3;

/// Idle dwell time bounds (seconds).
pub const IDLE_DWELL_MIN_SECS: f64 = 3.0;
pub const IDLE_DWELL_MAX_SECS: f64 = 7.0;

/// Distance at which a patrol point counts as reached.
pub const PATROL_ARRIVE_RADIUS: f64 = 5.0;

/// Dwell at a reached patrol point (seconds).
pub const PATROL_DWELL_MIN_SECS: f64 = 1.0;
pub const PATROL_DWELL_MAX_SECS: f64 = 3.0;

/// Radius of the fallback random patrol point when no route is configured.
pub const PATROL_FALLBACK_RADIUS: f64 = 100.0;

/// Minimum seconds between shots while in the Attack state.
/// Independent of the ship cooldown; the effective rate is the
/// slower of the two.
pub const ATTACK_FIRE_INTERVAL: f64 = 0.5;

/// Flee duration bounds (seconds).
pub const FLEE_DURATION_MIN_SECS: f64 = 3.0;
pub const FLEE_DURATION_MAX_SECS: f64 = 7.0;

/// How far ahead along the flee direction the escape point is projected.
pub const FLEE_RUN_DISTANCE: f64 = 100.0;

/// Stand-off distance maintained by the Follow state.
pub const FOLLOW_STANDOFF: f64 = 15.0;

/// Scale applied to the remaining angle when steering toward a target.
pub const TURN_GAIN: f64 = 0.01;

// --- Spawner defaults ---

/// Delay before the first spawn decision (seconds).
pub const SPAWN_INITIAL_DELAY_SECS: f64 = 3.0;

/// Interval bounds between spawn decisions (seconds).
pub const SPAWN_MIN_INTERVAL_SECS: f64 = 5.0;
pub const SPAWN_MAX_INTERVAL_SECS: f64 = 15.0;

/// Live-agent cap enforced by the periodic spawner.
pub const SPAWN_MAX_ENEMIES_ALIVE: usize = 10;

/// Radius of the spawn circle around the current target.
pub const SPAWN_DISTANCE: f64 = 200.0;

/// Default cumulative type weights. Whatever probability mass the four
/// listed kinds leave unclaimed falls through to Boss.
pub const SPAWN_FIGHTER_PROBABILITY: f64 = 0.5;
pub const SPAWN_BOMBER_PROBABILITY: f64 = 0.3;
pub const SPAWN_SCOUT_PROBABILITY: f64 = 0.15;
pub const SPAWN_ELITE_PROBABILITY: f64 = 0.05;

// --- Progression ---

/// Skill points granted per destroyed enemy.
pub const SKILL_POINTS_PER_KILL: u32 = 1;
