//! The five concrete behavior states.
//!
//! Each state owns its private timers and carries a transition table
//! fixed at construction. States never mutate the machine directly;
//! they return a [`Directive`] and the machine applies it.

use rand::Rng;

use starsurge_core::constants::*;
use starsurge_core::enums::{AiTrigger, StateId};
use starsurge_core::types::Vec3;

use crate::context::{random_horizontal_direction, AiCtx};
use crate::machine::{Behavior, Directive, StateMachine};

fn lookup(table: &[(AiTrigger, StateId)], trigger: AiTrigger) -> Option<StateId> {
    table
        .iter()
        .find(|(t, _)| *t == trigger)
        .map(|(_, next)| *next)
}

/// Wait in place for a sampled dwell, then start patrolling.
pub struct Idle {
    elapsed: f64,
    dwell: f64,
}

impl Idle {
    const TRANSITIONS: &'static [(AiTrigger, StateId)] = &[
        (AiTrigger::TargetSpotted, StateId::Attack),
        (AiTrigger::TakeDamage, StateId::Flee),
        (AiTrigger::CommandReceived, StateId::Patrol),
    ];

    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            dwell: IDLE_DWELL_MAX_SECS,
        }
    }
}

impl Behavior for Idle {
    fn enter(&mut self, ctx: &mut AiCtx) {
        self.elapsed = 0.0;
        self.dwell = ctx.rng.gen_range(IDLE_DWELL_MIN_SECS..IDLE_DWELL_MAX_SECS);
    }

    fn update(&mut self, ctx: &mut AiCtx) -> Option<Directive> {
        self.elapsed += ctx.dt;
        if self.elapsed >= self.dwell {
            return Some(Directive::ChangeTo(StateId::Patrol));
        }
        None
    }

    fn exit(&mut self, _ctx: &mut AiCtx) {}

    fn transition_for(&self, trigger: AiTrigger) -> Option<StateId> {
        lookup(Self::TRANSITIONS, trigger)
    }
}

/// Cycle through waypoints, pausing briefly at each.
pub struct Patrol {
    waypoint: Vec3,
    reached: bool,
    /// Absolute time at which to advance to the next waypoint.
    next_move_time: f64,
}

impl Patrol {
    const TRANSITIONS: &'static [(AiTrigger, StateId)] = &[
        (AiTrigger::TargetSpotted, StateId::Attack),
        (AiTrigger::TakeDamage, StateId::Attack),
        (AiTrigger::HealthLow, StateId::Flee),
    ];

    pub fn new() -> Self {
        Self {
            waypoint: Vec3::ZERO,
            reached: false,
            next_move_time: 0.0,
        }
    }
}

impl Behavior for Patrol {
    fn enter(&mut self, ctx: &mut AiCtx) {
        self.waypoint = ctx.next_patrol_point();
        self.reached = false;
    }

    fn update(&mut self, ctx: &mut AiCtx) -> Option<Directive> {
        let distance = ctx.ship.position.distance(self.waypoint);

        if distance < PATROL_ARRIVE_RADIUS {
            if !self.reached {
                self.reached = true;
                self.next_move_time =
                    ctx.now + ctx.rng.gen_range(PATROL_DWELL_MIN_SECS..PATROL_DWELL_MAX_SECS);
            }
            if ctx.now > self.next_move_time {
                self.waypoint = ctx.next_patrol_point();
                self.reached = false;
            }
        } else {
            ctx.move_towards(self.waypoint);
        }
        None
    }

    fn exit(&mut self, _ctx: &mut AiCtx) {}

    fn transition_for(&self, trigger: AiTrigger) -> Option<StateId> {
        lookup(Self::TRANSITIONS, trigger)
    }
}

/// Close on the target and fire inside attack range.
pub struct Attack {
    last_fire_time: f64,
    /// State-local rate limit; the ship cooldown applies independently,
    /// so the effective rate is the slower of the two.
    fire_interval: f64,
}

impl Attack {
    const TRANSITIONS: &'static [(AiTrigger, StateId)] = &[
        (AiTrigger::TargetLost, StateId::Patrol),
        (AiTrigger::HealthLow, StateId::Flee),
        (AiTrigger::NoAmmo, StateId::Flee),
    ];

    pub fn new() -> Self {
        Self {
            last_fire_time: f64::NEG_INFINITY,
            fire_interval: ATTACK_FIRE_INTERVAL,
        }
    }
}

impl Behavior for Attack {
    fn enter(&mut self, _ctx: &mut AiCtx) {}

    fn update(&mut self, ctx: &mut AiCtx) -> Option<Directive> {
        let Some(target) = ctx.target else {
            return Some(Directive::Raise(AiTrigger::TargetLost));
        };

        let distance = ctx.ship.position.distance(target.position);

        if distance <= ctx.config.attack_range {
            ctx.move_towards(target.position);
            if ctx.now - self.last_fire_time > self.fire_interval {
                ctx.fire();
                self.last_fire_time = ctx.now;
            }
        } else if distance <= ctx.config.detection_range {
            // Close distance without firing
            ctx.move_towards(target.position);
        } else {
            return Some(Directive::Raise(AiTrigger::TargetLost));
        }
        None
    }

    fn exit(&mut self, _ctx: &mut AiCtx) {}

    fn transition_for(&self, trigger: AiTrigger) -> Option<StateId> {
        lookup(Self::TRANSITIONS, trigger)
    }
}

/// Run away from the target for a sampled duration.
pub struct Flee {
    direction: Vec3,
    elapsed: f64,
    duration: f64,
}

impl Flee {
    const TRANSITIONS: &'static [(AiTrigger, StateId)] =
        &[(AiTrigger::ReachedDestination, StateId::Patrol)];

    pub fn new() -> Self {
        Self {
            direction: Vec3::Z,
            elapsed: 0.0,
            duration: FLEE_DURATION_MAX_SECS,
        }
    }

    fn away_from_target(ctx: &AiCtx) -> Option<Vec3> {
        ctx.target
            .map(|t| (ctx.ship.position - t.position).normalize_or_zero())
            .filter(|dir| *dir != Vec3::ZERO)
    }
}

impl Behavior for Flee {
    fn enter(&mut self, ctx: &mut AiCtx) {
        self.direction =
            Self::away_from_target(ctx).unwrap_or_else(|| random_horizontal_direction(ctx.rng));
        self.elapsed = 0.0;
        self.duration = ctx
            .rng
            .gen_range(FLEE_DURATION_MIN_SECS..FLEE_DURATION_MAX_SECS);
    }

    fn update(&mut self, ctx: &mut AiCtx) -> Option<Directive> {
        self.elapsed += ctx.dt;
        if self.elapsed >= self.duration {
            return Some(Directive::Raise(AiTrigger::ReachedDestination));
        }

        // Re-evaluate the escape direction while the pursuer moves
        if let Some(dir) = Self::away_from_target(ctx) {
            self.direction = dir;
        }
        let destination = ctx.ship.position + self.direction * FLEE_RUN_DISTANCE;
        ctx.move_towards(destination);
        None
    }

    fn exit(&mut self, _ctx: &mut AiCtx) {}

    fn transition_for(&self, trigger: AiTrigger) -> Option<StateId> {
        lookup(Self::TRANSITIONS, trigger)
    }
}

/// Shadow a designated target at a stand-off distance.
pub struct Follow {
    standoff: f64,
}

impl Follow {
    const TRANSITIONS: &'static [(AiTrigger, StateId)] = &[
        (AiTrigger::TargetLost, StateId::Patrol),
        (AiTrigger::CommandReceived, StateId::Idle),
        (AiTrigger::TakeDamage, StateId::Attack),
    ];

    pub fn new() -> Self {
        Self {
            standoff: FOLLOW_STANDOFF,
        }
    }
}

impl Behavior for Follow {
    fn enter(&mut self, _ctx: &mut AiCtx) {}

    fn update(&mut self, ctx: &mut AiCtx) -> Option<Directive> {
        let Some(target) = ctx.target else {
            return Some(Directive::Raise(AiTrigger::TargetLost));
        };

        let distance = ctx.ship.position.distance(target.position);
        if distance > self.standoff {
            ctx.move_towards(target.position);
        } else {
            // Hold station: back off along the approach vector
            let approach = (target.position - ctx.ship.position).normalize_or_zero();
            let station = target.position - approach * self.standoff;
            ctx.move_towards(station);
        }
        None
    }

    fn exit(&mut self, _ctx: &mut AiCtx) {}

    fn transition_for(&self, trigger: AiTrigger) -> Option<StateId> {
        lookup(Self::TRANSITIONS, trigger)
    }
}

/// A machine populated with the full behavior set.
pub fn full_behavior_set() -> StateMachine {
    let mut machine = StateMachine::new();
    machine.add_state(StateId::Idle, Box::new(Idle::new()));
    machine.add_state(StateId::Patrol, Box::new(Patrol::new()));
    machine.add_state(StateId::Attack, Box::new(Attack::new()));
    machine.add_state(StateId::Flee, Box::new(Flee::new()));
    machine.add_state(StateId::Follow, Box::new(Follow::new()));
    machine
}

impl Default for Idle {
    fn default() -> Self {
        Self::new()
    }
}
impl Default for Patrol {
    fn default() -> Self {
        Self::new()
    }
}
impl Default for Attack {
    fn default() -> Self {
        Self::new()
    }
}
impl Default for Flee {
    fn default() -> Self {
        Self::new()
    }
}
impl Default for Follow {
    fn default() -> Self {
        Self::new()
    }
}
