//! Per-agent AI controller.
//!
//! Owns the state machine, configuration, patrol route, and target
//! reference for one agent, and runs the target-acquisition loop the
//! states themselves do not: periodic scanning, stale-target detection,
//! and threat response to incoming damage.

use rand_chacha::ChaCha8Rng;

use starsurge_core::constants::AI_SCAN_INTERVAL_TICKS;
use starsurge_core::enums::{AiTrigger, StateId};
use starsurge_core::events::GameEvent;
use starsurge_core::ship::ShipState;
use starsurge_core::types::{UnitId, Vec3};

use crate::context::{AiCtx, AiConfig, PatrolRoute, TargetInfo};
use crate::machine::StateMachine;
use crate::states::full_behavior_set;

/// AI controller attached to each enemy agent.
pub struct AiController {
    machine: StateMachine,
    config: AiConfig,
    patrol: PatrolRoute,
    target: Option<UnitId>,
    ticks: u64,
}

impl AiController {
    pub fn new(config: AiConfig, patrol_points: Vec<Vec3>) -> Self {
        Self {
            machine: full_behavior_set(),
            config,
            patrol: PatrolRoute::new(patrol_points),
            target: None,
            ticks: 0,
        }
    }

    /// Current behavior state, if the machine has been initialized.
    pub fn state(&self) -> Option<StateId> {
        self.machine.current()
    }

    /// Current target unit, if any.
    pub fn target(&self) -> Option<UnitId> {
        self.target
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// Advance this agent by one tick.
    ///
    /// `candidates` is the read-only pool of eligible targets this tick.
    /// The first call initializes the machine into the configured
    /// initial behavior.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        ship: &mut ShipState,
        candidates: &[TargetInfo],
        now: f64,
        dt: f64,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) {
        self.ticks += 1;

        if self.machine.current().is_none() {
            let initial = self.config.initial_behavior;
            let resolved = self.resolve(candidates);
            let Self {
                machine,
                config,
                patrol,
                ..
            } = self;
            let mut ctx = AiCtx {
                ship,
                target: resolved,
                now,
                dt,
                rng,
                config,
                patrol,
                events,
            };
            machine.set_initial_state(initial, &mut ctx);
        }

        // A target that vanished from the candidate pool is gone
        if let Some(id) = self.target {
            if !candidates.iter().any(|c| c.unit == id) {
                self.set_target(None, ship, candidates, now, dt, rng, events);
            }
        }

        if self.ticks % AI_SCAN_INTERVAL_TICKS == 0 {
            self.scan_for_targets(ship, candidates, now, dt, rng, events);
        }

        let resolved = self.resolve(candidates);
        let Self {
            machine,
            config,
            patrol,
            ..
        } = self;
        let mut ctx = AiCtx {
            ship,
            target: resolved,
            now,
            dt,
            rng,
            config,
            patrol,
            events,
        };
        machine.update(&mut ctx);
    }

    /// Assign or clear the target, forwarding TargetSpotted/TargetLost
    /// into the current state.
    #[allow(clippy::too_many_arguments)]
    pub fn set_target(
        &mut self,
        target: Option<UnitId>,
        ship: &mut ShipState,
        candidates: &[TargetInfo],
        now: f64,
        dt: f64,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) {
        self.target = target;
        match target {
            Some(id) => {
                events.push(GameEvent::TargetAcquired {
                    unit: ship.unit,
                    target: id,
                });
                self.trigger(AiTrigger::TargetSpotted, ship, candidates, now, dt, rng, events);
            }
            None => {
                events.push(GameEvent::TargetDropped { unit: ship.unit });
                self.trigger(AiTrigger::TargetLost, ship, candidates, now, dt, rng, events);
            }
        }
    }

    /// React to incoming damage: always TakeDamage, plus HealthLow once
    /// the hull fraction drops below the flee threshold.
    #[allow(clippy::too_many_arguments)]
    pub fn on_damage_received(
        &mut self,
        ship: &mut ShipState,
        candidates: &[TargetInfo],
        now: f64,
        dt: f64,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) {
        self.trigger(AiTrigger::TakeDamage, ship, candidates, now, dt, rng, events);
        if ship.health_fraction() < self.config.flee_health_threshold {
            self.trigger(AiTrigger::HealthLow, ship, candidates, now, dt, rng, events);
        }
    }

    /// Inject a trigger event into the current state.
    #[allow(clippy::too_many_arguments)]
    pub fn trigger(
        &mut self,
        trigger: AiTrigger,
        ship: &mut ShipState,
        candidates: &[TargetInfo],
        now: f64,
        dt: f64,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) {
        let resolved = self.resolve(candidates);
        let Self {
            machine,
            config,
            patrol,
            ..
        } = self;
        let mut ctx = AiCtx {
            ship,
            target: resolved,
            now,
            dt,
            rng,
            config,
            patrol,
            events,
        };
        machine.trigger(trigger, &mut ctx);
    }

    /// Select the nearest eligible candidate within detection range.
    /// Only a successful scan changes the target.
    #[allow(clippy::too_many_arguments)]
    fn scan_for_targets(
        &mut self,
        ship: &mut ShipState,
        candidates: &[TargetInfo],
        now: f64,
        dt: f64,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
    ) {
        let mut closest: Option<UnitId> = None;
        let mut closest_distance = f64::MAX;

        for candidate in candidates {
            if candidate.unit == ship.unit {
                continue;
            }
            let distance = ship.position.distance(candidate.position);
            if distance < self.config.detection_range && distance < closest_distance {
                closest_distance = distance;
                closest = Some(candidate.unit);
            }
        }

        if let Some(id) = closest {
            self.set_target(Some(id), ship, candidates, now, dt, rng, events);
        }
    }

    fn resolve(&self, candidates: &[TargetInfo]) -> Option<TargetInfo> {
        self.target
            .and_then(|id| candidates.iter().copied().find(|c| c.unit == id))
    }
}
