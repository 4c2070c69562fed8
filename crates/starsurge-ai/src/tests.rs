#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use starsurge_core::constants::*;
    use starsurge_core::enums::{AiTrigger, StateId};
    use starsurge_core::events::GameEvent;
    use starsurge_core::ship::{ShipState, ShipStats};
    use starsurge_core::types::{UnitId, Vec3};

    use crate::context::{AiCtx, AiConfig, PatrolRoute, TargetInfo};
    use crate::controller::AiController;
    use crate::machine::{Behavior, Directive, StateMachine};
    use crate::profiles::behavior_profile;
    use crate::states::full_behavior_set;

    /// Owns everything an AiCtx borrows, so tests can mint contexts.
    struct Harness {
        ship: ShipState,
        rng: ChaCha8Rng,
        config: AiConfig,
        patrol: PatrolRoute,
        events: Vec<GameEvent>,
        now: f64,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                ship: ShipState::new(UnitId(1), ShipStats::default(), Vec3::ZERO),
                rng: ChaCha8Rng::seed_from_u64(7),
                config: AiConfig::default(),
                patrol: PatrolRoute::default(),
                events: Vec::new(),
                now: 0.0,
            }
        }

        fn ctx(&mut self, target: Option<TargetInfo>, dt: f64) -> AiCtx<'_> {
            AiCtx {
                ship: &mut self.ship,
                target,
                now: self.now,
                dt,
                rng: &mut self.rng,
                config: &self.config,
                patrol: &mut self.patrol,
                events: &mut self.events,
            }
        }

        fn state_changes(&self) -> Vec<(StateId, StateId)> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    GameEvent::StateChanged { previous, next, .. } => Some((*previous, *next)),
                    _ => None,
                })
                .collect()
        }

        fn fired_count(&self) -> usize {
            self.events
                .iter()
                .filter(|e| matches!(e, GameEvent::Fired { .. }))
                .count()
        }
    }

    fn target_at(z: f64) -> TargetInfo {
        TargetInfo {
            unit: UnitId(99),
            position: Vec3::new(0.0, 0.0, z),
        }
    }

    /// The full static transition table, restated as the expectation.
    fn expected_transition(state: StateId, trigger: AiTrigger) -> Option<StateId> {
        use AiTrigger::*;
        use StateId::*;
        match (state, trigger) {
            (Idle, TargetSpotted) => Some(Attack),
            (Idle, TakeDamage) => Some(Flee),
            (Idle, CommandReceived) => Some(Patrol),
            (Patrol, TargetSpotted) => Some(Attack),
            (Patrol, TakeDamage) => Some(Attack),
            (Patrol, HealthLow) => Some(Flee),
            (Attack, TargetLost) => Some(Patrol),
            (Attack, HealthLow) => Some(Flee),
            (Attack, NoAmmo) => Some(Flee),
            (Flee, ReachedDestination) => Some(Patrol),
            (Follow, TargetLost) => Some(Patrol),
            (Follow, CommandReceived) => Some(Idle),
            (Follow, TakeDamage) => Some(Attack),
            _ => None,
        }
    }

    const ALL_STATES: [StateId; 5] = [
        StateId::Idle,
        StateId::Patrol,
        StateId::Attack,
        StateId::Flee,
        StateId::Follow,
    ];

    const ALL_TRIGGERS: [AiTrigger; 8] = [
        AiTrigger::TargetSpotted,
        AiTrigger::TargetLost,
        AiTrigger::HealthLow,
        AiTrigger::TakeDamage,
        AiTrigger::AllyNeedsHelp,
        AiTrigger::ReachedDestination,
        AiTrigger::CommandReceived,
        AiTrigger::NoAmmo,
    ];

    // ---- Machine ----

    #[test]
    fn test_full_transition_table() {
        for state in ALL_STATES {
            for trigger in ALL_TRIGGERS {
                let mut harness = Harness::new();
                let mut machine = full_behavior_set();
                machine.set_initial_state(state, &mut harness.ctx(None, DT));
                assert_eq!(machine.current(), Some(state));

                machine.trigger(trigger, &mut harness.ctx(Some(target_at(40.0)), DT));

                let expected = expected_transition(state, trigger).unwrap_or(state);
                assert_eq!(
                    machine.current(),
                    Some(expected),
                    "({state:?}, {trigger:?}) should land in {expected:?}"
                );

                let changes = harness.state_changes();
                if expected == state {
                    assert!(
                        changes.is_empty(),
                        "unmapped trigger ({state:?}, {trigger:?}) must not notify"
                    );
                } else {
                    assert_eq!(
                        changes,
                        vec![(state, expected)],
                        "exactly one notification per transition"
                    );
                }
            }
        }
    }

    /// Instrumented state that records enter/exit ordering.
    struct Recording {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        table: &'static [(AiTrigger, StateId)],
    }

    impl Behavior for Recording {
        fn enter(&mut self, _ctx: &mut AiCtx) {
            self.log.lock().unwrap().push(format!("enter:{}", self.tag));
        }
        fn update(&mut self, _ctx: &mut AiCtx) -> Option<Directive> {
            None
        }
        fn exit(&mut self, _ctx: &mut AiCtx) {
            self.log.lock().unwrap().push(format!("exit:{}", self.tag));
        }
        fn transition_for(&self, trigger: AiTrigger) -> Option<StateId> {
            self.table
                .iter()
                .find(|(t, _)| *t == trigger)
                .map(|(_, next)| *next)
        }
    }

    #[test]
    fn test_exit_precedes_enter() {
        let log: Arc<Mutex<Vec<String>>> = Arc::default();
        let mut machine = StateMachine::new();
        machine.add_state(
            StateId::Idle,
            Box::new(Recording {
                tag: "idle",
                log: log.clone(),
                table: &[(AiTrigger::CommandReceived, StateId::Patrol)],
            }),
        );
        machine.add_state(
            StateId::Patrol,
            Box::new(Recording {
                tag: "patrol",
                log: log.clone(),
                table: &[],
            }),
        );

        let mut harness = Harness::new();
        machine.set_initial_state(StateId::Idle, &mut harness.ctx(None, DT));
        machine.trigger(AiTrigger::CommandReceived, &mut harness.ctx(None, DT));

        assert_eq!(
            *log.lock().unwrap(),
            vec!["enter:idle", "exit:idle", "enter:patrol"],
            "exit of the outgoing state must precede enter of the incoming one"
        );
        assert_eq!(harness.state_changes(), vec![(StateId::Idle, StateId::Patrol)]);
    }

    #[test]
    #[should_panic(expected = "set_initial_state")]
    fn test_set_initial_twice_asserts() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Idle, &mut harness.ctx(None, DT));
        machine.set_initial_state(StateId::Patrol, &mut harness.ctx(None, DT));
    }

    #[test]
    fn test_change_state_unknown_is_noop() {
        let mut harness = Harness::new();
        let mut machine = StateMachine::new();
        machine.add_state(StateId::Idle, Box::new(crate::states::Idle::new()));
        machine.set_initial_state(StateId::Idle, &mut harness.ctx(None, DT));

        machine.change_state(StateId::Patrol, &mut harness.ctx(None, DT));
        assert_eq!(machine.current(), Some(StateId::Idle));
        assert!(harness.state_changes().is_empty());
    }

    #[test]
    fn test_update_without_initial_is_noop() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.update(&mut harness.ctx(None, DT));
        assert_eq!(machine.current(), None);
        assert!(harness.events.is_empty());
    }

    // ---- Idle ----

    #[test]
    fn test_idle_dwell_then_patrol() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Idle, &mut harness.ctx(None, 0.1));

        // Dwell is sampled in [3, 7): still idle before the minimum
        for _ in 0..29 {
            harness.now += 0.1;
            machine.update(&mut harness.ctx(None, 0.1));
        }
        assert_eq!(machine.current(), Some(StateId::Idle));

        // ... and patrolling once the maximum has elapsed, no triggers needed
        for _ in 0..42 {
            harness.now += 0.1;
            machine.update(&mut harness.ctx(None, 0.1));
        }
        assert_eq!(machine.current(), Some(StateId::Patrol));
        assert_eq!(harness.state_changes(), vec![(StateId::Idle, StateId::Patrol)]);
    }

    // ---- Attack ----

    #[test]
    fn test_attack_fire_rate() {
        // Target at 40, attack range 50, detection 100, fire every 0.5s:
        // two ticks 0.6s apart each yield exactly one shot.
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Attack, &mut harness.ctx(Some(target_at(40.0)), 0.6));

        harness.now = 0.6;
        machine.update(&mut harness.ctx(Some(target_at(40.0)), 0.6));
        assert_eq!(harness.fired_count(), 1);

        harness.now = 1.2;
        machine.update(&mut harness.ctx(Some(target_at(40.0)), 0.6));
        assert_eq!(harness.fired_count(), 2);
    }

    #[test]
    fn test_attack_ship_cooldown_caps_rate() {
        // A slow ship cooldown dominates the per-state rate limit.
        let mut harness = Harness::new();
        harness.ship = ShipState::new(
            UnitId(1),
            ShipStats {
                fire_interval: 2.0,
                ..Default::default()
            },
            Vec3::ZERO,
        );
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Attack, &mut harness.ctx(Some(target_at(40.0)), 0.6));

        for step in 1..=3 {
            harness.now = step as f64 * 0.6;
            machine.update(&mut harness.ctx(Some(target_at(40.0)), 0.6));
        }
        // Shots at 0.6 allowed; 1.2 and 1.8 blocked by the 2s ship cooldown
        assert_eq!(harness.fired_count(), 1);
    }

    #[test]
    fn test_attack_without_target_patrols() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Attack, &mut harness.ctx(Some(target_at(40.0)), DT));

        machine.update(&mut harness.ctx(None, DT));
        assert_eq!(machine.current(), Some(StateId::Patrol));
    }

    #[test]
    fn test_attack_closes_distance_without_firing() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Attack, &mut harness.ctx(Some(target_at(75.0)), DT));

        machine.update(&mut harness.ctx(Some(target_at(75.0)), DT));
        assert_eq!(machine.current(), Some(StateId::Attack));
        assert_eq!(harness.fired_count(), 0);
        assert!(
            harness.ship.position.z > 0.0,
            "should close toward the target"
        );
    }

    #[test]
    fn test_attack_beyond_detection_loses_target() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Attack, &mut harness.ctx(Some(target_at(150.0)), DT));

        machine.update(&mut harness.ctx(Some(target_at(150.0)), DT));
        assert_eq!(machine.current(), Some(StateId::Patrol));
    }

    // ---- Flee ----

    #[test]
    fn test_flee_runs_away_then_patrols() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Flee, &mut harness.ctx(Some(target_at(10.0)), 0.1));

        machine.update(&mut harness.ctx(Some(target_at(10.0)), 0.1));
        assert!(
            harness.ship.position.z < 0.0,
            "flees directly away from the pursuer"
        );

        // Duration is sampled in [3, 7): expired after 7s of ticks
        for _ in 0..70 {
            harness.now += 0.1;
            machine.update(&mut harness.ctx(Some(target_at(10.0)), 0.1));
        }
        assert_eq!(machine.current(), Some(StateId::Patrol));
    }

    #[test]
    fn test_flee_without_target_picks_horizontal_direction() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Flee, &mut harness.ctx(None, 0.1));

        machine.update(&mut harness.ctx(None, 0.1));
        assert!(harness.ship.position.length() > 0.0, "still moves somewhere");
        assert!(
            harness.ship.position.y.abs() < 1e-9,
            "fallback direction stays horizontal"
        );
    }

    // ---- Follow ----

    #[test]
    fn test_follow_approaches_distant_target() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Follow, &mut harness.ctx(Some(target_at(100.0)), DT));

        machine.update(&mut harness.ctx(Some(target_at(100.0)), DT));
        assert_eq!(machine.current(), Some(StateId::Follow));
        assert!(harness.ship.velocity.z > 0.0, "moves toward the target");
    }

    #[test]
    fn test_follow_backs_off_inside_standoff() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Follow, &mut harness.ctx(Some(target_at(10.0)), DT));

        machine.update(&mut harness.ctx(Some(target_at(10.0)), DT));
        assert!(
            harness.ship.velocity.z < 0.0,
            "inside 15 units the agent retreats to the stand-off point"
        );
    }

    #[test]
    fn test_follow_without_target_patrols() {
        let mut harness = Harness::new();
        let mut machine = full_behavior_set();
        machine.set_initial_state(StateId::Follow, &mut harness.ctx(Some(target_at(10.0)), DT));

        machine.update(&mut harness.ctx(None, DT));
        assert_eq!(machine.current(), Some(StateId::Patrol));
    }

    // ---- Patrol route ----

    #[test]
    fn test_patrol_round_robin() {
        let a = Vec3::new(10.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.0, 10.0);
        let mut route = PatrolRoute::new(vec![a, b]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        assert_eq!(route.next_point(Vec3::ZERO, &mut rng), a);
        assert_eq!(route.next_point(Vec3::ZERO, &mut rng), b);
        assert_eq!(route.next_point(Vec3::ZERO, &mut rng), a);
    }

    #[test]
    fn test_patrol_fallback_random_point() {
        let mut route = PatrolRoute::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let from = Vec3::new(50.0, 0.0, 50.0);

        for _ in 0..100 {
            let point = route.next_point(from, &mut rng);
            assert!(
                point.distance(from) <= PATROL_FALLBACK_RADIUS + 1e-9,
                "fallback point stays within {PATROL_FALLBACK_RADIUS} units"
            );
        }
    }

    // ---- Controller ----

    fn run_controller(
        controller: &mut AiController,
        ship: &mut ShipState,
        candidates: &[TargetInfo],
        rng: &mut ChaCha8Rng,
        events: &mut Vec<GameEvent>,
        ticks: u64,
    ) {
        for tick in 0..ticks {
            let now = tick as f64 * DT;
            controller.update(ship, candidates, now, DT, rng, events);
        }
    }

    #[test]
    fn test_controller_scan_acquires_nearest() {
        let mut controller = AiController::new(AiConfig::default(), Vec::new());
        let mut ship = ShipState::new(UnitId(1), ShipStats::default(), Vec3::ZERO);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut events = Vec::new();
        let near = TargetInfo {
            unit: UnitId(10),
            position: Vec3::new(0.0, 0.0, 50.0),
        };
        let far = TargetInfo {
            unit: UnitId(11),
            position: Vec3::new(0.0, 0.0, 80.0),
        };

        run_controller(
            &mut controller,
            &mut ship,
            &[far, near],
            &mut rng,
            &mut events,
            AI_SCAN_INTERVAL_TICKS,
        );

        assert_eq!(controller.target(), Some(UnitId(10)), "nearest wins");
        assert_eq!(controller.state(), Some(StateId::Attack));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::TargetAcquired { target, .. } if *target == UnitId(10))));
    }

    #[test]
    fn test_controller_ignores_out_of_range_candidates() {
        let mut controller = AiController::new(AiConfig::default(), Vec::new());
        let mut ship = ShipState::new(UnitId(1), ShipStats::default(), Vec3::ZERO);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut events = Vec::new();
        let distant = TargetInfo {
            unit: UnitId(10),
            position: Vec3::new(0.0, 0.0, 500.0),
        };

        run_controller(
            &mut controller,
            &mut ship,
            &[distant],
            &mut rng,
            &mut events,
            AI_SCAN_INTERVAL_TICKS * 2,
        );
        assert_eq!(controller.target(), None);
    }

    #[test]
    fn test_controller_drops_vanished_target() {
        let mut controller = AiController::new(AiConfig::default(), Vec::new());
        let mut ship = ShipState::new(UnitId(1), ShipStats::default(), Vec3::ZERO);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut events = Vec::new();
        let candidate = TargetInfo {
            unit: UnitId(10),
            position: Vec3::new(0.0, 0.0, 40.0),
        };

        run_controller(
            &mut controller,
            &mut ship,
            &[candidate],
            &mut rng,
            &mut events,
            AI_SCAN_INTERVAL_TICKS,
        );
        assert_eq!(controller.state(), Some(StateId::Attack));

        // Candidate pool no longer contains the target
        controller.update(&mut ship, &[], 2.0, DT, &mut rng, &mut events);
        assert_eq!(controller.target(), None);
        assert_eq!(controller.state(), Some(StateId::Patrol));
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::TargetDropped { .. })));
    }

    #[test]
    fn test_controller_damage_response() {
        let mut controller = AiController::new(AiConfig::default(), Vec::new());
        let mut ship = ShipState::new(UnitId(1), ShipStats::default(), Vec3::ZERO);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut events = Vec::new();

        // Initialize into Patrol
        controller.update(&mut ship, &[], 0.0, DT, &mut rng, &mut events);
        assert_eq!(controller.state(), Some(StateId::Patrol));

        // Healthy: TakeDamage retaliates
        controller.on_damage_received(&mut ship, &[], 0.1, DT, &mut rng, &mut events);
        assert_eq!(controller.state(), Some(StateId::Attack));

        // Below the flee threshold: HealthLow overrides
        ship.take_damage(80.0, &mut events);
        controller.on_damage_received(&mut ship, &[], 0.2, DT, &mut rng, &mut events);
        assert_eq!(controller.state(), Some(StateId::Flee));
    }

    // ---- Profiles ----

    #[test]
    fn test_profiles_cover_all_kinds() {
        use starsurge_core::enums::EnemyKind;

        for kind in [
            EnemyKind::Fighter,
            EnemyKind::Bomber,
            EnemyKind::Scout,
            EnemyKind::Elite,
            EnemyKind::Boss,
        ] {
            let profile = behavior_profile(kind);
            assert!(profile.stats.max_health > 0.0);
            assert!(profile.stats.speed > 0.0);
            assert!(profile.ai.detection_range >= profile.ai.attack_range);
        }
    }

    #[test]
    fn test_boss_opens_aggressive() {
        let profile = behavior_profile(starsurge_core::enums::EnemyKind::Boss);
        assert_eq!(profile.ai.initial_behavior, StateId::Attack);
    }
}
