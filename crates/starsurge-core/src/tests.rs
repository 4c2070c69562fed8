#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::ship::{ShipState, ShipStats};
    use crate::state::GameSnapshot;
    use crate::types::{look_rotation, SimTime, UnitId, Vec3};
    use crate::weapon::{Loadout, Weapon};

    fn test_ship(stats: ShipStats) -> ShipState {
        ShipState::new(UnitId(1), stats, Vec3::ZERO)
    }

    /// Verify enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Fighter,
            EnemyKind::Bomber,
            EnemyKind::Scout,
            EnemyKind::Elite,
            EnemyKind::Boss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_trigger_serde() {
        let variants = vec![
            AiTrigger::TargetSpotted,
            AiTrigger::TargetLost,
            AiTrigger::HealthLow,
            AiTrigger::TakeDamage,
            AiTrigger::AllyNeedsHelp,
            AiTrigger::ReachedDestination,
            AiTrigger::CommandReceived,
            AiTrigger::NoAmmo,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: AiTrigger = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::NewGame { difficulty: 2.0 },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::Thrust {
                direction: Vec3::new(0.0, 0.0, 1.0),
            },
            PlayerCommand::Fire,
            PlayerCommand::DamageUnit {
                unit: UnitId(3),
                amount: 25.0,
            },
            PlayerCommand::UnlockSkill {
                id: "speed_1".to_string(),
            },
            PlayerCommand::StartSpawning,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks at 30Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Ship model ----

    #[test]
    fn test_damage_reduced_by_shield() {
        let mut ship = test_ship(ShipStats {
            shield: 5.0,
            ..Default::default()
        });
        let mut events = Vec::new();

        // Each hit loses `shield` points: 8 damage lands as 3
        ship.take_damage(8.0, &mut events);
        assert!((ship.health - 97.0).abs() < 1e-10);
        ship.take_damage(8.0, &mut events);
        assert!((ship.health - 94.0).abs() < 1e-10);
    }

    #[test]
    fn test_damage_fully_absorbed() {
        let mut ship = test_ship(ShipStats {
            shield: 10.0,
            ..Default::default()
        });
        let mut events = Vec::new();

        ship.take_damage(4.0, &mut events);
        assert!((ship.health - 100.0).abs() < 1e-10, "no hull damage");
        assert!(!ship.is_destroyed());
    }

    #[test]
    fn test_destroyed_fires_exactly_once() {
        let mut ship = test_ship(ShipStats::default());
        let mut events = Vec::new();

        ship.take_damage(150.0, &mut events);
        ship.take_damage(50.0, &mut events);
        ship.take_damage(50.0, &mut events);

        assert!(ship.is_destroyed());
        assert_eq!(ship.health, 0.0, "health clamps at zero");
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Destroyed { .. }))
            .count();
        assert_eq!(destroyed, 1, "Destroyed must be emitted exactly once");
    }

    #[test]
    fn test_fire_cooldown() {
        let mut ship = test_ship(ShipStats::default());
        let mut events = Vec::new();

        assert!(ship.fire(0.0, &mut events));
        assert!(!ship.fire(0.3, &mut events), "inside the 0.5s cooldown");
        assert!(ship.fire(0.6, &mut events));
        let fired = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Fired { .. }))
            .count();
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_thrust_moves_and_notifies() {
        let mut ship = test_ship(ShipStats::default());
        let mut events = Vec::new();

        ship.thrust(Vec3::new(0.0, 0.0, 2.0), 1.0, &mut events);
        // Direction is normalized before scaling by speed
        assert!((ship.position.z - ship.stats.speed).abs() < 1e-10);
        assert!(matches!(
            events.last(),
            Some(GameEvent::PositionChanged { .. })
        ));
    }

    #[test]
    fn test_look_rotation_faces_direction() {
        let rot = look_rotation(Vec3::new(1.0, 0.0, 0.0));
        let forward = rot * Vec3::Z;
        assert!((forward.x - 1.0).abs() < 1e-9);
        assert!(forward.z.abs() < 1e-9);
    }

    // ---- Weapons ----

    #[test]
    fn test_weapon_cooldown() {
        let mut w = Weapon::of_kind(WeaponKind::MissileLauncher);
        assert!(w.fire(0.0));
        assert!(!w.fire(1.0), "missile launcher needs 2s between shots");
        assert!(w.fire(2.5));
    }

    #[test]
    fn test_weapon_upgrade_multiplies() {
        let mut w = Weapon::of_kind(WeaponKind::Cannon);
        let (d, i, r) = (w.damage, w.fire_interval, w.range);
        w.upgrade(1.2, 2.0, 1.5);
        assert!((w.damage - d * 1.2).abs() < 1e-10);
        assert!((w.fire_interval - i / 2.0).abs() < 1e-10);
        assert!((w.range - r * 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_loadout_rejects_duplicates() {
        let mut loadout = Loadout::standard();
        assert!(loadout.has(WeaponKind::Cannon));
        assert!(!loadout.add(WeaponKind::Cannon));
        assert!(loadout.add(WeaponKind::LaserBeam));
        assert_eq!(loadout.weapons.len(), 2);
    }
}
