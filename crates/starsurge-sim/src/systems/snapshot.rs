//! Snapshot system — assembles the per-tick view of the world.

use hecs::World;

use starsurge_core::components::{Enemy, OwnShip};
use starsurge_core::enums::GamePhase;
use starsurge_core::events::GameEvent;
use starsurge_core::ship::ShipState;
use starsurge_core::state::{EnemyView, GameSnapshot, ObjectiveView, ShipView};
use starsurge_core::types::SimTime;
use starsurge_core::weapon::Loadout;

use starsurge_ai::AiController;

/// Build the complete snapshot for this tick.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    skill_points: u32,
    objectives: Vec<ObjectiveView>,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let player = {
        let mut query = world.query::<(&OwnShip, &ShipState, &Loadout)>();
        query.iter().next().map(|(_, (_, ship, loadout))| ShipView {
            unit: ship.unit,
            position: ship.position,
            rotation: ship.rotation,
            velocity: ship.velocity,
            health: ship.health,
            max_health: ship.stats.max_health,
            shield: ship.stats.shield,
            weapons: loadout.weapons.iter().map(|w| w.kind).collect(),
        })
    };

    let mut enemies: Vec<EnemyView> = {
        let mut query = world.query::<(&Enemy, &ShipState, &AiController)>();
        query
            .iter()
            .map(|(_, (enemy, ship, controller))| EnemyView {
                unit: ship.unit,
                kind: enemy.kind,
                position: ship.position,
                rotation: ship.rotation,
                health: ship.health,
                max_health: ship.stats.max_health,
                state: controller.state(),
                target: controller.target(),
            })
            .collect()
    };
    // Stable order regardless of archetype iteration order
    enemies.sort_by_key(|e| e.unit.0);

    GameSnapshot {
        time: *time,
        phase,
        player,
        enemies,
        objectives,
        skill_points,
        events,
    }
}
