//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship and enemy agents with appropriate component
//! bundles.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use starsurge_core::components::{Enemy, OwnShip};
use starsurge_core::constants::DT;
use starsurge_core::enums::EnemyKind;
use starsurge_core::events::GameEvent;
use starsurge_core::ship::{ShipState, ShipStats};
use starsurge_core::types::{UnitId, Vec3};
use starsurge_core::weapon::Loadout;

use starsurge_ai::context::TargetInfo;
use starsurge_ai::profiles::behavior_profile;
use starsurge_ai::AiController;

/// Spawn the player's ship at the origin with the standard loadout.
pub fn spawn_player(world: &mut World, next_unit: &mut u32) -> hecs::Entity {
    let unit = UnitId(*next_unit);
    *next_unit += 1;

    let ship = ShipState::new(unit, ShipStats::default(), Vec3::ZERO);
    world.spawn((OwnShip, ship, Loadout::standard()))
}

/// Spawn one enemy agent of `kind` at `position`, wired to `target`.
///
/// The agent's stats and AI tuning come from its archetype profile; the
/// behavior machine initializes into the profile's initial state on the
/// agent's first update.
#[allow(clippy::too_many_arguments)]
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    position: Vec3,
    target: Option<TargetInfo>,
    now: f64,
    next_unit: &mut u32,
    events: &mut Vec<GameEvent>,
) -> hecs::Entity {
    let profile = behavior_profile(kind);
    let unit = UnitId(*next_unit);
    *next_unit += 1;

    let mut ship = ShipState::new(unit, profile.stats, position);
    let mut controller = AiController::new(profile.ai, Vec::new());

    if let Some(info) = target {
        let candidates = [info];
        controller.set_target(
            Some(info.unit),
            &mut ship,
            &candidates,
            now,
            DT,
            rng,
            events,
        );
    }

    events.push(GameEvent::EnemySpawned { unit, kind });
    world.spawn((Enemy { kind }, ship, controller))
}
