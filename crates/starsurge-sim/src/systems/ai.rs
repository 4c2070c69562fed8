//! AI system — advances every live agent's behavior machine each tick.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use starsurge_core::components::{Enemy, OwnShip};
use starsurge_core::constants::DT;
use starsurge_core::events::GameEvent;
use starsurge_core::ship::ShipState;
use starsurge_core::types::SimTime;

use starsurge_ai::context::TargetInfo;
use starsurge_ai::AiController;

/// The read-only pool of eligible targets this tick: the player ship,
/// while it lives.
pub fn candidate_pool(world: &World) -> Vec<TargetInfo> {
    let mut query = world.query::<(&OwnShip, &ShipState)>();
    query
        .iter()
        .filter(|(_, (_, ship))| !ship.is_destroyed())
        .map(|(_, (_, ship))| TargetInfo {
            unit: ship.unit,
            position: ship.position,
        })
        .collect()
}

/// Run every enemy controller against the current candidate pool.
pub fn run(world: &mut World, time: &SimTime, rng: &mut ChaCha8Rng, events: &mut Vec<GameEvent>) {
    let candidates = candidate_pool(world);

    for (_entity, (_enemy, ship, controller)) in
        world.query_mut::<(&Enemy, &mut ShipState, &mut AiController)>()
    {
        if ship.is_destroyed() {
            continue;
        }
        controller.update(ship, &candidates, time.elapsed_secs, DT, rng, events);
    }
}
