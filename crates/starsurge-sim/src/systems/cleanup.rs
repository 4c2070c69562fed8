//! Cleanup system: removes destroyed enemy agents.
//!
//! Returns what was removed so the engine can award kills and progress
//! objectives. Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use starsurge_core::components::Enemy;
use starsurge_core::enums::EnemyKind;
use starsurge_core::ship::ShipState;
use starsurge_core::types::UnitId;

/// Despawn destroyed enemies, returning their ids and kinds.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> Vec<(UnitId, EnemyKind)> {
    despawn_buffer.clear();
    let mut removed = Vec::new();

    for (entity, (enemy, ship)) in world.query_mut::<(&Enemy, &ShipState)>() {
        if ship.is_destroyed() {
            despawn_buffer.push(entity);
            removed.push((ship.unit, enemy.kind));
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    removed
}
