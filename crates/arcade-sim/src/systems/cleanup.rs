//! Cleanup system: removes projectiles and hostiles that leave the field.
//!
//! Culling never scores. Uses a pre-allocated buffer to avoid per-tick
//! allocation.

use hecs::{Entity, World};

use arcade_core::components::{Body, Hostile, Projectile};
use arcade_core::constants::CULL_LINE_Y;
use arcade_core::types::Position;

/// Remove projectiles fully above the top edge and hostiles fully below
/// the cull line.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, body, _p)) in world.query_mut::<(&Position, &Body, &Projectile)>() {
        if pos.y + body.half_h < 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, body, _h)) in world.query_mut::<(&Position, &Body, &Hostile)>() {
        if pos.y - body.half_h > CULL_LINE_Y {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
