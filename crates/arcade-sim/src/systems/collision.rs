//! Pairwise overlap resolution, restricted to registered pairs.
//!
//! Three pairs exist across the games: projectile × hostile,
//! player × hostile, and hostile × moonbase. Despawns go through hecs'
//! fallible `despawn`, so destroying an already-destroyed entity is a
//! no-op.

use hecs::{Entity, World};

use arcade_core::components::{Body, Health, Hostile, Player, Projectile, Structure};
use arcade_core::constants::KILL_SCORE;
use arcade_core::enums::{LossReason, Outcome, StructureKind};
use arcade_core::events::GameEvent;
use arcade_core::state::RunState;
use arcade_core::types::Position;

/// Axis-aligned overlap test between two positioned bodies.
pub fn overlaps(pa: &Position, ba: &Body, pb: &Position, bb: &Body) -> bool {
    (pa.x - pb.x).abs() < ba.half_w + bb.half_w && (pa.y - pb.y).abs() < ba.half_h + bb.half_h
}

/// Resolve projectile × hostile overlaps: destroy both, score the kill.
/// Each projectile consumes at most one hostile and vice versa.
pub fn projectiles_vs_hostiles(
    world: &mut World,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let projectiles: Vec<(Entity, Position, Body)> = world
        .query::<(&Projectile, &Position, &Body)>()
        .iter()
        .map(|(entity, (_p, pos, body))| (entity, *pos, *body))
        .collect();
    let hostiles: Vec<(Entity, Position, Body)> = world
        .query::<(&Hostile, &Position, &Body)>()
        .iter()
        .map(|(entity, (_h, pos, body))| (entity, *pos, *body))
        .collect();

    let mut hostile_hit = vec![false; hostiles.len()];

    for (proj_entity, proj_pos, proj_body) in &projectiles {
        for (i, (hostile_entity, hostile_pos, hostile_body)) in hostiles.iter().enumerate() {
            if hostile_hit[i] || !overlaps(proj_pos, proj_body, hostile_pos, hostile_body) {
                continue;
            }
            hostile_hit[i] = true;
            run.score += KILL_SCORE;
            run.destroyed += 1;
            events.push(GameEvent::HostileDestroyed {
                x: hostile_pos.x,
                y: hostile_pos.y,
            });
            despawn_buffer.push(*proj_entity);
            despawn_buffer.push(*hostile_entity);
            break;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Resolve player × hostile overlaps: destroy the hostile and decrement
/// the hull by `damage`, transitioning to lost exactly once when the hull
/// crosses zero.
pub fn player_vs_hostiles(
    world: &mut World,
    damage: f64,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let player = world
        .query::<(&Player, &Position, &Body)>()
        .iter()
        .next()
        .map(|(entity, (_p, pos, body))| (entity, *pos, *body));
    let Some((player_entity, player_pos, player_body)) = player else {
        return;
    };

    for (entity, (_h, pos, body)) in world.query::<(&Hostile, &Position, &Body)>().iter() {
        if overlaps(&player_pos, &player_body, pos, body) {
            despawn_buffer.push(entity);
        }
    }

    let hits = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    if hits == 0 {
        return;
    }

    if let Ok(mut health) = world.get::<&mut Health>(player_entity) {
        for _ in 0..hits {
            if health.current <= 0.0 {
                break;
            }
            health.current = (health.current - damage).max(0.0);
            events.push(GameEvent::PlayerHit {
                health: health.current,
            });
            if health.current <= 0.0 && run.outcome.is_running() {
                run.outcome = Outcome::Lost(LossReason::ShipDestroyed);
            }
        }
    }
}

/// Resolve hostile × moonbase overlaps: destroy the hostile and decrement
/// the base's integrity, transitioning to lost when it crosses zero.
pub fn hostiles_vs_moonbase(
    world: &mut World,
    damage: f64,
    run: &mut RunState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let base = world
        .query::<(&Structure, &Position, &Body, &Health)>()
        .iter()
        .find(|(_, (s, ..))| s.kind == StructureKind::Moonbase)
        .map(|(entity, (_s, pos, body, _health))| (entity, *pos, *body));
    let Some((base_entity, base_pos, base_body)) = base else {
        return;
    };

    for (entity, (_h, pos, body)) in world.query::<(&Hostile, &Position, &Body)>().iter() {
        if overlaps(&base_pos, &base_body, pos, body) {
            despawn_buffer.push(entity);
        }
    }

    let impacts = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    if impacts == 0 {
        return;
    }

    if let Ok(mut health) = world.get::<&mut Health>(base_entity) {
        for _ in 0..impacts {
            if health.current <= 0.0 {
                break;
            }
            health.current = (health.current - damage).max(0.0);
            events.push(GameEvent::StructureHit {
                integrity: health.current,
            });
            if health.current <= 0.0 && run.outcome.is_running() {
                run.outcome = Outcome::Lost(LossReason::BaseDestroyed);
            }
        }
    }
}
