//! Snapshot system: queries the ECS world and builds a complete GameSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use arcade_core::components::*;
use arcade_core::constants::PAD_Y;
use arcade_core::enums::{EngineStatus, GameKind, Outcome};
use arcade_core::events::GameEvent;
use arcade_core::state::*;
use arcade_core::types::{Position, SimTime, Velocity};

/// Build a complete GameSnapshot from the current world state.
pub fn build(
    world: &World,
    time: &SimTime,
    kind: GameKind,
    status: EngineStatus,
    run: &RunState,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let loss_reason = match run.outcome {
        Outcome::Lost(reason) => Some(reason),
        _ => None,
    };

    GameSnapshot {
        time: *time,
        kind,
        status,
        phase: run.phase,
        score: run.score,
        destroyed: run.destroyed,
        wave: run.wave,
        distance_km: run.distance_km,
        game_over: loss_reason.is_some(),
        game_won: run.outcome == Outcome::Won,
        loss_reason,
        player: build_player(world, kind),
        hostiles: build_entities::<Hostile>(world),
        projectiles: build_entities::<Projectile>(world),
        structures: build_structures(world),
        events,
    }
}

/// Build the player view, with the lander HUD scalars when relevant.
fn build_player(world: &World, kind: GameKind) -> Option<PlayerView> {
    let (entity, position, velocity) = world
        .query::<(&Player, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(entity, (_p, pos, vel))| (entity, *pos, *vel))?;

    let altitude = match kind {
        GameKind::Lander => (PAD_Y - position.y).max(0.0),
        _ => 0.0,
    };

    Some(PlayerView {
        position,
        velocity,
        speed: velocity.speed(),
        altitude,
        rotation: world
            .get::<&Rotation>(entity)
            .map(|r| r.angle)
            .unwrap_or(0.0),
        health: world.get::<&Health>(entity).map(|h| h.current).ok(),
        fuel: world.get::<&FuelTank>(entity).map(|f| f.remaining).ok(),
    })
}

/// Build views for all entities carrying the given marker.
fn build_entities<M: hecs::Component>(world: &World) -> Vec<EntityView> {
    world
        .query::<(&M, &Position, &Velocity, Option<&Rotation>)>()
        .iter()
        .map(|(_, (_m, pos, vel, rotation))| EntityView {
            position: *pos,
            velocity: *vel,
            rotation: rotation.map(|r| r.angle).unwrap_or(0.0),
        })
        .collect()
}

/// Build StructureView list from all structures.
fn build_structures(world: &World) -> Vec<StructureView> {
    let mut structures: Vec<StructureView> = world
        .query::<(&Structure, &Position, Option<&Health>)>()
        .iter()
        .map(|(_, (s, pos, health))| StructureView {
            kind: s.kind,
            position: *pos,
            integrity: health.map(|h| h.current),
        })
        .collect();

    structures.sort_by(|a, b| {
        a.position
            .x
            .partial_cmp(&b.position.x)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    structures
}
