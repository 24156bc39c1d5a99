//! Lander descent rules.
//!
//! A single phase: gravity pulls the lander down, thrust fights it while
//! fuel lasts, and touchdown is judged against speed and tilt thresholds.
//! Pad overlap below both thresholds wins; failing the speed threshold is
//! "too fast", failing only the tilt threshold is "bad angle" (speed is
//! checked first when both fail). Ground contact off the pad is a plain
//! surface crash.

use hecs::World;

use arcade_core::components::{Body, FuelTank, Player, Rotation, Structure};
use arcade_core::constants::*;
use arcade_core::enums::{LossReason, Outcome, StructureKind};
use arcade_core::state::RunState;
use arcade_core::types::{Position, Velocity};

use crate::systems::collision::overlaps;
use crate::world_setup;

/// Set up the lander world. No timers: the descent is purely physics.
pub fn start(world: &mut World) {
    world_setup::setup_lander(world);
}

/// Touchdown evaluation: runs after integration each tick.
pub fn update(world: &mut World, run: &mut RunState) {
    let lander = world
        .query::<(&Player, &Position, &Velocity, &Body, &Rotation, &FuelTank)>()
        .iter()
        .next()
        .map(|(_, (_p, pos, vel, body, rotation, fuel))| {
            (*pos, *vel, *body, rotation.angle, fuel.remaining)
        });
    let Some((pos, vel, body, tilt, fuel)) = lander else {
        return;
    };

    let pad = world
        .query::<(&Structure, &Position, &Body)>()
        .iter()
        .find(|(_, (s, ..))| s.kind == StructureKind::LandingPad)
        .map(|(_, (_s, pad_pos, pad_body))| (*pad_pos, *pad_body));
    let Some((pad_pos, pad_body)) = pad else {
        return;
    };

    if overlaps(&pos, &body, &pad_pos, &pad_body) {
        let speed = vel.speed();
        if speed >= SAFE_LANDING_SPEED {
            run.outcome = Outcome::Lost(LossReason::CrashTooFast);
        } else if tilt.abs() >= SAFE_LANDING_TILT {
            run.outcome = Outcome::Lost(LossReason::CrashBadAngle);
        } else {
            run.outcome = Outcome::Won;
            run.score = LANDING_BASE_SCORE + (fuel * FUEL_BONUS_RATE).floor() as u32;
        }
    } else if pos.y > GROUND_Y {
        run.outcome = Outcome::Lost(LossReason::CrashSurface);
    }
}
