//! Space shooter rules.
//!
//! Single combat phase: hostiles rain from the top on a one-second
//! cadence, projectiles score kills, and the first hostile contact ends
//! the run (the ship's 100-point hull takes 100 damage per hit).

use hecs::World;

use arcade_core::constants::*;

use crate::scheduler::{Scheduler, TimerAction};
use crate::world_setup::{self, HostileSpawn};

/// Set up the shooter world and arm its spawn loop. The spawn timer
/// runs for the whole run, so its id is never needed for cancellation.
pub fn start(world: &mut World, scheduler: &mut Scheduler, start_tick: u64) {
    world_setup::setup_shooter(world);
    scheduler.schedule_repeating(
        start_tick + SHOOTER_SPAWN_INTERVAL_TICKS,
        SHOOTER_SPAWN_INTERVAL_TICKS,
        TimerAction::SpawnHostile,
    );
}

/// The shooter's single spawn table entry: full-width, modest drift.
pub fn hostile_spawn() -> HostileSpawn {
    HostileSpawn {
        x_min: SPAWN_X_MIN,
        x_max: SPAWN_X_MAX,
        y: SHOOTER_SPAWN_Y,
        drift: SHOOTER_HOSTILE_DRIFT,
        fall_min: SHOOTER_HOSTILE_FALL_MIN,
        fall_max: SHOOTER_HOSTILE_FALL_MAX,
        spin_deg: 0.0,
        half_w: SHOOTER_HOSTILE_HALF,
        half_h: SHOOTER_HOSTILE_HALF,
    }
}
