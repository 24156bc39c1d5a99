//! Moonbase mission rules.
//!
//! Three ordered phases: a timed launch over the city, a distance-driven
//! travel leg with asteroids spawning across the full width, and a defend
//! phase where asteroids pour from a fixed emitter at the base. Kills
//! advance waves (tightening the spawn cadence) and 50 cumulative kills
//! win the mission; losing the ship or the base ends it.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use arcade_core::components::Structure;
use arcade_core::constants::*;
use arcade_core::enums::{Outcome, Phase, StructureKind};
use arcade_core::events::GameEvent;
use arcade_core::state::RunState;

use crate::scheduler::{Scheduler, TimerAction, TimerId};
use crate::world_setup::{self, HostileSpawn};

/// Per-run bookkeeping the mission needs between ticks.
#[derive(Debug, Default)]
pub struct MissionState {
    /// The active hostile spawn timer (travel or defend cadence).
    pub spawn_timer: Option<TimerId>,
    /// Cumulative kill count when the defend phase began.
    pub defend_entry_kills: u32,
}

/// Set up the mission world and arm the launch-phase delay.
pub fn start(world: &mut World, rng: &mut ChaCha8Rng, scheduler: &mut Scheduler, start_tick: u64) {
    world_setup::setup_moonbase(world, rng);
    scheduler.schedule_once(
        start_tick + LAUNCH_DURATION_TICKS,
        TimerAction::AdvancePhase(Phase::Travel),
    );
}

/// Launch → Travel: the city drops away and asteroids start spawning.
pub fn enter_travel(
    world: &mut World,
    run: &mut RunState,
    mission: &mut MissionState,
    scheduler: &mut Scheduler,
    events: &mut Vec<GameEvent>,
    tick: u64,
    despawn_buffer: &mut Vec<Entity>,
) {
    if run.phase != Phase::Launch {
        return;
    }
    run.phase = Phase::Travel;
    events.push(GameEvent::PhaseChanged {
        phase: Phase::Travel,
    });

    // The city backdrop leaves the field with the ship.
    despawn_buffer.clear();
    for (entity, structure) in world.query_mut::<&Structure>() {
        if structure.kind == StructureKind::CityBuilding {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    mission.spawn_timer = Some(scheduler.schedule_repeating(
        tick + TRAVEL_SPAWN_INTERVAL_TICKS,
        TRAVEL_SPAWN_INTERVAL_TICKS,
        TimerAction::SpawnHostile,
    ));
}

/// Travel → Defend: the moonbase appears and the cadence tightens.
fn enter_defend(
    world: &mut World,
    run: &mut RunState,
    mission: &mut MissionState,
    scheduler: &mut Scheduler,
    events: &mut Vec<GameEvent>,
    tick: u64,
) {
    run.phase = Phase::Defend;
    run.wave = 1;
    mission.defend_entry_kills = run.destroyed;
    events.push(GameEvent::PhaseChanged {
        phase: Phase::Defend,
    });
    events.push(GameEvent::WaveStarted { wave: 1 });

    world_setup::spawn_moonbase(world);

    if let Some(timer) = mission.spawn_timer.take() {
        scheduler.cancel(timer);
    }
    let interval = defend_interval(1);
    mission.spawn_timer =
        Some(scheduler.schedule_repeating(tick + interval, interval, TimerAction::SpawnHostile));
}

/// Per-tick mission rules: distance accrual, phase transitions, wave
/// advance, and the count-driven win.
pub fn update(
    world: &mut World,
    run: &mut RunState,
    mission: &mut MissionState,
    scheduler: &mut Scheduler,
    events: &mut Vec<GameEvent>,
    tick: u64,
) {
    match run.phase {
        Phase::Travel => {
            run.distance_km += DISTANCE_PER_TICK_KM;
            if run.distance_km >= TRAVEL_DISTANCE_KM {
                enter_defend(world, run, mission, scheduler, events, tick);
            }
        }
        Phase::Defend => {
            // Lose checks (ship, base) ran in collision resolution and
            // gate this call, so the win only fires on a still-live run.
            if run.destroyed >= DEFEND_WIN_KILLS {
                run.outcome = Outcome::Won;
                return;
            }

            let defend_kills = run.destroyed - mission.defend_entry_kills;
            let target_wave = 1 + defend_kills / DEFEND_WAVE_KILLS;
            if target_wave > run.wave {
                run.wave = target_wave;
                events.push(GameEvent::WaveStarted { wave: run.wave });
                if let Some(timer) = mission.spawn_timer.take() {
                    scheduler.cancel(timer);
                }
                let interval = defend_interval(run.wave);
                mission.spawn_timer = Some(scheduler.schedule_repeating(
                    tick + interval,
                    interval,
                    TimerAction::SpawnHostile,
                ));
            }
        }
        _ => {}
    }
}

/// Spawn table for the current phase: full-width drift during travel,
/// a fixed top-center emitter during defend.
pub fn hostile_spawn(phase: Phase) -> HostileSpawn {
    let (x_min, x_max) = match phase {
        Phase::Defend => (DEFEND_EMITTER_X, DEFEND_EMITTER_X),
        _ => (SPAWN_X_MIN, SPAWN_X_MAX),
    };
    HostileSpawn {
        x_min,
        x_max,
        y: MOONBASE_SPAWN_Y,
        drift: ASTEROID_DRIFT,
        fall_min: ASTEROID_FALL_MIN,
        fall_max: ASTEROID_FALL_MAX,
        spin_deg: ASTEROID_SPIN_DEG,
        half_w: ASTEROID_HALF,
        half_h: ASTEROID_HALF,
    }
}

/// Defend-phase spawn interval for a wave: 50ms tighter per wave,
/// floored at 250ms.
fn defend_interval(wave: u32) -> u64 {
    DEFEND_SPAWN_INTERVAL_TICKS
        .saturating_sub(u64::from(wave - 1) * DEFEND_WAVE_CADENCE_STEP_TICKS)
        .max(DEFEND_MIN_SPAWN_INTERVAL_TICKS)
}
