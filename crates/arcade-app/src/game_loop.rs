//! Game loop thread — runs the active game at 60Hz and emits snapshots.
//!
//! The session (and its engine) lives inside this thread because it's
//! cleaner for ownership. Commands arrive via `mpsc` channel; snapshots
//! go out over another channel and into shared state for synchronous
//! polling.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use arcade_core::commands::InputSnapshot;
use arcade_core::constants::TICK_RATE;
use arcade_core::state::GameSnapshot;

use crate::session::Session;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host shell to use, plus the join
/// handle for shutdown.
pub fn spawn_game_loop(
    snapshot_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: SharedSnapshot,
    seed: u64,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arcade-game-loop".into())
        .spawn(move || {
            run_game_loop(cmd_rx, snapshot_tx, &latest_snapshot, seed);
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: mpsc::Sender<GameSnapshot>,
    latest_snapshot: &SharedSnapshot,
    seed: u64,
) {
    let mut session = Session::new(seed);
    let mut held_input = InputSnapshot::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(input)) => held_input = input,
                Ok(GameLoopCommand::Player(command)) => session.queue_command(command),
                Ok(GameLoopCommand::Navigate(route)) => {
                    session.navigate(route);
                    held_input = InputSnapshot::default();
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles pause and terminal
        // semantics internally; the home screen produces no snapshot)
        if let Some(snapshot) = session.tick(held_input) {
            let _ = snapshot_tx.send(snapshot.clone());
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }
        }

        // 3. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
