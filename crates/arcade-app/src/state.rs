//! Application state shared between the host shell and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use arcade_core::commands::{InputSnapshot, PlayerCommand};
use arcade_core::state::GameSnapshot;

use crate::session::Route;

/// Latest snapshot slot, updated by the game loop thread after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameSnapshot>>>;

/// Commands sent from the host shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Replace the held per-frame input snapshot.
    Input(InputSnapshot),
    /// A player command to forward to the active engine.
    Player(PlayerCommand),
    /// Switch routes, tearing down or building a game instance.
    Navigate(Route),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared shell state.
///
/// `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex`; the
/// snapshot slot is shared with the game loop thread via `Arc<Mutex<..>>`.
pub struct AppState {
    /// Channel sender to the game loop thread. `None` until the loop is
    /// spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    pub latest_snapshot: SharedSnapshot,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
