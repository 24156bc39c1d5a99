//! Player commands and the per-frame input boundary.
//!
//! Commands are queued and processed at the next tick boundary. The input
//! snapshot is not a command: the host polls its input devices and hands
//! the simulation one boolean snapshot per frame.

use serde::{Deserialize, Serialize};

/// Directional-input snapshot for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// All possible player actions outside the per-frame input snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start the run. Only honored while the engine is idle.
    StartGame,
    /// Reset the run wholesale. Only honored on an end screen, i.e.
    /// after a terminal state.
    Restart,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
