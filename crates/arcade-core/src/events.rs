//! Events emitted by the simulation for shell feedback (sound, flashes,
//! phase banners). Drained into each snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::{LossReason, Phase};

/// One-shot feedback events for the hosting shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The run advanced to a new phase.
    PhaseChanged { phase: Phase },
    /// A defend-phase wave started.
    WaveStarted { wave: u32 },
    /// A hostile was shot down at the given position.
    HostileDestroyed { x: f64, y: f64 },
    /// The player took a hit; remaining hull.
    PlayerHit { health: f64 },
    /// The moonbase took an impact; remaining integrity.
    StructureHit { integrity: f64 },
    /// Fuel first dropped below the warning threshold.
    LowFuel { remaining: f64 },
    /// The run ended in victory.
    RunWon { score: u32 },
    /// The run ended in defeat.
    RunLost { reason: LossReason },
}
