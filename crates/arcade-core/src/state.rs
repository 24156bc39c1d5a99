//! Run state and the per-tick snapshot sent to the hosting shell.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// The complete scalar state of one in-progress run.
///
/// Entity state lives in the ECS world; everything else a win/lose
/// decision needs is here, in one value object.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunState {
    pub phase: Phase,
    pub outcome: Outcome,
    /// Monotonically non-decreasing while running.
    pub score: u32,
    /// Hostiles destroyed by projectiles. Monotonically non-decreasing.
    pub destroyed: u32,
    /// Defend wave index (0 until the defend phase starts).
    pub wave: u32,
    /// Moonbase travel progress (km).
    pub distance_km: f64,
}

impl RunState {
    /// Fresh run state for a game, at its first phase.
    pub fn new(kind: GameKind) -> Self {
        let phase = match kind {
            GameKind::Shooter => Phase::Combat,
            GameKind::Moonbase => Phase::Launch,
            GameKind::Lander => Phase::Descent,
        };
        Self {
            phase,
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.outcome.is_running()
    }
}

/// Complete game state handed to the shell after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub kind: GameKind,
    pub status: EngineStatus,
    pub phase: Phase,
    pub score: u32,
    pub destroyed: u32,
    pub wave: u32,
    pub distance_km: f64,
    /// Terminal flags for the shell's end screens. Never both true.
    pub game_over: bool,
    pub game_won: bool,
    pub loss_reason: Option<LossReason>,
    pub player: Option<PlayerView>,
    pub hostiles: Vec<EntityView>,
    pub projectiles: Vec<EntityView>,
    pub structures: Vec<StructureView>,
    pub events: Vec<GameEvent>,
}

/// The controlled entity as the shell renders it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub velocity: Velocity,
    /// Speed magnitude (lander HUD).
    pub speed: f64,
    /// Height above the pad line, floored at 0 (lander HUD).
    pub altitude: f64,
    /// Tilt in radians (lander HUD).
    pub rotation: f64,
    /// Remaining hull, if the game tracks one.
    pub health: Option<f64>,
    /// Remaining fuel, if the game tracks it.
    pub fuel: Option<f64>,
}

/// A hostile or projectile in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityView {
    pub position: Position,
    pub velocity: Velocity,
    pub rotation: f64,
}

/// A static structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructureView {
    pub kind: StructureKind,
    pub position: Position,
    /// Remaining integrity, if destructible.
    pub integrity: Option<f64>,
}
