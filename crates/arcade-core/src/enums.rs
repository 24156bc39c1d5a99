//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which of the three games an engine instance is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    /// Free-movement space shooter.
    #[default]
    Shooter,
    /// Phased defend-the-moonbase mission.
    Moonbase,
    /// Lunar-lander descent.
    Lander,
}

/// Ordered stage of a single run. Each game advances one-way through
/// its own subsequence; no phase is ever re-entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Shooter's single stage.
    #[default]
    Combat,
    /// Moonbase: timed launch over the city.
    Launch,
    /// Moonbase: distance-driven transit, hostiles spawning.
    Travel,
    /// Moonbase: protect the base, count-driven win.
    Defend,
    /// Lander's single stage.
    Descent,
}

/// Terminal state of a run. `Won` and `Lost` are mutually exclusive by
/// construction; snapshots derive the shell-facing boolean pair from this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Running,
    Won,
    Lost(LossReason),
}

impl Outcome {
    pub fn is_running(&self) -> bool {
        matches!(self, Outcome::Running)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_running()
    }
}

/// Why a run was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// Player hull reduced to zero.
    ShipDestroyed,
    /// Moonbase integrity reduced to zero.
    BaseDestroyed,
    /// Pad touchdown above the speed threshold.
    CrashTooFast,
    /// Pad touchdown beyond the tilt threshold.
    CrashBadAngle,
    /// Ground contact away from the pad.
    CrashSurface,
}

/// Protected / static structure category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureKind {
    /// City backdrop during the moonbase launch phase. Cosmetic.
    #[default]
    CityBuilding,
    /// The defended base. Destructible.
    Moonbase,
    /// The lander's target pad.
    LandingPad,
}

/// Top-level engine status, orthogonal to the per-run `Phase`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    /// Created, no run started yet.
    #[default]
    Idle,
    /// A run is in progress (possibly already terminal).
    Live,
    /// Run suspended; time does not advance.
    Paused,
}
