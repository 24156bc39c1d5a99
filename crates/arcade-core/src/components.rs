//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::StructureKind;

/// Marks the controlled entity (ship or lander).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a hostile entity (enemy ship or asteroid).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Marks a player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// A static structure (city building, moonbase, landing pad).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
}

/// Axis-aligned half-extents for overlap tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub half_w: f64,
    pub half_h: f64,
}

/// Hull / structural integrity, clamped to [0, max].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }
}

/// Lander fuel reserve, clamped to [0, capacity].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FuelTank {
    pub remaining: f64,
    /// Whether the low-fuel warning has already been emitted.
    #[serde(default)]
    pub low_warned: bool,
}

impl FuelTank {
    pub fn full() -> Self {
        Self {
            remaining: crate::constants::FUEL_CAPACITY,
            low_warned: false,
        }
    }
}

/// Orientation angle in radians.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub angle: f64,
}

/// Angular velocity in radians/s (asteroid tumble, cosmetic).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    pub rate: f64,
}

/// Marks an entity that is clamped to the play-field rectangle
/// instead of being culled on exit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeepInField;
