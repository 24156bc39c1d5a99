//! Simulation engine for the arcade games.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameSnapshots for the hosting shell. Completely
//! headless, enabling deterministic testing.

pub mod engine;
pub mod games;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use arcade_core as core;
pub use engine::GameEngine;

#[cfg(test)]
mod tests;
