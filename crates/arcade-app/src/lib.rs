//! Arcade application shell.
//!
//! Hosts the simulation crates behind a real-time game loop thread and a
//! session router, and exposes snapshots to whatever frontend drives it.

pub mod game_loop;
pub mod session;
pub mod state;

pub use arcade_core as core;
