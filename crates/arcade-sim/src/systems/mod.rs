//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only). They do not own state — scalar run state lives in
//! `RunState`, entity state in components.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
