//! Per-game rules: setup, spawn tables, phase progression, and
//! win/lose evaluation for each of the three games.

pub mod lander;
pub mod moonbase;
pub mod shooter;
