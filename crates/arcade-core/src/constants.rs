//! Simulation constants and tuning parameters.
//!
//! The simulation runs one tick per rendered frame at 60Hz; per-frame
//! quantities (distance gained, fuel burned, thrust impulses) are
//! expressed per tick.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play field ---

/// Play-field width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Play-field height in pixels.
pub const FIELD_HEIGHT: f64 = 600.0;

/// Hostiles fully below this line are culled (no score effect).
pub const CULL_LINE_Y: f64 = 650.0;

// --- Controlled entity (shooter / moonbase) ---

/// Steering speed per active axis direction (px/s, instant accel/decel).
pub const PLAYER_SPEED: f64 = 300.0;

/// Player ship starting position Y.
pub const PLAYER_START_Y: f64 = 500.0;

/// Player ship AABB half-extents.
pub const PLAYER_HALF_W: f64 = 15.0;
pub const PLAYER_HALF_H: f64 = 20.0;

/// Ship hull capacity.
pub const PLAYER_MAX_HEALTH: f64 = 100.0;

// --- Projectiles ---

/// Projectile muzzle offset above the player (px).
pub const PROJECTILE_MUZZLE_OFFSET: f64 = 20.0;

/// Projectile AABB half-extents.
pub const PROJECTILE_HALF_W: f64 = 2.0;
pub const PROJECTILE_HALF_H: f64 = 6.0;

/// Score awarded per destroyed hostile.
pub const KILL_SCORE: u32 = 10;

// --- Hostile spawning ---

/// Horizontal spawn band for full-width spawns (px).
pub const SPAWN_X_MIN: f64 = 50.0;
pub const SPAWN_X_MAX: f64 = 750.0;

// --- Shooter ---

/// Projectile speed, upward (px/s).
pub const SHOOTER_PROJECTILE_SPEED: f64 = 400.0;

/// Maximum live projectiles (pool size).
pub const SHOOTER_PROJECTILE_CAP: usize = 20;

/// Hostile spawn interval (ticks). 1 second.
pub const SHOOTER_SPAWN_INTERVAL_TICKS: u64 = TICK_RATE as u64;

/// Hostiles enter at the top edge.
pub const SHOOTER_SPAWN_Y: f64 = 0.0;

/// Hostile horizontal drift bound (px/s).
pub const SHOOTER_HOSTILE_DRIFT: f64 = 100.0;

/// Hostile fall speed range (px/s).
pub const SHOOTER_HOSTILE_FALL_MIN: f64 = 100.0;
pub const SHOOTER_HOSTILE_FALL_MAX: f64 = 200.0;

/// Hostile ship AABB half-extents.
pub const SHOOTER_HOSTILE_HALF: f64 = 15.0;

/// Hull damage on hostile contact. One hit ends the run.
pub const SHOOTER_HOSTILE_DAMAGE: f64 = 100.0;

// --- Moonbase mission ---

/// Launch phase duration (ticks). 3 seconds.
pub const LAUNCH_DURATION_TICKS: u64 = 3 * TICK_RATE as u64;

/// Projectile speed, upward (px/s).
pub const MOONBASE_PROJECTILE_SPEED: f64 = 500.0;

/// Maximum live projectiles (pool size).
pub const MOONBASE_PROJECTILE_CAP: usize = 30;

/// Travel-phase spawn interval (ticks). 1 second.
pub const TRAVEL_SPAWN_INTERVAL_TICKS: u64 = TICK_RATE as u64;

/// Defend-phase spawn interval (ticks). 0.5 seconds.
pub const DEFEND_SPAWN_INTERVAL_TICKS: u64 = TICK_RATE as u64 / 2;

/// Defend-phase cadence tightening per wave (ticks). 50ms.
pub const DEFEND_WAVE_CADENCE_STEP_TICKS: u64 = 3;

/// Defend-phase cadence floor (ticks). 250ms.
pub const DEFEND_MIN_SPAWN_INTERVAL_TICKS: u64 = 15;

/// Asteroids enter above the top edge.
pub const MOONBASE_SPAWN_Y: f64 = -40.0;

/// Defend-phase emitter X (fixed, top center).
pub const DEFEND_EMITTER_X: f64 = 400.0;

/// Asteroid horizontal drift bound (px/s).
pub const ASTEROID_DRIFT: f64 = 50.0;

/// Asteroid fall speed range (px/s).
pub const ASTEROID_FALL_MIN: f64 = 150.0;
pub const ASTEROID_FALL_MAX: f64 = 300.0;

/// Asteroid angular velocity bound (deg/s, cosmetic).
pub const ASTEROID_SPIN_DEG: f64 = 100.0;

/// Asteroid AABB half-extents.
pub const ASTEROID_HALF: f64 = 20.0;

/// Hull damage per asteroid contact.
pub const ASTEROID_DAMAGE: f64 = 20.0;

/// Travel distance gained per tick (km).
pub const DISTANCE_PER_TICK_KM: f64 = 0.5;

/// Distance at which the moonbase is reached (km).
pub const TRAVEL_DISTANCE_KM: f64 = 1000.0;

/// Cumulative kills required to win the mission.
pub const DEFEND_WIN_KILLS: u32 = 50;

/// Defend-phase kills per wave advance.
pub const DEFEND_WAVE_KILLS: u32 = 10;

/// Moonbase position and AABB half-extent.
pub const MOONBASE_X: f64 = 400.0;
pub const MOONBASE_Y: f64 = 80.0;
pub const MOONBASE_HALF: f64 = 60.0;

/// Moonbase structural integrity.
pub const MOONBASE_MAX_INTEGRITY: f64 = 100.0;

/// Integrity lost per asteroid impact on the moonbase.
pub const MOONBASE_IMPACT_DAMAGE: f64 = 10.0;

/// City backdrop: building count and spacing for the launch phase.
pub const CITY_BUILDING_COUNT: u32 = 15;
pub const CITY_BUILDING_SPACING: f64 = 60.0;
pub const CITY_BUILDING_X_OFFSET: f64 = 20.0;
pub const CITY_BUILDING_HEIGHT_MIN: f64 = 60.0;
pub const CITY_BUILDING_HEIGHT_MAX: f64 = 100.0;
pub const CITY_BUILDING_HALF_W: f64 = 20.0;

// --- Lander ---

/// Downward gravity (px/s²).
pub const LANDER_GRAVITY: f64 = 100.0;

/// Thrust impulses per thrust-tick (px/s added to velocity).
pub const THRUST_UP: f64 = 5.0;
pub const THRUST_LATERAL: f64 = 4.0;
pub const THRUST_DOWN: f64 = 3.0;

/// Fuel burned per thrust-tick.
pub const FUEL_BURN_UP: f64 = 0.3;
pub const FUEL_BURN_LATERAL: f64 = 0.15;
pub const FUEL_BURN_DOWN: f64 = 0.15;

/// Fuel capacity.
pub const FUEL_CAPACITY: f64 = 100.0;

/// Low-fuel warning threshold.
pub const FUEL_LOW_THRESHOLD: f64 = 20.0;

/// Per-second velocity damping factor (velocity *= DRAG^dt each tick).
pub const LANDER_DRAG: f64 = 0.05;

/// Tilt coupling: rotation = vx * this (radians per px/s).
pub const ROTATION_COUPLING: f64 = 0.01;

/// Landing speed threshold (px/s). At or above this, touchdown is a crash.
pub const SAFE_LANDING_SPEED: f64 = 50.0;

/// Landing tilt threshold (radians, absolute).
pub const SAFE_LANDING_TILT: f64 = 0.3;

/// Ground contact line outside the pad (px).
pub const GROUND_Y: f64 = 515.0;

/// Lander starting position.
pub const LANDER_START_X: f64 = 400.0;
pub const LANDER_START_Y: f64 = 60.0;

/// Lander AABB half-extent.
pub const LANDER_HALF: f64 = 24.0;

/// Landing pad position and AABB half-extents.
pub const PAD_X: f64 = 400.0;
pub const PAD_Y: f64 = 520.0;
pub const PAD_HALF_W: f64 = 30.0;
pub const PAD_HALF_H: f64 = 5.0;

/// Base score for a successful landing.
pub const LANDING_BASE_SCORE: u32 = 1000;

/// Score per unit of remaining fuel (floored).
pub const FUEL_BONUS_RATE: f64 = 50.0;
