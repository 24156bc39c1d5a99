//! Entity spawn factories for setting up each game's world.
//!
//! Creates the controlled entity, structures, hostiles, and projectiles
//! with appropriate component bundles.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arcade_core::components::*;
use arcade_core::constants::*;
use arcade_core::enums::StructureKind;
use arcade_core::types::{Position, Velocity};

/// Spawn parameters for one hostile, varying by game and phase.
#[derive(Debug, Clone, Copy)]
pub struct HostileSpawn {
    /// Horizontal spawn band. Equal bounds mean a fixed emitter.
    pub x_min: f64,
    pub x_max: f64,
    /// Entry line (top of field or just above it).
    pub y: f64,
    /// Horizontal drift bound (px/s): vx drawn from [-drift, drift].
    pub drift: f64,
    /// Fall speed range (px/s).
    pub fall_min: f64,
    pub fall_max: f64,
    /// Angular velocity bound (deg/s). 0 = no tumble.
    pub spin_deg: f64,
    /// AABB half-extents.
    pub half_w: f64,
    pub half_h: f64,
}

/// Set up the shooter world: the player ship, field-clamped.
pub fn setup_shooter(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(FIELD_WIDTH / 2.0, PLAYER_START_Y),
        Velocity::default(),
        Body {
            half_w: PLAYER_HALF_W,
            half_h: PLAYER_HALF_H,
        },
        Health::full(PLAYER_MAX_HEALTH),
        KeepInField,
    ))
}

/// Set up the moonbase mission world: the player ship plus the city
/// backdrop it launches over. The moonbase itself appears when the
/// defend phase starts.
pub fn setup_moonbase(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    spawn_city(world, rng);
    setup_shooter(world)
}

/// Spawn the launch-phase city backdrop. Cosmetic: no collision pair is
/// registered against these.
pub fn spawn_city(world: &mut World, rng: &mut ChaCha8Rng) {
    for i in 0..CITY_BUILDING_COUNT {
        let x = f64::from(i) * CITY_BUILDING_SPACING + CITY_BUILDING_X_OFFSET;
        let height = rng.gen_range(CITY_BUILDING_HEIGHT_MIN..=CITY_BUILDING_HEIGHT_MAX);
        world.spawn((
            Structure {
                kind: StructureKind::CityBuilding,
            },
            Position::new(x, FIELD_HEIGHT - height / 2.0),
            Body {
                half_w: CITY_BUILDING_HALF_W,
                half_h: height / 2.0,
            },
        ));
    }
}

/// Spawn the defended moonbase at the top of the field.
pub fn spawn_moonbase(world: &mut World) -> hecs::Entity {
    world.spawn((
        Structure {
            kind: StructureKind::Moonbase,
        },
        Position::new(MOONBASE_X, MOONBASE_Y),
        Body {
            half_w: MOONBASE_HALF,
            half_h: MOONBASE_HALF,
        },
        Health::full(MOONBASE_MAX_INTEGRITY),
    ))
}

/// Set up the lander world: the lander at the top, the pad below.
pub fn setup_lander(world: &mut World) -> hecs::Entity {
    world.spawn((
        Structure {
            kind: StructureKind::LandingPad,
        },
        Position::new(PAD_X, PAD_Y),
        Body {
            half_w: PAD_HALF_W,
            half_h: PAD_HALF_H,
        },
    ));

    world.spawn((
        Player,
        Position::new(LANDER_START_X, LANDER_START_Y),
        Velocity::default(),
        Body {
            half_w: LANDER_HALF,
            half_h: LANDER_HALF,
        },
        FuelTank::full(),
        Rotation::default(),
        KeepInField,
    ))
}

/// Spawn a single hostile per the given spawn table entry.
pub fn spawn_hostile(world: &mut World, rng: &mut ChaCha8Rng, p: &HostileSpawn) -> hecs::Entity {
    let x = if p.x_max > p.x_min {
        rng.gen_range(p.x_min..=p.x_max)
    } else {
        p.x_min
    };
    let vx = if p.drift > 0.0 {
        rng.gen_range(-p.drift..=p.drift)
    } else {
        0.0
    };
    let vy = rng.gen_range(p.fall_min..=p.fall_max);
    let spin = if p.spin_deg > 0.0 {
        rng.gen_range(-p.spin_deg..=p.spin_deg).to_radians()
    } else {
        0.0
    };

    world.spawn((
        Hostile,
        Position::new(x, p.y),
        Velocity::new(vx, vy),
        Rotation::default(),
        Spin { rate: spin },
        Body {
            half_w: p.half_w,
            half_h: p.half_h,
        },
    ))
}

/// Spawn a projectile from the player's muzzle position, flying upward.
pub fn spawn_projectile(world: &mut World, muzzle: Position, speed: f64) -> hecs::Entity {
    world.spawn((
        Projectile,
        muzzle,
        Velocity::new(0.0, -speed),
        Body {
            half_w: PROJECTILE_HALF_W,
            half_h: PROJECTILE_HALF_H,
        },
    ))
}
