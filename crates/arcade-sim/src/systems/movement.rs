//! Steering, thrust, and kinematic integration.
//!
//! The shooter and moonbase ships steer with instant accel/decel: velocity
//! is set to a fixed signed speed per active direction, zero otherwise.
//! The lander instead applies incremental thrust impulses against a damped
//! velocity, burning fuel per thrust-tick.

use hecs::World;

use arcade_core::commands::InputSnapshot;
use arcade_core::components::{Body, FuelTank, KeepInField, Player, Rotation, Spin};
use arcade_core::constants::*;
use arcade_core::events::GameEvent;
use arcade_core::types::{Position, Velocity};

/// Set the player's velocity from the input snapshot (shooter/moonbase).
pub fn steer(world: &mut World, input: &InputSnapshot) {
    for (_entity, (_player, vel)) in world.query_mut::<(&Player, &mut Velocity)>() {
        vel.x = if input.left {
            -PLAYER_SPEED
        } else if input.right {
            PLAYER_SPEED
        } else {
            0.0
        };
        vel.y = if input.up {
            -PLAYER_SPEED
        } else if input.down {
            PLAYER_SPEED
        } else {
            0.0
        };
    }
}

/// Apply lander thrust impulses, fuel burn, gravity, drag, and the
/// tilt coupling. Thrust has no effect once the tank is dry.
pub fn lander_physics(world: &mut World, input: &InputSnapshot, events: &mut Vec<GameEvent>) {
    for (_entity, (_player, vel, fuel, rotation)) in
        world.query_mut::<(&Player, &mut Velocity, &mut FuelTank, &mut Rotation)>()
    {
        if input.up && fuel.remaining > 0.0 {
            vel.y -= THRUST_UP;
            fuel.remaining -= FUEL_BURN_UP;
        }
        if input.left && fuel.remaining > 0.0 {
            vel.x -= THRUST_LATERAL;
            fuel.remaining -= FUEL_BURN_LATERAL;
        }
        if input.right && fuel.remaining > 0.0 {
            vel.x += THRUST_LATERAL;
            fuel.remaining -= FUEL_BURN_LATERAL;
        }
        if input.down && fuel.remaining > 0.0 {
            vel.y += THRUST_DOWN;
            fuel.remaining -= FUEL_BURN_DOWN;
        }
        fuel.remaining = fuel.remaining.clamp(0.0, FUEL_CAPACITY);

        if fuel.remaining < FUEL_LOW_THRESHOLD && fuel.remaining > 0.0 && !fuel.low_warned {
            fuel.low_warned = true;
            events.push(GameEvent::LowFuel {
                remaining: fuel.remaining,
            });
        }

        vel.y += LANDER_GRAVITY * DT;

        let damping = LANDER_DRAG.powf(DT);
        vel.x *= damping;
        vel.y *= damping;

        rotation.angle = vel.x * ROTATION_COUPLING;
    }
}

/// Kinematic integration: position from velocity, rotation from spin.
pub fn integrate(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
    for (_entity, (rotation, spin)) in world.query_mut::<(&mut Rotation, &Spin)>() {
        rotation.angle += spin.rate * DT;
    }
}

/// Clamp field-bound entities to the play-field rectangle.
pub fn clamp_to_field(world: &mut World) {
    for (_entity, (_keep, pos, body)) in world.query_mut::<(&KeepInField, &mut Position, &Body)>() {
        pos.x = pos.x.clamp(body.half_w, FIELD_WIDTH - body.half_w);
        pos.y = pos.y.clamp(body.half_h, FIELD_HEIGHT - body.half_h);
    }
}
