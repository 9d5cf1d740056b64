//! Per-frame homing guidance.
//!
//! Every active missile flies at constant speed along its forward axis (`-Z`, Bevy's
//! convention) and, when it has a live target, turns toward the target's aim point by
//! a bounded angle per frame.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::components::{
    AimOffset, HomingTarget, LaunchImpulse, Missile, MissileState, PooledMissile,
};

/// World position a missile steers toward.
#[inline]
pub fn aim_point(target: Vec3, offset: Option<&AimOffset>) -> Vec3 {
    match offset {
        Some(AimOffset(o)) => target + *o,
        None => target,
    }
}

/// Rotation whose forward axis points along `direction`, with `Y` up.
///
/// `None` for a zero-length (or non-finite) direction.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let dir = Dir3::new(direction).ok()?;
    Some(Transform::IDENTITY.looking_to(dir, Dir3::Y).rotation)
}

/// Rotate `from` toward `to` by at most `max_radians`.
pub fn slew_towards(from: Quat, to: Quat, max_radians: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= max_radians || angle <= f32::EPSILON {
        return to;
    }
    from.slerp(to, max_radians / angle).normalize()
}

/// One guidance step for a missile at `position` facing `rotation`.
///
/// Returns the new rotation; unchanged when the missile sits exactly on the aim point.
pub fn steer(rotation: Quat, position: Vec3, aim: Vec3, max_radians: f32) -> Quat {
    match look_rotation(aim - position) {
        Some(desired) => slew_towards(rotation, desired, max_radians),
        None => rotation,
    }
}

pub fn guide_missiles(
    time: Res<Time>,
    mut q_missiles: Query<
        (&Missile, &MissileState, &HomingTarget, &mut Transform, &mut LinearVelocity),
        With<PooledMissile>,
    >,
    q_targets: Query<(&Transform, Option<&AimOffset>), Without<PooledMissile>>,
) {
    let dt = time.delta_secs();

    for (missile, state, homing, mut tf, mut vel) in &mut q_missiles {
        if *state != MissileState::Active {
            continue;
        }

        vel.0 = tf.forward() * missile.speed;

        // A despawned target reads the same as no target: fly straight.
        let Some(target) = homing.0 else { continue };
        let Ok((target_tf, offset)) = q_targets.get(target) else {
            continue;
        };

        let aim = aim_point(target_tf.translation, offset);
        tf.rotation = steer(tf.rotation, tf.translation, aim, missile.max_turn_radians(dt));
    }
}

/// Consume launch impulses queued by reinit: one fixed step of force on a unit mass.
pub fn apply_launch_impulse(
    time: Res<Time>,
    mut q: Query<(&MissileState, &mut LaunchImpulse, &mut LinearVelocity), With<PooledMissile>>,
) {
    let dt = time.delta_secs();

    for (state, mut impulse, mut vel) in &mut q {
        if impulse.0 == Vec3::ZERO {
            continue;
        }
        if *state == MissileState::Active {
            vel.0 += impulse.0 * dt;
        }
        impulse.0 = Vec3::ZERO;
    }
}
