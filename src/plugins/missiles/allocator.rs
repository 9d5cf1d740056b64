//! Spawn consumer: put missiles in flight from their launcher's pool.
//!
//! # Fail-fast invariants
//! - A pool slot always refers to a live entity carrying the pooled missile components.
//! - A recycled slot's missile is `Inactive` (the commit system owns that transition).
//!
//! Violations are bugs: we `expect()` and crash loudly.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::components::{
    HomingTarget, LaunchImpulse, Missile, MissileState, Origin, PooledMissile, Reinit, SpawnPoint,
};
use super::launcher::MissileLauncher;
use super::messages::SpawnMissileRequest;
use super::pool::{active_missile_layers, inactive_missile_layers, Acquired, MissilePool, SlotIndex};

const MISSILE_RADIUS: f32 = 0.1;

fn missile_body() -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::sphere(MISSILE_RADIUS),
        // Trigger semantics: report contacts, never push anything around.
        Sensor,
        GravityScale(0.0),
        // Avian only emits CollisionStart/End if one collider has this marker.
        CollisionEventsEnabled,
    )
}

/// Factory output for a missile that goes straight into flight.
pub fn active_missile_bundle(
    launcher: Entity,
    slot: SlotIndex,
    origin: Origin,
    missile: Missile,
    reinit: Reinit,
) -> impl Bundle {
    (
        Name::new("Missile(Pooled)"),
        PooledMissile { launcher, slot },
        missile,
        origin,
        MissileState::Active,
        HomingTarget(reinit.target),
        LaunchImpulse(reinit.impulse),
        reinit.transform(),
        Visibility::Visible,
        active_missile_layers(),
        LinearVelocity::ZERO,
        AngularVelocity::ZERO,
        missile_body(),
    )
}

/// Factory output for pool warm-up: parked at its origin, hidden, collides with nothing.
pub fn inactive_missile_bundle(
    launcher: Entity,
    slot: SlotIndex,
    origin: Origin,
    missile: Missile,
) -> impl Bundle {
    (
        Name::new("Missile(Pooled)"),
        PooledMissile { launcher, slot },
        missile,
        origin,
        MissileState::Inactive,
        HomingTarget::default(),
        LaunchImpulse::default(),
        Transform::from_translation(origin.translation()).with_rotation(origin.rotation()),
        Visibility::Hidden,
        inactive_missile_layers(),
        LinearVelocity::ZERO,
        AngularVelocity::ZERO,
        missile_body(),
    )
}

pub fn allocate_missiles_from_pool(
    mut commands: Commands,
    mut reader: MessageReader<SpawnMissileRequest>,
    mut q_launchers: Query<
        (&Transform, &MissileLauncher, &mut MissilePool),
        Without<PooledMissile>,
    >,
    mut q_missiles: Query<
        (
            &Origin,
            &Missile,
            &mut MissileState,
            &mut HomingTarget,
            &mut LaunchImpulse,
            &mut Transform,
            &mut LinearVelocity,
            &mut AngularVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledMissile>,
    >,
) {
    for req in reader.read() {
        let Ok((launcher_tf, launcher, mut pool)) = q_launchers.get_mut(req.launcher) else {
            debug!("SpawnMissileRequest for missing launcher {:?}", req.launcher);
            continue;
        };

        // Owner transform is read now, not cached.
        let at = SpawnPoint::At(launcher_tf.translation);
        let target = launcher.target;
        let template = launcher.missile;
        let fresh_origin = Origin::from_transform(launcher_tf);

        let acquired = pool.acquire(|slot| {
            let reinit = Reinit::new(&fresh_origin, at, target, &template);
            commands
                .spawn(active_missile_bundle(req.launcher, slot, fresh_origin, template, reinit))
                .id()
        });

        let e = match acquired {
            Ok(Acquired::Created(..)) => continue,
            Ok(Acquired::Recycled(_, e)) => e,
            Err(err) => {
                // Capacity decision, not a correctness failure.
                debug!("Spawn skipped for launcher {:?}: {err}", req.launcher);
                continue;
            }
        };

        let (
            origin,
            missile,
            mut state,
            mut homing,
            mut impulse,
            mut tf,
            mut lin,
            mut ang,
            mut vis,
            mut layers,
        ) = q_missiles
            .get_mut(e)
            .expect("MissilePool contained an entity missing pooled missile components");

        debug_assert_eq!(
            *state,
            MissileState::Inactive,
            "recycled a missile that was still in flight"
        );

        let reinit = Reinit::new(origin, at, target, missile);

        *state = MissileState::Active;
        *tf = reinit.transform();
        lin.0 = Vec3::ZERO;
        ang.0 = Vec3::ZERO;
        impulse.0 = reinit.impulse;
        homing.0 = reinit.target;
        *vis = Visibility::Visible;
        *layers = active_missile_layers();
    }
}
