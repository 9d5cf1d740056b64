//! Return commit: recycle retired missiles back into their launcher's pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive missiles must be:
//! - hidden
//! - velocity and angular velocity = 0, no pending launch impulse
//! - collide with nothing (filters empty)
//! - not guided (state != Active)

use avian3d::prelude::*;
use bevy::prelude::*;

use super::components::{LaunchImpulse, MissileState, PooledMissile};
use super::messages::MissileRetired;
use super::pool::{inactive_missile_layers, MissilePool, PoolError};

pub fn return_to_pool_commit(
    mut reader: MessageReader<MissileRetired>,
    mut q_pools: Query<&mut MissilePool>,
    mut q_missiles: Query<
        (
            &mut MissileState,
            &mut Visibility,
            &mut LinearVelocity,
            &mut AngularVelocity,
            &mut LaunchImpulse,
            &mut CollisionLayers,
        ),
        With<PooledMissile>,
    >,
) {
    for retired in reader.read() {
        let Ok(mut pool) = q_pools.get_mut(retired.launcher) else {
            // Launcher torn down after the hit; `despawn_orphaned_missiles` removes the missile.
            debug!(
                "MissileRetired for {:?} after launcher {:?} lost its pool",
                retired.missile, retired.launcher
            );
            continue;
        };

        match pool.release(retired.slot) {
            Ok(e) if e == retired.missile => {}
            Err(err @ PoolError::AlreadyReleased(_)) => {
                warn!("Ignoring duplicate retirement of {:?}: {err}", retired.missile);
                continue;
            }
            // Every signal carries the slot its missile was created in, so these are bugs.
            Ok(e) => {
                error!(
                    "Slot {:?} holds {e:?}, not retired {:?}",
                    retired.slot, retired.missile
                );
                debug_assert!(false, "missile retirement signal does not match its pool");
                continue;
            }
            Err(err) => {
                error!("Bad retirement of {:?}: {err}", retired.missile);
                debug_assert!(false, "missile retirement signal does not match its pool");
                continue;
            }
        }

        let (mut state, mut vis, mut lin, mut ang, mut impulse, mut layers) = q_missiles
            .get_mut(retired.missile)
            .expect("MissilePool contained an entity missing pooled missile components");

        *state = MissileState::Inactive;
        *vis = Visibility::Hidden;
        lin.0 = Vec3::ZERO;
        ang.0 = Vec3::ZERO;
        impulse.0 = Vec3::ZERO;
        *layers = inactive_missile_layers();
    }
}

/// Pool teardown: missiles are only destroyed once their launcher (or its pool) is gone.
///
/// Runs after the commit, so it also picks up missiles retired in the frame their
/// launcher was despawned.
pub fn despawn_orphaned_missiles(
    mut commands: Commands,
    q_missiles: Query<(Entity, &PooledMissile)>,
    q_pools: Query<(), With<MissilePool>>,
) {
    for (e, pooled) in &q_missiles {
        if !q_pools.contains(pooled.launcher) {
            commands.entity(e).despawn();
        }
    }
}
