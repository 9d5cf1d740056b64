//! Retirement signal: contacts (or debug detonations) mark a missile for return.
//!
//! A missile signals at most once per flight. The first contact moves it
//! `Active -> PendingReturn` and writes one `MissileRetired`; anything after that
//! finds it not `Active` and is ignored until the pool relaunches it.

use avian3d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::components::{MissileState, PooledMissile};
use super::messages::{DetonateMissile, MissileRetired};

/// Signal retirement if the missile is in flight. Returns whether a signal was written.
fn retire(
    missile: Entity,
    pooled: &PooledMissile,
    state: &mut MissileState,
    writer: &mut MessageWriter<MissileRetired>,
) -> bool {
    if *state != MissileState::Active {
        return false;
    }

    *state = MissileState::PendingReturn;
    writer.write(MissileRetired {
        launcher: pooled.launcher,
        slot: pooled.slot,
        missile,
    });
    true
}

pub fn process_missile_collisions(
    mut started: MessageReader<CollisionStart>,
    mut q_missiles: Query<(&PooledMissile, &mut MissileState)>,
    mut writer: MessageWriter<MissileRetired>,
    // Per-run dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        // Either side may be a missile; missiles don't collide with each other,
        // but handling both sides keeps this independent of layer setup.
        for collider in [ev.collider1, ev.collider2] {
            let Ok((pooled, mut state)) = q_missiles.get_mut(collider) else {
                continue;
            };
            if !seen.insert(collider) {
                continue;
            }
            retire(collider, pooled, &mut *state, &mut writer);
        }
    }
}

pub fn process_detonations(
    mut reader: MessageReader<DetonateMissile>,
    mut q_missiles: Query<(&PooledMissile, &mut MissileState)>,
    mut writer: MessageWriter<MissileRetired>,
) {
    for req in reader.read() {
        let Ok((pooled, mut state)) = q_missiles.get_mut(req.missile) else {
            debug!("DetonateMissile for non-missile {:?}", req.missile);
            continue;
        };
        if !retire(req.missile, pooled, &mut *state, &mut writer) {
            debug!("DetonateMissile ignored, {:?} is not in flight", req.missile);
        }
    }
}
