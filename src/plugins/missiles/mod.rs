//! Missiles plugin: **pooled homing missiles** fed by launchers on a cooldown.
//!
//! # Philosophy: invariants first
//! Pool bookkeeping is mutated in exactly two places: the allocator (acquire) and the
//! commit system (release). Everything else only writes messages. Boundaries validate
//! once; hot loops treat violations as bugs (`expect()`).
//!
//! # Data flow (big picture)
//! ```text
//!   Update schedule (variable dt), InGame only
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) apply_launcher_commands: toggle/set spawning, retarget                │
//!│  (B) tick_launchers: cooldown timer -> SpawnMissileRequest                 │
//!│  (C) allocate_missiles_from_pool                                           │
//!│      - MissilePool::acquire (recycle a free slot or run the factory)       │
//!│      - reinit: position = launcher now, rotation = origin, v = w = 0,      │
//!│                target = launcher target, queue launch impulse            │
//!│  (D) guide_missiles: v = forward * speed, slew toward aim point            │
//!│  (E) process_detonations: debug retire -> MissileRetired                   │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!FixedUpdate / FixedPostUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (F) apply_launch_impulse: one step of launch force                        │
//!│  (G) Physics emits CollisionStart messages (Avian)                         │
//!│  (H) process_missile_collisions: Active -> PendingReturn + MissileRetired  │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!PostUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (I) return_to_pool_commit: MissilePool::release + Inactive invariants     │
//!│  (J) despawn_orphaned_missiles: pool teardown                              │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A retired missile is `PendingReturn` from (H) to (I), so guidance never touches it
//! again, and it is back in the free list before the frame ends.

pub mod components;
pub mod pool;

pub mod messages;
pub mod launcher;
pub mod allocator;
pub mod guidance;
pub mod collision;
pub mod commit;

use avian3d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub struct MissilesPlugin;

impl Plugin for MissilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::SpawnMissileRequest>()
            .add_message::<messages::LauncherCommand>()
            .add_message::<messages::DetonateMissile>()
            .add_message::<messages::MissileRetired>();

        // Warm-up runs whenever a pool appears, independent of game state.
        app.add_systems(PreUpdate, launcher::warm_launcher_pools);

        app.add_systems(
            Update,
            (
                launcher::apply_launcher_commands,
                launcher::tick_launchers,
                allocator::allocate_missiles_from_pool,
                guidance::guide_missiles,
                collision::process_detonations,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(FixedUpdate, guidance::apply_launch_impulse);

        app.add_systems(
            FixedPostUpdate,
            collision::process_missile_collisions.after(CollisionEventSystems),
        );

        app.add_systems(
            PostUpdate,
            (commit::return_to_pool_commit, commit::despawn_orphaned_missiles).chain(),
        );
    }
}
