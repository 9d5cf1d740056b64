//! Buffered missile messages.
//!
//! Producers (launcher cadence, debug tooling, physics) only write intent.
//! The allocator and the commit system are the single writers of pool state:
//!
//! ```text
//! tick_launchers ─┐                          ┌─ process_missile_collisions
//! (manual spawn) ─┴─> SpawnMissileRequest    │  process_detonations
//!                      └─> allocator         └─> MissileRetired ─> commit
//! ```

use bevy::prelude::*;

use super::pool::SlotIndex;

/// Ask a launcher to put one missile in flight.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnMissileRequest {
    pub launcher: Entity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LauncherAction {
    ToggleSpawning,
    SetSpawning(bool),
    /// Default target for missiles spawned from now on.
    SetTarget(Option<Entity>),
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LauncherCommand {
    pub launcher: Entity,
    pub action: LauncherAction,
}

/// Retire a missile as if it had hit something.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetonateMissile {
    pub missile: Entity,
}

/// Retirement signal, addressed to the launcher that owns the missile.
///
/// Written at most once per flight.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissileRetired {
    pub launcher: Entity,
    pub slot: SlotIndex,
    pub missile: Entity,
}
