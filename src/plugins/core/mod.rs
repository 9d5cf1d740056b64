//! Core plugin: shared resources and the pause toggle.

use bevy::prelude::*;

use crate::common::state::{freeze_virtual_time, resume_virtual_time, GameState};
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.add_systems(OnEnter(GameState::Paused), freeze_virtual_time)
        .add_systems(OnExit(GameState::Paused), resume_virtual_time);
}

#[cfg(test)]
mod tests;
