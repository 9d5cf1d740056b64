//! Global state machine.
//!
//! `Paused` freezes virtual time. Fixed-step physics is driven by virtual time,
//! so launchers, guidance and Avian all stop together.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    Paused,
}

pub fn freeze_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

pub fn resume_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
