//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Avian length unit (world units per meter).
    pub length_unit: f32,
    /// Forward speed of a missile, units/second.
    pub missile_speed: f32,
    /// Maximum missile turn rate, degrees/second.
    pub missile_turn_rate: f32,
    /// Upward force applied for one fixed step on launch.
    pub missile_launch_force: f32,
    pub launcher_capacity: usize,
    pub launcher_cooldown: f32,
    pub launcher_prewarm: usize,
    pub launcher_spawning: bool,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            length_unit: 1.0,
            missile_speed: 1.0,
            missile_turn_rate: 360.0,
            missile_launch_force: 10.0,
            launcher_capacity: 100,
            launcher_cooldown: 0.2,
            launcher_prewarm: 0,
            launcher_spawning: true,
        }
    }
}
