//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::missiles::MissilesPlugin;

pub mod core;
pub mod missiles;
pub mod physics;
pub mod world;

// Render-only
pub mod camera;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    app.add_plugins(MissilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    camera::plugin(app);
}
