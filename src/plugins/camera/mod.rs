//! Camera plugin (render-only).
//!
//! No meshes are authored for missiles or targets; Avian's debug renderer draws
//! colliders so the pool can be watched at work.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::state::GameState;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<PhysicsDebugPlugin>() {
        app.add_plugins(PhysicsDebugPlugin::default());
    }

    app.add_systems(OnEnter(GameState::InGame), spawn_camera.run_if(camera_missing));
}

fn camera_missing(q: Query<(), With<MainCamera>>) -> bool {
    q.is_empty()
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        MainCamera,
        Camera3d::default(),
        Transform::from_xyz(10.0, 8.0, 4.0).looking_at(Vec3::new(0.0, 1.0, -6.0), Vec3::Y),
    ));
}
