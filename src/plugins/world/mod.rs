//! World plugin: a minimal scene for the missile pool to work against.
//!
//! One target dummy (a kinematic capsule whose aim point is its centre) and one
//! launcher aimed at it. The launcher reads its configuration from `Tunables`.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::missiles::components::{AimOffset, Target};
use crate::plugins::missiles::launcher::{configure, LauncherConfig};

const DUMMY_RADIUS: f32 = 0.5;
const DUMMY_HEIGHT: f32 = 2.0;

#[derive(Component)]
pub struct SceneLauncher;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_scene.run_if(scene_missing));
}

/// Leaving `Paused` re-enters `InGame`; the scene is only built once.
fn scene_missing(q: Query<(), With<SceneLauncher>>) -> bool {
    q.is_empty()
}

fn spawn_scene(mut commands: Commands, tunables: Res<Tunables>) {
    let dummy = commands
        .spawn((
            Name::new("TargetDummy"),
            Target,
            // Capsule origin sits at the feet; aim at the middle of the body.
            AimOffset(Vec3::Y * (DUMMY_HEIGHT * 0.5)),
            Transform::from_xyz(0.0, 0.0, -12.0),
            RigidBody::Kinematic,
            Collider::capsule(DUMMY_RADIUS, DUMMY_HEIGHT - 2.0 * DUMMY_RADIUS),
            CollisionLayers::new(Layer::Target, [Layer::World, Layer::Missile]),
        ))
        .id();

    commands.spawn((
        Name::new("MissileLauncher"),
        SceneLauncher,
        configure(LauncherConfig::from_tunables(&tunables, Some(dummy))),
        Transform::from_xyz(0.0, 1.0, 0.0),
    ));
}
