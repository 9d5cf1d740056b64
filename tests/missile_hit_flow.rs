mod common;

use avian3d::prelude::*;
use bevy::prelude::*;
use missile_pool::plugins::missiles::components::{MissileState, Target};
use missile_pool::plugins::missiles::launcher::{configure, LauncherConfig};
use missile_pool::plugins::missiles::messages::SpawnMissileRequest;
use missile_pool::plugins::missiles::pool::{MissilePool, SlotIndex};

#[test]
fn hit_returns_missile_to_pool_and_relaunch_reuses_it() {
    let mut app = common::app_headless();
    app.update();

    let target = app
        .world_mut()
        .spawn((Target, Transform::from_xyz(0.0, 0.0, -500.0)))
        .id();
    let launcher = app
        .world_mut()
        .spawn((
            configure(LauncherConfig {
                capacity: 2,
                target: Some(target),
                spawning: false,
                ..default()
            }),
            Transform::from_xyz(50.0, 0.0, 0.0),
        ))
        .id();

    // Manual spawn goes through the same allocator as cadence spawns.
    app.world_mut().write_message(SpawnMissileRequest { launcher });
    app.update();

    let missile = app
        .world()
        .get::<MissilePool>(launcher)
        .and_then(|p| p.entity(SlotIndex(0)))
        .expect("manual spawn should create a missile");
    assert_eq!(*app.world().get::<MissileState>(missile).unwrap(), MissileState::Active);

    // Physics reports a contact.
    app.world_mut().write_message(CollisionStart {
        collider1: missile,
        collider2: target,
        body1: Some(missile),
        body2: Some(target),
    });
    app.update();

    assert_eq!(*app.world().get::<MissileState>(missile).unwrap(), MissileState::Inactive);
    assert_eq!(*app.world().get::<Visibility>(missile).unwrap(), Visibility::Hidden);
    let pool = app.world().get::<MissilePool>(launcher).unwrap();
    assert_eq!(pool.free_count(), 1);
    assert_eq!(pool.active_count(), 0);

    app.world_mut().write_message(SpawnMissileRequest { launcher });
    app.update();

    let pool = app.world().get::<MissilePool>(launcher).unwrap();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.active_count(), 1);
    assert_eq!(*app.world().get::<MissileState>(missile).unwrap(), MissileState::Active);
    assert_eq!(
        app.world().get::<Transform>(missile).unwrap().translation.x,
        50.0,
        "relaunch starts at the launcher"
    );
}

#[derive(Component)]
struct TearDown;

fn tear_down_marked(mut commands: Commands, q: Query<Entity, With<TearDown>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}

#[test]
fn launcher_despawned_in_the_frame_of_a_hit_takes_its_missile_with_it() {
    let mut app = common::app_headless();
    app.add_systems(Update, tear_down_marked);
    app.update();

    let target = app
        .world_mut()
        .spawn((Target, Transform::from_xyz(0.0, 0.0, -500.0)))
        .id();
    let launcher = app
        .world_mut()
        .spawn((
            configure(LauncherConfig {
                capacity: 1,
                target: Some(target),
                spawning: false,
                ..default()
            }),
            Transform::from_xyz(50.0, 0.0, 0.0),
        ))
        .id();

    app.world_mut().write_message(SpawnMissileRequest { launcher });
    app.update();
    let missile = app
        .world()
        .get::<MissilePool>(launcher)
        .and_then(|p| p.entity(SlotIndex(0)))
        .unwrap();

    // Hit lands in the fixed step, teardown in Update, commit in PostUpdate.
    app.world_mut().write_message(CollisionStart {
        collider1: target,
        collider2: missile,
        body1: Some(target),
        body2: Some(missile),
    });
    app.world_mut().entity_mut(launcher).insert(TearDown);
    app.update();

    assert!(app.world().get_entity(launcher).is_err());
    assert!(app.world().get_entity(missile).is_err());

    // Nothing left behind to trip later frames.
    app.update();
}
