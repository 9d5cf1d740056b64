use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_tunables() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
}

#[test]
fn keeps_preinserted_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { launcher_capacity: 7, ..default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().launcher_capacity, 7);
}

#[test]
fn pausing_freezes_virtual_time() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_state::<GameState>();
    core::plugin(&mut app);
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Paused);
    app.update();
    assert!(app.world().resource::<Time<Virtual>>().is_paused());

    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::InGame);
    app.update();
    assert!(!app.world().resource::<Time<Virtual>>().is_paused());
}
