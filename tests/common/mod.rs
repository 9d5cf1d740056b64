//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `missile_pool::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed step per `app.update()`, so cadence is deterministic.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

pub const FRAME: Duration = Duration::from_millis(50);

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists; Avian's collider-from-mesh
    // support also expects a Mesh asset store.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.init_asset::<Mesh>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    missile_pool::game::configure_headless(&mut app);

    // `App::run` would do this; Avian inserts some of its resources in `Plugin::finish`.
    app.finish();
    app.cleanup();
    app
}
