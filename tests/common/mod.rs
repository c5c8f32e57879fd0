//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - `TransformPlugin` keeps `GlobalTransform` in sync for avian.
//! - we then call `bevy_weapon::game::configure_headless` to install gameplay plugins.
//!
//! Time advances by a fixed manual step per `app.update()`, so fixed schedules tick
//! deterministically instead of following the wall clock.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use bevy::transform::TransformPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / 60.0)));

    bevy_weapon::game::configure_headless(&mut app);
    // `App::run` would do this; tests drive `update()` directly, so finish plugin setup here.
    app.finish();
    app.cleanup();
    app
}

/// Tick until `done` holds, panicking after `max_frames`.
pub fn update_until(app: &mut App, max_frames: usize, mut done: impl FnMut(&mut App) -> bool) {
    for _ in 0..max_frames {
        app.update();
        if done(app) {
            return;
        }
    }
    panic!("condition not reached within {max_frames} frames");
}
