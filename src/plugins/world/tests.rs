use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

#[test]
fn bounds_follow_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { world_size: Vec2::new(200.0, 100.0), ..default() });
    super::plugin(&mut app);

    let bounds = app.world().resource::<super::WorldBounds>().0;
    assert_eq!(bounds.min, Vec2::new(-100.0, -50.0));
    assert_eq!(bounds.max, Vec2::new(100.0, 50.0));
}

#[test]
fn floor_covers_bounds() {
    let mut world = World::new();
    world.insert_resource(super::WorldBounds::from_size(Vec2::new(256.0, 128.0)));
    run_system_once(&mut world, super::spawn_floor);

    let tiles = world.query::<&Name>().iter(&world)
        .filter(|n| n.as_str() == "FloorTile")
        .count();
    assert_eq!(tiles, 4 * 2);
}
