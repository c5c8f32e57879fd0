use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::projectiles::components::KillType;
use crate::plugins::projectiles::weapon::Weapon;

use super::{Player, Thrust};

#[test]
fn ship_spawns_with_unstocked_lifespan_weapon() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_ship);

    let (_, weapon) = world.query::<(&Player, &Weapon)>().single(&world).unwrap();
    assert_eq!(weapon.capacity, super::PLAYER_WEAPON_CAPACITY);
    assert!(!weapon.stocked);
    assert_eq!(weapon.config.bullet_kill_type, KillType::Lifespan);
    assert!(weapon.config.bullet_world_wrap);
}

#[test]
fn steer_ship_scales_thrust_by_speed() {
    let mut world = World::new();
    world.insert_resource(Tunables { player_speed: 100.0, ..default() });
    world.insert_resource(Thrust(Vec2::X));
    world.spawn((Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::steer_ship);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(100.0, 0.0));
}

#[test]
fn diagonal_steering_is_normalised() {
    let mut world = World::new();
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::KeyD);
    world.insert_resource(keys);
    world.init_resource::<Thrust>();

    run_system_once(&mut world, super::read_steering);

    let axis = world.resource::<Thrust>().0;
    assert!((axis.length() - 1.0).abs() < 1e-5);
    assert!(axis.x > 0.0 && axis.y > 0.0);
}

#[test]
fn read_steering_without_keyboard_is_noop() {
    let mut world = World::new();
    world.insert_resource(Thrust(Vec2::X));

    run_system_once(&mut world, super::read_steering);

    assert_eq!(world.resource::<Thrust>().0, Vec2::X);
}
