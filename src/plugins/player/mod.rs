//! The armed ship: the only `Weapon` owner in the game.
//!
//! The ship spawns with an unstocked `Weapon`; the projectiles plugin fills its pool
//! on the next `Update`. Steering is a WASD axis written into `Thrust` and turned
//! into a kinematic velocity on the fixed tick. Without a keyboard (headless) the
//! ship stays put and fires nothing.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::projectiles::components::KillType;
use crate::plugins::projectiles::weapon::{Weapon, WeaponConfig};

/// Bullets pre-allocated for the ship's weapon.
pub const PLAYER_WEAPON_CAPACITY: usize = 64;

const SHIP_RADIUS: f32 = 13.0;
const SHIP_COLOR: Color = Color::srgb(0.2, 0.75, 0.9);

/// Key → unit contribution to the steering axis.
const STEER_KEYS: [(KeyCode, Vec2); 4] = [
    (KeyCode::KeyW, Vec2::Y),
    (KeyCode::KeyS, Vec2::NEG_Y),
    (KeyCode::KeyA, Vec2::NEG_X),
    (KeyCode::KeyD, Vec2::X),
];

#[derive(Component)]
pub struct Player;

/// Normalised steering direction for this frame.
#[derive(Resource, Default, Debug)]
struct Thrust(Vec2);

pub fn plugin(app: &mut App) {
    app.init_resource::<Thrust>()
        .add_systems(OnEnter(GameState::InGame), spawn_ship)
        .add_systems(Update, read_steering)
        .add_systems(FixedUpdate, steer_ship);
}

/// Loadout: short-lived bullets that align with their heading and wrap around the playfield.
pub fn player_weapon() -> Weapon {
    Weapon::new(
        PLAYER_WEAPON_CAPACITY,
        WeaponConfig {
            bullet_kill_type: KillType::Lifespan,
            bullet_lifespan: 1.2,
            bullet_rotate_to_velocity: true,
            bullet_world_wrap: true,
            bullet_world_wrap_padding: 8.0,
            bullet_body_size: Vec2::new(12.0, 4.0),
            ..default()
        },
    )
}

fn spawn_ship(mut commands: Commands) {
    commands.spawn((
        Name::new("Ship"),
        Player,
        player_weapon(),
        Sprite {
            color: SHIP_COLOR,
            custom_size: Some(Vec2::splat(SHIP_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Kinematic,
        Collider::circle(SHIP_RADIUS),
        // Own bullets never hit the ship.
        CollisionLayers::new(Layer::Player, [Layer::Default]),
        LinearVelocity::ZERO,
        DespawnOnExit(GameState::InGame),
    ));
}

fn read_steering(keys: Option<Res<ButtonInput<KeyCode>>>, mut thrust: ResMut<Thrust>) {
    let Some(keys) = keys else { return; };

    let axis: Vec2 = STEER_KEYS
        .iter()
        .filter(|(key, _)| keys.pressed(*key))
        .map(|(_, dir)| *dir)
        .sum();
    thrust.0 = axis.normalize_or_zero();
}

fn steer_ship(
    tunables: Res<Tunables>,
    thrust: Res<Thrust>,
    mut q_ship: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_ship.single_mut() else { return; };
    vel.0 = thrust.0 * tunables.player_speed;
}

#[cfg(test)]
mod tests;
