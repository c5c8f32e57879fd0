//! Pool construction: pre-spawn each weapon's bullets, inactive.
//!
//! Bullets keep all physics/render components for their whole life.
//! "Inactive" is expressed through values only (hidden, zero velocity, empty collision filters).

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

use super::components::{Bullet, BulletEntity, BulletState, Lifespan, PooledBullet};
use super::weapon::Weapon;

#[inline]
pub fn active_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [Layer::Default])
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_bullet_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::PlayerBullet, [] as [Layer; 0])
}

/// Construct one bullet, registered with rendering and physics, with default pool metadata.
///
/// The caller must set `Bullet::weapon` before the bullet is fired.
pub fn spawn_bullet(commands: &mut Commands, pos: Vec2, sprite: Sprite) -> BulletEntity {
    let e = commands
        .spawn((
            Name::new("Bullet(Pooled)"),
            PooledBullet,
            BulletState::Inactive,
            Bullet::default(),
            Lifespan::default(),
            sprite,
            Transform::from_translation(pos.extend(2.0)),
            Visibility::Hidden,
            RigidBody::Kinematic,
            Collider::circle(0.5),
            inactive_bullet_layers(),
            LinearVelocity(Vec2::ZERO),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    BulletEntity(e)
}

/// Pre-allocate the pool of every weapon that hasn't been stocked yet.
pub fn stock_new_weapons(mut commands: Commands, mut q_weapons: Query<(Entity, &mut Weapon)>) {
    for (weapon_e, mut weapon) in &mut q_weapons {
        if weapon.stocked {
            continue;
        }

        let cap = weapon.capacity;
        weapon.free.clear();
        weapon.free.reserve(cap);

        let color = weapon.config.bullet_color;
        for _ in 0..cap {
            let sprite = Sprite { color, ..default() };
            let bullet = spawn_bullet(&mut commands, Vec2::ZERO, sprite);

            // Back-reference goes in before anything can fire this slot.
            commands.entity(bullet.0).insert(Bullet {
                weapon: Some(weapon_e),
                ..default()
            });
            weapon.free.push(bullet);
        }

        weapon.stocked = true;
        debug!("Stocked weapon {weapon_e:?} with {cap} bullets");
    }
}

/// Flag bullets whose body no longer matches their weapon's configured size.
pub fn invalidate_bullet_bodies(
    q_weapons: Query<&Weapon>,
    mut q_bullets: Query<&mut Bullet, With<PooledBullet>>,
) {
    for mut bullet in &mut q_bullets {
        if bullet.body_dirty {
            continue;
        }
        let Some(weapon_e) = bullet.weapon else { continue; };
        let Ok(weapon) = q_weapons.get(weapon_e) else { continue; };

        if bullet.footprint != weapon.config.bullet_body_size {
            bullet.body_dirty = true;
        }
    }
}
