//! Fire consumer: re-fire bullets from a weapon's pool.
//!
//! # Fail-fast invariants
//! - A weapon's free list contains only its own pooled bullet entities.
//! - Therefore, a slot popped from the free list must match the bullet query.
//!
//! If this is violated, we `expect()` and crash loudly.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{Bullet, BulletEntity, BulletState, Lifespan, PooledBullet};
use super::messages::FireRequest;
use super::pool::active_bullet_layers;
use super::weapon::Weapon;

pub fn fire_from_pool(
    time: Res<Time>,
    mut reader: MessageReader<FireRequest>,
    mut q_weapons: Query<&mut Weapon>,
    mut q: Query<(
        &mut BulletState,
        &mut Bullet,
        &mut Lifespan,
        &mut Transform,
        &mut LinearVelocity,
        &mut Visibility,
        &mut CollisionLayers,
        &mut Collider,
        &mut Sprite,
    ), With<PooledBullet>>,
) {
    let now = time.elapsed_secs();

    for req in reader.read() {
        let Ok(mut weapon) = q_weapons.get_mut(req.weapon) else {
            debug!("FireRequest for missing weapon {:?}", req.weapon);
            continue;
        };

        // Cooldown or empty pool: capacity decisions, not correctness failures.
        let Some(BulletEntity(e)) = weapon.take_slot(now) else { continue; };

        let (mut state, mut bullet, mut lifespan, mut tf, mut vel, mut vis, mut layers, mut collider, mut sprite) =
            q.get_mut(e).expect("Weapon pool contained an entity missing pooled bullet components");

        let cfg = &weapon.config;

        if bullet.body_dirty {
            let size = cfg.bullet_body_size;
            *collider = Collider::rectangle(size.x, size.y);
            sprite.custom_size = Some(size);
            bullet.footprint = size;
            bullet.body_dirty = false;
        }
        sprite.color = cfg.bullet_color;

        bullet.origin = req.origin;
        bullet.kill_type = cfg.bullet_kill_type;
        bullet.kill_distance = cfg.bullet_kill_distance;
        bullet.rotate_to_velocity = cfg.bullet_rotate_to_velocity;

        lifespan.set_duration(Duration::from_secs_f32(cfg.bullet_lifespan));
        lifespan.reset();

        let dir = req.direction.normalize_or_zero();
        tf.translation = req.origin.extend(2.0);
        tf.rotation = Quat::from_rotation_z(dir.y.atan2(dir.x));
        vel.0 = dir * cfg.bullet_speed;

        *vis = Visibility::Visible;
        *layers = active_bullet_layers();
        *state = BulletState::Active;
    }
}
