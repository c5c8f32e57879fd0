//! Per-tick bullet lifecycle: kill checks, heading alignment, world-wrap.
//!
//! ```text
//!   Inactive ──(fire_from_pool)──> Active ──(kill)──> PendingReturn ──(reclaim)──> Inactive
//!                                     │                    │
//!                                     └─ update_bullets ───┘  (runs while the bullet exists)
//! ```
//!
//! `kill` only flips flags and notifies. It never short-circuits the rest of the
//! update, so a bullet killed this tick is still rotated and wrapped.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::plugins::world::WorldBounds;

use super::components::{Bullet, BulletEntity, BulletState, KillType, Lifespan, PooledBullet};
use super::messages::BulletKilled;
use super::weapon::Weapon;

/// Retire a bullet and notify its weapon's kill listeners.
///
/// Only an `Active` bullet can be killed: a second call before the weapon reclaims
/// the slot leaves the flags as they are and sends nothing. Returns whether a
/// notification went out.
pub fn kill(
    bullet_e: BulletEntity,
    bullet: &Bullet,
    state: &mut BulletState,
    vis: &mut Visibility,
    cause: KillType,
    killed: &mut MessageWriter<BulletKilled>,
) -> bool {
    let weapon = bullet.owner();

    if !state.is_alive() {
        return false;
    }

    *state = BulletState::PendingReturn;
    *vis = Visibility::Hidden;

    killed.write(BulletKilled { bullet: bullet_e, weapon, cause });
    true
}

/// Wrap `v` into `[min, max)`.
#[inline]
pub fn wrap_scalar(v: f32, min: f32, max: f32) -> f32 {
    let range = max - min;
    assert!(range > 0.0, "wrap range must be positive (padding too large for the world bounds)");
    min + (v - min).rem_euclid(range)
}

/// Wrap a position to the opposite edge of `bounds` shrunk by `padding` on every side.
pub fn wrap_position(pos: Vec2, bounds: Rect, padding: f32) -> Vec2 {
    let min = bounds.min + Vec2::splat(padding);
    let max = bounds.max - Vec2::splat(padding);
    Vec2::new(wrap_scalar(pos.x, min.x, max.x), wrap_scalar(pos.y, min.y, max.y))
}

/// The per-tick bullet update. Runs after the physics step has moved every body.
pub fn update_bullets(
    world_bounds: Res<WorldBounds>,
    q_weapons: Query<&Weapon>,
    mut killed: MessageWriter<BulletKilled>,
    mut q: Query<(
        Entity,
        &Bullet,
        &mut BulletState,
        &mut Transform,
        &mut Visibility,
        &mut LinearVelocity,
    ), With<PooledBullet>>,
) {
    for (e, bullet, mut state, mut tf, mut vis, mut vel) in &mut q {
        // Parked slots never run any logic.
        if !state.exists() {
            continue;
        }

        // Weapon despawned under the bullet: park it, there is no pool to return to.
        let Ok(weapon) = q_weapons.get(bullet.owner()) else {
            debug!("Bullet {e:?} outlived its weapon; parking it");
            park_orphan(&mut state, &mut vis, &mut vel);
            continue;
        };
        let cfg = &weapon.config;

        let pos = tf.translation.truncate();

        if bullet.kill_type.is_spatial()
            && bullet.spatial_kill_due(pos, cfg.kill_bounds(world_bounds.0))
        {
            kill(BulletEntity(e), bullet, &mut state, &mut vis, bullet.kill_type, &mut killed);
        }

        if bullet.rotate_to_velocity {
            tf.rotation = Quat::from_rotation_z(vel.0.y.atan2(vel.0.x));
        }

        if cfg.bullet_world_wrap {
            let wrapped = wrap_position(pos, world_bounds.0, cfg.bullet_world_wrap_padding);
            if wrapped != pos {
                tf.translation.x = wrapped.x;
                tf.translation.y = wrapped.y;
            }
        }
    }
}

/// Inactive invariants for a bullet with no weapon left to reclaim it.
pub fn park_orphan(state: &mut BulletState, vis: &mut Visibility, vel: &mut LinearVelocity) {
    *state = BulletState::Inactive;
    *vis = Visibility::Hidden;
    vel.0 = Vec2::ZERO;
}

/// Time-based kills. Lives outside `update_bullets`, which only handles spatial conditions.
pub fn bullet_lifespan(
    time: Res<Time>,
    mut killed: MessageWriter<BulletKilled>,
    mut q: Query<(
        Entity,
        &Bullet,
        &mut Lifespan,
        &mut BulletState,
        &mut Visibility,
    ), With<PooledBullet>>,
) {
    for (e, bullet, mut lifespan, mut state, mut vis) in &mut q {
        if !state.is_alive() || bullet.kill_type != KillType::Lifespan {
            continue;
        }

        lifespan.tick(time.delta());
        if lifespan.is_finished() {
            kill(BulletEntity(e), bullet, &mut state, &mut vis, KillType::Lifespan, &mut killed);
        }
    }
}
