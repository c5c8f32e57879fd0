//! Reclaim: the weapon's kill handler. Recycles killed bullets back into their pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive bullets must be:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)
//! - present in exactly one weapon free list

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{BulletState, PooledBullet};
use super::lifecycle::park_orphan;
use super::messages::BulletKilled;
use super::pool::inactive_bullet_layers;
use super::weapon::Weapon;

pub fn reclaim_killed_bullets(
    mut killed: MessageReader<BulletKilled>,
    mut q_weapons: Query<&mut Weapon>,
    mut q: Query<(
        &mut BulletState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    ), With<PooledBullet>>,
) {
    for ev in killed.read() {
        let Ok((mut state, mut vis, mut vel, mut layers)) = q.get_mut(ev.bullet.0) else {
            continue;
        };

        // Already reclaimed (or re-fired) since the notification was written.
        if *state != BulletState::PendingReturn { continue; }

        park_orphan(&mut state, &mut vis, &mut vel);
        *layers = inactive_bullet_layers();

        let Ok(mut weapon) = q_weapons.get_mut(ev.weapon) else {
            debug!("Killed bullet {:?} has no weapon to return to; left parked", ev.bullet.0);
            continue;
        };
        weapon.push_free(ev.bullet);
    }
}
