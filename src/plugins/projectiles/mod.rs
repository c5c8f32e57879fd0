//! Projectiles: weapons that own a fixed pool of bullets, and the bullet lifecycle.
//!
//! # Data flow (big picture)
//! ```text
//!   Update schedule (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) stock_new_weapons: pre-spawn `capacity` inactive bullets per Weapon   │
//!│      - writes: Bullet.weapon back-reference, Weapon.free                   │
//!│                                                                            │
//!│  (B) invalidate_bullet_bodies: body size changed → Bullet.body_dirty       │
//!│                                                                            │
//!│  (C) Producer: request_player_fire                                         │
//!│      - writes: FireRequest message                                         │
//!│                                                                            │
//!│  (D) Consumer: fire_from_pool                                              │
//!│      - honours fire rate, pops Weapon.free, re-fires the slot              │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate                          FixedPostUpdate (after avian steps)
//!┌──────────────────────────────┐    ┌────────────────────────────────────────┐
//!│ (E) bullet_lifespan          │    │ (F) update_bullets                     │
//!│     timer → kill()           │    │     spatial kill → rotate → wrap       │
//!└──────────────────────────────┘    │ (G) reclaim_killed_bullets             │
//!                                    │     BulletKilled → Inactive → free     │
//!                                    │ (H) tally_kills (another listener)     │
//!                                    └────────────────────────────────────────┘
//!
//! Feedback loop:
//!   reclaim pushes BulletEntity back into Weapon.free
//!   allocator pops BulletEntity from Weapon.free
//! ```
//!
//! Producers never borrow a weapon mutably; they only enqueue intent. The allocator
//! is the single writer that pops the pool and the reclaim handler the single writer
//! that pushes it.

pub mod components;
pub mod weapon;
pub mod pool;
pub mod lifecycle;
pub mod stats;

pub mod messages;
pub mod request;
pub mod allocator;
pub mod commit;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub struct WeaponPlugin;

impl Plugin for WeaponPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::FireRequest>()
            .add_message::<messages::BulletKilled>()
            .init_resource::<stats::KillStats>();

        // Update-phase pipeline: stock -> invalidate -> request -> fire
        app.add_systems(
            Update,
            (
                pool::stock_new_weapons,
                pool::invalidate_bullet_bodies,
                request::request_player_fire,
                allocator::fire_from_pool,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            lifecycle::bullet_lifespan.run_if(in_state(GameState::InGame)),
        );

        // Fixed lifecycle: physics has moved the bodies by now.
        app.add_systems(
            FixedPostUpdate,
            lifecycle::update_bullets
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            (commit::reclaim_killed_bullets, stats::tally_kills)
                .after(lifecycle::update_bullets)
                .run_if(in_state(GameState::InGame)),
        );
    }
}
