//! Weapon: the pool manager that owns a fixed set of bullets.
//!
//! A weapon lives on whatever entity fires it (the player ship in this game).
//! Bullets keep a non-owning back-reference (`Bullet::weapon`) and read the
//! weapon's config every tick for bounds/wrap decisions.

use bevy::prelude::*;

use super::components::{BulletEntity, KillType};

/// Shared behaviour for every bullet a weapon fires.
#[derive(Debug, Clone)]
pub struct WeaponConfig {
    /// Launch speed in pixels per second.
    pub bullet_speed: f32,
    /// Minimum seconds between two shots.
    pub fire_rate: f32,
    pub bullet_kill_type: KillType,
    pub bullet_kill_distance: f32,
    /// Seconds a bullet lives under `KillType::Lifespan`.
    pub bullet_lifespan: f32,
    pub bullet_rotate_to_velocity: bool,
    /// Bounds-kill region. `None` falls back to the world bounds.
    pub bullet_bounds: Option<Rect>,
    pub bullet_world_wrap: bool,
    /// Inset applied to the world bounds when wrapping.
    pub bullet_world_wrap_padding: f32,
    pub bullet_body_size: Vec2,
    pub bullet_color: Color,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            bullet_speed: 900.0,
            fire_rate: 0.1,
            bullet_kill_type: KillType::Bounds,
            bullet_kill_distance: 0.0,
            bullet_lifespan: 0.0,
            bullet_rotate_to_velocity: false,
            bullet_bounds: None,
            bullet_world_wrap: false,
            bullet_world_wrap_padding: 0.0,
            bullet_body_size: Vec2::splat(8.0),
            bullet_color: Color::srgb(1.0, 0.85, 0.3),
        }
    }
}

impl WeaponConfig {
    /// Fail fast on configurations the bullet update can't honour.
    pub fn assert_valid(&self) {
        assert!(self.bullet_speed >= 0.0, "bullet_speed must be non-negative");
        assert!(self.fire_rate >= 0.0, "fire_rate must be non-negative");
        assert!(self.bullet_kill_distance >= 0.0, "bullet_kill_distance must be non-negative");
        assert!(self.bullet_lifespan >= 0.0, "bullet_lifespan must be non-negative");
        assert!(
            self.bullet_world_wrap_padding >= 0.0,
            "bullet_world_wrap_padding must be non-negative"
        );
        assert!(
            self.bullet_body_size.x > 0.0 && self.bullet_body_size.y > 0.0,
            "bullet_body_size must be positive"
        );
    }

    /// Region used for `KillType::Bounds`.
    #[inline]
    pub fn kill_bounds(&self, world: Rect) -> Rect {
        self.bullet_bounds.unwrap_or(world)
    }
}

#[derive(Component, Debug)]
pub struct Weapon {
    pub config: WeaponConfig,
    pub capacity: usize,
    /// Slots ready to fire. Only the allocator pops and only the reclaim handler pushes.
    pub free: Vec<BulletEntity>,
    /// Elapsed-seconds timestamp before which the weapon refuses to fire.
    pub next_fire_at: f32,
    /// Set once the pool has been pre-allocated.
    pub stocked: bool,
}

impl Weapon {
    pub fn new(capacity: usize, config: WeaponConfig) -> Self {
        config.assert_valid();
        Self {
            config,
            capacity,
            free: Vec::with_capacity(capacity),
            next_fire_at: 0.0,
            stocked: false,
        }
    }

    #[inline]
    pub fn ready(&self, now: f32) -> bool {
        now >= self.next_fire_at
    }

    /// Take a slot for a shot fired at `now`, honouring the fire rate.
    ///
    /// The cooldown only restarts when a slot was actually handed out.
    pub fn take_slot(&mut self, now: f32) -> Option<BulletEntity> {
        if !self.ready(now) {
            return None;
        }
        let slot = self.free.pop()?;
        self.next_fire_at = now + self.config.fire_rate;
        Some(slot)
    }

    #[inline]
    pub fn push_free(&mut self, bullet: BulletEntity) {
        debug_assert!(!self.free.contains(&bullet), "bullet returned to the pool twice");
        self.free.push(bullet);
    }

    /// Bullets currently out of the pool.
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.capacity.saturating_sub(self.free.len())
    }
}
