use bevy::prelude::*;

/// Marker for every bullet that belongs to a weapon pool.
#[derive(Component)]
pub struct PooledBullet;

/// Newtype so pool free lists can't be fed arbitrary entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BulletEntity(pub Entity);

/// Pool lifecycle.
///
/// - `Inactive`: parked in a weapon's free list (`exists == false`).
/// - `Active`: in flight (`alive`).
/// - `PendingReturn`: killed this tick, still exists until the weapon reclaims it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

impl BulletState {
    /// Whether the bullet currently occupies its pool slot.
    #[inline]
    pub fn exists(self) -> bool {
        self != Self::Inactive
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self == Self::Active
    }
}

/// Which condition retires a bullet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KillType {
    /// Lives until something external kills it.
    #[default]
    None,
    /// Killed when its `Lifespan` timer finishes.
    Lifespan,
    /// Killed once it travels further than `kill_distance` from its origin.
    Distance,
    /// Killed once its footprint leaves the weapon's bullet bounds.
    Bounds,
}

impl KillType {
    /// Kill conditions evaluated from position during the per-tick update.
    #[inline]
    pub fn is_spatial(self) -> bool {
        matches!(self, Self::Distance | Self::Bounds)
    }
}

/// Per-bullet metadata written by the owning weapon on every fire.
#[derive(Component, Debug, Clone)]
pub struct Bullet {
    /// Owning weapon. Set once, right after the bullet is constructed.
    pub weapon: Option<Entity>,
    /// Where the bullet was last fired from.
    pub origin: Vec2,
    /// Collider/sprite size must be re-synced before the next fire.
    pub body_dirty: bool,
    pub rotate_to_velocity: bool,
    pub kill_type: KillType,
    pub kill_distance: f32,
    /// Size of the synced body, used for the bounds test.
    pub footprint: Vec2,
}

impl Default for Bullet {
    fn default() -> Self {
        Self {
            weapon: None,
            origin: Vec2::ZERO,
            body_dirty: true,
            rotate_to_velocity: false,
            kill_type: KillType::None,
            kill_distance: 0.0,
            footprint: Vec2::ZERO,
        }
    }
}

impl Bullet {
    /// Owning weapon entity.
    ///
    /// Panics if the pool never wired the back-reference: that is a pool bug, not a runtime case.
    #[inline]
    pub fn owner(&self) -> Entity {
        self.weapon.expect("Bullet used before its weapon back-reference was set")
    }

    /// Evaluate the spatial kill condition for a bullet at `pos`.
    ///
    /// `bounds` is only consulted for `KillType::Bounds`.
    pub fn spatial_kill_due(&self, pos: Vec2, bounds: Rect) -> bool {
        match self.kill_type {
            KillType::Distance => self.origin.distance(pos) > self.kill_distance,
            KillType::Bounds => {
                !overlaps(Rect::from_center_size(pos, self.footprint), bounds)
            }
            KillType::None | KillType::Lifespan => false,
        }
    }
}

/// Closed-interval rectangle overlap: shared edges count as touching.
#[inline]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
}

/// Countdown for `KillType::Lifespan`. Always present so firing never changes archetypes.
#[derive(Component, Deref, DerefMut, Debug, Clone)]
pub struct Lifespan(pub Timer);

impl Default for Lifespan {
    fn default() -> Self {
        Self(Timer::from_seconds(0.0, TimerMode::Once))
    }
}
