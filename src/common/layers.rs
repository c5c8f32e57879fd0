//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    /// Host-spawned colliders that never opted into a layer.
    #[default]
    Default,
    Player,
    PlayerBullet,
}
