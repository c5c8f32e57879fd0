//! Buffered weapon messages.
//!
//! - `FireRequest`: producers (input, AI) ask a weapon to fire. Only the allocator touches the pool.
//! - `BulletKilled`: kill notification. Every system with a reader is a kill listener.

use bevy::prelude::*;

use super::components::{BulletEntity, KillType};

#[derive(Message, Clone, Copy, Debug)]
pub struct FireRequest {
    pub weapon: Entity,
    pub origin: Vec2,
    /// Need not be normalized.
    pub direction: Vec2,
}

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct BulletKilled {
    pub bullet: BulletEntity,
    pub weapon: Entity,
    pub cause: KillType,
}
