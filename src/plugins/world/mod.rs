//! World plugin: playfield bounds + an asset-free floor.
//!
//! `WorldBounds` plays the role of the physics world bounds: bullets wrap inside it,
//! and weapons without their own bullet bounds kill against it.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};

const TILE: f32 = 64.0;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds(pub Rect);

impl WorldBounds {
    pub fn from_size(size: Vec2) -> Self {
        Self(Rect::from_center_size(Vec2::ZERO, size))
    }
}

pub fn plugin(app: &mut App) {
    let size = app.world().resource::<Tunables>().world_size;
    app.insert_resource(WorldBounds::from_size(size));
    app.add_systems(OnEnter(GameState::InGame), spawn_floor);
}

/// Checkerboard of solid-colour tiles covering the world bounds.
fn spawn_floor(mut commands: Commands, bounds: Res<WorldBounds>) {
    let cols = (bounds.0.width() / TILE).ceil() as i32;
    let rows = (bounds.0.height() / TILE).ceil() as i32;
    let start = bounds.0.min + Vec2::splat(TILE * 0.5);

    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let pos = start + Vec2::new(x as f32, y as f32) * TILE;
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                Name::new("FloorTile"),
                Sprite::from_color(color, Vec2::splat(TILE)),
                Transform::from_translation(pos.extend(0.0)),
                DespawnOnExit(GameState::InGame),
            ));
        });
}

#[cfg(test)]
mod tests;
