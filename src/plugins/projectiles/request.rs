use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::plugins::camera::MainCamera;
use crate::plugins::player::Player;

use super::messages::FireRequest;
use super::weapon::Weapon;

/// Distance from the ship's centre to the muzzle.
const MUZZLE_OFFSET: f32 = 18.0;

/// Producer: while the trigger is held, ask the player's weapon to fire toward the cursor.
///
/// This system intentionally does **not** touch the pool; the weapon decides fire rate and capacity.
pub fn request_player_fire(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    q_player: Query<(Entity, &Transform), (With<Player>, With<Weapon>)>,
    mut writer: MessageWriter<FireRequest>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.pressed(MouseButton::Left) { return; }

    let (player_e, player_tf) = match q_player.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single armed Player: {e:?}"); return; }
    };
    let origin = player_tf.translation.truncate();

    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else { return; };

    let world_cursor = match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => p,
        Err(e) => { debug!("viewport_to_world_2d failed: {e:?}"); return; }
    };

    let dir = world_cursor - origin;
    let dir = if dir.length_squared() < 1e-4 { Vec2::Y } else { dir.normalize() };

    writer.write(FireRequest {
        weapon: player_e,
        origin: origin + dir * MUZZLE_OFFSET,
        direction: dir,
    });
}
