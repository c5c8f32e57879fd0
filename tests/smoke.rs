mod common;

use bevy_weapon::plugins::player::{Player, PLAYER_WEAPON_CAPACITY};
use bevy_weapon::plugins::projectiles::components::PooledBullet;
use bevy_weapon::plugins::projectiles::weapon::Weapon;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn player_weapon_is_stocked_on_enter() {
    let mut app = common::app_headless();

    common::update_until(&mut app, 10, |app| {
        app.world_mut()
            .query::<(&Player, &Weapon)>()
            .iter(app.world())
            .any(|(_, w)| w.stocked)
    });

    let (_, weapon) = app
        .world_mut()
        .query::<(&Player, &Weapon)>()
        .single(app.world())
        .unwrap();
    assert_eq!(weapon.free.len(), PLAYER_WEAPON_CAPACITY);

    let pooled = app
        .world_mut()
        .query::<&PooledBullet>()
        .iter(app.world())
        .count();
    assert_eq!(pooled, PLAYER_WEAPON_CAPACITY);
}
