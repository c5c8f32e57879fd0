//! Full pipeline in a headless app: fire → kill → reclaim, driven by the real schedules.

mod common;

use bevy::prelude::*;
use bevy_weapon::plugins::projectiles::components::{BulletState, KillType, PooledBullet};
use bevy_weapon::plugins::projectiles::messages::FireRequest;
use bevy_weapon::plugins::projectiles::stats::KillStats;
use bevy_weapon::plugins::projectiles::weapon::{Weapon, WeaponConfig};

fn spawn_weapon(app: &mut App, config: WeaponConfig) -> Entity {
    let weapon = app.world_mut().spawn(Weapon::new(4, config)).id();
    common::update_until(app, 10, |app| app.world().get::<Weapon>(weapon).unwrap().stocked);
    weapon
}

fn fire(app: &mut App, weapon: Entity) {
    app.world_mut().write_message(FireRequest {
        weapon,
        origin: Vec2::ZERO,
        direction: Vec2::X,
    });
}

fn free_slots(app: &App, weapon: Entity) -> usize {
    app.world().get::<Weapon>(weapon).unwrap().free.len()
}

#[test]
fn lifespan_bullet_returns_to_pool() {
    let mut app = common::app_headless();
    let weapon = spawn_weapon(&mut app, WeaponConfig {
        bullet_kill_type: KillType::Lifespan,
        bullet_lifespan: 0.2,
        ..default()
    });

    fire(&mut app, weapon);
    app.update();
    assert_eq!(free_slots(&app, weapon), 3);

    let active = app
        .world_mut()
        .query::<(&PooledBullet, &BulletState)>()
        .iter(app.world())
        .filter(|(_, s)| s.is_alive())
        .count();
    assert_eq!(active, 1);

    common::update_until(&mut app, 120, |app| free_slots(app, weapon) == 4);

    let stats = app.world().resource::<KillStats>();
    assert_eq!(stats.lifespan, 1);
    assert_eq!(stats.total(), 1);
}

#[test]
fn bullet_fired_outside_its_bounds_is_reclaimed() {
    let mut app = common::app_headless();
    let weapon = spawn_weapon(&mut app, WeaponConfig {
        bullet_kill_type: KillType::Bounds,
        bullet_bounds: Some(Rect::new(500.0, 500.0, 600.0, 600.0)),
        ..default()
    });

    fire(&mut app, weapon);
    common::update_until(&mut app, 120, |app| {
        app.world().resource::<KillStats>().bounds == 1
    });
    common::update_until(&mut app, 5, |app| free_slots(app, weapon) == 4);

    let parked = app
        .world_mut()
        .query::<(&PooledBullet, &BulletState, &Visibility)>()
        .iter(app.world())
        .all(|(_, s, v)| *s == BulletState::Inactive && *v == Visibility::Hidden);
    assert!(parked);
}
