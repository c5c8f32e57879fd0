//! Kill statistics: a second `BulletKilled` listener, independent of the pool.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::KillType;
use super::messages::BulletKilled;

#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct KillStats {
    pub lifespan: u32,
    pub distance: u32,
    pub bounds: u32,
    /// Kills reported with `KillType::None`, i.e. triggered by gameplay code.
    pub external: u32,
}

impl KillStats {
    pub fn total(&self) -> u32 {
        self.lifespan + self.distance + self.bounds + self.external
    }

    fn record(&mut self, cause: KillType) {
        let slot = match cause {
            KillType::None => &mut self.external,
            KillType::Lifespan => &mut self.lifespan,
            KillType::Distance => &mut self.distance,
            KillType::Bounds => &mut self.bounds,
        };
        *slot += 1;
    }
}

pub fn tally_kills(mut killed: MessageReader<BulletKilled>, mut stats: ResMut<KillStats>) {
    for ev in killed.read() {
        stats.record(ev.cause);
        debug!("Bullet {:?} killed ({:?}), weapon {:?}", ev.bullet.0, ev.cause, ev.weapon);
    }
}
