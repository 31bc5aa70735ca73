//! Damage exchange between the player and enemies.

use glam::Vec2;

use crate::player::Player;

/// Anything with health that can be struck.
pub trait Damageable {
    /// Point distances are measured from.
    fn center(&self) -> Vec2;

    fn take_damage(&mut self, amount: i32, now_ms: f64);
}

/// Apply the player's current swing to every target in reach.
///
/// Does nothing outside an attack window. Reach is inclusive. Returns the
/// number of targets struck; the caller raises one hit cue per strike.
/// Targets throttle repeated strikes through their own hit timers.
pub fn resolve_player_attack<'a, T>(
    player: &Player,
    targets: impl IntoIterator<Item = &'a mut T>,
    now_ms: f64,
) -> usize
where
    T: Damageable + 'a,
{
    if !player.attack_window() {
        return 0;
    }
    let weapon = player.active_weapon();
    let stats = weapon.stats();
    let origin = player.center();

    let mut struck = 0;
    for target in targets {
        if origin.distance(target.center()) <= stats.range {
            target.take_damage(stats.damage, now_ms);
            struck += 1;
        }
    }
    if struck > 0 {
        log::debug!("{} struck {} target(s) for {}", weapon.name(), struck, stats.damage);
    }
    struck
}
