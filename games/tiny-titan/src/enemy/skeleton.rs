use glam::Vec2;
use titan_engine::Animator;

use super::{Contact, EnemyCore, Hostile, Lifecycle, PlayerView};
use crate::assets::{animate, GameAssets};
use crate::combat::Damageable;
use crate::state::{EnemyAction, EnemyState, Facing};

pub const SKELETON_HEALTH: i32 = 100;
pub const SKELETON_SPEEDS: [f32; 4] = [50.0, 70.0, 100.0, 150.0];
/// Closer than this the skeleton stops walking.
const HOLD_DISTANCE: f32 = 20.0;

/// Walks toward the player and dies in two phases: a death animation,
/// then removal once the death timer lapses.
#[derive(Debug, Clone)]
pub struct Skeleton {
    core: EnemyCore,
}

impl Skeleton {
    pub fn new(position: Vec2, speed: f32, assets: &GameAssets) -> Self {
        let mut core = EnemyCore::new(position, SKELETON_HEALTH, speed);
        if let Ok(def) = assets.skeleton.get(core.state) {
            core.animator = Animator::showing(def);
        }
        Self { core }
    }

    fn walk(&mut self, player: &PlayerView, dt: f32) {
        let to_player = player.position - self.core.world_position;
        if to_player.length() < HOLD_DISTANCE {
            return;
        }
        let direction = to_player.normalize_or_zero();

        let stunned_and_dying = self.core.hit_timer.is_active() && self.core.death_timer.is_active();
        if !stunned_and_dying {
            self.core.world_position.x +=
                direction.x * self.core.speed * dt * player.speed_multiplier();
        }
    }

    /// Face the player and walk, unless still reeling from a hit.
    fn change_status(&mut self, player: &PlayerView) {
        if !self.core.hit_timer.is_active() {
            let facing = if player.position.x < self.core.world_position.x {
                Facing::Left
            } else {
                Facing::Right
            };
            self.core.state = EnemyState::new(EnemyAction::Move, facing);
        }
    }
}

impl Damageable for Skeleton {
    fn center(&self) -> Vec2 {
        self.core.world_position
    }

    fn take_damage(&mut self, amount: i32, now_ms: f64) {
        self.core.absorb_hit(amount, now_ms);
        let core = &mut self.core;
        if core.health <= 0 && !core.death_timer.is_active() {
            core.death_timer.activate(now_ms);
            core.state = EnemyState::new(EnemyAction::Death, core.state.facing);
            log::debug!("skeleton down at x {:.0}", core.world_position.x);
        }
    }
}

impl Hostile for Skeleton {
    const POINTS: u32 = 10;
    const CONTACT: Contact = Contact { radius: 20.0, damage: 20 };

    fn core(&self) -> &EnemyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EnemyCore {
        &mut self.core
    }

    fn update(&mut self, player: &PlayerView, dt: f32, now_ms: f64, assets: &GameAssets) -> Lifecycle {
        self.walk(player, dt);
        animate(&assets.skeleton, self.core.state, &mut self.core.animator, dt, "skeleton");
        self.change_status(player);
        self.core.update_timers(now_ms);

        if !self.core.death_timer.is_active() && self.core.state.is_dead() {
            Lifecycle::Despawn
        } else {
            Lifecycle::Alive
        }
    }
}
