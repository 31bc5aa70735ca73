use glam::Vec2;
use titan_engine::Animator;

use super::{Contact, EnemyCore, Hostile, Lifecycle, PlayerView};
use crate::assets::GameAssets;
use crate::combat::Damageable;
use crate::state::{EnemyAction, EnemyState, Facing};

pub const BIRD_HEALTH: i32 = 10;
pub const BIRD_SPEEDS: [f32; 4] = [90.0, 110.0, 130.0, 170.0];
/// Past this x the bird has left the screen.
const OFFSCREEN_X: f32 = -10.0;

/// Flies straight left and despawns as soon as it is dead or off-screen.
#[derive(Debug, Clone)]
pub struct Bird {
    core: EnemyCore,
}

impl Bird {
    pub fn new(position: Vec2, speed: f32, assets: &GameAssets) -> Self {
        let mut core = EnemyCore::new(position, BIRD_HEALTH, speed);
        core.animator = Animator::showing(&assets.bird);
        Self { core }
    }

    fn change_status(&mut self) {
        let core = &mut self.core;
        if !core.hit_timer.is_active() {
            core.state = EnemyState::new(EnemyAction::Move, Facing::Left);
        }
        if core.world_position.x < OFFSCREEN_X {
            core.state = EnemyState::new(EnemyAction::Death, Facing::Left);
        }
        if core.health <= 0 {
            core.state = EnemyState::new(EnemyAction::Death, core.state.facing);
        }
    }
}

impl Damageable for Bird {
    fn center(&self) -> Vec2 {
        self.core.world_position
    }

    fn take_damage(&mut self, amount: i32, now_ms: f64) {
        self.core.absorb_hit(amount, now_ms);
    }
}

impl Hostile for Bird {
    const POINTS: u32 = 5;
    const CONTACT: Contact = Contact { radius: 40.0, damage: 5 };

    fn core(&self) -> &EnemyCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EnemyCore {
        &mut self.core
    }

    fn update(&mut self, player: &PlayerView, dt: f32, now_ms: f64, assets: &GameAssets) -> Lifecycle {
        self.core.world_position.x -= self.core.speed * dt * player.speed_multiplier();
        if let Err(err) = self.core.animator.advance(&assets.bird, dt) {
            log::warn!("bird: {err}");
        }
        self.change_status();
        self.core.update_timers(now_ms);

        if self.core.state.is_dead() {
            Lifecycle::Despawn
        } else {
            Lifecycle::Alive
        }
    }
}
