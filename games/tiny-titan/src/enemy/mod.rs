//! Hostile entities and the state they share.

pub mod bird;
pub mod skeleton;

pub use bird::Bird;
pub use skeleton::Skeleton;

use glam::Vec2;
use titan_engine::{Animator, FrameRef, Timer};

use crate::assets::GameAssets;
use crate::combat::Damageable;
use crate::player::Player;
use crate::state::{EnemyAction, EnemyState, Facing};

/// What an enemy may know about the player during its update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub facing: Facing,
}

impl PlayerView {
    pub fn of(player: &Player) -> Self {
        Self {
            position: player.position(),
            facing: player.facing(),
        }
    }

    /// Enemies slow to half speed while the player faces left.
    pub fn speed_multiplier(&self) -> f32 {
        match self.facing {
            Facing::Left => 0.5,
            Facing::Right => 1.0,
        }
    }
}

/// Outcome of one enemy update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Alive,
    /// Remove the enemy and award its points.
    Despawn,
}

/// Touch damage an enemy deals to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Strict: the player must be closer than this.
    pub radius: f32,
    pub damage: i32,
}

/// Fields every enemy carries.
#[derive(Debug, Clone)]
pub struct EnemyCore {
    pub world_position: Vec2,
    pub health: i32,
    pub speed: f32,
    pub state: EnemyState,
    pub hit_timer: Timer,
    pub death_timer: Timer,
    pub damage_timer: Timer,
    pub animator: Animator,
}

impl EnemyCore {
    pub fn new(position: Vec2, health: i32, speed: f32) -> Self {
        Self {
            world_position: position,
            health,
            speed,
            state: EnemyState::new(EnemyAction::Move, Facing::Left),
            hit_timer: Timer::new(1300),
            death_timer: Timer::new(900),
            damage_timer: Timer::new(1200),
            animator: Animator::new(),
        }
    }

    pub fn update_timers(&mut self, now_ms: f64) {
        self.hit_timer.update(now_ms);
        self.death_timer.update(now_ms);
        self.damage_timer.update(now_ms);
    }

    /// Lose health and enter the hit state, at most once per hit window.
    /// Ignored entirely while dying.
    pub fn absorb_hit(&mut self, amount: i32, now_ms: f64) {
        if self.death_timer.is_active() {
            return;
        }
        if !self.hit_timer.is_active() {
            self.health -= amount;
            self.state = EnemyState::new(EnemyAction::Hit, self.state.facing);
            self.hit_timer.activate(now_ms);
        }
    }
}

/// An enemy the scene can update, collide and draw.
pub trait Hostile: Damageable {
    /// Score awarded on despawn.
    const POINTS: u32;
    const CONTACT: Contact;

    fn core(&self) -> &EnemyCore;

    fn core_mut(&mut self) -> &mut EnemyCore;

    /// Move, animate, settle state, tick timers, then report whether the
    /// enemy is done.
    fn update(&mut self, player: &PlayerView, dt: f32, now_ms: f64, assets: &GameAssets) -> Lifecycle;

    /// Hurt `target` on contact. Returns true when damage was dealt.
    fn damage_if_close<T: Damageable>(&mut self, target: &mut T, now_ms: f64) -> bool {
        let contact = Self::CONTACT;
        let distance = self.center().distance(target.center());
        let core = self.core_mut();
        if distance < contact.radius
            && !core.damage_timer.is_active()
            && !core.hit_timer.is_active()
        {
            target.take_damage(contact.damage, now_ms);
            core.damage_timer.activate(now_ms);
            return true;
        }
        false
    }

    fn state(&self) -> EnemyState {
        self.core().state
    }

    fn health(&self) -> i32 {
        self.core().health
    }

    fn world_position(&self) -> Vec2 {
        self.core().world_position
    }

    fn frame(&self) -> Option<FrameRef> {
        self.core().animator.frame()
    }
}
