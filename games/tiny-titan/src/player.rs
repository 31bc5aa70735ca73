//! The player: input handling, physics, state reconciliation and animation.

use glam::Vec2;
use titan_engine::{Animator, FrameRef, KeyboardState, Rng, Timer};

use crate::assets::{animate, GameAssets};
use crate::combat::Damageable;
use crate::settings::{
    KeyBindings, GRAVITY_ACCELERATION, GROUND_EPSILON, GROUND_LEVEL, JUMP_FORCE, PLAYER_HEALTH,
    PLAYER_MAX_X, PLAYER_MIN_X, PLAYER_SPEED, PLAYER_START, SHAKE_RANGE,
};
use crate::sounds::Cue;
use crate::state::{Facing, PlayerAction, PlayerState, Tool, Weapon};

pub fn is_on_ground(y: f32) -> bool {
    (y - GROUND_LEVEL).abs() < GROUND_EPSILON
}

/// Logical controls held during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Zero-based tool slot whose key is held, first match wins.
    pub tool_slot: Option<usize>,
    pub use_tool: bool,
    pub use_weapon: bool,
}

impl Controls {
    /// Read the logical controls out of a key snapshot.
    pub fn from_keys(keys: &KeyboardState, bindings: &KeyBindings) -> Self {
        Self {
            left: keys.is_pressed(bindings.left),
            right: keys.is_pressed(bindings.right),
            jump: keys.is_pressed(bindings.jump),
            tool_slot: bindings.tool_slots.iter().position(|&k| keys.is_pressed(k)),
            use_tool: keys.is_pressed(bindings.use_tool),
            use_weapon: keys.is_pressed(bindings.use_weapon),
        }
    }
}

#[derive(Debug, Clone)]
struct PlayerTimers {
    tool_use: Timer,
    weapon_use: Timer,
    item_switch: Timer,
    weapon_switch: Timer,
    shake: Timer,
}

impl PlayerTimers {
    fn new() -> Self {
        Self {
            tool_use: Timer::new(1100),
            weapon_use: Timer::new(500),
            item_switch: Timer::new(1200),
            weapon_switch: Timer::new(500),
            shake: Timer::new(300),
        }
    }

    fn update(&mut self, now_ms: f64) {
        for timer in [
            &mut self.tool_use,
            &mut self.weapon_use,
            &mut self.item_switch,
            &mut self.weapon_switch,
            &mut self.shake,
        ] {
            timer.update(now_ms);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Authoritative world position.
    pos: Vec2,
    /// Rounded position plus camera shake; what gets drawn and what
    /// distances are measured from.
    rect_center: Vec2,
    direction: Vec2,
    /// Vertical step per tick. Grows with gravity, reset by a jump.
    gravity: f32,
    on_ground: bool,
    pub health: i32,
    state: PlayerState,
    selected_tool: Tool,
    animator: Animator,
    shake_offset: Vec2,
    timers: PlayerTimers,
}

impl Player {
    pub fn new() -> Self {
        let pos = Vec2::new(PLAYER_START.0, PLAYER_START.1);
        Self {
            pos,
            rect_center: pos.round(),
            direction: Vec2::ZERO,
            gravity: 0.0,
            on_ground: is_on_ground(pos.y),
            health: PLAYER_HEALTH,
            state: PlayerState::new(PlayerAction::Idle, Facing::Right),
            selected_tool: Tool::Axe,
            animator: Animator::new(),
            shake_offset: Vec2::ZERO,
            timers: PlayerTimers::new(),
        }
    }

    /// One tick: input, physics, state, shake, timers, animation.
    pub fn update(
        &mut self,
        controls: &Controls,
        dt: f32,
        now_ms: f64,
        rng: &mut Rng,
        assets: &GameAssets,
        cues: &mut Vec<Cue>,
    ) {
        self.handle_input(controls, now_ms, cues);
        self.integrate(dt);
        self.change_status();
        self.apply_shake(rng);
        self.timers.update(now_ms);
        animate(&assets.player, self.state, &mut self.animator, dt, "player");
    }

    fn handle_input(&mut self, controls: &Controls, now_ms: f64, cues: &mut Vec<Cue>) {
        if !self.attack_window() {
            self.handle_movement(controls);
            self.handle_tool_switch(controls, now_ms);
        }
        self.handle_weapon_use(controls, now_ms, cues);
        self.handle_tool_use(controls, now_ms, cues);
    }

    fn handle_movement(&mut self, controls: &Controls) {
        if controls.jump && self.on_ground {
            self.gravity = JUMP_FORCE;
            if matches!(self.state.action, PlayerAction::Idle | PlayerAction::Move) {
                self.state = self.state.with_action(PlayerAction::Jump);
            }
        }

        let stride = if self.on_ground { PlayerAction::Move } else { PlayerAction::Jump };
        if controls.left {
            self.direction.x = -1.0;
            self.state = PlayerState::new(stride, Facing::Left);
        } else if controls.right {
            self.direction.x = 1.0;
            self.state = PlayerState::new(stride, Facing::Right);
        } else {
            self.direction.x = 0.0;
        }
    }

    fn handle_tool_switch(&mut self, controls: &Controls, now_ms: f64) {
        if let Some(tool) = controls.tool_slot.and_then(Tool::from_slot) {
            if tool != self.selected_tool {
                log::debug!("tool: {} -> {}", self.selected_tool.name(), tool.name());
            }
            self.selected_tool = tool;
            self.timers.item_switch.activate(now_ms);
        }
    }

    fn handle_weapon_use(&mut self, controls: &Controls, now_ms: f64, cues: &mut Vec<Cue>) {
        if controls.use_weapon && !self.timers.weapon_use.is_active() {
            self.timers.weapon_use.activate(now_ms);
            self.timers.weapon_switch.activate(now_ms);
            cues.push(Weapon::Sword.stats().cue);
            self.state = self.state.with_action(PlayerAction::Use(Weapon::Sword));
            self.start_swing();
        }
    }

    fn handle_tool_use(&mut self, controls: &Controls, now_ms: f64, cues: &mut Vec<Cue>) {
        if controls.use_tool && !self.timers.tool_use.is_active() {
            self.timers.tool_use.activate(now_ms);
            cues.push(Weapon::Tool(self.selected_tool).stats().cue);
            self.start_swing();
        }
    }

    fn start_swing(&mut self) {
        if self.on_ground {
            self.direction = Vec2::ZERO;
        }
        self.animator.rewind();
    }

    /// Gravity, ground clamp, horizontal move and the playfield clamp.
    fn integrate(&mut self, dt: f32) {
        self.on_ground = is_on_ground(self.pos.y);
        self.direction = self.direction.normalize_or_zero();

        self.gravity += GRAVITY_ACCELERATION * dt;
        self.pos.y += self.gravity;
        if self.pos.y >= GROUND_LEVEL {
            self.pos.y = GROUND_LEVEL;
        }

        self.pos.x += self.direction.x * PLAYER_SPEED * dt;
        self.pos.x = self.pos.x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);

        self.rect_center = self.pos.round() + self.shake_offset.round();
    }

    /// Settle the state after input and physics. Attack states only last
    /// as long as their timer.
    fn change_status(&mut self) {
        if self.direction == Vec2::ZERO
            && is_on_ground(self.pos.y)
            && matches!(self.state.action, PlayerAction::Jump | PlayerAction::Move)
        {
            self.state = self.state.with_action(PlayerAction::Idle);
        }

        // A sword swing keeps its state for the whole weapon window.
        if self.timers.tool_use.is_active() {
            self.state = self
                .state
                .with_action(PlayerAction::Use(Weapon::Tool(self.selected_tool)));
        } else if !self.timers.weapon_use.is_active()
            && matches!(self.state.action, PlayerAction::Use(_))
        {
            self.state = self.state.with_action(PlayerAction::Idle);
        }
    }

    fn apply_shake(&mut self, rng: &mut Rng) {
        self.shake_offset = if self.timers.shake.is_active() {
            Vec2::new(
                rng.range_inclusive(-SHAKE_RANGE, SHAKE_RANGE) as f32,
                rng.range_inclusive(-SHAKE_RANGE, SHAKE_RANGE) as f32,
            )
        } else {
            Vec2::ZERO
        };
    }

    /// A tool or sword swing is in progress.
    pub fn attack_window(&self) -> bool {
        self.timers.tool_use.is_active() || self.timers.weapon_use.is_active()
    }

    /// The sword while in a sword state, otherwise the selected tool.
    pub fn active_weapon(&self) -> Weapon {
        match self.state.action {
            PlayerAction::Use(Weapon::Sword) => Weapon::Sword,
            _ => Weapon::Tool(self.selected_tool),
        }
    }

    /// Horizontal travel this tick, for background scrolling. Zero while
    /// pinned against either end of the playfield.
    pub fn scroll_delta(&self, dt: f32) -> f32 {
        if self.pos.x <= PLAYER_MIN_X || self.pos.x >= PLAYER_MAX_X {
            return 0.0;
        }
        self.direction.x * PLAYER_SPEED * dt
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    pub fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Tool or weapon switch highlight for the overlay.
    pub fn switching(&self) -> bool {
        self.timers.item_switch.is_active() || self.timers.weapon_switch.is_active()
    }

    pub fn is_shaking(&self) -> bool {
        self.timers.shake.is_active()
    }

    pub fn frame(&self) -> Option<FrameRef> {
        self.animator.frame()
    }

    #[cfg(test)]
    pub(crate) fn place(&mut self, x: f32) {
        self.pos.x = x;
        self.rect_center = self.pos.round();
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Damageable for Player {
    fn center(&self) -> Vec2 {
        self.rect_center
    }

    /// Health may go below zero; the session checks for game over.
    fn take_damage(&mut self, amount: i32, now_ms: f64) {
        self.health -= amount;
        self.timers.shake.activate(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::test_assets;
    use titan_engine::InputEvent;

    const DT: f32 = 1.0 / 60.0;

    struct Rig {
        player: Player,
        assets: GameAssets,
        rng: Rng,
        cues: Vec<Cue>,
        now: f64,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                player: Player::new(),
                assets: test_assets(),
                rng: Rng::new(7),
                cues: Vec::new(),
                now: 0.0,
            }
        }

        fn tick_with(&mut self, controls: Controls, dt: f32) {
            self.now += dt as f64 * 1000.0;
            self.player
                .update(&controls, dt, self.now, &mut self.rng, &self.assets, &mut self.cues);
        }

        fn tick(&mut self, controls: Controls) {
            self.tick_with(controls, DT);
        }
    }

    fn held(f: impl FnOnce(&mut Controls)) -> Controls {
        let mut c = Controls::default();
        f(&mut c);
        c
    }

    #[test]
    fn starts_idle_with_axe() {
        let mut rig = Rig::new();
        rig.tick(Controls::default());
        assert_eq!(rig.player.state().label(), "idle_right");
        assert_eq!(rig.player.selected_tool(), Tool::Axe);
        assert_eq!(rig.player.position(), Vec2::new(300.0, 500.0));
        assert!(rig.player.frame().is_some());
    }

    #[test]
    fn walking_moves_and_settles_to_idle() {
        let mut rig = Rig::new();
        rig.tick(held(|c| c.left = true));
        assert_eq!(rig.player.state().label(), "move_left");
        assert!(rig.player.position().x < 300.0);
        rig.tick(Controls::default());
        assert_eq!(rig.player.state().label(), "idle_left");
    }

    #[test]
    fn x_is_clamped_for_any_input() {
        let mut rig = Rig::new();
        for dt in [0.0, DT, 0.5, 3.0] {
            for _ in 0..5 {
                rig.tick_with(held(|c| c.left = true), dt);
                let x = rig.player.position().x;
                assert!((PLAYER_MIN_X..=PLAYER_MAX_X).contains(&x), "x {x} at dt {dt}");
            }
        }
        assert_eq!(rig.player.position().x, PLAYER_MIN_X);
        for _ in 0..10 {
            rig.tick_with(held(|c| c.right = true), 2.0);
        }
        assert_eq!(rig.player.position().x, PLAYER_MAX_X);
    }

    #[test]
    fn jump_rises_then_lands() {
        let mut rig = Rig::new();
        rig.tick(held(|c| c.jump = true));
        assert_eq!(rig.player.state().label(), "jump_right");
        assert!(rig.player.position().y < GROUND_LEVEL);

        let mut landed = false;
        for _ in 0..300 {
            rig.tick(Controls::default());
            if is_on_ground(rig.player.position().y) {
                landed = true;
                break;
            }
        }
        assert!(landed);
        rig.tick(Controls::default());
        assert_eq!(rig.player.state().label(), "idle_right");
    }

    #[test]
    fn tool_use_locks_movement_and_lapses() {
        let mut rig = Rig::new();
        rig.tick(held(|c| c.use_tool = true));
        assert_eq!(rig.player.state().label(), "axe_right");
        assert_eq!(rig.cues, vec![Cue::Axe]);
        assert!(rig.player.attack_window());

        // Movement and tool switching are ignored during the swing.
        rig.tick(held(|c| {
            c.left = true;
            c.tool_slot = Some(2);
        }));
        assert_eq!(rig.player.position().x, 300.0);
        assert_eq!(rig.player.selected_tool(), Tool::Axe);

        // 1100 ms later the swing is over.
        for _ in 0..70 {
            rig.tick(Controls::default());
        }
        assert!(!rig.player.attack_window());
        assert_eq!(rig.player.state().label(), "idle_right");
    }

    #[test]
    fn sword_swing_and_sound() {
        let mut rig = Rig::new();
        rig.tick(held(|c| c.use_weapon = true));
        assert_eq!(rig.player.state().label(), "sword_right");
        assert_eq!(rig.player.active_weapon(), Weapon::Sword);
        assert_eq!(rig.cues, vec![Cue::Sword]);
        assert!(rig.player.switching());
        for _ in 0..35 {
            rig.tick(Controls::default());
        }
        assert_eq!(rig.player.state().label(), "idle_right");
    }

    #[test]
    fn tool_slots_select_alphabetically() {
        let mut rig = Rig::new();
        rig.tick(held(|c| c.tool_slot = Some(1)));
        assert_eq!(rig.player.selected_tool(), Tool::Pickaxe);
        assert!(rig.player.switching());
        rig.tick(held(|c| {
            c.tool_slot = Some(2);
            c.use_tool = true;
        }));
        assert_eq!(rig.player.state().label(), "shovel_right");
        assert_eq!(rig.cues, vec![Cue::Shovel]);
    }

    #[test]
    fn damage_shakes_without_accumulating() {
        let mut rig = Rig::new();
        rig.player.take_damage(20, rig.now);
        assert_eq!(rig.player.health, 80);
        for _ in 0..10 {
            rig.tick(Controls::default());
            assert!(rig.player.is_shaking());
            let jitter = rig.player.center() - rig.player.position();
            assert!(jitter.x.abs() <= 5.0 && jitter.y.abs() <= 5.0);
        }
        for _ in 0..20 {
            rig.tick(Controls::default());
        }
        assert!(!rig.player.is_shaking());
        rig.tick(Controls::default());
        assert_eq!(rig.player.center(), rig.player.position());
    }

    #[test]
    fn health_has_no_floor() {
        let mut player = Player::new();
        player.take_damage(150, 0.0);
        assert_eq!(player.health, -50);
    }

    #[test]
    fn scroll_freezes_at_bounds() {
        let mut rig = Rig::new();
        rig.tick(held(|c| c.right = true));
        assert!((rig.player.scroll_delta(DT) - PLAYER_SPEED * DT).abs() < 1e-4);
        rig.player.place(PLAYER_MAX_X);
        assert_eq!(rig.player.scroll_delta(DT), 0.0);
    }

    #[test]
    fn controls_follow_bindings() {
        let bindings = KeyBindings::default();
        let mut keys = KeyboardState::new();
        keys.apply(&[
            InputEvent::KeyDown { key_code: 37 },
            InputEvent::KeyDown { key_code: 50 },
            InputEvent::KeyDown { key_code: 82 },
        ]);
        let controls = Controls::from_keys(&keys, &bindings);
        assert!(controls.left && !controls.right);
        assert_eq!(controls.tool_slot, Some(1));
        assert!(controls.use_weapon && !controls.use_tool);
    }
}
