use crate::api::types::{GameEvent, SoundEvent};
use crate::core::rng::Rng;
use crate::core::time::GameClock;
use crate::input::keyboard::KeyboardState;
use crate::input::queue::InputQueue;
use crate::renderer::instance::RenderBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Screen width in pixels.
    pub world_width: f32,
    /// Screen height in pixels.
    pub world_height: f32,
    /// Initial capacity of the render buffer (default: 512).
    pub max_instances: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Seed for the shared random number generator.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 1366.0,
            world_height: 768.0,
            max_instances: 512,
            max_sounds: 32,
            max_events: 32,
            seed: 42,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Load assets and build the initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One simulation step of `ctx.dt` seconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass filling the draw list.
    fn render(&self, _buffer: &mut RenderBuffer) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub clock: GameClock,
    /// Seconds covered by the current step.
    pub dt: f32,
    pub keys: KeyboardState,
    pub rng: Rng,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    max_sounds: usize,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            clock: GameClock::new(),
            dt: config.fixed_dt,
            keys: KeyboardState::new(),
            rng: Rng::new(config.seed),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            max_sounds: config.max_sounds,
            max_events: config.max_events,
        }
    }

    /// Current clock timestamp in milliseconds.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Advance the clock by one step of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.dt = dt;
        self.clock.advance(dt);
    }

    /// Queue a sound for the host. Dropped once the per-frame cap is hit.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        if self.sounds.len() < self.max_sounds {
            self.sounds.push(event);
        } else {
            log::trace!("sound {:?} dropped, frame cap {} reached", event, self.max_sounds);
        }
    }

    /// Queue a game event for the host. Dropped once the per-frame cap is hit.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("game event {:?} dropped, frame cap {} reached", event, self.max_events);
        }
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
