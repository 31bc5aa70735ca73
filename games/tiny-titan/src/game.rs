use titan_engine::{
    EngineContext, Game, GameConfig, GameEvent, InputQueue, RenderBuffer, ResourcePaths,
};

use crate::assets::GameAssets;
use crate::error::GameError;
use crate::player::Controls;
use crate::scene::{Hud, Scene};
use crate::settings::{GameSettings, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Custom input event kinds (host → game).
pub mod events {
    /// In-game back button: end the session.
    pub const BACK: u32 = 1;
    /// Start a fresh session after game over.
    pub const RESTART: u32 = 2;
}

/// Game event kinds (game → host).
pub mod game_events {
    /// a = points, b = running score.
    pub const SCORE: f32 = 1.0;
    /// a = final score, b = high score to persist.
    pub const GAME_OVER: f32 = 2.0;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    /// The scene is frozen until a restart.
    Over,
}

pub struct TinyTitan {
    settings: GameSettings,
    assets: GameAssets,
    scene: Scene,
    phase: Phase,
}

impl TinyTitan {
    /// Load the asset manifest under `paths` and build a session.
    pub fn load(
        settings: GameSettings,
        paths: &ResourcePaths,
        high_score: u32,
    ) -> Result<Self, GameError> {
        let assets = GameAssets::load(paths)?;
        Ok(Self::new(settings, assets, high_score))
    }

    pub fn new(settings: GameSettings, assets: GameAssets, high_score: u32) -> Self {
        let scene = Scene::new(&assets, high_score);
        Self {
            settings,
            assets,
            scene,
            phase: Phase::Playing,
        }
    }

    fn start(&mut self) {
        self.scene = Scene::new(&self.assets, self.scene.high_score());
        self.phase = Phase::Playing;
        log::info!("tiny-titan: session started, high score {}", self.scene.high_score());
    }

    fn finish(&mut self, ctx: &mut EngineContext) {
        self.phase = Phase::Over;
        let (score, high_score) = (self.scene.score(), self.scene.high_score());
        ctx.emit_event(GameEvent::new(
            game_events::GAME_OVER,
            score as f32,
            high_score as f32,
            0.0,
        ));
        log::info!("tiny-titan: game over, score {score}, high score {high_score}");
    }

    pub fn score(&self) -> u32 {
        self.scene.score()
    }

    pub fn high_score(&self) -> u32 {
        self.scene.high_score()
    }

    pub fn hud(&self) -> Hud {
        self.scene.hud()
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[cfg(test)]
    pub(crate) fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
}

impl Game for TinyTitan {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: self.settings.fixed_dt,
            world_width: WINDOW_WIDTH,
            world_height: WINDOW_HEIGHT,
            seed: self.settings.seed,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        self.start();
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let back = input.custom(events::BACK).next().is_some();
        let restart = input.custom(events::RESTART).next().is_some();

        if self.phase == Phase::Over {
            if restart {
                self.start();
            }
            return;
        }

        let controls = Controls::from_keys(&ctx.keys, &self.settings.keys);
        let now_ms = ctx.now_ms();
        let report = self
            .scene
            .tick(&controls, ctx.dt, now_ms, &mut ctx.rng, &self.assets);

        for cue in report.cues {
            ctx.emit_sound(self.assets.sounds.event(cue));
        }
        for points in report.score_events {
            ctx.emit_event(GameEvent::new(
                game_events::SCORE,
                points as f32,
                self.scene.score() as f32,
                0.0,
            ));
        }

        if self.scene.player().health <= 0 || back {
            self.finish(ctx);
        }
    }

    fn render(&self, buffer: &mut RenderBuffer) {
        self.scene.render(&self.assets, buffer);
    }
}
