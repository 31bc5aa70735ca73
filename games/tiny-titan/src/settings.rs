//! Gameplay constants and the optional JSON settings file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const MAX_FRAME_RATE: f32 = 60.0;
pub const WINDOW_WIDTH: f32 = 1366.0;
pub const WINDOW_HEIGHT: f32 = 768.0;

/// Y of every grounded entity center.
pub const GROUND_LEVEL: f32 = 500.0;
/// Grounded ⟺ |y - GROUND_LEVEL| < GROUND_EPSILON.
pub const GROUND_EPSILON: f32 = 1e-3;
/// Vertical impulse in pixels per frame; negative is up.
pub const JUMP_FORCE: f32 = -8.0;
/// Gravity growth per second, added to the per-frame vertical step.
pub const GRAVITY_ACCELERATION: f32 = 15.0;

pub const PLAYER_START: (f32, f32) = (300.0, GROUND_LEVEL);
pub const PLAYER_MIN_X: f32 = 60.0;
pub const PLAYER_MAX_X: f32 = 1300.0;
pub const PLAYER_SPEED: f32 = 200.0;
pub const PLAYER_HEALTH: i32 = 100;
/// Camera shake jitter, in pixels on each axis.
pub const SHAKE_RANGE: i32 = 5;

/// Far to near.
pub const SCROLL_SPEEDS: [f32; 4] = [0.1, 0.5, 0.8, 1.0];

pub const SPAWN_INTERVAL_MS: u32 = 4000;
pub const MAX_SKELETONS: usize = 4;
pub const MAX_BIRDS: usize = 2;
/// Spawn band just past the right screen edge.
pub const SPAWN_MARGIN: (i32, i32) = (50, 150);
pub const BIRD_ALTITUDE: f32 = 100.0;

/// Environment variable consulted for the resource directory.
pub const RESOURCES_ENV: &str = "TINY_TITAN_RESOURCES";

/// Key codes for the logical controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: u32,
    pub right: u32,
    pub jump: u32,
    pub tool_slots: [u32; 3],
    pub use_tool: u32,
    pub use_weapon: u32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: 37,
            right: 39,
            jump: 32,
            tool_slots: [49, 50, 51],
            use_tool: 70,
            use_weapon: 82,
        }
    }
}

/// Runtime settings. Every field has a default, so an empty `{}` file (or
/// no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Overrides resource directory discovery.
    pub resources_dir: Option<PathBuf>,
    /// Seed for spawn positions, enemy speeds and camera shake.
    pub seed: u64,
    /// Simulation step in seconds.
    pub fixed_dt: f32,
    pub keys: KeyBindings,
    /// High score file, relative to the resource directory.
    pub high_score_file: String,
    /// Length of a headless run, in seconds.
    pub run_seconds: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            resources_dir: None,
            seed: 0x7117_7a11,
            fixed_dt: 1.0 / MAX_FRAME_RATE,
            keys: KeyBindings::default(),
            high_score_file: "high_score.txt".to_string(),
            run_seconds: 60.0,
        }
    }
}

impl GameSettings {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// The step must be positive and finite, and the run length must not
    /// be negative.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "fixed_dt must be a positive number of seconds, got {}",
                self.fixed_dt
            )));
        }
        if !(self.run_seconds.is_finite() && self.run_seconds >= 0.0) {
            return Err(GameError::InvalidSettings(format!(
                "run_seconds must be zero or more, got {}",
                self.run_seconds
            )));
        }
        Ok(())
    }

    /// Read settings from `path`.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path).map_err(|source| GameError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let settings = GameSettings::from_json("{}").unwrap();
        assert_eq!(settings, GameSettings::default());
        assert_eq!(settings.keys.tool_slots, [49, 50, 51]);
    }

    #[test]
    fn partial_override() {
        let settings = GameSettings::from_json(
            r#"{ "seed": 9, "keys": { "jump": 87 }, "resources_dir": "/tmp/res" }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.keys.jump, 87);
        assert_eq!(settings.keys.left, 37);
        assert_eq!(settings.resources_dir, Some(PathBuf::from("/tmp/res")));
    }

    #[test]
    fn non_positive_step_is_rejected() {
        for json in [r#"{ "fixed_dt": 0 }"#, r#"{ "fixed_dt": -1 }"#] {
            assert!(
                matches!(GameSettings::from_json(json), Err(GameError::InvalidSettings(_))),
                "{json} accepted"
            );
        }
    }

    #[test]
    fn negative_run_length_is_rejected() {
        assert!(matches!(
            GameSettings::from_json(r#"{ "run_seconds": -5 }"#),
            Err(GameError::InvalidSettings(_))
        ));
        assert_eq!(GameSettings::from_json(r#"{ "run_seconds": 0 }"#).unwrap().run_seconds, 0.0);
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn unreadable_file_is_error() {
        assert!(matches!(
            GameSettings::load(Path::new("/no/such/tiny-titan.json")),
            Err(GameError::Settings { .. })
        ));
    }
}
