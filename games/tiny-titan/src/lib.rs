//! Tiny Titan: a side-scrolling brawler where a small hero with an axe,
//! pickaxe, shovel and sword holds off skeletons and birds.
//!
//! The simulation is headless. A host drives [`TinyTitan`] through
//! `titan_host::GameRunner`, feeds it keyboard input, and receives sounds,
//! score events and a render buffer back.

pub mod assets;
pub mod autopilot;
pub mod combat;
pub mod enemy;
pub mod error;
pub mod game;
pub mod player;
pub mod scene;
pub mod settings;
pub mod sounds;
pub mod spawn;
pub mod state;
pub mod weapon;

pub use assets::GameAssets;
pub use autopilot::Autopilot;
pub use error::{GameError, StateError};
pub use game::{events, game_events, TinyTitan};
pub use scene::{Hud, Scene};
pub use settings::{GameSettings, KeyBindings, RESOURCES_ENV};
