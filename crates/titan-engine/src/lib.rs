pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{GameEvent, SoundEvent};
pub use assets::manifest::AssetManifest;
pub use assets::paths::ResourcePaths;
pub use assets::registry::FrameRegistry;
pub use components::animation::{AnimationDef, AnimationTable, Animator, FrameRef};
pub use components::layer::RenderLayer;
pub use components::parallax::{ParallaxBackground, ParallaxLayer};
pub use components::sprite::{SheetGeometry, SheetId};
pub use crate::core::rng::Rng;
pub use crate::core::time::{FixedTimestep, GameClock};
pub use crate::core::timer::Timer;
pub use error::{AnimationError, AssetError};
pub use input::keyboard::KeyboardState;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{RenderBuffer, RenderInstance};
