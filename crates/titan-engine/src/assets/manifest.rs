use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Asset manifest describing sprite sheets, animation sets, background
/// layers and sounds for a game. Loaded from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Sprite sheets, addressed by position (`SheetId`) or by name.
    pub sheets: Vec<SheetDescriptor>,
    /// Animation sets: set name → state label → frame run.
    #[serde(default)]
    pub animations: HashMap<String, HashMap<String, AnimationDescriptor>>,
    /// Background layers, back to front.
    #[serde(default)]
    pub backgrounds: Vec<BackgroundDescriptor>,
    /// Optional audio assets.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single sprite sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetDescriptor {
    pub name: String,
    /// Path relative to the resource directory.
    pub path: String,
    pub frame_width: u32,
    pub frame_height: u32,
    /// Number of cells per row.
    pub columns: u32,
    #[serde(default = "default_scale")]
    pub scale: f32,
}

/// A run of consecutive cells in one sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub sheet: String,
    pub start: u32,
    pub count: u32,
    /// Times each cell is shown before the next one.
    #[serde(default = "default_repeat")]
    pub repeat: u32,
    /// Mirror horizontally (left-facing variants).
    #[serde(default)]
    pub flip: bool,
}

/// A background layer texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundDescriptor {
    pub sheet: String,
    /// Texture width after scaling; scroll offsets wrap at this value.
    pub width: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub mirrored: bool,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this sound from Rust.
    #[serde(default)]
    pub event_id: Option<u32>,
}

fn default_scale() -> f32 {
    1.0
}

fn default_repeat() -> u32 {
    1
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let json = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Position of the sheet called `name`.
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.sheets.iter().position(|s| s.name == name)
    }
}
