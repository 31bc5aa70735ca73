//! Resolved game assets, built once at scene setup and passed by reference
//! to every entity update.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use titan_engine::{
    AnimationDef, AnimationTable, Animator, AssetError, AssetManifest, FrameRegistry,
    ParallaxBackground, ParallaxLayer, ResourcePaths, SheetId,
};

use crate::error::{GameError, StateError};
use crate::settings::SCROLL_SPEEDS;
use crate::sounds::SoundBank;
use crate::state::{EnemyState, PlayerState};

pub const MANIFEST_FILE: &str = "manifest.json";

const PLAYER_SET: &str = "player";
const SKELETON_SET: &str = "skeleton";
const BIRD_SET: &str = "bird";
const BIRD_LABEL: &str = "fly";

pub struct GameAssets {
    registry: FrameRegistry,
    pub player: AnimationTable<PlayerState>,
    pub skeleton: AnimationTable<EnemyState>,
    /// Birds show one sequence whatever their state.
    pub bird: AnimationDef,
    /// Background sheets, back to front, paired with `background()` layers.
    pub background_sheets: Vec<SheetId>,
    background_layers: Vec<ParallaxLayer>,
    pub sounds: SoundBank,
}

impl GameAssets {
    /// Read `manifest.json` from the resource directory.
    pub fn load(paths: &ResourcePaths) -> Result<Self, GameError> {
        let manifest = AssetManifest::load(&paths.join(MANIFEST_FILE))?;
        Self::from_manifest(&manifest)
    }

    pub fn from_manifest(manifest: &AssetManifest) -> Result<Self, GameError> {
        let registry = FrameRegistry::from_manifest(manifest)?;

        let player = state_table(&registry, PLAYER_SET, PlayerState::all())?;
        let skeleton = state_table(&registry, SKELETON_SET, EnemyState::all())?;
        let bird = registry
            .get(BIRD_SET, BIRD_LABEL)
            .cloned()
            .ok_or_else(|| missing(BIRD_SET, BIRD_LABEL))?;

        let backgrounds = registry.backgrounds();
        if backgrounds.len() != SCROLL_SPEEDS.len() {
            return Err(GameError::BackgroundLayers {
                expected: SCROLL_SPEEDS.len(),
                found: backgrounds.len(),
            });
        }
        let background_sheets = backgrounds.iter().map(|(sheet, _)| *sheet).collect();
        let background_layers = backgrounds
            .iter()
            .zip(SCROLL_SPEEDS)
            .map(|((_, layer), speed)| ParallaxLayer { speed, ..layer.clone() })
            .collect();

        let sounds = SoundBank::from_manifest(manifest)?;

        log::info!(
            "assets: {} player, {} skeleton, {} bird frames",
            player.len(),
            skeleton.len(),
            bird.frame_count()
        );
        Ok(Self {
            registry,
            player,
            skeleton,
            bird,
            background_sheets,
            background_layers,
            sounds,
        })
    }

    /// Fresh background with every layer at offset 0.
    pub fn background(&self) -> ParallaxBackground {
        ParallaxBackground::new(self.background_layers.clone())
    }

    /// Draw scale of a sheet.
    pub fn scale(&self, sheet: SheetId) -> f32 {
        self.registry.sheet(sheet).map_or(1.0, |g| g.scale)
    }

    /// On-screen size of one frame of a sheet.
    pub fn frame_size(&self, sheet: SheetId) -> (f32, f32) {
        self.registry.sheet(sheet).map_or((0.0, 0.0), |g| g.scaled_size())
    }
}

/// Build a table keyed by typed state. Every label in the set must parse,
/// and every state in `required` must be present.
fn state_table<K>(
    registry: &FrameRegistry,
    set: &'static str,
    required: impl Iterator<Item = K>,
) -> Result<AnimationTable<K>, GameError>
where
    K: Copy + Eq + Hash + Debug + Display + FromStr<Err = StateError>,
{
    let mut table = AnimationTable::new();
    for (label, def) in registry.set(set)? {
        let key: K = label.parse()?;
        table.insert(key, def.clone());
    }
    table
        .require(required)
        .map_err(|key| missing(set, &key.to_string()))?;
    Ok(table)
}

/// Advance `animator` through the run registered for `key`. A missing run
/// or a cursor overshoot is logged and the previous frame stays up.
pub fn animate<K>(table: &AnimationTable<K>, key: K, animator: &mut Animator, dt: f32, who: &str)
where
    K: Copy + Eq + Hash + Debug + Display,
{
    if let Err(err) = table.get(key).and_then(|def| animator.advance(def, dt)) {
        log::warn!("{who} `{key}`: {err}");
    }
}

fn missing(set: &str, label: &str) -> GameError {
    AssetError::MissingAnimation {
        set: set.to_string(),
        label: label.to_string(),
    }
    .into()
}

#[cfg(test)]
pub(crate) fn test_assets() -> GameAssets {
    let manifest = AssetManifest::from_json(include_str!("../resources/manifest.json")).unwrap();
    GameAssets::from_manifest(&manifest).unwrap()
}
