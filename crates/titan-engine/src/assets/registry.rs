use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;
use crate::components::animation::AnimationDef;
use crate::components::parallax::ParallaxLayer;
use crate::components::sprite::{SheetGeometry, SheetId};
use crate::error::AssetError;

/// Registry of resolved animation sequences, built from an AssetManifest.
/// Provides name-based lookup for game code; sheet names are resolved to
/// `SheetId`s once here.
pub struct FrameRegistry {
    sheets: Vec<SheetGeometry>,
    sets: HashMap<String, HashMap<String, AnimationDef>>,
    backgrounds: Vec<(SheetId, ParallaxLayer)>,
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self {
            sheets: Vec::new(),
            sets: HashMap::new(),
            backgrounds: Vec::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    ///
    /// Background layers come back with speed 1.0; the game assigns its own
    /// scroll multipliers.
    pub fn from_manifest(manifest: &AssetManifest) -> Result<Self, AssetError> {
        let sheets = manifest
            .sheets
            .iter()
            .map(|s| SheetGeometry {
                frame_width: s.frame_width,
                frame_height: s.frame_height,
                columns: s.columns,
                scale: s.scale,
            })
            .collect();

        let mut sets = HashMap::with_capacity(manifest.animations.len());
        for (set, labels) in &manifest.animations {
            let mut defs = HashMap::with_capacity(labels.len());
            for (label, desc) in labels {
                let sheet = manifest
                    .sheet_index(&desc.sheet)
                    .ok_or_else(|| AssetError::UnknownSheet {
                        set: set.clone(),
                        label: label.clone(),
                        sheet: desc.sheet.clone(),
                    })?;
                let def = AnimationDef::strip_repeated(
                    SheetId(sheet as u32),
                    desc.start,
                    desc.count,
                    desc.repeat,
                    desc.flip,
                )
                .map_err(|source| AssetError::InvalidAnimation {
                    set: set.clone(),
                    label: label.clone(),
                    source,
                })?;
                defs.insert(label.clone(), def);
            }
            sets.insert(set.clone(), defs);
        }

        let mut backgrounds = Vec::with_capacity(manifest.backgrounds.len());
        for (i, bg) in manifest.backgrounds.iter().enumerate() {
            let sheet = manifest
                .sheet_index(&bg.sheet)
                .ok_or_else(|| AssetError::UnknownSheet {
                    set: "backgrounds".to_string(),
                    label: i.to_string(),
                    sheet: bg.sheet.clone(),
                })?;
            let layer = ParallaxLayer::new(bg.width, 1.0)
                .with_y(bg.y)
                .with_mirrored(bg.mirrored);
            backgrounds.push((SheetId(sheet as u32), layer));
        }

        log::debug!(
            "frame registry: {} sheets, {} animation sets, {} background layers",
            manifest.sheets.len(),
            sets.len(),
            backgrounds.len()
        );
        Ok(Self { sheets, sets, backgrounds })
    }

    /// All label → sequence pairs of one animation set.
    pub fn set(&self, name: &str) -> Result<&HashMap<String, AnimationDef>, AssetError> {
        self.sets
            .get(name)
            .ok_or_else(|| AssetError::MissingSet(name.to_string()))
    }

    /// Look up one sequence. Returns None if not found.
    pub fn get(&self, set: &str, label: &str) -> Option<&AnimationDef> {
        self.sets.get(set).and_then(|labels| labels.get(label))
    }

    pub fn sheet(&self, id: SheetId) -> Option<&SheetGeometry> {
        self.sheets.get(id.0 as usize)
    }

    pub fn backgrounds(&self) -> &[(SheetId, ParallaxLayer)] {
        &self.backgrounds
    }
}

impl Default for FrameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
