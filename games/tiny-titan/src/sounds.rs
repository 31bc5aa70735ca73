use titan_engine::{AssetManifest, SoundEvent};

use crate::error::GameError;

/// Sound cues the simulation can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Axe,
    Shovel,
    Sword,
    /// A swing connected with an enemy.
    Hit,
    /// An enemy touched the player.
    Hurt,
}

impl Cue {
    pub const ALL: [Cue; 5] = [Cue::Axe, Cue::Shovel, Cue::Sword, Cue::Hit, Cue::Hurt];

    /// Key of the cue in the manifest's `sounds` table.
    pub fn name(self) -> &'static str {
        match self {
            Cue::Axe => "axe",
            Cue::Shovel => "shovel",
            Cue::Sword => "sword",
            Cue::Hit => "hit",
            Cue::Hurt => "hurt",
        }
    }
}

/// Cue → host sound id, resolved once from the manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBank {
    ids: [SoundEvent; 5],
}

impl SoundBank {
    pub fn from_manifest(manifest: &AssetManifest) -> Result<Self, GameError> {
        let mut ids = [SoundEvent(0); 5];
        for (slot, cue) in ids.iter_mut().zip(Cue::ALL) {
            let id = manifest
                .sounds
                .get(cue.name())
                .and_then(|s| s.event_id)
                .ok_or(GameError::MissingSound(cue.name()))?;
            *slot = SoundEvent(id);
        }
        Ok(Self { ids })
    }

    pub fn event(&self, cue: Cue) -> SoundEvent {
        self.ids[cue as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_event_ids() {
        let json = r#"{
            "sheets": [],
            "sounds": {
                "axe": { "path": "audio/axe.mp3", "event_id": 10 },
                "shovel": { "path": "audio/shovel.mp3", "event_id": 11 },
                "sword": { "path": "audio/sword.mp3", "event_id": 12 },
                "hit": { "path": "audio/hit.mp3", "event_id": 13 },
                "hurt": { "path": "audio/hurt.mp3", "event_id": 14 }
            }
        }"#;
        let bank = SoundBank::from_manifest(&AssetManifest::from_json(json).unwrap()).unwrap();
        assert_eq!(bank.event(Cue::Sword), SoundEvent(12));
        assert_eq!(bank.event(Cue::Hurt), SoundEvent(14));
    }

    #[test]
    fn missing_cue_is_error() {
        let json = r#"{ "sheets": [], "sounds": { "axe": { "path": "a.mp3" } } }"#;
        let err = SoundBank::from_manifest(&AssetManifest::from_json(json).unwrap()).unwrap_err();
        assert!(matches!(err, GameError::MissingSound("axe")));
    }
}
