use std::path::PathBuf;

use thiserror::Error;
use titan_engine::AssetError;
use titan_host::StorageError;

/// A state label that does not split into a known action and direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("state label `{0}` is not `<action>_<direction>`")]
    InvalidState(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Asset(#[from] AssetError),
    #[error("failed to read settings {path}: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    SettingsFormat(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error(transparent)]
    State(#[from] StateError),
    #[error("manifest lists {found} background layers, expected {expected}")]
    BackgroundLayers { expected: usize, found: usize },
    #[error("sound `{0}` is missing from the manifest or has no event id")]
    MissingSound(&'static str),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
