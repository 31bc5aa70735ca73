use std::path::PathBuf;

use thiserror::Error;

/// Per-entity animation failures. Recoverable: the caller logs and keeps
/// the previously selected frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("no animation frames registered for state `{state}`")]
    MissingFrameData { state: String },
    #[error("frame cursor {cursor:.3} selects index {index}, sequence has {count} frames")]
    FrameIndexOutOfRange {
        cursor: f32,
        index: usize,
        count: usize,
    },
    #[error("animation sequence is empty")]
    EmptySequence,
    #[error("cell run starting at {start} with {count} cells overflows the sheet index")]
    CellRangeOverflow { start: u32, count: u32 },
}

/// Asset loading failures. Fatal at startup.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("animation `{set}/{label}` refers to unknown sheet `{sheet}`")]
    UnknownSheet {
        set: String,
        label: String,
        sheet: String,
    },
    #[error("animation `{set}/{label}`: {source}")]
    InvalidAnimation {
        set: String,
        label: String,
        #[source]
        source: AnimationError,
    },
    #[error("animation set `{0}` is not in the manifest")]
    MissingSet(String),
    #[error("animation set `{set}` is missing `{label}`")]
    MissingAnimation { set: String, label: String },
    #[error("resource directory {0} does not exist")]
    MissingResourceDir(PathBuf),
}
