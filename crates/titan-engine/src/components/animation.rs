//! Sprite animation: frame sequences keyed by entity state, and the
//! fractional frame cursor that walks them.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::components::sprite::SheetId;
use crate::error::AnimationError;

/// Handle to one visual frame inside a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRef {
    pub sheet: SheetId,
    /// Linear cell index in the sheet (row-major).
    pub index: u32,
    /// Mirror horizontally when drawn.
    pub flip_x: bool,
}

/// Definition of a single animation sequence. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    frames: Vec<FrameRef>,
}

impl AnimationDef {
    /// Consecutive cells `start..start + count` of one sheet.
    pub fn strip(sheet: SheetId, start: u32, count: u32, flip_x: bool) -> Result<Self, AnimationError> {
        Self::strip_repeated(sheet, start, count, 1, flip_x)
    }

    /// Like `strip`, with every cell shown `repeat` times in a row.
    pub fn strip_repeated(
        sheet: SheetId,
        start: u32,
        count: u32,
        repeat: u32,
        flip_x: bool,
    ) -> Result<Self, AnimationError> {
        let end = start
            .checked_add(count)
            .ok_or(AnimationError::CellRangeOverflow { start, count })?;
        let frames = (start..end)
            .flat_map(|index| std::iter::repeat(FrameRef { sheet, index, flip_x }).take(repeat as usize))
            .collect();
        Self::from_frames(frames)
    }

    /// Create from an explicit frame list.
    pub fn from_frames(frames: Vec<FrameRef>) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::EmptySequence);
        }
        Ok(Self { frames })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<FrameRef> {
        self.frames.get(index).copied()
    }

    pub fn frames(&self) -> &[FrameRef] {
        &self.frames
    }
}

/// State key -> frame sequence lookup for one entity type.
#[derive(Debug, Clone)]
pub struct AnimationTable<K> {
    animations: HashMap<K, AnimationDef>,
}

impl<K: Copy + Eq + Hash + Debug> AnimationTable<K> {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: K, def: AnimationDef) {
        self.animations.insert(key, def);
    }

    pub fn get(&self, key: K) -> Result<&AnimationDef, AnimationError> {
        self.animations
            .get(&key)
            .ok_or_else(|| AnimationError::MissingFrameData {
                state: format!("{key:?}"),
            })
    }

    /// Check that every key in `keys` has a sequence. Returns the first
    /// missing key so loaders can fail before the first tick.
    pub fn require(&self, keys: impl IntoIterator<Item = K>) -> Result<(), K> {
        for key in keys {
            if !self.animations.contains_key(&key) {
                return Err(key);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

impl<K: Copy + Eq + Hash + Debug> Default for AnimationTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fractional frame cursor plus the last frame it selected.
///
/// Per advance the cursor grows by `frame_count * dt`, so one full pass
/// over any sequence takes one second. The cursor only wraps once it
/// exceeds `frame_count`, which means a cursor sitting exactly on
/// `frame_count` truncates to an index one past the end. That case resets
/// the cursor and keeps the previous frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Animator {
    cursor: f32,
    frame: Option<FrameRef>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an animator already showing the first frame of `def`.
    pub fn showing(def: &AnimationDef) -> Self {
        Self {
            cursor: 0.0,
            frame: def.frame(0),
        }
    }

    /// Advance through `def` by `dt` seconds and select the frame under the
    /// cursor. Returns the selected index.
    pub fn advance(&mut self, def: &AnimationDef, dt: f32) -> Result<usize, AnimationError> {
        let count = def.frame_count();
        self.cursor += count as f32 * dt;
        if self.cursor > count as f32 {
            self.cursor = 0.0;
        }

        let index = self.cursor as usize;
        match def.frame(index) {
            Some(frame) => {
                self.frame = Some(frame);
                Ok(index)
            }
            None => {
                let cursor = self.cursor;
                self.cursor = 0.0;
                Err(AnimationError::FrameIndexOutOfRange { cursor, index, count })
            }
        }
    }

    /// Rewind the cursor to the start of the sequence.
    pub fn rewind(&mut self) {
        self.cursor = 0.0;
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Last frame successfully selected.
    pub fn frame(&self) -> Option<FrameRef> {
        self.frame
    }
}
