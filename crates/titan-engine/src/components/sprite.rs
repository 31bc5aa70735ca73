/// Identifies which sprite sheet a frame belongs to.
/// Index into the AssetManifest's sheet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SheetId(pub u32);

/// Grid geometry of a sprite sheet, in source pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGeometry {
    pub frame_width: u32,
    pub frame_height: u32,
    /// Cells per row.
    pub columns: u32,
    /// Draw-time scale factor applied to every frame.
    pub scale: f32,
}

impl SheetGeometry {
    /// On-screen frame size after scaling.
    pub fn scaled_size(&self) -> (f32, f32) {
        (
            self.frame_width as f32 * self.scale,
            self.frame_height as f32 * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_size_applies_scale() {
        let g = SheetGeometry { frame_width: 32, frame_height: 48, columns: 6, scale: 5.0 };
        assert_eq!(g.scaled_size(), (160.0, 240.0));
    }
}
