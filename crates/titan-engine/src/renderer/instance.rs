use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::animation::FrameRef;
use crate::components::layer::RenderLayer;

/// Per-instance draw data handed to the host renderer.
/// 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Center X in screen space.
    pub x: f32,
    /// Center Y in screen space.
    pub y: f32,
    /// Sprite sheet index.
    pub sheet: f32,
    /// Linear cell index within the sheet.
    pub frame: f32,
    /// 1.0 when mirrored horizontally.
    pub flip_x: f32,
    /// Draw scale applied to the source frame.
    pub scale: f32,
    /// `RenderLayer` as a float.
    pub layer: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Instance for `frame` centered on `center`.
    pub fn sprite(frame: FrameRef, center: Vec2, scale: f32, layer: RenderLayer) -> Self {
        Self {
            x: center.x,
            y: center.y,
            sheet: frame.sheet.0 as f32,
            frame: frame.index as f32,
            flip_x: if frame.flip_x { 1.0 } else { 0.0 },
            scale,
            layer: layer.as_u8() as f32,
            alpha: 1.0,
        }
    }
}

/// Draw list rebuilt every frame, ordered back-to-front.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Stable sort by layer so hosts can draw in one pass.
    pub fn sort_by_layer(&mut self) {
        self.instances
            .sort_by(|a, b| a.layer.total_cmp(&b.layer));
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::SheetId;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
    }

    #[test]
    fn sprite_instance_encodes_frame() {
        let frame = FrameRef { sheet: SheetId(3), index: 14, flip_x: true };
        let inst = RenderInstance::sprite(frame, Vec2::new(10.0, 20.0), 5.0, RenderLayer::Player);
        assert_eq!(inst.sheet, 3.0);
        assert_eq!(inst.frame, 14.0);
        assert_eq!(inst.flip_x, 1.0);
        assert_eq!(inst.layer, 2.0);
    }

    #[test]
    fn sort_keeps_insertion_order_within_layer() {
        let frame = FrameRef { sheet: SheetId(0), index: 0, flip_x: false };
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance::sprite(frame, Vec2::new(1.0, 0.0), 1.0, RenderLayer::Player));
        buf.push(RenderInstance::sprite(frame, Vec2::new(2.0, 0.0), 1.0, RenderLayer::Background));
        buf.push(RenderInstance::sprite(frame, Vec2::new(3.0, 0.0), 1.0, RenderLayer::Player));
        buf.sort_by_layer();
        let xs: Vec<f32> = buf.instances.iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![2.0, 1.0, 3.0]);
        assert_eq!(buf.as_floats().len(), 3 * RenderInstance::FLOATS);
    }
}
