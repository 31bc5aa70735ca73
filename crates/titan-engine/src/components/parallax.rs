//! Horizontally wrapping background layers.

/// One scrolling background layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    /// Texture width; the offset wraps at this magnitude.
    pub width: f32,
    /// Multiplier applied to camera movement (far layers < 1).
    pub speed: f32,
    /// Current horizontal offset, kept in `[-width, width)`.
    pub offset: f32,
    /// Vertical draw position.
    pub y: f32,
    /// Draw the second tile mirrored so the seam is invisible.
    pub mirrored: bool,
}

impl ParallaxLayer {
    pub fn new(width: f32, speed: f32) -> Self {
        Self {
            width,
            speed,
            offset: 0.0,
            y: 0.0,
            mirrored: false,
        }
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Shift the layer against `movement` and wrap at the texture width.
    /// Any step size lands back in range; an offset of exactly `-width`
    /// becomes 0.
    pub fn scroll(&mut self, movement: f32) {
        self.offset -= movement * self.speed;
        if self.width <= 0.0 {
            return;
        }
        if self.offset <= -self.width || self.offset >= self.width {
            // Remainder keeps the sign, so the result is in (-width, width).
            self.offset %= self.width;
            // -0.0 from an exact multiple reads as 0.
            if self.offset == 0.0 {
                self.offset = 0.0;
            }
        }
    }

    /// Left edges of the two tiles that cover the screen.
    pub fn tile_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.width]
    }
}

/// Back-to-front stack of parallax layers scrolled together.
#[derive(Debug, Clone, Default)]
pub struct ParallaxBackground {
    layers: Vec<ParallaxLayer>,
}

impl ParallaxBackground {
    pub fn new(layers: Vec<ParallaxLayer>) -> Self {
        Self { layers }
    }

    pub fn scroll(&mut self, movement: f32) {
        for layer in &mut self.layers {
            layer.scroll(movement);
        }
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.layers.iter().map(|l| l.offset).collect()
    }
}
