/// Render layer: controls draw order.
///
/// Layers are drawn back-to-front: Background first, Player last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Background = 0,
    #[default]
    Enemies = 1,
    Player = 2,
}

impl RenderLayer {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Background < RenderLayer::Enemies);
        assert!(RenderLayer::Enemies < RenderLayer::Player);
        assert_eq!(RenderLayer::Player.as_u8(), 2);
    }
}
