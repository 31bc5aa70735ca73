pub mod animation;
pub mod layer;
pub mod parallax;
pub mod sprite;
