use crate::api::types::ImageId;

/// Sprite component: how an entity appears visually.
/// Sprites here are whole images from the manifest, not atlas cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Which manifest image to draw.
    pub image: ImageId,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl Sprite {
    pub fn new(image: ImageId) -> Self {
        Self { image, alpha: 1.0 }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// The three images a walking avatar swaps between, picked from the sign
/// of its horizontal movement each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacingSet {
    pub left: ImageId,
    pub right: ImageId,
    /// Shown when the avatar is not meaningfully moving sideways.
    pub idle: ImageId,
}
