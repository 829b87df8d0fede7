/// Render layer: controls draw order for entities.
///
/// Layers are drawn back-to-front: Backdrop first, Overlay last.
/// Default layer is `Actors`, where avatars and props live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    Backdrop = 0,
    Scenery = 1,
    #[default]
    Actors = 2,
    Overlay = 3,
}

impl RenderLayer {
    /// Total number of render layers.
    pub const COUNT: usize = 4;

    /// Convert from a u8 value to a RenderLayer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Backdrop),
            1 => Some(Self::Scenery),
            2 => Some(Self::Actors),
            3 => Some(Self::Overlay),
            _ => None,
        }
    }

    /// Convert to u8 for protocol serialization.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_actors() {
        assert_eq!(RenderLayer::default(), RenderLayer::Actors);
    }

    #[test]
    fn ordering_is_back_to_front() {
        assert!(RenderLayer::Backdrop < RenderLayer::Scenery);
        assert!(RenderLayer::Scenery < RenderLayer::Actors);
        assert!(RenderLayer::Actors < RenderLayer::Overlay);
    }

    #[test]
    fn round_trip_u8() {
        for val in 0..RenderLayer::COUNT as u8 {
            let layer = RenderLayer::from_u8(val).unwrap();
            assert_eq!(layer.as_u8(), val);
        }
        assert!(RenderLayer::from_u8(4).is_none());
    }
}
