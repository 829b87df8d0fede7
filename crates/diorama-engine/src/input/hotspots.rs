use glam::Vec2;

use crate::api::types::ImageId;

/// Axis-aligned rectangle in world coordinates (top-left corner + size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// What clicking a hotspot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotAction {
    /// Open the modal reading panel with the hotspot's image and text.
    OpenPanel,
    /// Open the word-guess minigame.
    OpenMiniGame,
    /// Fire a sparkle burst at the hotspot's center, captioned with its label.
    SparkleBurst,
    /// Float the hotspot's label upward from its center, fading out.
    FloatLabel,
}

/// A clickable region of the scene. Declarative: concrete scenes list their
/// hotspots once and hit-test pointer presses against them.
#[derive(Debug, Clone)]
pub struct Hotspot {
    /// Stable identifier, echoed in scene events.
    pub id: u32,
    pub rect: Rect,
    /// Image shown when the action opens a panel.
    pub image: Option<ImageId>,
    /// Caption or label text, depending on the action.
    pub text: Option<String>,
    pub action: HotspotAction,
}

impl Hotspot {
    pub fn new(id: u32, rect: Rect, action: HotspotAction) -> Self {
        Self {
            id,
            rect,
            image: None,
            text: None,
            action,
        }
    }

    pub fn with_image(mut self, image: ImageId) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Find the first hotspot containing the point, in declaration order.
pub fn hit(hotspots: &[Hotspot], x: f32, y: f32) -> Option<&Hotspot> {
    hotspots.iter().find(|h| h.rect.contains(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_interior_and_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 30.0);
        assert!(r.contains(25.0, 35.0));
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(40.0, 50.0));
        assert!(!r.contains(9.9, 35.0));
        assert!(!r.contains(25.0, 50.1));
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(340.0, 70.0, 10.0, 30.0);
        assert_eq!(r.center(), Vec2::new(345.0, 85.0));
    }

    #[test]
    fn hit_returns_first_match_in_order() {
        let spots = vec![
            Hotspot::new(1, Rect::new(0.0, 0.0, 50.0, 50.0), HotspotAction::OpenPanel),
            Hotspot::new(2, Rect::new(25.0, 25.0, 50.0, 50.0), HotspotAction::FloatLabel),
        ];
        let h = hit(&spots, 30.0, 30.0).unwrap();
        assert_eq!(h.id, 1);
    }

    #[test]
    fn hit_misses_outside_all_rects() {
        let spots = vec![Hotspot::new(
            1,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            HotspotAction::OpenPanel,
        )];
        assert!(hit(&spots, 100.0, 100.0).is_none());
    }
}
