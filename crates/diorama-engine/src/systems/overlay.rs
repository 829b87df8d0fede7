use glam::Vec2;
use serde::Serialize;

/// How a text overlay behaves and which style the page applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    /// Speech bubble anchored above an avatar. Holds steady, then vanishes.
    Bubble,
    /// Short-lived label that fades out in place.
    Caption,
    /// Label that drifts upward while fading.
    Drift,
}

/// A transient positioned string the page renders as a DOM element.
#[derive(Debug, Clone)]
pub struct TextOverlay {
    pub id: u32,
    pub kind: OverlayKind,
    pub text: String,
    /// World-space anchor. Bubbles use it as their bottom-center.
    pub pos: Vec2,
    /// Total lifetime in seconds.
    pub ttl: f32,
    /// Seconds lived so far.
    pub age: f32,
    /// Upward drift in world units per second.
    pub rise: f32,
}

impl TextOverlay {
    /// Advance by `dt`. Returns false once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.age += dt;
        if self.age >= self.ttl {
            return false;
        }
        self.pos.y -= self.rise * dt;
        true
    }

    /// Opacity for the page to apply. Bubbles hold full opacity for their
    /// whole life; captions and drifting labels fade out linearly.
    pub fn alpha(&self) -> f32 {
        match self.kind {
            OverlayKind::Bubble => 1.0,
            OverlayKind::Caption | OverlayKind::Drift => {
                (1.0 - self.age / self.ttl).clamp(0.0, 1.0)
            }
        }
    }
}

/// JSON shape of one overlay, read by the page every frame.
#[derive(Debug, Serialize)]
struct OverlayView<'a> {
    id: u32,
    kind: OverlayKind,
    text: &'a str,
    x: f32,
    y: f32,
    alpha: f32,
}

/// All live overlays. Scenes spawn them, the runner ticks them, and the
/// page polls the JSON view once per frame.
#[derive(Debug)]
pub struct OverlayState {
    overlays: Vec<TextOverlay>,
    next_id: u32,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayState {
    pub fn new() -> Self {
        Self {
            overlays: Vec::new(),
            next_id: 1,
        }
    }

    /// Show a speech bubble at the anchor for `show_for` seconds.
    pub fn bubble(&mut self, text: impl Into<String>, anchor: Vec2, show_for: f32) -> u32 {
        self.spawn(OverlayKind::Bubble, text.into(), anchor, show_for, 0.0)
    }

    /// Show a label that fades out in place over `ttl` seconds.
    pub fn caption(&mut self, text: impl Into<String>, pos: Vec2, ttl: f32) -> u32 {
        self.spawn(OverlayKind::Caption, text.into(), pos, ttl, 0.0)
    }

    /// Float a label upward by `rise` units per second while it fades.
    pub fn drift(&mut self, text: impl Into<String>, pos: Vec2, ttl: f32, rise: f32) -> u32 {
        self.spawn(OverlayKind::Drift, text.into(), pos, ttl, rise)
    }

    fn spawn(&mut self, kind: OverlayKind, text: String, pos: Vec2, ttl: f32, rise: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.overlays.push(TextOverlay {
            id,
            kind,
            text,
            pos,
            ttl,
            age: 0.0,
            rise,
        });
        id
    }

    /// Remove an overlay before it expires. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u32) {
        self.overlays.retain(|o| o.id != id);
    }

    /// Advance all overlays, dropping the expired ones.
    pub fn tick(&mut self, dt: f32) {
        self.overlays.retain_mut(|o| o.tick(dt));
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextOverlay> {
        self.overlays.iter()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn clear(&mut self) {
        self.overlays.clear();
    }

    /// Serialize the live overlays for the page.
    pub fn to_json(&self) -> String {
        let views: Vec<OverlayView> = self
            .overlays
            .iter()
            .map(|o| OverlayView {
                id: o.id,
                kind: o.kind,
                text: &o.text,
                x: o.pos.x,
                y: o.pos.y,
                alpha: o.alpha(),
            })
            .collect();
        serde_json::to_string(&views).unwrap_or_default()
    }
}
