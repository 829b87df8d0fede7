use serde::Serialize;

use crate::api::types::{EntityId, ImageId, SceneEvent};
use crate::assets::manifest::ImageManifest;
use crate::core::stage::Stage;
use crate::input::queue::InputQueue;
use crate::systems::effects::{EffectsState, Rng};
use crate::systems::overlay::OverlayState;

/// Configuration for the engine, provided by the scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// World width in scene units.
    pub world_width: f32,
    /// World height in scene units.
    pub world_height: f32,
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of effects vertices (default: 4096).
    pub max_effects_vertices: usize,
    /// Maximum number of scene events per frame (default: 32).
    pub max_events: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 256,
            max_effects_vertices: 4096,
            max_events: 32,
        }
    }
}

/// The core contract every scene must fulfill.
pub trait Scene {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> SceneConfig {
        SceneConfig::default()
    }

    /// Declare the images this scene renders, so the page can preload them.
    fn manifest(&self) -> ImageManifest {
        ImageManifest::default()
    }

    /// Setup initial state, spawn entities, configure the stage.
    fn init(&mut self, ctx: &mut SceneContext);

    /// The per-frame tick. `dt` is the elapsed time in seconds since the
    /// previous frame (zero on the very first frame).
    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue, dt: f32);

    /// Optional scene-specific JSON state view, queried by the page.
    /// `kind` identifies which view; scenes document their own kinds.
    fn view(&self, _kind: u32) -> Option<String> {
        None
    }
}

/// Contents of the modal reading panel, shown by the page while open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    /// Image to display, if any.
    pub image: Option<ImageId>,
    /// Caption text to display, if any.
    pub text: Option<String>,
}

/// Mutable access to engine state, passed to Scene::init and Scene::update.
pub struct SceneContext {
    pub stage: Stage,
    pub effects: EffectsState,
    pub overlays: OverlayState,
    pub events: Vec<SceneEvent>,
    /// Scene-level RNG (word picks and the like). Seeded by the runner.
    pub rng: Rng,
    panel: Option<PanelView>,
    next_id: u32,
}

impl SceneContext {
    pub fn new(seed: u64) -> Self {
        Self {
            stage: Stage::new(),
            effects: EffectsState::new(seed),
            overlays: OverlayState::new(),
            events: Vec::new(),
            rng: Rng::new(seed),
            panel: None,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a scene event to be forwarded to the page.
    pub fn emit_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Open the modal reading panel, replacing any panel already open.
    pub fn open_panel(&mut self, panel: PanelView) {
        self.panel = Some(panel);
    }

    /// Close the modal reading panel. No-op when none is open.
    pub fn close_panel(&mut self) {
        self.panel = None;
    }

    /// The currently open panel, if any.
    pub fn panel(&self) -> Option<&PanelView> {
        self.panel.as_ref()
    }

    /// JSON form of the open panel ("null" when none), read by the page.
    pub fn panel_json(&self) -> String {
        serde_json::to_string(&self.panel).unwrap_or_default()
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for SceneContext {
    fn default() -> Self {
        Self::new(42)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_unique_and_increasing() {
        let mut ctx = SceneContext::new(1);
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn panel_opens_and_closes() {
        let mut ctx = SceneContext::new(1);
        assert!(ctx.panel().is_none());

        ctx.open_panel(PanelView {
            image: Some(ImageId(3)),
            text: Some("a caption".to_string()),
        });
        assert_eq!(ctx.panel().and_then(|p| p.image), Some(ImageId(3)));

        ctx.close_panel();
        assert!(ctx.panel().is_none());
    }

    #[test]
    fn clear_frame_data_drops_events_but_not_panel() {
        let mut ctx = SceneContext::new(1);
        ctx.emit_event(SceneEvent::new(1.0));
        ctx.open_panel(PanelView { image: None, text: None });

        ctx.clear_frame_data();

        assert!(ctx.events.is_empty());
        assert!(ctx.panel().is_some());
    }

    #[test]
    fn panel_json_is_null_when_closed() {
        let mut ctx = SceneContext::new(1);
        assert_eq!(ctx.panel_json(), "null");

        ctx.open_panel(PanelView {
            image: None,
            text: Some("Boston 2025 Scrapbook!".to_string()),
        });
        assert!(ctx.panel_json().contains("Boston 2025 Scrapbook!"));
    }
}
