pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;
pub mod wordgame;

// Re-export key types at crate root for convenience
pub use api::scene::{PanelView, Scene, SceneConfig, SceneContext};
pub use api::types::{EntityId, ImageId, SceneEvent};
pub use assets::manifest::{ImageEntry, ImageManifest};
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::layer::RenderLayer;
pub use components::sprite::{FacingSet, Sprite};
pub use components::walker::{Facing, Route, Walker};
pub use core::stage::Stage;
pub use core::time::FrameClock;
pub use input::hotspots::{hit, Hotspot, HotspotAction, Rect};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::dialogue::DialogueCycler;
pub use systems::effects::{EffectsState, Rng, Sparkle, SparkleKind};
pub use systems::motion::tick_walkers;
pub use systems::overlay::{OverlayKind, OverlayState, TextOverlay};
pub use systems::render::build_render_buffer;
pub use wordgame::{
    classify, GamePhase, GuessKey, KeyOutcome, LetterScore, WordGame, WordList,
};
