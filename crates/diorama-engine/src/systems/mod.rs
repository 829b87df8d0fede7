pub mod dialogue;
pub mod effects;
pub mod motion;
pub mod overlay;
pub mod render;
