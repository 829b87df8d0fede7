use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::layer::RenderLayer;
use crate::components::sprite::Sprite;
use crate::components::walker::Walker;

/// Fat Entity: a single struct with optional components.
/// Designed for simplicity over ECS purity; scenes here hold tens of these.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position of the entity's center in world space.
    pub pos: Vec2,
    /// Rendered size in world units.
    pub size: Vec2,
    /// Draw-order layer.
    pub layer: RenderLayer,
    /// Sprite component (optional; entities without sprites are invisible).
    pub sprite: Option<Sprite>,
    /// Route-walking component (optional).
    pub walker: Option<Walker>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            layer: RenderLayer::default(),
            sprite: None,
            walker: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_layer(mut self, layer: RenderLayer) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_walker(mut self, walker: Walker) -> Self {
        self.walker = Some(walker);
        self
    }
}
