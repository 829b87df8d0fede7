use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Instances are ordered back-to-front by layer; within a layer, spawn
/// order is preserved so overlapping sprites draw stably.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut visible: Vec<&Entity> = entities
        .filter(|e| e.active && e.sprite.is_some())
        .collect();
    visible.sort_by_key(|e| e.layer);

    for entity in visible {
        let sprite = match &entity.sprite {
            Some(s) => s,
            None => continue,
        };

        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            w: entity.size.x,
            h: entity.size.y,
            image: sprite.image.0 as f32,
            alpha: sprite.alpha,
            layer: entity.layer.as_u8() as f32,
            reserved: 0.0,
        });
    }
}
