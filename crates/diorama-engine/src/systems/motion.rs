use glam::Vec2;

use crate::components::sprite::Sprite;
use crate::components::walker::{Facing, Walker};
use crate::core::stage::Stage;

/// Distance below which a walker snaps onto its target waypoint.
pub const ARRIVE_EPSILON: f32 = 0.5;

/// Horizontal movement within this band keeps the idle sprite, so slow or
/// vertical walking does not flicker between facings.
pub const FACING_DEADZONE: f32 = 0.1;

/// Advance every active walker on the stage by `dt` seconds.
pub fn tick_walkers(stage: &mut Stage, dt: f32) {
    for entity in stage.iter_mut() {
        if !entity.active {
            continue;
        }
        if let Some(walker) = &mut entity.walker {
            step_walker(walker, &mut entity.pos, entity.sprite.as_mut(), dt);
        }
    }
}

/// One motion step for a single walker.
///
/// Within ARRIVE_EPSILON of the target the position snaps exactly onto the
/// waypoint and the walker aims for the next one, taking no interpolation
/// this frame. Interpolating across a waypoint would overshoot and
/// oscillate around it.
fn step_walker(walker: &mut Walker, pos: &mut Vec2, sprite: Option<&mut Sprite>, dt: f32) {
    let target = walker.route.point(walker.next);
    let to_target = target - *pos;
    let dist = to_target.length();

    if dist < ARRIVE_EPSILON {
        *pos = target;
        walker.next = (walker.next + 1) % walker.route.point_count();
        return;
    }

    let step = walker.speed * dt;
    let ratio = (step / dist).min(1.0);
    let delta = to_target * ratio;
    *pos += delta;

    walker.heading = if delta.x < -FACING_DEADZONE {
        Facing::Left
    } else if delta.x > FACING_DEADZONE {
        Facing::Right
    } else {
        Facing::Idle
    };

    if let (Some(sprite), Some(facing)) = (sprite, walker.facing) {
        sprite.image = match walker.heading {
            Facing::Left => facing.left,
            Facing::Right => facing.right,
            Facing::Idle => facing.idle,
        };
    }
}
