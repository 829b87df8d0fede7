//! Visual effects system: sparkle bursts and center flashes.
//!
//! This module provides the `EffectsState` facade for managing all visual
//! effects, plus the individual pieces for scenes that want finer control.

mod geometry;
mod rng;
mod sparkle;

// Re-export public types
pub use geometry::{push_quad, VERTEX_FLOATS};
pub use rng::Rng;
pub use sparkle::{Sparkle, SparkleKind};

use std::f32::consts::TAU;

/// Sparkles placed on an even ring around a burst center.
pub const BURST_RING_COUNT: usize = 20;
/// Extra sparkles scattered at random angles inside the ring.
pub const BURST_SCATTER_COUNT: usize = 12;
/// Seconds from burst start until every sparkle has expired.
pub const BURST_TTL: f32 = 1.2;
/// Seconds the center flash stays visible.
pub const FLASH_TTL: f32 = 0.35;
/// Side length of the center flash quad, in world units.
pub const FLASH_SIZE: f32 = 200.0;

const DOT_HALF: f32 = 6.0;
const STAR_HALF: f32 = 9.0;

/// The full-bright quad at a burst's center, fading out fast.
#[derive(Debug, Clone)]
pub struct Flash {
    pub pos: [f32; 2],
    pub half: f32,
    pub age: f32,
    pub life: f32,
}

impl Flash {
    /// Advance by `dt`. Returns false once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.age += dt;
        self.age < self.life
    }

    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / self.life).clamp(0.0, 1.0)
    }
}

/// Container for all live visual effects plus their vertex buffer.
/// Generic; scenes fire bursts via the public methods.
pub struct EffectsState {
    pub sparkles: Vec<Sparkle>,
    pub flashes: Vec<Flash>,
    pub effects_buffer: Vec<f32>,
    pub rng: Rng,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            sparkles: Vec::new(),
            flashes: Vec::new(),
            effects_buffer: Vec::with_capacity(4096),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Create a new EffectsState with a pre-allocated buffer capacity.
    pub fn with_capacity(seed: u64, max_vertices: usize) -> Self {
        EffectsState {
            sparkles: Vec::new(),
            flashes: Vec::new(),
            effects_buffer: Vec::with_capacity(max_vertices * VERTEX_FLOATS),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Fire a sparkle burst: an even ring of sparkles with every third one
    /// a star, a handful of randomly scattered extras, and a center flash.
    /// Each sparkle gets a small random start delay so the burst crackles
    /// instead of appearing all at once.
    pub fn spawn_burst(&mut self, center: [f32; 2]) {
        for i in 0..BURST_RING_COUNT {
            let angle = TAU * i as f32 / BURST_RING_COUNT as f32;
            let dist = self.rng.next_range(30.0, 90.0);
            let kind = if i % 3 == 0 {
                SparkleKind::Star
            } else {
                SparkleKind::Dot
            };
            let half = if kind == SparkleKind::Star {
                STAR_HALF
            } else {
                DOT_HALF
            };
            let delay = self.rng.next_f32() * 0.15;
            self.sparkles.push(Sparkle::new(
                [
                    center[0] + angle.cos() * dist,
                    center[1] + angle.sin() * dist,
                ],
                half,
                kind,
                delay,
                BURST_TTL - delay,
            ));
        }

        for _ in 0..BURST_SCATTER_COUNT {
            let angle = self.rng.next_f32() * TAU;
            let dist = self.rng.next_range(20.0, 100.0);
            let delay = self.rng.next_f32() * 0.25;
            self.sparkles.push(Sparkle::new(
                [
                    center[0] + angle.cos() * dist,
                    center[1] + angle.sin() * dist,
                ],
                DOT_HALF,
                SparkleKind::Dot,
                delay,
                BURST_TTL - delay,
            ));
        }

        self.flashes.push(Flash {
            pos: center,
            half: FLASH_SIZE * 0.5,
            age: 0.0,
            life: FLASH_TTL,
        });
    }

    /// Advance effects: age sparkles and flashes, dropping expired ones.
    pub fn tick(&mut self, dt: f32) {
        self.sparkles.retain_mut(|s| s.tick(dt));
        self.flashes.retain_mut(|f| f.tick(dt));
    }

    /// Rebuild the effects vertex buffer (triangle list, 6 floats per
    /// vertex). Flashes are written first so sparkles draw on top.
    pub fn rebuild_effects_buffer(&mut self) {
        self.effects_buffer.clear();

        for f in &self.flashes {
            push_quad(
                &mut self.effects_buffer,
                f.pos,
                f.half,
                SparkleKind::Flash as u8 as f32,
                f.alpha(),
            );
        }

        for s in &self.sparkles {
            let e = s.envelope();
            if e <= 0.0 {
                continue;
            }
            push_quad(
                &mut self.effects_buffer,
                s.pos,
                s.half * e,
                s.kind as u8 as f32,
                e,
            );
        }
    }

    /// Clear all effects.
    pub fn clear(&mut self) {
        self.sparkles.clear();
        self.flashes.clear();
        self.effects_buffer.clear();
    }

    pub fn effects_vertex_count(&self) -> usize {
        self.effects_buffer.len() / VERTEX_FLOATS
    }

    pub fn effects_buffer_ptr(&self) -> *const f32 {
        self.effects_buffer.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_composition() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst([345.0, 85.0]);

        assert_eq!(
            effects.sparkles.len(),
            BURST_RING_COUNT + BURST_SCATTER_COUNT
        );
        assert_eq!(effects.flashes.len(), 1);

        let stars = effects
            .sparkles
            .iter()
            .filter(|s| s.kind == SparkleKind::Star)
            .count();
        assert_eq!(stars, 7); // every third of the twenty ring sparkles
    }

    #[test]
    fn ring_sparkles_stay_within_their_band() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst([0.0, 0.0]);

        for s in effects.sparkles.iter().take(BURST_RING_COUNT) {
            let dist = (s.pos[0] * s.pos[0] + s.pos[1] * s.pos[1]).sqrt();
            assert!(dist >= 30.0 - 1e-3 && dist < 90.0 + 1e-3);
        }
    }

    #[test]
    fn burst_is_fully_gone_after_its_ttl() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst([100.0, 100.0]);

        let mut elapsed = 0.0;
        while elapsed < BURST_TTL + 0.1 {
            effects.tick(1.0 / 60.0);
            elapsed += 1.0 / 60.0;
        }

        assert!(effects.sparkles.is_empty());
        assert!(effects.flashes.is_empty());
        effects.rebuild_effects_buffer();
        assert_eq!(effects.effects_vertex_count(), 0);
    }

    #[test]
    fn buffer_contains_quads_mid_burst() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst([0.0, 0.0]);
        effects.tick(0.26); // clears every start delay
        effects.tick(0.05); // ages each sparkle into its pop-in
        effects.rebuild_effects_buffer();

        // all 32 sparkles plus the flash, 6 vertices each
        assert_eq!(effects.effects_vertex_count(), 33 * 6);
        assert_eq!(
            effects.effects_buffer.len(),
            effects.effects_vertex_count() * VERTEX_FLOATS
        );
    }

    #[test]
    fn same_seed_gives_the_same_burst() {
        let mut a = EffectsState::new(7);
        let mut b = EffectsState::new(7);
        a.spawn_burst([10.0, 10.0]);
        b.spawn_burst([10.0, 10.0]);

        for (sa, sb) in a.sparkles.iter().zip(b.sparkles.iter()) {
            assert_eq!(sa.pos, sb.pos);
            assert_eq!(sa.delay, sb.delay);
        }
    }

    #[test]
    fn effects_state_clear() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst([50.0, 50.0]);
        effects.rebuild_effects_buffer();

        effects.clear();

        assert!(effects.sparkles.is_empty());
        assert!(effects.flashes.is_empty());
        assert_eq!(effects.effects_vertex_count(), 0);
    }
}
