//! Burst sparkles: short-lived quads that pop in after a per-sparkle delay.

/// Visual variant of an effect quad. Written into the vertex stream so the
/// page can style dots, stars, and the center flash differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SparkleKind {
    Dot = 0,
    Star = 1,
    Flash = 2,
}

/// One sparkle of a burst. It sits at a fixed scatter position and plays a
/// pop-in/fade-out envelope once its start delay has elapsed.
#[derive(Debug, Clone)]
pub struct Sparkle {
    pub pos: [f32; 2],
    /// Half-size of the quad at full scale, in world units.
    pub half: f32,
    pub kind: SparkleKind,
    /// Seconds left before the sparkle appears.
    pub delay: f32,
    /// Seconds lived since appearing.
    pub age: f32,
    /// Seconds the sparkle stays alive once visible.
    pub life: f32,
}

impl Sparkle {
    pub fn new(pos: [f32; 2], half: f32, kind: SparkleKind, delay: f32, life: f32) -> Self {
        Sparkle {
            pos,
            half,
            kind,
            delay,
            age: 0.0,
            life,
        }
    }

    /// Advance by `dt`. Returns false once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.delay > 0.0 {
            self.delay = (self.delay - dt).max(0.0);
            return true;
        }
        self.age += dt;
        self.age < self.life
    }

    /// Whether the start delay has elapsed.
    pub fn visible(&self) -> bool {
        self.delay <= 0.0
    }

    /// Scale/opacity envelope in [0, 1]: a quick pop over the first fifth
    /// of the sparkle's life, then an ease back down to nothing.
    pub fn envelope(&self) -> f32 {
        if self.delay > 0.0 || self.life <= 0.0 {
            return 0.0;
        }
        let t = (self.age / self.life).clamp(0.0, 1.0);
        if t < 0.2 {
            t / 0.2
        } else {
            1.0 - (t - 0.2) / 0.8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_counts_down_before_aging() {
        let mut s = Sparkle::new([0.0, 0.0], 6.0, SparkleKind::Dot, 0.1, 1.0);
        assert!(!s.visible());
        assert_eq!(s.envelope(), 0.0);

        assert!(s.tick(0.05));
        assert!(!s.visible());
        assert_eq!(s.age, 0.0);

        assert!(s.tick(0.1));
        assert!(s.visible());
    }

    #[test]
    fn expires_after_its_life() {
        let mut s = Sparkle::new([0.0, 0.0], 6.0, SparkleKind::Star, 0.0, 0.5);
        assert!(s.tick(0.3));
        assert!(!s.tick(0.3));
    }

    #[test]
    fn envelope_pops_then_fades() {
        let mut s = Sparkle::new([0.0, 0.0], 6.0, SparkleKind::Dot, 0.0, 1.0);

        s.tick(0.1);
        let rising = s.envelope();
        s.tick(0.1);
        let peak = s.envelope();
        s.tick(0.6);
        let fading = s.envelope();

        assert!(rising < peak);
        assert!((peak - 1.0).abs() < 1e-5);
        assert!(fading < peak);
        assert!(fading > 0.0);
    }
}
