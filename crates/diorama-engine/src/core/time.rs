/// Converts monotonically increasing frame timestamps into per-frame deltas.
///
/// The browser drives the loop with `requestAnimationFrame` timestamps in
/// milliseconds; scene logic works in seconds. The first timestamp only
/// establishes the baseline, so the first frame always sees a zero delta.
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Feed the next frame timestamp (milliseconds). Returns the elapsed
    /// time in seconds since the previous feed, or zero on the first call.
    /// A timestamp earlier than the previous one also yields zero.
    pub fn feed(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
