/// Cycles an avatar's speech lines on a fixed schedule.
///
/// Fires once after `first_delay` seconds, then every `period` seconds,
/// walking through the lines in order and wrapping at the end. Each firing
/// hands back the line to show; the scene turns it into a bubble overlay.
/// Dropping the cycler cancels the schedule.
#[derive(Debug, Clone)]
pub struct DialogueCycler {
    lines: Vec<String>,
    index: usize,
    /// Seconds until the next firing.
    countdown: f32,
    period: f32,
    show_for: f32,
}

impl DialogueCycler {
    pub fn new(lines: Vec<String>, first_delay: f32, period: f32, show_for: f32) -> Self {
        Self {
            lines,
            index: 0,
            countdown: first_delay,
            period,
            show_for,
        }
    }

    /// Seconds a fired line stays on screen.
    pub fn show_for(&self) -> f32 {
        self.show_for
    }

    /// Advance the schedule by `dt`. Returns the line to show when the
    /// timer fires, at most once per tick.
    pub fn tick(&mut self, dt: f32) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        self.countdown -= dt;
        if self.countdown > 0.0 {
            return None;
        }
        self.countdown += self.period;
        let line = &self.lines[self.index];
        self.index = (self.index + 1) % self.lines.len();
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fires_after_first_delay_then_every_period() {
        let mut cycler = DialogueCycler::new(lines(&["a", "b"]), 2.0, 5.0, 1.0);

        assert_eq!(cycler.tick(1.0), None);
        assert_eq!(cycler.tick(1.0), Some("a"));
        assert_eq!(cycler.tick(4.9), None);
        assert_eq!(cycler.tick(0.2), Some("b"));
    }

    #[test]
    fn lines_wrap_around() {
        let mut cycler = DialogueCycler::new(lines(&["a", "b"]), 0.0, 1.0, 1.0);

        assert_eq!(cycler.tick(0.1), Some("a"));
        assert_eq!(cycler.tick(1.0), Some("b"));
        assert_eq!(cycler.tick(1.0), Some("a"));
    }

    #[test]
    fn fires_at_most_once_per_tick() {
        let mut cycler = DialogueCycler::new(lines(&["a", "b", "c"]), 1.0, 1.0, 1.0);

        // a huge frame gap does not dump the whole backlog at once
        assert_eq!(cycler.tick(10.0), Some("a"));
    }

    #[test]
    fn empty_line_list_never_fires() {
        let mut cycler = DialogueCycler::new(Vec::new(), 0.0, 1.0, 1.0);
        assert_eq!(cycler.tick(100.0), None);
    }

    #[test]
    fn two_cyclers_stay_independent() {
        let mut a = DialogueCycler::new(lines(&["first"]), 3.0, 3.0, 1.0);
        let mut b = DialogueCycler::new(lines(&["second"]), 1.0, 3.0, 1.0);

        assert_eq!(a.tick(1.5), None);
        assert_eq!(b.tick(1.5), Some("second"));
    }
}
