/// Boot screen timeline: staggered line reveal, stepped progress bar,
/// READY prompt, then hand-off to the hero screen.

use crate::content::profile::BOOT_LINES;

const BAR_START_MS: u64 = 1500;
const BAR_DURATION_MS: u64 = 1200;
const BAR_STEPS: u64 = 30;
const READY_AT_MS: u64 = BAR_START_MS + BAR_DURATION_MS + 200;
const DONE_AT_MS: u64 = BAR_START_MS + BAR_DURATION_MS + 800;

/// Progress bar width in cells.
pub const BAR_WIDTH: usize = 24;

pub struct BootSequence {
    elapsed_ms: u64,
}

impl BootSequence {
    pub fn new() -> Self {
        BootSequence { elapsed_ms: 0 }
    }

    pub fn advance(&mut self, dt_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
    }

    /// Jump straight to the end (key press, reduced motion).
    pub fn skip(&mut self) {
        self.elapsed_ms = DONE_AT_MS;
    }

    /// How many boot lines have been revealed so far.
    pub fn visible_lines(&self) -> usize {
        BOOT_LINES
            .iter()
            .filter(|(delay, _)| *delay <= self.elapsed_ms)
            .count()
    }

    pub fn bar_started(&self) -> bool {
        self.elapsed_ms >= BAR_START_MS
    }

    /// Progress percent, quantized to the bar's step schedule.
    pub fn progress(&self) -> u64 {
        if self.elapsed_ms < BAR_START_MS {
            return 0;
        }
        let step_time = BAR_DURATION_MS / BAR_STEPS;
        let step = ((self.elapsed_ms - BAR_START_MS) / step_time).min(BAR_STEPS);
        (step * 100 + BAR_STEPS / 2) / BAR_STEPS
    }

    /// Block-character bar: filled `█`, empty `░`.
    pub fn bar(&self) -> String {
        let filled =
            ((self.progress() as f32 / 100.0) * BAR_WIDTH as f32).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let mut s = String::with_capacity(BAR_WIDTH * 3);
        for _ in 0..filled {
            s.push('█');
        }
        for _ in filled..BAR_WIDTH {
            s.push('░');
        }
        s
    }

    pub fn show_ready(&self) -> bool {
        self.elapsed_ms >= READY_AT_MS
    }

    pub fn finished(&self) -> bool {
        self.elapsed_ms >= DONE_AT_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_reveal_on_schedule() {
        let mut boot = BootSequence::new();
        assert_eq!(boot.visible_lines(), 1); // first line at offset 0
        boot.advance(200);
        assert_eq!(boot.visible_lines(), 2);
        boot.advance(1200); // 1400 total: all nine lines
        assert_eq!(boot.visible_lines(), BOOT_LINES.len());
    }

    #[test]
    fn bar_waits_for_the_last_line() {
        let mut boot = BootSequence::new();
        boot.advance(1499);
        assert!(!boot.bar_started());
        assert_eq!(boot.progress(), 0);
        boot.advance(1);
        assert!(boot.bar_started());
    }

    #[test]
    fn bar_fills_over_its_duration() {
        let mut boot = BootSequence::new();
        boot.advance(BAR_START_MS + BAR_DURATION_MS / 2);
        let mid = boot.progress();
        assert!((45..=55).contains(&mid), "midpoint was {mid}");
        boot.advance(BAR_DURATION_MS);
        assert_eq!(boot.progress(), 100);
        assert_eq!(boot.bar(), "█".repeat(BAR_WIDTH));
    }

    #[test]
    fn ready_then_finished() {
        let mut boot = BootSequence::new();
        boot.advance(READY_AT_MS);
        assert!(boot.show_ready());
        assert!(!boot.finished());
        boot.advance(DONE_AT_MS - READY_AT_MS);
        assert!(boot.finished());
    }

    #[test]
    fn skip_completes_immediately() {
        let mut boot = BootSequence::new();
        boot.skip();
        assert!(boot.finished());
        assert_eq!(boot.progress(), 100);
    }
}
