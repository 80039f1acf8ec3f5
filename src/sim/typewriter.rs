/// Cycling typewriter for the hero subtitle: type, pause, erase, next.

const START_DELAY_MS: u64 = 800;
const TYPE_MS: u64 = 60;
const ERASE_MS: u64 = 30;
const PAUSE_MS: u64 = 2000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum TwPhase {
    Waiting,
    Typing,
    Paused,
    Erasing,
}

pub struct Typewriter {
    texts: &'static [&'static str],
    index: usize,
    /// Number of characters currently shown.
    shown: usize,
    phase: TwPhase,
    /// Time left in Waiting/Paused, or accumulated toward the next
    /// character in Typing/Erasing.
    acc_ms: u64,
    frozen: bool,
}

impl Typewriter {
    pub fn new(texts: &'static [&'static str], frozen: bool) -> Self {
        let mut tw = Typewriter {
            texts,
            index: 0,
            shown: 0,
            phase: TwPhase::Waiting,
            acc_ms: 0,
            frozen,
        };
        if frozen {
            // Static render: full first subtitle, held forever.
            tw.shown = tw.current_text().chars().count();
            tw.phase = TwPhase::Paused;
        }
        tw
    }

    fn current_text(&self) -> &'static str {
        self.texts[self.index % self.texts.len()]
    }

    /// Visible prefix of the current subtitle.
    pub fn displayed(&self) -> &'static str {
        let text = self.current_text();
        match text.char_indices().nth(self.shown) {
            Some((byte, _)) => &text[..byte],
            None => text,
        }
    }

    pub fn advance(&mut self, dt_ms: u64) {
        if self.frozen || self.texts.is_empty() {
            return;
        }
        let mut dt = dt_ms;
        // A large dt can cross several phase boundaries; loop until the
        // time is consumed.
        while dt > 0 {
            match self.phase {
                TwPhase::Waiting => {
                    let wait = START_DELAY_MS.saturating_sub(self.acc_ms);
                    if dt >= wait {
                        dt -= wait;
                        self.acc_ms = 0;
                        self.phase = TwPhase::Typing;
                    } else {
                        self.acc_ms += dt;
                        return;
                    }
                }
                TwPhase::Typing => {
                    let len = self.current_text().chars().count();
                    self.acc_ms += dt;
                    dt = 0;
                    while self.acc_ms >= TYPE_MS && self.shown < len {
                        self.acc_ms -= TYPE_MS;
                        self.shown += 1;
                    }
                    if self.shown >= len {
                        dt = self.acc_ms;
                        self.acc_ms = 0;
                        self.phase = TwPhase::Paused;
                    }
                }
                TwPhase::Paused => {
                    let wait = PAUSE_MS.saturating_sub(self.acc_ms);
                    if dt >= wait {
                        dt -= wait;
                        self.acc_ms = 0;
                        self.phase = TwPhase::Erasing;
                    } else {
                        self.acc_ms += dt;
                        return;
                    }
                }
                TwPhase::Erasing => {
                    self.acc_ms += dt;
                    dt = 0;
                    while self.acc_ms >= ERASE_MS && self.shown > 0 {
                        self.acc_ms -= ERASE_MS;
                        self.shown -= 1;
                    }
                    if self.shown == 0 {
                        dt = self.acc_ms;
                        self.acc_ms = 0;
                        self.index = (self.index + 1) % self.texts.len();
                        self.phase = TwPhase::Typing;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTS: &[&str] = &["ABC", "DE"];

    #[test]
    fn waits_before_typing() {
        let mut tw = Typewriter::new(TEXTS, false);
        tw.advance(START_DELAY_MS - 1);
        assert_eq!(tw.displayed(), "");
        tw.advance(1 + TYPE_MS);
        assert_eq!(tw.displayed(), "A");
    }

    #[test]
    fn types_one_character_per_interval() {
        let mut tw = Typewriter::new(TEXTS, false);
        tw.advance(START_DELAY_MS);
        tw.advance(TYPE_MS);
        assert_eq!(tw.displayed(), "A");
        tw.advance(TYPE_MS * 2);
        assert_eq!(tw.displayed(), "ABC");
    }

    #[test]
    fn pauses_then_erases_then_cycles() {
        let mut tw = Typewriter::new(TEXTS, false);
        tw.advance(START_DELAY_MS + TYPE_MS * 3);
        assert_eq!(tw.displayed(), "ABC");
        // Mid-pause nothing moves.
        tw.advance(PAUSE_MS - 1);
        assert_eq!(tw.displayed(), "ABC");
        // Finish the pause and erase everything.
        tw.advance(1 + ERASE_MS * 3);
        assert_eq!(tw.displayed(), "");
        // Next text starts typing.
        tw.advance(TYPE_MS);
        assert_eq!(tw.displayed(), "D");
    }

    #[test]
    fn wraps_back_to_the_first_text() {
        let mut tw = Typewriter::new(TEXTS, false);
        let cycle = |tw: &mut Typewriter, len: u64| {
            tw.advance(TYPE_MS * len + PAUSE_MS + ERASE_MS * len);
        };
        tw.advance(START_DELAY_MS);
        cycle(&mut tw, 3); // ABC typed + erased
        cycle(&mut tw, 2); // DE typed + erased
        tw.advance(TYPE_MS * 3);
        assert_eq!(tw.displayed(), "ABC");
    }

    #[test]
    fn frozen_shows_the_full_first_subtitle() {
        let mut tw = Typewriter::new(TEXTS, true);
        assert_eq!(tw.displayed(), "ABC");
        tw.advance(100_000);
        assert_eq!(tw.displayed(), "ABC");
    }
}
