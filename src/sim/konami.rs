/// Konami code tracker. Fed key presses from anywhere outside text
/// entry; a completed sequence triggers the easter-egg toast.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KonamiKey {
    Up,
    Down,
    Left,
    Right,
    B,
    A,
}

const SEQUENCE: [KonamiKey; 10] = [
    KonamiKey::Up,
    KonamiKey::Up,
    KonamiKey::Down,
    KonamiKey::Down,
    KonamiKey::Left,
    KonamiKey::Right,
    KonamiKey::Left,
    KonamiKey::Right,
    KonamiKey::B,
    KonamiKey::A,
];

pub struct KonamiTracker {
    index: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        KonamiTracker { index: 0 }
    }

    /// Any key outside the tracked set breaks an in-progress sequence.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Feed one key. Returns true when the full sequence completes.
    pub fn push(&mut self, key: KonamiKey) -> bool {
        if key == SEQUENCE[self.index] {
            self.index += 1;
            if self.index == SEQUENCE.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use KonamiKey::*;

    #[test]
    fn full_sequence_activates() {
        let mut k = KonamiTracker::new();
        let keys = [Up, Up, Down, Down, Left, Right, Left, Right, B];
        for key in keys {
            assert!(!k.push(key));
        }
        assert!(k.push(A));
    }

    #[test]
    fn wrong_key_resets_progress() {
        let mut k = KonamiTracker::new();
        k.push(Up);
        k.push(Up);
        assert!(!k.push(A));
        // Starting over still works.
        for key in [Up, Up, Down, Down, Left, Right, Left, Right, B] {
            k.push(key);
        }
        assert!(k.push(A));
    }

    #[test]
    fn tracker_rearms_after_activation() {
        let mut k = KonamiTracker::new();
        for _ in 0..2 {
            for key in [Up, Up, Down, Down, Left, Right, Left, Right, B] {
                k.push(key);
            }
            assert!(k.push(A));
        }
    }
}
