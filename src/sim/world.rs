/// World: the complete state of the running app.
///
/// Each screen owns one backdrop effect for its lifetime; effect state
/// is private to the effect struct and mutated only inside `step`.
/// Pointer and resize events land here from the input layer and the
/// renderer, which run on the same thread as the tick.

use std::sync::mpsc::Receiver;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::AppConfig;
use crate::contact::{ContactForm, Field, FormStatus};
use crate::content::profile::SUBTITLES;
use crate::content::Accent;
use crate::domain::invaders::Formation;
use crate::domain::particle::ParticleField;
use crate::domain::sprite::{FrameLoop, FRAME_SEQUENCE};
use crate::domain::terrain::TerrainField;
use crate::sim::boot::BootSequence;
use crate::sim::konami::KonamiTracker;
use crate::sim::typewriter::Typewriter;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Boot,
    Hero,
    About,
    Projects,
    Skills,
    Contact,
}

impl Phase {
    /// Section order used by Tab / number-key navigation.
    pub const SECTIONS: [Phase; 5] =
        [Phase::Hero, Phase::About, Phase::Projects, Phase::Skills, Phase::Contact];

    pub fn section_index(self) -> Option<usize> {
        Self::SECTIONS.iter().position(|p| *p == self)
    }
}

/// Hero menu entries: label, destination, accent.
pub const MENU_ITEMS: [(&str, Phase, Accent); 3] = [
    ("NEW GAME", Phase::Projects, Accent::Heal),
    ("CONTINUE", Phase::About, Accent::Mp),
    ("OPTIONS", Phase::Contact, Accent::Gold),
];

/// Focus ring on the contact screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactFocus {
    Name,
    Email,
    Message,
    Send,
}

impl ContactFocus {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Send,
            Self::Send => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Send,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::Send => Self::Message,
        }
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Self::Name => Some(Field::Name),
            Self::Email => Some(Field::Email),
            Self::Message => Some(Field::Message),
            Self::Send => None,
        }
    }
}

pub struct World {
    pub phase: Phase,
    /// Global animation tick, drives blink cadences.
    pub tick: u64,

    /// Pointer position in cell coordinates, if the terminal reported one.
    pub pointer: Option<(f32, f32)>,

    // ── Backdrop effects ──
    pub terrain: TerrainField,
    pub particles: ParticleField,
    pub formation: Formation,
    pub cat: FrameLoop,

    // ── Shell animations ──
    pub boot: BootSequence,
    pub typewriter: Typewriter,
    pub konami: KonamiTracker,

    // ── Screen state ──
    pub menu_cursor: usize,
    pub quest_cursor: usize,

    // ── Contact form ──
    pub form: ContactForm,
    pub focus: ContactFocus,
    /// Pending submission outcome from the worker thread.
    pub outcome_rx: Option<Receiver<FormStatus>>,

    // ── Toast ──
    pub message: String,
    pub message_timer: u32,
}

impl World {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_seed(config, entropy_seed())
    }

    pub fn with_seed(config: &AppConfig, seed: u64) -> Self {
        let frozen = config.reduced_motion;
        World {
            phase: if frozen { Phase::Hero } else { Phase::Boot },
            tick: 0,
            pointer: None,
            terrain: TerrainField::new(frozen),
            particles: ParticleField::new(config.effects.particle_count, frozen, seed),
            formation: Formation::new(
                config.effects.formation_cols,
                config.effects.formation_rows,
                frozen,
                seed ^ 0x9E37_79B9,
            ),
            cat: FrameLoop::new(config.timing.cat_frame_ms, FRAME_SEQUENCE.len(), frozen),
            boot: BootSequence::new(),
            typewriter: Typewriter::new(SUBTITLES, frozen),
            konami: KonamiTracker::new(),
            menu_cursor: 0,
            quest_cursor: 0,
            form: ContactForm::default(),
            focus: ContactFocus::Name,
            outcome_rx: None,
            message: String::new(),
            message_timer: 0,
        }
    }

    /// Canvas resize: every effect re-learns its bounds; the particle
    /// pool regenerates only when the dimensions actually changed.
    pub fn on_resize(&mut self, cols: usize, rows: usize) {
        self.particles.resize(cols as f32, rows as f32);
        self.formation.resize(cols as f32, rows as f32);
    }

    pub fn set_message(&mut self, msg: &str, duration: u32) {
        self.message = msg.to_string();
        self.message_timer = duration;
    }

    /// True while the contact screen has keyboard focus in a text field.
    pub fn typing(&self) -> bool {
        self.phase == Phase::Contact && self.focus.field().is_some()
    }
}

fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0xC0FF_EE00)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig::load()
    }

    #[test]
    fn boots_into_the_boot_screen() {
        let world = World::with_seed(&test_config(), 1);
        assert_eq!(world.phase, Phase::Boot);
    }

    #[test]
    fn reduced_motion_skips_the_boot_screen() {
        let mut cfg = test_config();
        cfg.reduced_motion = true;
        let world = World::with_seed(&cfg, 1);
        assert_eq!(world.phase, Phase::Hero);
    }

    #[test]
    fn focus_ring_cycles_both_ways() {
        let mut f = ContactFocus::Name;
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, ContactFocus::Name);
        assert_eq!(ContactFocus::Name.prev(), ContactFocus::Send);
    }

    #[test]
    fn typing_only_in_contact_text_fields() {
        let cfg = test_config();
        let mut world = World::with_seed(&cfg, 1);
        assert!(!world.typing());
        world.phase = Phase::Contact;
        assert!(world.typing());
        world.focus = ContactFocus::Send;
        assert!(!world.typing());
    }

    #[test]
    fn resize_reaches_the_particle_pool() {
        let cfg = test_config();
        let mut world = World::with_seed(&cfg, 1);
        world.on_resize(80, 24);
        assert_eq!(world.particles.dimensions(), (80.0, 24.0));
        assert_eq!(world.particles.particles().len(), cfg.effects.particle_count);
    }
}
