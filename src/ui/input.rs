/// Input state tracker.
///
/// Drains all pending terminal events once per frame and exposes them
/// as: key presses (edge + OS auto-repeat), printable characters for
/// the contact form, and the last reported pointer position. Pointer
/// motion arrives via crossterm mouse capture and feeds the proximity
/// effects; it is never required for navigation.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind, poll,
};

pub struct InputState {
    /// Key events (Press/Repeat) collected during the last drain.
    presses: Vec<KeyEvent>,
    /// Pointer position in cell coordinates, latest wins.
    pointer: Option<(u16, u16)>,
}

impl InputState {
    pub fn new() -> Self {
        InputState {
            presses: Vec::with_capacity(8),
            pointer: None,
        }
    }

    /// Drain all pending terminal events. Call once per frame, before
    /// the simulation tick.
    pub fn drain_events(&mut self) {
        self.presses.clear();

        while poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    // Release events carry no action for this app.
                    if key.kind != KeyEventKind::Release {
                        self.presses.push(key);
                    }
                }
                Ok(Event::Mouse(mouse)) => {
                    if matches!(
                        mouse.kind,
                        MouseEventKind::Moved | MouseEventKind::Drag(_)
                    ) {
                        self.pointer = Some((mouse.column, mouse.row));
                    }
                }
                _ => {}
            }
        }
    }

    /// Was this key pressed (or auto-repeated) this frame?
    pub fn was_pressed(&self, code: KeyCode) -> bool {
        self.presses.iter().any(|k| k.code == code)
    }

    /// Convenience: was any of these keys pressed?
    pub fn any_pressed(&self, codes: &[KeyCode]) -> bool {
        codes.iter().any(|c| self.was_pressed(*c))
    }

    /// Printable characters typed this frame, in order, with no
    /// control/alt chording. Feeds the contact form fields.
    pub fn typed_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.presses.iter().filter_map(|k| {
            if k.modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                return None;
            }
            match k.code {
                KeyCode::Char(c) => Some(c),
                _ => None,
            }
        })
    }

    /// Raw presses, for handlers that need modifier detail.
    pub fn presses(&self) -> &[KeyEvent] {
        &self.presses
    }

    pub fn ctrl_c_pressed(&self) -> bool {
        self.presses.iter().any(|k| {
            k.modifiers.contains(KeyModifiers::CONTROL)
                && (k.code == KeyCode::Char('c') || k.code == KeyCode::Char('C'))
        })
    }

    /// Latest pointer position, if the terminal reported one.
    pub fn pointer(&self) -> Option<(u16, u16)> {
        self.pointer
    }
}
