/// Entry point and app loop.

mod config;
mod contact;
mod content;
mod domain;
mod sim;
mod ui;

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use config::AppConfig;
use contact::{submit, HttpTransport};
use sim::konami::KonamiKey;
use sim::step;
use sim::world::{ContactFocus, Phase, World, MENU_ITEMS};
use ui::input::InputState;
use ui::renderer::Renderer;

const FRAME_SLEEP: Duration = Duration::from_millis(5);

fn main() {
    // Logging goes to stderr; redirect it when running inside the
    // alternate screen (RUST_LOG=debug savepoint 2>savepoint.log).
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let config = AppConfig::load();
    let mut world = World::new(&config);

    let mut renderer = Renderer::new();

    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = app_loop(&mut world, &mut renderer, &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("App error: {e}");
    }

    println!();
    println!("Thanks for visiting {}!", content::profile::SITE_TITLE);
}

fn app_loop(
    world: &mut World,
    renderer: &mut Renderer,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = InputState::new();
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(config.timing.tick_rate_ms);

    loop {
        kb.drain_events();

        if kb.ctrl_c_pressed() {
            break;
        }
        if let Some((col, row)) = kb.pointer() {
            world.pointer = Some((col as f32, row as f32));
        }
        if handle_keys(world, &kb, config) {
            break;
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_rate {
            step::step(world, elapsed);
            last_tick = Instant::now();
        }

        renderer.render(world)?;
        thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

/// Handle this frame's key presses. Returns true to quit.
fn handle_keys(world: &mut World, kb: &InputState, config: &AppConfig) -> bool {
    // ── Contact screen: the form owns most keys ──
    if world.phase == Phase::Contact {
        if kb.was_pressed(KeyCode::Esc) {
            world.phase = Phase::Hero;
            return false;
        }
        if kb.was_pressed(KeyCode::Tab) {
            world.focus = world.focus.next();
            return false;
        }
        if kb.was_pressed(KeyCode::BackTab) {
            world.focus = world.focus.prev();
            return false;
        }
        if kb.was_pressed(KeyCode::Enter) {
            if world.focus == ContactFocus::Send {
                begin_submit(world, config);
            } else {
                world.focus = world.focus.next();
            }
            return false;
        }
        if let Some(field) = world.focus.field() {
            if kb.was_pressed(KeyCode::Backspace) {
                world.form.backspace(field);
            }
            for ch in kb.typed_chars() {
                if !ch.is_control() {
                    world.form.push_char(field, ch);
                }
            }
            return false;
        }
        // Focus on the submit button: fall through to global navigation.
    }

    // ── Global navigation ──
    if kb.any_pressed(&[KeyCode::Char('q'), KeyCode::Char('Q')]) {
        return true;
    }
    if kb.was_pressed(KeyCode::Esc) {
        if world.phase == Phase::Hero {
            return true;
        }
        world.phase = Phase::Hero;
        return false;
    }
    for (i, phase) in Phase::SECTIONS.iter().enumerate() {
        let digit = char::from_digit(i as u32 + 1, 10).unwrap_or('1');
        if kb.was_pressed(KeyCode::Char(digit)) {
            world.phase = *phase;
            return false;
        }
    }
    if kb.was_pressed(KeyCode::Tab) {
        let idx = world.phase.section_index().unwrap_or(0);
        world.phase = Phase::SECTIONS[(idx + 1) % Phase::SECTIONS.len()];
        return false;
    }
    if kb.was_pressed(KeyCode::BackTab) {
        let idx = world.phase.section_index().unwrap_or(0);
        let len = Phase::SECTIONS.len();
        world.phase = Phase::SECTIONS[(idx + len - 1) % len];
        return false;
    }

    feed_konami(world, kb);

    match world.phase {
        Phase::Boot => {
            if kb.any_pressed(&[KeyCode::Enter, KeyCode::Char(' ')]) {
                world.boot.skip();
            }
        }

        Phase::Hero => {
            let len = MENU_ITEMS.len();
            if kb.was_pressed(KeyCode::Up) {
                world.menu_cursor = (world.menu_cursor + len - 1) % len;
            } else if kb.was_pressed(KeyCode::Down) {
                world.menu_cursor = (world.menu_cursor + 1) % len;
            } else if kb.any_pressed(&[KeyCode::Enter, KeyCode::Char(' ')]) {
                world.phase = MENU_ITEMS[world.menu_cursor].1;
            }
        }

        Phase::Projects => {
            let total = content::projects::PROJECTS.len();
            if kb.was_pressed(KeyCode::Up) && world.quest_cursor > 0 {
                world.quest_cursor -= 1;
            } else if kb.was_pressed(KeyCode::Down) && world.quest_cursor + 1 < total {
                world.quest_cursor += 1;
            }
        }

        _ => {}
    }

    false
}

/// Feed key presses to the konami tracker. Any unrelated key breaks an
/// in-progress sequence, matching the classic behavior.
fn feed_konami(world: &mut World, kb: &InputState) {
    for key in kb.presses() {
        let mapped = match key.code {
            KeyCode::Up => Some(KonamiKey::Up),
            KeyCode::Down => Some(KonamiKey::Down),
            KeyCode::Left => Some(KonamiKey::Left),
            KeyCode::Right => Some(KonamiKey::Right),
            KeyCode::Char('b') | KeyCode::Char('B') => Some(KonamiKey::B),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(KonamiKey::A),
            _ => None,
        };
        match mapped {
            Some(k) => {
                if world.konami.push(k) {
                    world.set_message("↑↑↓↓←→←→BA  CHEAT ACTIVATED: +30 LIVES", 60);
                }
            }
            None => world.konami.reset(),
        }
    }
}

/// Kick off the form POST on a worker thread. The outcome comes back
/// through the world's channel; the app loop never blocks on it.
fn begin_submit(world: &mut World, config: &AppConfig) {
    if let Some(data) = world.form.begin_submit() {
        let (tx, rx) = mpsc::channel();
        world.outcome_rx = Some(rx);
        let endpoint = config.contact.endpoint.clone();
        thread::spawn(move || {
            let outcome = submit(&data, &endpoint, &HttpTransport);
            let _ = tx.send(outcome);
        });
    }
}
