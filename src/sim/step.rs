/// Per-tick advancement: the active screen's backdrop, shell
/// animations, the toast timer, and the form outcome channel.
///
/// Only the phase that owns an effect ticks it; effects are causally
/// independent and never read each other's state.

use std::time::Duration;

use crate::contact::FormStatus;
use crate::sim::world::{Phase, World};

pub fn step(world: &mut World, dt: Duration) {
    world.tick = world.tick.wrapping_add(1);
    let dt_ms = dt.as_millis() as u64;

    match world.phase {
        Phase::Boot => {
            world.boot.advance(dt_ms);
            if world.boot.finished() {
                world.phase = Phase::Hero;
            }
        }
        Phase::Hero => {
            world.typewriter.advance(dt_ms);
            world.formation.step();
        }
        Phase::About => {
            world.terrain.advance();
            world.cat.advance(dt);
        }
        Phase::Skills => {
            world.terrain.advance();
        }
        Phase::Projects | Phase::Contact => {
            world.particles.step(world.pointer);
        }
    }

    // Toast countdown (all phases).
    if world.message_timer > 0 {
        world.message_timer -= 1;
        if world.message_timer == 0 {
            world.message.clear();
        }
    }

    // Fold in a finished form submission, if any.
    if let Some(rx) = &world.outcome_rx {
        if let Ok(status) = rx.try_recv() {
            world.form.apply_outcome(status);
            match status {
                FormStatus::Success => world.set_message("GAME SAVED SUCCESSFULLY!", 60),
                FormStatus::Error => world.set_message("SAVE FAILED! TRY AGAIN.", 60),
                FormStatus::Idle => {}
            }
            world.outcome_rx = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::sync::mpsc;

    fn world() -> World {
        let mut w = World::with_seed(&AppConfig::load(), 7);
        w.on_resize(80, 24);
        w
    }

    fn tick(w: &mut World, n: usize) {
        for _ in 0..n {
            step(w, Duration::from_millis(66));
        }
    }

    #[test]
    fn boot_hands_off_to_hero() {
        let mut w = world();
        assert_eq!(w.phase, Phase::Boot);
        tick(&mut w, 60); // ~4s of ticks
        assert_eq!(w.phase, Phase::Hero);
    }

    #[test]
    fn only_the_active_screen_effect_advances() {
        let mut w = world();
        w.phase = Phase::About;
        let t0 = w.terrain.time();
        let particles_before: Vec<(f32, f32)> =
            w.particles.particles().iter().map(|p| (p.x, p.y)).collect();
        tick(&mut w, 10);
        assert!(w.terrain.time() > t0);
        let particles_after: Vec<(f32, f32)> =
            w.particles.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(particles_before, particles_after);
    }

    #[test]
    fn particles_move_on_the_projects_screen() {
        let mut w = world();
        w.phase = Phase::Projects;
        let before: Vec<(f32, f32)> =
            w.particles.particles().iter().map(|p| (p.x, p.y)).collect();
        tick(&mut w, 10);
        let after: Vec<(f32, f32)> =
            w.particles.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn toast_expires() {
        let mut w = world();
        w.set_message("hello", 3);
        tick(&mut w, 2);
        assert_eq!(w.message, "hello");
        tick(&mut w, 1);
        assert!(w.message.is_empty());
    }

    #[test]
    fn submit_outcome_arrives_over_the_channel() {
        let mut w = world();
        w.phase = Phase::Contact;
        w.form.data.name = "Hero".into();
        w.form.data.email = "hero@guild.com".into();
        w.form.data.message = "This is a sufficiently long quest description.".into();
        assert!(w.form.begin_submit().is_some());

        let (tx, rx) = mpsc::channel();
        w.outcome_rx = Some(rx);
        tx.send(FormStatus::Success).unwrap();

        tick(&mut w, 1);
        assert_eq!(w.form.status, FormStatus::Success);
        assert!(w.form.data.name.is_empty());
        assert!(w.outcome_rx.is_none());
        assert_eq!(w.message, "GAME SAVED SUCCESSFULLY!");
    }

    #[test]
    fn error_outcome_preserves_fields() {
        let mut w = world();
        w.form.data.name = "Hero".into();
        w.form.data.email = "hero@guild.com".into();
        w.form.data.message = "This is a sufficiently long quest description.".into();
        assert!(w.form.begin_submit().is_some());

        let (tx, rx) = mpsc::channel();
        w.outcome_rx = Some(rx);
        tx.send(FormStatus::Error).unwrap();

        tick(&mut w, 1);
        assert_eq!(w.form.status, FormStatus::Error);
        assert_eq!(w.form.data.name, "Hero");
    }
}
