/// Particle field: a fixed pool of drifting motes with pointer repulsion
/// and proximity links.
///
/// The pool lives for the process lifetime; individual particles are
/// never destroyed. A resize regenerates the whole pool at new random
/// positions rather than interpolating old state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Amber monitor palette: (r, g, b, base alpha).
pub const PALETTE: [(u8, u8, u8, f32); 5] = [
    (204, 153, 51, 0.5),   // primary amber
    (178, 120, 50, 0.4),   // copper
    (218, 175, 85, 0.45),  // light gold
    (180, 140, 70, 0.35),  // warm gold
    (165, 115, 55, 0.4),   // deep amber
];

/// Pointer repulsion radius, in columns.
pub const MOUSE_RADIUS: f32 = 16.0;
/// Repulsion impulse scale, applied directly to velocity.
const REPEL_FORCE: f32 = 0.03;
/// Per-tick velocity damping.
const FRICTION: f32 = 0.99;

/// Link distance threshold, in columns.
pub const LINK_DIST: f32 = 9.0;

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub opacity: f32,
    /// Index into [`PALETTE`].
    pub color: usize,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    count: usize,
    width: f32,
    height: f32,
    frozen: bool,
    rng: Pcg32,
}

impl ParticleField {
    pub fn new(count: usize, frozen: bool, seed: u64) -> Self {
        ParticleField {
            particles: Vec::new(),
            count,
            width: 0.0,
            height: 0.0,
            frozen,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[allow(dead_code)]
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Resize the field. A repeated call with identical dimensions is a
    /// no-op; an actual change regenerates the pool from scratch.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width == self.width && height == self.height && self.particles.len() == self.count {
            return;
        }
        self.width = width;
        self.height = height;
        self.regenerate();
    }

    fn regenerate(&mut self) {
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..self.count)
            .map(|_| Particle {
                x: rng.random_range(0.0..=w.max(f32::EPSILON)),
                y: rng.random_range(0.0..=h.max(f32::EPSILON)),
                vx: (rng.random::<f32>() - 0.5) * 0.5,
                vy: (rng.random::<f32>() - 0.5) * 0.5,
                size: rng.random::<f32>() * 3.0 + 1.0,
                opacity: rng.random::<f32>() * 0.5 + 0.2,
                color: rng.random_range(0..PALETTE.len()),
            })
            .collect();
    }

    /// Advance every particle one tick: repel from the pointer, integrate
    /// velocity, damp, reflect off the edges, clamp into bounds.
    pub fn step(&mut self, pointer: Option<(f32, f32)>) {
        if self.frozen {
            return;
        }
        let (w, h) = (self.width, self.height);
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        for p in &mut self.particles {
            if let Some((mx, my)) = pointer {
                let dx = mx - p.x;
                let dy = my - p.y;
                let distance = (dx * dx + dy * dy).sqrt();
                // A particle exactly under the pointer has no direction
                // to flee in; skip the impulse rather than divide by zero.
                if distance < MOUSE_RADIUS && distance > f32::EPSILON {
                    let force = (MOUSE_RADIUS - distance) / MOUSE_RADIUS;
                    p.vx -= (dx / distance) * force * REPEL_FORCE;
                    p.vy -= (dy / distance) * force * REPEL_FORCE;
                }
            }

            p.x += p.vx;
            p.y += p.vy;

            p.vx *= FRICTION;
            p.vy *= FRICTION;

            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }

            p.x = p.x.clamp(0.0, w);
            p.y = p.y.clamp(0.0, h);
        }
    }
}

/// Opacity of the connective line between two particles `dist` apart,
/// or `None` beyond the threshold. Decays linearly with distance.
pub fn link_opacity(dist: f32) -> Option<f32> {
    if dist < LINK_DIST {
        Some(0.15 * (1.0 - dist / LINK_DIST))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(count: usize, w: f32, h: f32) -> ParticleField {
        let mut f = ParticleField::new(count, false, 42);
        f.resize(w, h);
        f
    }

    #[test]
    fn pool_has_fixed_count() {
        let f = field(30, 80.0, 24.0);
        assert_eq!(f.particles().len(), 30);
    }

    #[test]
    fn particles_never_escape_bounds() {
        let mut f = field(40, 80.0, 24.0);
        for tick in 0..500 {
            // Sweep the pointer around to keep forces active.
            let mx = (tick % 80) as f32;
            let my = (tick % 24) as f32;
            f.step(Some((mx, my)));
            for p in f.particles() {
                assert!((0.0..=80.0).contains(&p.x), "x escaped: {}", p.x);
                assert!((0.0..=24.0).contains(&p.y), "y escaped: {}", p.y);
            }
        }
    }

    #[test]
    fn pointer_on_top_of_particle_does_not_produce_nan() {
        let mut f = field(10, 40.0, 20.0);
        let (px, py) = {
            let p = &f.particles()[0];
            (p.x, p.y)
        };
        f.step(Some((px, py)));
        for p in f.particles() {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(p.vx.is_finite() && p.vy.is_finite());
        }
    }

    #[test]
    fn repeated_resize_with_same_dimensions_is_a_noop() {
        let mut f = field(20, 60.0, 30.0);
        let before: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.x, p.y)).collect();
        f.resize(60.0, 30.0);
        let after: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
        assert_eq!(f.particles().len(), 20);
        assert_eq!(f.dimensions(), (60.0, 30.0));
    }

    #[test]
    fn real_resize_regenerates_the_pool() {
        let mut f = field(20, 60.0, 30.0);
        let before: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.x, p.y)).collect();
        f.resize(61.0, 30.0);
        let after: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_ne!(before, after);
        assert_eq!(f.particles().len(), 20);
    }

    #[test]
    fn frozen_field_holds_still() {
        let mut f = ParticleField::new(15, true, 9);
        f.resize(40.0, 20.0);
        let before: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.x, p.y)).collect();
        f.step(Some((20.0, 10.0)));
        let after: Vec<(f32, f32)> = f.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn link_opacity_decays_to_zero_at_threshold() {
        assert!(link_opacity(0.0).unwrap() > link_opacity(LINK_DIST / 2.0).unwrap());
        assert!(link_opacity(LINK_DIST).is_none());
        let near = link_opacity(LINK_DIST - 0.01).unwrap();
        assert!(near > 0.0 && near < 0.001);
    }

    #[test]
    fn same_seed_same_pool() {
        let a = field(10, 50.0, 20.0);
        let b = field(10, 50.0, 20.0);
        let pa: Vec<(f32, f32)> = a.particles().iter().map(|p| (p.x, p.y)).collect();
        let pb: Vec<(f32, f32)> = b.particles().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(pa, pb);
    }
}
