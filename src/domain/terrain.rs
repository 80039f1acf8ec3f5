/// Terrain field: layered sine noise rendered as an ASCII density ramp.
///
/// Every visible cell is recomputed each tick from (column, row, time)
/// alone; nothing is stored per cell. The pointer carves an expanding
/// ring of ripples into the field, and a small fraction of cells swap
/// their density glyph for a code glyph or flash bright amber.

use std::f32::consts::PI;

use rand::Rng;
use rand_pcg::Pcg32;

/// Ordered density ramp, sparse → dense. The single leading blank keeps
/// most of the field empty so glyphs read as ridgelines.
pub const DENSITY: &[char] = &[' ', '.', '·', ':', '-', '~', '+', '=', '*', '#', '%', '@'];

/// Secondary alphabet scattered sparingly over mid-to-high density cells.
pub const GLYPHS: &[char] = &['{', '}', '/', '(', ')', '<', '>', '=', '&', '|', ';', '~'];

/// Pointer ripple radius, in terminal columns.
pub const RIPPLE_RADIUS: f32 = 20.0;

/// Probability that a mid-to-high density cell shows a code glyph.
const GLYPH_CHANCE: f64 = 0.02;
/// Probability of the bright flash color override.
const FLASH_CHANCE: f64 = 0.001;

/// Layered sine noise producing organic terrain, normalized to [0, 1].
///
/// The five terms sum to at most ±3.15, so the raw value is normalized
/// from that analytic bound, clamped, and passed through a smoothstep
/// contrast curve that carves sharp ridgelines from flat valleys.
pub fn terrain(c: f32, r: f32, t: f32) -> f32 {
    let mut v = 0.0;
    v += (c * 0.03 + t * 0.35).sin() * (r * 0.035 + t * 0.25).cos();
    v += ((c + r) * 0.02 + t * 0.2).sin() * 0.8;
    v += ((c * c + r * r).sqrt() * 0.025 - t * 0.4).sin() * 0.6;
    v += (c * 0.06 + t * 0.65).sin() * (r * 0.07 - t * 0.3).sin() * 0.4;
    v += (c * 0.045 - r * 0.04 + t * 0.3).cos() * 0.35;

    let raw = (v + 3.15) / 6.3;
    smoothstep(raw.clamp(0.0, 1.0))
}

#[inline]
fn smoothstep(s: f32) -> f32 {
    s * s * (3.0 - 2.0 * s)
}

/// Blend the pointer ripple into a density value.
///
/// `dist` is the aspect-corrected distance from the cell to the pointer
/// in column units. Outside the ripple radius the value passes through.
pub fn apply_ripple(n: f32, dist: f32, t: f32) -> f32 {
    if dist < RIPPLE_RADIUS {
        let nd = dist / RIPPLE_RADIUS;
        (n + (nd * PI * 5.0 - t * 4.0).sin() * (1.0 - nd) * 0.5).clamp(0.0, 1.0)
    } else {
        n
    }
}

/// Map a density value to an index into the ramp.
#[inline]
pub fn density_index(n: f32) -> usize {
    ((n * (DENSITY.len() - 1) as f32) as usize).min(DENSITY.len() - 1)
}

/// A glyph chosen for one cell. `flash` overrides the derived color with
/// a rare bright amber flicker.
pub struct CellGlyph {
    pub ch: char,
    pub flash: bool,
}

/// Choose the glyph for a cell of the given density, or `None` for the
/// sparsest (blank) cells, which are skipped entirely.
pub fn pick_glyph(n: f32, rng: &mut Pcg32) -> Option<CellGlyph> {
    let ci = density_index(n);
    let mut ch = DENSITY[ci];
    if ch == ' ' {
        return None;
    }
    if ci > 2 && rng.random_bool(GLYPH_CHANCE) {
        ch = GLYPHS[rng.random_range(0..GLYPHS.len())];
    }
    Some(CellGlyph {
        ch,
        flash: rng.random_bool(FLASH_CHANCE),
    })
}

/// Color ramp: sparse → dim brown, dense → hot amber gold.
/// Returns (hue, saturation, luminance, alpha).
pub fn color_for(n: f32) -> (f32, f32, f32, f32) {
    (30.0 + n * 12.0, 40.0 + n * 50.0, 32.0 + n * 32.0, 0.15 + n * 0.45)
}

/// Flash override color (hue, saturation, luminance); its alpha is the
/// derived alpha raised by 0.35 and capped at 0.9.
pub const FLASH_HSL: (f32, f32, f32) = (38.0, 90.0, 65.0);

pub fn flash_alpha(alpha: f32) -> f32 {
    (alpha + 0.35).min(0.9)
}

/// Time accumulator for the field. Frozen instances (reduced motion)
/// hold their phase forever and render one static frame.
pub struct TerrainField {
    t: f32,
    frozen: bool,
}

impl TerrainField {
    pub fn new(frozen: bool) -> Self {
        TerrainField { t: 0.0, frozen }
    }

    pub fn time(&self) -> f32 {
        self.t
    }

    pub fn advance(&mut self) {
        if self.frozen {
            return;
        }
        self.t += 0.014;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn terrain_is_bounded_everywhere() {
        // Sweep coordinates and times well past anything the renderer
        // produces, including negatives and large magnitudes.
        for &c in &[-1000.0_f32, -3.5, 0.0, 1.0, 17.0, 240.0, 9999.0] {
            for &r in &[-500.0_f32, 0.0, 2.0, 63.0, 4096.0] {
                for &t in &[0.0_f32, 0.014, 10.0, 777.7, 1e6] {
                    let n = terrain(c, r, t);
                    assert!((0.0..=1.0).contains(&n), "terrain({c},{r},{t}) = {n}");
                }
            }
        }
    }

    #[test]
    fn ripple_is_bounded_and_local() {
        for &d in &[0.0_f32, 1.0, 10.0, 19.9] {
            for &t in &[0.0_f32, 3.3, 80.0] {
                let n = apply_ripple(0.5, d, t);
                assert!((0.0..=1.0).contains(&n));
            }
        }
        // Outside the radius the value passes through untouched.
        assert_eq!(apply_ripple(0.42, RIPPLE_RADIUS, 1.0), 0.42);
        assert_eq!(apply_ripple(0.42, 500.0, 1.0), 0.42);
    }

    #[test]
    fn density_index_spans_the_ramp() {
        assert_eq!(density_index(0.0), 0);
        assert_eq!(density_index(1.0), DENSITY.len() - 1);
        // A midpoint value never indexes out of bounds.
        for i in 0..=100 {
            let n = i as f32 / 100.0;
            assert!(density_index(n) < DENSITY.len());
        }
    }

    #[test]
    fn blank_cells_are_skipped() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(pick_glyph(0.0, &mut rng).is_none());
        assert!(pick_glyph(1.0, &mut rng).is_some());
    }

    #[test]
    fn glyph_choice_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        for i in 0..200 {
            let n = (i % 10) as f32 / 10.0;
            let ga = pick_glyph(n, &mut a).map(|g| (g.ch, g.flash));
            let gb = pick_glyph(n, &mut b).map(|g| (g.ch, g.flash));
            assert_eq!(ga, gb);
        }
    }

    #[test]
    fn color_ramp_endpoints() {
        let (h0, s0, l0, a0) = color_for(0.0);
        let (h1, s1, l1, a1) = color_for(1.0);
        assert_eq!((h0, s0, l0, a0), (30.0, 40.0, 32.0, 0.15));
        assert_eq!((h1, s1, l1, a1), (42.0, 90.0, 64.0, 0.6));
    }

    #[test]
    fn frozen_field_never_advances() {
        let mut field = TerrainField::new(true);
        for _ in 0..50 {
            field.advance();
        }
        assert_eq!(field.time(), 0.0);

        let mut live = TerrainField::new(false);
        live.advance();
        assert!(live.time() > 0.0);
    }
}
