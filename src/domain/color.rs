/// Color math shared by the canvas effects.
///
/// Effects derive colors as HSL + alpha. Terminal cells have no alpha
/// channel, so translucency is premultiplied against the backdrop color
/// before the cell is written.

/// Convert HSL (h in degrees, s and l in percent) to RGB bytes.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let h = h.rem_euclid(360.0);
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

/// Blend `color` over `base` at the given opacity (0.0 = base, 1.0 = color).
pub fn blend(base: (u8, u8, u8), color: (u8, u8, u8), alpha: f32) -> (u8, u8, u8) {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |b: u8, c: u8| (b as f32 + (c as f32 - b as f32) * a).round() as u8;
    (mix(base.0, color.0), mix(base.1, color.1), mix(base.2, color.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
    }

    #[test]
    fn zero_saturation_is_gray() {
        let (r, g, b) = hsl_to_rgb(200.0, 0.0, 50.0);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }

    #[test]
    fn hue_wraps_past_360() {
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), hsl_to_rgb(0.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(-120.0, 100.0, 50.0), hsl_to_rgb(240.0, 100.0, 50.0));
    }

    #[test]
    fn blend_endpoints() {
        let base = (10, 20, 30);
        let color = (200, 100, 50);
        assert_eq!(blend(base, color, 0.0), base);
        assert_eq!(blend(base, color, 1.0), color);
    }

    #[test]
    fn blend_midpoint_interpolates() {
        let (r, _, _) = blend((0, 0, 0), (200, 0, 0), 0.5);
        assert_eq!(r, 100);
    }
}
