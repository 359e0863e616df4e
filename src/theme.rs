// ---------------------------------------------------------------------------
// Dark dashboard theme shared by the static and live renderers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const FIGURE_BG: Rgb = Rgb(0x1e, 0x1e, 0x1e);
pub const AXES_BG: Rgb = Rgb(0x2d, 0x2d, 0x2d);
pub const AXES_EDGE: Rgb = Rgb(0x66, 0x66, 0x66);
pub const GRID: Rgb = Rgb(0x44, 0x44, 0x44);
pub const TEXT: Rgb = Rgb(0xff, 0xff, 0xff);
pub const BUTTON: Rgb = Rgb(0x2d, 0x2d, 0x2d);
pub const BUTTON_ACTIVE: Rgb = Rgb(0x4d, 0x4d, 0x4d);

pub const START: Rgb = Rgb(0x2e, 0xcc, 0x40);
pub const END: Rgb = Rgb(0xff, 0x41, 0x36);

/// Series color cycle.
pub const PALETTE: [Rgb; 6] = [
    Rgb(0x4c, 0xc9, 0xf0),
    Rgb(0xf7, 0x25, 0x85),
    Rgb(0xff, 0xd6, 0x0a),
    Rgb(0x72, 0x09, 0xb7),
    Rgb(0x00, 0xf5, 0xd4),
    Rgb(0xff, 0x9e, 0x00),
];

pub fn palette(i: usize) -> Rgb {
    PALETTE[i % PALETTE.len()]
}

// Plasma colormap anchors at 0, 1/8, ..., 1.
const PLASMA: [Rgb; 9] = [
    Rgb(13, 8, 135),
    Rgb(75, 3, 161),
    Rgb(125, 3, 168),
    Rgb(168, 34, 150),
    Rgb(203, 70, 121),
    Rgb(229, 107, 93),
    Rgb(248, 148, 65),
    Rgb(253, 195, 40),
    Rgb(240, 249, 33),
];

/// Plasma colormap, `x` clamped to [0, 1]. NaN maps to the low end.
pub fn plasma(x: f64) -> Rgb {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    let scaled = x * (PLASMA.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(PLASMA.len() - 2);
    let f = scaled - i as f64;
    let (a, b) = (PLASMA[i], PLASMA[i + 1]);
    let lerp = |p: u8, q: u8| (p as f64 + (q as f64 - p as f64) * f).round() as u8;
    Rgb(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plasma_hits_endpoints() {
        assert_eq!(plasma(0.0), PLASMA[0]);
        assert_eq!(plasma(1.0), PLASMA[8]);
        assert_eq!(plasma(-3.0), PLASMA[0]);
        assert_eq!(plasma(7.0), PLASMA[8]);
        assert_eq!(plasma(f64::NAN), PLASMA[0]);
    }

    #[test]
    fn plasma_interpolates_between_anchors() {
        let mid = plasma(1.0 / 16.0);
        assert_eq!(mid, Rgb(44, 6, 148));
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(palette(0), palette(6));
        assert_ne!(palette(0), palette(1));
    }
}
