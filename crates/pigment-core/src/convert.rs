//! Device color conversions
//!
//! Naive, profile-free formulas between RGB, CMYK and gray. They are lossy
//! (RGB -> CMYK -> RGB is not an identity in general) but exact at the
//! primaries, black, white and neutral grays.

use crate::color::{Color, luma};
use crate::palette::PaletteKind;

/// RGB (0-255) to CMYK (percent).
///
/// `K = 1 - max(R, G, B)`; for pure black C = M = Y = 0, otherwise
/// `C = (1 - R - K) / (1 - K)` and likewise for M and Y.
pub fn rgb_to_cmyk([r, g, b]: [u8; 3]) -> [u8; 4] {
    rgb_to_cmyk_unit([r, g, b].map(|v| v as f64 / 255.0)).map(percent)
}

/// CMYK (percent) to RGB (0-255): `R = 255 (1 - C)(1 - K)` and so on
pub fn cmyk_to_rgb(cmyk: [u8; 4]) -> [u8; 3] {
    cmyk_to_rgb_unit(cmyk.map(|v| v as f64 / 100.0))
        .map(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8)
}

/// [`rgb_to_cmyk`] on unit floats
fn rgb_to_cmyk_unit([r, g, b]: [f64; 3]) -> [f64; 4] {
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    let ink = |v: f64| (1.0 - v - k) / (1.0 - k);
    [ink(r), ink(g), ink(b), k]
}

/// [`cmyk_to_rgb`] on unit floats
pub(crate) fn cmyk_to_rgb_unit([c, m, y, k]: [f64; 4]) -> [f64; 3] {
    [c, m, y].map(|ink| (1.0 - ink) * (1.0 - k))
}

/// Gray intensity (0-255) to black ink coverage (percent)
pub fn gray_to_keyline(gray: u8) -> u8 {
    percent((255 - gray) as f64 / 255.0)
}

/// BT.601 luma of an RGB triple
pub fn rgb_to_gray(rgb: [u8; 3]) -> u8 {
    luma(rgb)
}

fn percent(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Re-express `color` in the model of `target`; alpha is carried over.
///
/// Same-model input is returned unchanged.
pub fn convert(color: &Color, target: PaletteKind) -> Color {
    let alpha = color.alpha();
    let channels = match (color, target) {
        (Color::Rgb(_), PaletteKind::Rgb)
        | (Color::Cmyk(_), PaletteKind::Cmyk)
        | (Color::Gray(_), PaletteKind::Grayscale) => return *color,

        (Color::Rgb(c), PaletteKind::Cmyk) => rgb_to_cmyk(*c.channels()),
        (Color::Rgb(c), PaletteKind::Grayscale) => [rgb_to_gray(*c.channels()), 0, 0, 0],

        (Color::Cmyk(c), PaletteKind::Rgb) => {
            let [r, g, b] = cmyk_to_rgb(*c.channels());
            [r, g, b, 0]
        }
        (Color::Cmyk(c), PaletteKind::Grayscale) => {
            [rgb_to_gray(cmyk_to_rgb(*c.channels())), 0, 0, 0]
        }

        (Color::Gray(c), PaletteKind::Rgb) => [c.gray(), c.gray(), c.gray(), 0],
        (Color::Gray(c), PaletteKind::Cmyk) => [0, 0, 0, gray_to_keyline(c.gray())],
    };
    Color::from_validated(target, channels, alpha)
}
