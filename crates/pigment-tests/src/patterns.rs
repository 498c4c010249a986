//! Seeded color generation
//!
//! Everything is driven by `ChaCha8Rng` so failures reproduce from the seed.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use pigment_core::PaletteKind;

/// Color sample sets
#[derive(Debug, Clone, Copy)]
pub enum ColorPattern {
    /// Corners of the channel cube
    Corners,
    /// Every channel equal, stepped
    Neutrals(usize),
    /// Random channels with seed
    Random(u64),
}

/// Channel tuples valid for `kind`.
///
/// `count` bounds `Random` and is ignored for `Corners`.
pub fn random_colors(kind: PaletteKind, pattern: ColorPattern, count: usize) -> Vec<Vec<i32>> {
    let max = kind.channel_max() as i32;
    let channels = kind.channel_count();

    match pattern {
        ColorPattern::Corners => (0..1usize << channels)
            .map(|bits| {
                (0..channels)
                    .map(|i| if bits & (1 << i) != 0 { max } else { 0 })
                    .collect()
            })
            .collect(),
        ColorPattern::Neutrals(steps) => {
            let steps = steps.max(1);
            (0..=steps)
                .map(|i| {
                    let v = (i as f64 * max as f64 / steps as f64).round() as i32;
                    vec![v; channels]
                })
                .collect()
        }
        ColorPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..count)
                .map(|_| (0..channels).map(|_| rng.gen_range(0..=max)).collect())
                .collect()
        }
    }
}

/// Random alpha values in 0-100
pub fn random_alphas(seed: u64, count: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..=100)).collect()
}

/// Random blend fractions in [0, 1]
pub fn random_amounts(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0.0..=1.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let corners = random_colors(PaletteKind::Rgb, ColorPattern::Corners, 0);
        assert_eq!(corners.len(), 8);
        assert!(corners.contains(&vec![255, 0, 255]));
        assert_eq!(random_colors(PaletteKind::Cmyk, ColorPattern::Corners, 0).len(), 16);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = random_colors(PaletteKind::Cmyk, ColorPattern::Random(7), 32);
        let b = random_colors(PaletteKind::Cmyk, ColorPattern::Random(7), 32);
        assert_eq!(a, b);
        assert!(a.iter().flatten().all(|v| (0..=100).contains(v)));
    }

    #[test]
    fn test_neutrals() {
        let grays = random_colors(PaletteKind::Grayscale, ColorPattern::Neutrals(4), 0);
        assert_eq!(grays, vec![vec![0], vec![64], vec![128], vec![191], vec![255]]);
    }
}
