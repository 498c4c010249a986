//! Accuracy measurement using perceptual color difference metrics
//!
//! Colors are taken to CIELAB (D65) through the `palette` crate and compared
//! with CIEDE2000. A deltaE2000 of 1.0 is roughly the smallest difference a
//! trained observer notices.

use palette::color_difference::Ciede2000;
use palette::{IntoColor, Lab, Srgb};
use pigment_core::{Color, PaletteKind, convert};

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }

    /// Check if differences are acceptable (deltaE < 3.5)
    pub fn is_acceptable(&self) -> bool {
        self.max < 3.5
    }

    fn from_samples(mut samples: Vec<f64>) -> Self {
        samples.sort_by(|a, b| a.total_cmp(b));
        let count = samples.len();
        let mean = if count == 0 {
            0.0
        } else {
            samples.iter().sum::<f64>() / count as f64
        };
        let max = samples.last().copied().unwrap_or(0.0);
        let p95 = samples
            .get((count as f64 * 0.95) as usize)
            .copied()
            .unwrap_or(max);
        Self {
            mean,
            max,
            p95,
            count,
        }
    }
}

fn lab([r, g, b]: [u8; 3]) -> Lab {
    Srgb::new(r, g, b).into_format::<f32>().into_color()
}

/// CIEDE2000 between two sRGB colors
pub fn delta_e_2000(a: [u8; 3], b: [u8; 3]) -> f64 {
    lab(a).difference(lab(b)) as f64
}

/// Device RGB view of any color
pub fn rgb_of(color: &Color) -> [u8; 3] {
    let rgb = convert::convert(color, PaletteKind::Rgb);
    let mut out = [0u8; 3];
    out.copy_from_slice(rgb.channels());
    out
}

/// deltaE between each pair of consecutive colors
pub fn step_stats<'a>(colors: impl IntoIterator<Item = &'a Color>) -> DeltaEStats {
    let rgb: Vec<[u8; 3]> = colors.into_iter().map(rgb_of).collect();
    let samples = rgb
        .windows(2)
        .map(|pair| delta_e_2000(pair[0], pair[1]))
        .collect();
    DeltaEStats::from_samples(samples)
}
