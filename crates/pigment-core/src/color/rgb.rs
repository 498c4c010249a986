//! RGB color values

use std::fmt;

/// ITU-R BT.601 luma weights used for grayscale projection
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// An RGB color: three 8-bit channels plus opacity in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    channels: [u8; 3],
    alpha: u8,
}

impl Rgb {
    /// Channels and alpha must already be validated
    pub(crate) const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            channels: [red, green, blue],
            alpha,
        }
    }

    pub fn red(&self) -> u8 {
        self.channels[0]
    }

    pub fn green(&self) -> u8 {
        self.channels[1]
    }

    pub fn blue(&self) -> u8 {
        self.channels[2]
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn channels(&self) -> &[u8; 3] {
        &self.channels
    }

    /// `round(0.299 R + 0.587 G + 0.114 B)`, clamped to [0, 255]
    pub fn luma(&self) -> u8 {
        luma(self.channels)
    }

    /// The same-luma neutral gray, still expressed as RGB
    pub fn grayscale(&self) -> Self {
        let gray = self.luma();
        Self::new(gray, gray, gray, self.alpha)
    }
}

pub(crate) fn luma([r, g, b]: [u8; 3]) -> u8 {
    let weighted =
        LUMA_WEIGHTS[0] * r as f64 + LUMA_WEIGHTS[1] * g as f64 + LUMA_WEIGHTS[2] * b as f64;
    weighted.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.channels;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_format() {
        assert_eq!(Rgb::new(255, 128, 64, 100).to_string(), "#ff8040");
        assert_eq!(Rgb::new(0, 0, 0, 100).to_string(), "#000000");
        assert_eq!(Rgb::new(12, 123, 245, 14).to_string(), "#0c7bf5");
    }

    #[test]
    fn test_luma_primaries() {
        assert_eq!(Rgb::new(255, 0, 0, 100).luma(), 76);
        assert_eq!(Rgb::new(0, 255, 0, 100).luma(), 150);
        assert_eq!(Rgb::new(0, 0, 255, 100).luma(), 29);
        assert_eq!(Rgb::new(255, 255, 255, 100).luma(), 255);
        assert_eq!(Rgb::new(128, 128, 128, 100).luma(), 128);
    }

    #[test]
    fn test_grayscale_keeps_alpha() {
        let gray = Rgb::new(12, 123, 245, 14).grayscale();
        assert_eq!(gray.to_string(), "#686868");
        assert_eq!(gray.alpha(), 14);
        assert_eq!(gray.red(), gray.green());
        assert_eq!(gray.green(), gray.blue());
    }
}
