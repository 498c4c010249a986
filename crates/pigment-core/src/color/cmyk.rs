//! CMYK color values

use std::fmt;

/// A CMYK color: four ink coverages in percent plus opacity in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cmyk {
    channels: [u8; 4],
    alpha: u8,
}

impl Cmyk {
    /// Channels and alpha must already be validated
    pub(crate) const fn new(cyan: u8, magenta: u8, yellow: u8, keyline: u8, alpha: u8) -> Self {
        Self {
            channels: [cyan, magenta, yellow, keyline],
            alpha,
        }
    }

    pub fn cyan(&self) -> u8 {
        self.channels[0]
    }

    pub fn magenta(&self) -> u8 {
        self.channels[1]
    }

    pub fn yellow(&self) -> u8 {
        self.channels[2]
    }

    /// Black ink
    pub fn keyline(&self) -> u8 {
        self.channels[3]
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn channels(&self) -> &[u8; 4] {
        &self.channels
    }

    /// Equalize C, M and Y to their rounded arithmetic mean; K is untouched
    pub fn grayscale(&self) -> Self {
        let [c, m, y, k] = self.channels;
        let mean = ((c as f64 + m as f64 + y as f64) / 3.0).round() as u8;
        Self::new(mean, mean, mean, k, self.alpha)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c, m, y, k] = self.channels;
        write!(f, "cmyk({}%, {}%, {}%, {}%)", c, m, y, k)
    }
}
