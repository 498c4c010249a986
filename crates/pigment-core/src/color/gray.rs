//! Grayscale color values

use std::fmt;

/// A single-channel gray intensity plus opacity in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gray {
    channels: [u8; 1],
    alpha: u8,
}

impl Gray {
    /// Channel and alpha must already be validated
    pub(crate) const fn new(gray: u8, alpha: u8) -> Self {
        Self {
            channels: [gray],
            alpha,
        }
    }

    pub fn gray(&self) -> u8 {
        self.channels[0]
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn channels(&self) -> &[u8; 1] {
        &self.channels
    }
}

/// Formats as the equivalent RGB hex triplet
impl fmt::Display for Gray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = self.gray();
        write!(f, "#{:02x}{:02x}{:02x}", g, g, g)
    }
}
