//! Palette variants

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ColorComponent;
use crate::profile::ColorProfile;

/// The closed set of color spaces a palette can mint colors in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// 3 channels, 0-255
    Rgb,
    /// 4 channels, percent
    Cmyk,
    /// 1 channel, 0-255
    Grayscale,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 3] = [PaletteKind::Rgb, PaletteKind::Cmyk, PaletteKind::Grayscale];

    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            PaletteKind::Rgb => "rgb",
            PaletteKind::Cmyk => "cmyk",
            PaletteKind::Grayscale => "gray",
        }
    }

    /// Get number of channels for this kind
    pub fn channel_count(&self) -> usize {
        self.pixel_definition().len()
    }

    /// Largest valid channel value
    pub fn channel_max(&self) -> u8 {
        match self {
            PaletteKind::Rgb | PaletteKind::Grayscale => 255,
            PaletteKind::Cmyk => 100,
        }
    }

    /// Channel names in storage order
    pub fn pixel_definition(&self) -> &'static [ColorComponent] {
        use ColorComponent::*;
        match self {
            PaletteKind::Rgb => &[Red, Green, Blue],
            PaletteKind::Cmyk => &[Cyan, Magenta, Yellow, Keyline],
            PaletteKind::Grayscale => &[Gray],
        }
    }

    /// Profile a palette of this kind starts with
    pub fn default_profile(&self) -> ColorProfile {
        match self {
            PaletteKind::Rgb => ColorProfile::srgb(),
            PaletteKind::Cmyk => ColorProfile::iso_coated(),
            PaletteKind::Grayscale => ColorProfile::gray(),
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
