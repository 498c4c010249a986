//! Color values
//!
//! [`Color`] is a closed sum over the three supported models. Values are
//! immutable and only minted by a [`Palette`](crate::Palette), which validates
//! channel counts and ranges and hands out shared, cached instances.

mod cmyk;
mod gray;
mod parse;
mod rgb;

use std::fmt;

pub use cmyk::Cmyk;
pub use gray::Gray;
pub(crate) use parse::parse_color;
pub use rgb::{LUMA_WEIGHTS, Rgb};

pub(crate) use rgb::luma;

use crate::palette::PaletteKind;
use crate::{Error, Result};

/// Fully opaque, in percent
pub const OPAQUE: u8 = 100;

/// Named channel of a color model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorComponent {
    Red,
    Green,
    Blue,
    Cyan,
    Magenta,
    Yellow,
    Keyline,
    Gray,
}

impl fmt::Display for ColorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Keyline => "keyline",
            Self::Gray => "gray",
        };
        f.write_str(name)
    }
}

/// An immutable color in one of the supported models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(Rgb),
    Cmyk(Cmyk),
    Gray(Gray),
}

impl Color {
    /// Validate raw channel values and alpha against `kind`
    pub(crate) fn from_parts(kind: PaletteKind, channels: &[i32], alpha: i32) -> Result<Self> {
        if channels.len() != kind.channel_count() {
            return Err(Error::InvalidArgument(format!(
                "{} colors take {} channels, got {}",
                kind,
                kind.channel_count(),
                channels.len()
            )));
        }

        let max = kind.channel_max();
        let mut bytes = [0u8; 4];
        for ((slot, &value), component) in bytes
            .iter_mut()
            .zip(channels)
            .zip(kind.pixel_definition())
        {
            if !(0..=max as i32).contains(&value) {
                return Err(Error::InvalidArgument(format!(
                    "{} value {} outside 0..={}",
                    component, value, max
                )));
            }
            *slot = value as u8;
        }

        if !(0..=OPAQUE as i32).contains(&alpha) {
            return Err(Error::InvalidArgument(format!(
                "alpha {} outside 0..={}",
                alpha, OPAQUE
            )));
        }

        Ok(Self::from_validated(kind, bytes, alpha as u8))
    }

    /// Build from in-range values; unused trailing channels are ignored
    pub(crate) fn from_validated(kind: PaletteKind, channels: [u8; 4], alpha: u8) -> Self {
        let [a, b, c, d] = channels;
        match kind {
            PaletteKind::Rgb => Self::Rgb(Rgb::new(a, b, c, alpha)),
            PaletteKind::Cmyk => Self::Cmyk(Cmyk::new(a, b, c, d, alpha)),
            PaletteKind::Grayscale => Self::Gray(Gray::new(a, alpha)),
        }
    }

    /// The palette variant this color belongs to
    pub fn kind(&self) -> PaletteKind {
        match self {
            Self::Rgb(_) => PaletteKind::Rgb,
            Self::Cmyk(_) => PaletteKind::Cmyk,
            Self::Gray(_) => PaletteKind::Grayscale,
        }
    }

    /// Channel values in pixel-definition order
    pub fn channels(&self) -> &[u8] {
        match self {
            Self::Rgb(c) => c.channels(),
            Self::Cmyk(c) => c.channels(),
            Self::Gray(c) => c.channels(),
        }
    }

    /// Channels copied into a fixed array, zero padded
    pub(crate) fn channel_array(&self) -> [u8; 4] {
        let mut out = [0u8; 4];
        out[..self.channels().len()].copy_from_slice(self.channels());
        out
    }

    /// Opacity in percent, 0 (transparent) to 100 (opaque)
    pub fn alpha(&self) -> u8 {
        match self {
            Self::Rgb(c) => c.alpha(),
            Self::Cmyk(c) => c.alpha(),
            Self::Gray(c) => c.alpha(),
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha() == OPAQUE
    }

    /// Value of a named channel
    pub fn value(&self, component: ColorComponent) -> Result<u8> {
        self.kind()
            .pixel_definition()
            .iter()
            .position(|c| *c == component)
            .map(|i| self.channels()[i])
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "{} colors have no {} channel",
                    self.kind(),
                    component
                ))
            })
    }

    /// Achromatic version of this color in the same model.
    ///
    /// RGB becomes R = G = B = luma; CMYK equalizes C, M, Y and keeps K;
    /// gray is returned unchanged.
    pub fn grayscale(&self) -> Self {
        match self {
            Self::Rgb(c) => Self::Rgb(c.grayscale()),
            Self::Cmyk(c) => Self::Cmyk(c.grayscale()),
            Self::Gray(_) => *self,
        }
    }

    pub fn as_rgb(&self) -> Option<&Rgb> {
        match self {
            Self::Rgb(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_cmyk(&self) -> Option<&Cmyk> {
        match self {
            Self::Cmyk(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_gray(&self) -> Option<&Gray> {
        match self {
            Self::Gray(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => fmt::Display::fmt(c, f),
            Self::Cmyk(c) => fmt::Display::fmt(c, f),
            Self::Gray(c) => fmt::Display::fmt(c, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_validates_count() {
        let err = Color::from_parts(PaletteKind::Rgb, &[1, 2], 100).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let err = Color::from_parts(PaletteKind::Grayscale, &[1, 2, 3], 100).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_from_parts_validates_ranges() {
        assert!(Color::from_parts(PaletteKind::Rgb, &[256, 0, 0], 100).is_err());
        assert!(Color::from_parts(PaletteKind::Rgb, &[0, -1, 0], 100).is_err());
        assert!(Color::from_parts(PaletteKind::Cmyk, &[101, 0, 0, 0], 100).is_err());
        assert!(Color::from_parts(PaletteKind::Cmyk, &[0, 0, 0, 0], 101).is_err());
        assert!(Color::from_parts(PaletteKind::Grayscale, &[0], -1).is_err());
        assert!(Color::from_parts(PaletteKind::Cmyk, &[100, 100, 100, 100], 0).is_ok());
    }

    #[test]
    fn test_value_by_component() {
        let color = Color::from_parts(PaletteKind::Rgb, &[12, 123, 245], 14).unwrap();
        assert_eq!(color.value(ColorComponent::Red).unwrap(), 12);
        assert_eq!(color.value(ColorComponent::Green).unwrap(), 123);
        assert_eq!(color.value(ColorComponent::Blue).unwrap(), 245);
        assert!(color.value(ColorComponent::Cyan).is_err());
        assert_eq!(color.alpha(), 14);
        assert!(!color.is_opaque());
    }

    #[test]
    fn test_variant_accessors() {
        let cmyk = Color::from_parts(PaletteKind::Cmyk, &[50, 25, 75, 10], 100).unwrap();
        assert_eq!(cmyk.kind(), PaletteKind::Cmyk);
        assert_eq!(cmyk.channels(), &[50, 25, 75, 10]);
        assert_eq!(cmyk.as_cmyk().map(|c| c.keyline()), Some(10));
        assert!(cmyk.as_rgb().is_none());
        assert!(cmyk.is_opaque());

        let gray = Color::from_parts(PaletteKind::Grayscale, &[12], 100).unwrap();
        assert_eq!(gray.value(ColorComponent::Gray).unwrap(), 12);
        assert_eq!(gray.as_gray().map(|g| g.gray()), Some(12));
        assert!(gray.as_cmyk().is_none());
        assert!(cmyk.as_gray().is_none());
        assert_eq!(gray.grayscale(), gray);
        assert_eq!(gray.to_string(), "#0c0c0c");
    }

    #[test]
    fn test_rgb_grayscale_stays_rgb() {
        let red = Color::from_parts(PaletteKind::Rgb, &[255, 0, 0], 100).unwrap();
        let gray = red.grayscale();
        assert_eq!(gray.kind(), PaletteKind::Rgb);
        assert_eq!(gray.channels(), &[76, 76, 76]);
    }
}
