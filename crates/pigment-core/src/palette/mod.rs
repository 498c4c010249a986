//! Palettes: color factories with an identity cache
//!
//! A [`Palette`] is the only way to obtain a [`Color`]. Every color it hands
//! out is interned: asking twice for the same channels and alpha yields the
//! same `Arc`, so `Arc::ptr_eq` holds between the two results.
//!
//! The cache is append-only and guarded by a single mutex around
//! lookup-or-insert; a palette can be shared freely between threads.

mod kind;
mod options;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

pub use kind::PaletteKind;
pub use options::{PaletteOptions, ProfileSource};

use crate::color::{Color, ColorComponent, OPAQUE, parse_color};
use crate::convert;
use crate::profile::ColorProfile;
use crate::{Error, Result};

/// Factory and identity cache for colors of one [`PaletteKind`]
#[derive(Debug)]
pub struct Palette {
    kind: PaletteKind,
    profile: RwLock<ColorProfile>,
    cache: Mutex<HashMap<Color, Arc<Color>>>,
}

impl Palette {
    /// Palette with the kind's built-in profile
    pub fn new(kind: PaletteKind) -> Self {
        Self::with_profile(kind, kind.default_profile())
    }

    pub fn rgb() -> Self {
        Self::new(PaletteKind::Rgb)
    }

    pub fn cmyk() -> Self {
        Self::new(PaletteKind::Cmyk)
    }

    pub fn gray() -> Self {
        Self::new(PaletteKind::Grayscale)
    }

    /// Palette starting from a caller-supplied profile
    pub fn with_profile(kind: PaletteKind, profile: ColorProfile) -> Self {
        Self {
            kind,
            profile: RwLock::new(profile),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Palette configured from [`PaletteOptions`]
    pub fn with_options(kind: PaletteKind, options: &PaletteOptions) -> Result<Self> {
        let profile = options.profile.resolve(kind)?;
        tracing::debug!(
            palette = %kind,
            profile = profile.name(),
            cache_capacity = options.cache_capacity,
            "palette created from options"
        );
        Ok(Self {
            kind,
            profile: RwLock::new(profile),
            cache: Mutex::new(HashMap::with_capacity(options.cache_capacity)),
        })
    }

    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// Short name of the color space ("rgb", "cmyk" or "gray")
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn pixel_definition(&self) -> &'static [ColorComponent] {
        self.kind.pixel_definition()
    }

    pub fn channel_count(&self) -> usize {
        self.kind.channel_count()
    }

    /// Number of distinct colors interned so far
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Currently attached profile
    pub fn profile(&self) -> ColorProfile {
        self.profile.read().clone()
    }

    /// Replace the attached profile; cached colors are unaffected
    pub fn set_profile(&self, profile: ColorProfile) {
        tracing::debug!(palette = %self.kind, profile = profile.name(), "profile replaced");
        *self.profile.write() = profile;
    }

    /// Opaque color from channel values
    pub fn color(&self, channels: &[i32]) -> Result<Arc<Color>> {
        self.color_with_alpha(channels, OPAQUE as i32)
    }

    /// Color from channel values and alpha (0-100).
    ///
    /// Fails with [`Error::InvalidArgument`] on a wrong channel count or any
    /// value out of range. Equal input returns the same shared instance.
    pub fn color_with_alpha(&self, channels: &[i32], alpha: i32) -> Result<Arc<Color>> {
        let color = Color::from_parts(self.kind, channels, alpha)?;
        Ok(self.intern(color))
    }

    /// Opaque color from its textual notation
    pub fn parse(&self, input: &str) -> Result<Arc<Color>> {
        let channels = parse_color(self.kind, input)?;
        self.color(&channels)
    }

    /// Opaque RGB color from a packed `0xRRGGBB` value
    pub fn color_from_u32(&self, packed: u32) -> Result<Arc<Color>> {
        if self.kind != PaletteKind::Rgb {
            return Err(Error::InvalidArgument(format!(
                "packed 0xRRGGBB values need an rgb palette, this one is {}",
                self.kind
            )));
        }
        if packed > 0x00FF_FFFF {
            return Err(Error::InvalidArgument(format!(
                "packed color {:#x} exceeds 0xffffff",
                packed
            )));
        }
        let [_, r, g, b] = packed.to_be_bytes();
        self.color(&[r as i32, g as i32, b as i32])
    }

    /// Linear interpolation between two colors of this palette's kind.
    ///
    /// Each channel and alpha become `round(s + (e - s) * amount)`, clamped to
    /// range. `amount` must lie in [0, 1].
    pub fn blend(&self, start: &Color, end: &Color, amount: f64) -> Result<Arc<Color>> {
        self.check_kind(start)?;
        self.check_kind(end)?;
        if !(0.0..=1.0).contains(&amount) {
            return Err(Error::InvalidArgument(format!(
                "blend amount {} outside [0, 1]",
                amount
            )));
        }
        Ok(self.blend_unchecked(start, end, amount))
    }

    /// Blend for callers that already validated kinds and amount
    pub(crate) fn blend_unchecked(&self, start: &Color, end: &Color, amount: f64) -> Arc<Color> {
        let max = self.kind.channel_max() as f64;
        let lerp = |s: u8, e: u8, hi: f64| {
            let s = s as f64;
            (s + (e as f64 - s) * amount).round().clamp(0.0, hi) as u8
        };

        let (s, e) = (start.channel_array(), end.channel_array());
        let mut channels = [0u8; 4];
        for (i, slot) in channels.iter_mut().enumerate() {
            *slot = lerp(s[i], e[i], max);
        }
        let alpha = lerp(start.alpha(), end.alpha(), OPAQUE as f64);

        self.intern(Color::from_validated(self.kind, channels, alpha))
    }

    /// Achromatic projection, interned in this palette
    pub fn grayscale(&self, color: &Color) -> Result<Arc<Color>> {
        self.check_kind(color)?;
        Ok(self.intern(color.grayscale()))
    }

    /// Re-express a color of any kind in this palette's color space
    pub fn convert(&self, color: &Color) -> Arc<Color> {
        self.intern(convert::convert(color, self.kind))
    }

    /// Same channels, alpha shifted by `delta`; the result must stay in 0-100
    pub fn dissolve(&self, color: &Color, delta: i32) -> Result<Arc<Color>> {
        self.check_kind(color)?;
        let channels: Vec<i32> = color.channels().iter().map(|&c| c as i32).collect();
        self.color_with_alpha(&channels, color.alpha() as i32 + delta)
    }

    /// Brighten by `shade`: adds to RGB/gray channels, removes black ink from CMYK
    pub fn lighten(&self, color: &Color, shade: u8) -> Result<Arc<Color>> {
        self.shift(color, shade as i32)
    }

    /// Inverse of [`Palette::lighten`]
    pub fn darken(&self, color: &Color, shade: u8) -> Result<Arc<Color>> {
        self.shift(color, -(shade as i32))
    }

    fn shift(&self, color: &Color, amount: i32) -> Result<Arc<Color>> {
        self.check_kind(color)?;
        let max = self.kind.channel_max() as i32;
        let mut channels = color.channel_array();
        match color {
            Color::Cmyk(_) => {
                channels[3] = (channels[3] as i32 - amount).clamp(0, max) as u8;
            }
            Color::Rgb(_) | Color::Gray(_) => {
                for c in channels.iter_mut().take(self.channel_count()) {
                    *c = (*c as i32 + amount).clamp(0, max) as u8;
                }
            }
        }
        Ok(self.intern(Color::from_validated(self.kind, channels, color.alpha())))
    }

    fn check_kind(&self, color: &Color) -> Result<()> {
        if color.kind() != self.kind {
            return Err(Error::IncompatiblePalette {
                expected: self.kind,
                actual: color.kind(),
            });
        }
        Ok(())
    }

    pub(crate) fn intern(&self, color: Color) -> Arc<Color> {
        let mut cache = self.cache.lock();
        if let Some(shared) = cache.get(&color) {
            tracing::trace!(palette = %self.kind, %color, "cache hit");
            return Arc::clone(shared);
        }
        let shared = Arc::new(color);
        cache.insert(color, Arc::clone(&shared));
        tracing::debug!(palette = %self.kind, %color, alpha = color.alpha(), size = cache.len(), "color cached");
        shared
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::rgb()
    }
}
