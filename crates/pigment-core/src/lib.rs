//! # pigment - color palettes and color-space conversion
//!
//! Colors in RGB, CMYK and grayscale, minted and interned by palettes that
//! carry an ICC profile for their color space.
//!
//! ## Quick Start
//!
//! ```
//! use pigment_core::Palette;
//!
//! let rgb = Palette::rgb();
//! let orange = rgb.color(&[255, 128, 64])?;
//! assert_eq!(orange.to_string(), "#ff8040");
//!
//! // Same input, same instance
//! let again = rgb.color(&[255, 128, 64])?;
//! assert!(std::sync::Arc::ptr_eq(&orange, &again));
//!
//! let white = rgb.color(&[255, 255, 255])?;
//! let tint = rgb.blend(&orange, &white, 0.5)?;
//! assert_eq!(tint.channels(), &[255, 192, 160]);
//!
//! assert!(rgb.profile().name().contains("sRGB"));
//! # Ok::<(), pigment_core::Error>(())
//! ```
//!
//! ## Profiles
//!
//! Each palette kind starts with a built-in ICC v2 profile generated in
//! process. Other profiles come from files or byte buffers through
//! [`ColorProfile`] or [`PaletteOptions`]. The [`icc`] module decodes profile
//! headers and a handful of tags; real color transforms are left to moxcms
//! (see [`ColorProfile::to_moxcms`]).

pub mod color;
mod colorimetry;
pub mod convert;
pub mod error;
pub mod gradient;
pub mod icc;
pub mod palette;
pub mod profile;

pub use color::{Cmyk, Color, ColorComponent, Gray, OPAQUE, Rgb};
pub use error::{Error, Result};
pub use gradient::{Direction, Fill, Gradient, LinearFill, Point, RadialFill, Steps};
pub use palette::{Palette, PaletteKind, PaletteOptions, ProfileSource};
pub use profile::{ColorProfile, GRAY_PROFILE_NAME, ISO_COATED_PROFILE_NAME, SRGB_PROFILE_NAME};

/// Version of pigment
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
