//! # pigment-tests
//!
//! Conformance testing for pigment.
//!
//! This crate provides:
//! - Perceptual measurement of gradients and conversions (CIEDE2000)
//! - Seeded random color generation for property tests
//!
//! ## Reference Implementations
//!
//! - **lcms2**: parses and transforms with the built-in profiles
//! - **moxcms**: pure Rust parser, second opinion on profile structure
//! - **palette**: CIELAB conversion and color difference
//!
//! ## Test Categories
//!
//! 1. **Color Accuracy**: string formats, caching, grayscale projection
//! 2. **Conversions**: RGB/CMYK/gray reference points and round-trip bounds
//! 3. **Gradients**: monotonicity and perceptual step size
//! 4. **Profiles**: built-in ICC profiles read back by other CMS libraries
//! 5. **Concurrency**: shared palettes under parallel load

pub mod accuracy;
pub mod patterns;

pub use accuracy::{DeltaEStats, delta_e_2000, rgb_of, step_stats};
pub use patterns::{ColorPattern, random_colors};
