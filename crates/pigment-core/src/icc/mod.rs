//! ICC Profile Structure
//!
//! Profiles are carried around as opaque byte blobs (see
//! [`ColorProfile`](crate::ColorProfile)); this module is what looks inside
//! them when asked to.
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may be shared between tags)
//!
//! Besides reading, [`ProfileBuilder`] assembles the small v2 profiles used as
//! palette defaults.

pub mod header;

mod builder;
mod error;
mod lut;
mod parser;
mod types;

pub use builder::ProfileBuilder;
pub use error::IccError;
pub use header::{
    ColorSpace, IccHeader, MIN_PROFILE_SIZE, ProfileClass, ProfileVersion, RenderingIntent,
    has_signature,
};
pub use lut::{Lut16, decode_lab_v2, encode_lab_v2};
pub use parser::{IccProfile, TagEntry};
pub use types::{DateTimeNumber, S15Fixed16, TagSignature, TypeSignature, U8Fixed8, XyzNumber};
