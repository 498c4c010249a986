//! ICC Profile Header
//!
//! The first 128 bytes of every profile. Only the fields this crate reads or
//! writes are kept; the rest (CMM, platform, flags, device, attributes,
//! profile ID) are skipped on parse and written as zero. See ICC.1 7.2.

use super::error::IccError;
use super::types::{DateTimeNumber, XyzNumber};

/// 'acsp'
pub const PROFILE_SIGNATURE: u32 = u32::from_be_bytes(*b"acsp");

/// Header length; nothing shorter can be a profile
pub const MIN_PROFILE_SIZE: usize = 128;

/// Where 'acsp' sits
pub const SIGNATURE_OFFSET: usize = 36;

/// True if bytes 36..40 of `data` read 'acsp'
pub fn has_signature(data: &[u8]) -> bool {
    data.get(SIGNATURE_OFFSET..SIGNATURE_OFFSET + 4) == Some(b"acsp".as_slice())
}

/// Decoded profile header
#[derive(Debug, Clone, PartialEq)]
pub struct IccHeader {
    /// Declared profile length in bytes
    pub size: u32,
    pub version: ProfileVersion,
    pub device_class: ProfileClass,
    /// Color space of the device side
    pub color_space: ColorSpace,
    /// Profile connection space, XYZ or Lab
    pub pcs: ColorSpace,
    pub creation_date: DateTimeNumber,
    pub signature: u32,
    pub rendering_intent: RenderingIntent,
    /// PCS illuminant, D50 in every conforming profile
    pub illuminant: XyzNumber,
    pub creator: u32,
}

fn be_u32(data: &[u8], at: usize) -> u32 {
    u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

impl IccHeader {
    /// v2.1 header with a D50 illuminant; `size` is set by the writer's caller
    pub fn new(device_class: ProfileClass, color_space: ColorSpace, pcs: ColorSpace) -> Self {
        Self {
            size: 0,
            version: ProfileVersion {
                major: 2,
                minor: 1,
                patch: 0,
            },
            device_class,
            color_space,
            pcs,
            creation_date: DateTimeNumber::default(),
            signature: PROFILE_SIGNATURE,
            rendering_intent: RenderingIntent::Perceptual,
            illuminant: XyzNumber::D50,
            creator: 0,
        }
    }

    /// Decode the header at the start of `data`
    pub fn parse(data: &[u8]) -> Result<Self, IccError> {
        if data.len() < MIN_PROFILE_SIZE {
            return Err(IccError::TooSmall {
                expected: MIN_PROFILE_SIZE,
                actual: data.len(),
            });
        }

        let signature = be_u32(data, SIGNATURE_OFFSET);
        if signature != PROFILE_SIGNATURE {
            return Err(IccError::InvalidSignature(signature));
        }

        Ok(Self {
            size: be_u32(data, 0),
            version: ProfileVersion {
                major: data[8],
                minor: data[9] >> 4,
                patch: data[9] & 0x0F,
            },
            device_class: ProfileClass::from_u32(be_u32(data, 12))?,
            color_space: ColorSpace::from_u32(be_u32(data, 16)),
            pcs: ColorSpace::from_u32(be_u32(data, 20)),
            creation_date: DateTimeNumber::from_bytes(&data[24..36]).unwrap_or_default(),
            signature,
            // Upper 16 bits are reserved
            rendering_intent: RenderingIntent::from_u32(be_u32(data, 64) & 0xFFFF)?,
            illuminant: XyzNumber::from_bytes(&data[68..80]).unwrap_or_default(),
            creator: be_u32(data, 80),
        })
    }

    /// Append exactly 128 bytes encoding this header
    pub fn write(&self, out: &mut Vec<u8>) {
        let start = out.len();
        out.resize(start + MIN_PROFILE_SIZE, 0);
        let header = &mut out[start..];

        let mut put = |at: usize, bytes: &[u8]| header[at..at + bytes.len()].copy_from_slice(bytes);
        put(0, &self.size.to_be_bytes());
        put(8, &[
            self.version.major,
            (self.version.minor << 4) | (self.version.patch & 0x0F),
        ]);
        put(12, &self.device_class.to_u32().to_be_bytes());
        put(16, &self.color_space.to_u32().to_be_bytes());
        put(20, &self.pcs.to_u32().to_be_bytes());
        put(24, &self.creation_date.to_bytes());
        put(SIGNATURE_OFFSET, &self.signature.to_be_bytes());
        put(64, &self.rendering_intent.to_u32().to_be_bytes());
        put(68, &self.illuminant.to_bytes());
        put(80, &self.creator.to_be_bytes());
    }

    /// Signature present and declared size within `data_len`
    pub fn validate(&self, data_len: usize) -> Result<(), IccError> {
        if self.signature != PROFILE_SIGNATURE {
            return Err(IccError::InvalidSignature(self.signature));
        }
        if self.size as usize > data_len {
            return Err(IccError::SizeMismatch {
                header_size: self.size,
                actual_size: data_len,
            });
        }
        Ok(())
    }
}

/// Major.minor.patch as stored in bytes 8 and 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl ProfileVersion {
    pub fn is_v2(&self) -> bool {
        self.major == 2
    }

    pub fn is_v4(&self) -> bool {
        self.major == 4
    }
}

/// Device class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileClass {
    Input,
    Display,
    Output,
    DeviceLink,
    ColorSpace,
    Abstract,
    NamedColor,
}

const CLASS_SIGNATURES: [(ProfileClass, &[u8; 4]); 7] = [
    (ProfileClass::Input, b"scnr"),
    (ProfileClass::Display, b"mntr"),
    (ProfileClass::Output, b"prtr"),
    (ProfileClass::DeviceLink, b"link"),
    (ProfileClass::ColorSpace, b"spac"),
    (ProfileClass::Abstract, b"abst"),
    (ProfileClass::NamedColor, b"nmcl"),
];

impl ProfileClass {
    pub fn from_u32(val: u32) -> Result<Self, IccError> {
        CLASS_SIGNATURES
            .iter()
            .find(|(_, sig)| u32::from_be_bytes(**sig) == val)
            .map(|(class, _)| *class)
            .ok_or(IccError::InvalidProfileClass(val))
    }

    pub fn to_u32(&self) -> u32 {
        CLASS_SIGNATURES
            .iter()
            .find(|(class, _)| class == self)
            .map(|(_, sig)| u32::from_be_bytes(**sig))
            .unwrap_or_default()
    }
}

/// Data or connection color space.
///
/// Spaces this crate never produces are carried as their raw signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Xyz,
    Lab,
    Rgb,
    Gray,
    Cmyk,
    Other(u32),
}

const SPACE_SIGNATURES: [(ColorSpace, &[u8; 4]); 5] = [
    (ColorSpace::Xyz, b"XYZ "),
    (ColorSpace::Lab, b"Lab "),
    (ColorSpace::Rgb, b"RGB "),
    (ColorSpace::Gray, b"GRAY"),
    (ColorSpace::Cmyk, b"CMYK"),
];

impl ColorSpace {
    pub fn from_u32(val: u32) -> Self {
        SPACE_SIGNATURES
            .iter()
            .find(|(_, sig)| u32::from_be_bytes(**sig) == val)
            .map(|(space, _)| *space)
            .unwrap_or(Self::Other(val))
    }

    pub fn to_u32(&self) -> u32 {
        match self {
            Self::Other(sig) => *sig,
            named => SPACE_SIGNATURES
                .iter()
                .find(|(space, _)| space == named)
                .map(|(_, sig)| u32::from_be_bytes(**sig))
                .unwrap_or_default(),
        }
    }

    /// Channel count, if known
    pub fn channels(&self) -> Option<usize> {
        match self {
            Self::Gray => Some(1),
            Self::Xyz | Self::Lab | Self::Rgb => Some(3),
            Self::Cmyk => Some(4),
            Self::Other(_) => None,
        }
    }
}

/// Rendering intent, numbered 0-3 in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingIntent {
    #[default]
    Perceptual,
    RelativeColorimetric,
    Saturation,
    AbsoluteColorimetric,
}

impl RenderingIntent {
    const ALL: [RenderingIntent; 4] = [
        Self::Perceptual,
        Self::RelativeColorimetric,
        Self::Saturation,
        Self::AbsoluteColorimetric,
    ];

    pub fn from_u32(val: u32) -> Result<Self, IccError> {
        Self::ALL
            .get(val as usize)
            .copied()
            .ok_or(IccError::InvalidRenderingIntent(val))
    }

    pub fn to_u32(&self) -> u32 {
        *self as u32
    }
}
