//! ICC Color Profile handling
//!
//! A [`ColorProfile`] is an immutable, named blob of ICC data. Palettes and
//! images attach profiles; nothing in this crate rewrites them. Structure is
//! only inspected on request (see [`ColorProfile::parse`]).

use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::colorimetry::{
    SRGB_TO_XYZ, lab_to_linear_srgb, linear_to_srgb, srgb_to_lab, srgb_to_linear,
};
use crate::convert::{cmyk_to_rgb_unit, rgb_to_cmyk};
use crate::icc::{
    ColorSpace, IccHeader, IccProfile, Lut16, ProfileBuilder, ProfileClass, TagSignature,
    XyzNumber, decode_lab_v2, encode_lab_v2, has_signature,
};
use crate::{Error, Result};

/// Name of the built-in RGB profile
pub const SRGB_PROFILE_NAME: &str = "sRGB_IEC61966-2-1.icc";
/// Name of the built-in CMYK profile
pub const ISO_COATED_PROFILE_NAME: &str = "ISOcoated_generic.icc";
/// Name of the built-in grayscale profile
pub const GRAY_PROFILE_NAME: &str = "Gray_gamma2.2.icc";

/// Entries in the sampled sRGB tone curve
const SRGB_CURVE_POINTS: usize = 1024;

/// CLUT nodes per axis of the CMYK -> Lab table; 12.5% ink steps
const CMYK_GRID_POINTS: u8 = 9;

/// CLUT nodes per axis of the Lab -> CMYK and gamut tables
const LAB_GRID_POINTS: u8 = 17;

/// Linear sRGB overshoot still counted as in gamut
const GAMUT_EPSILON: f64 = 1e-3;

static SRGB: LazyLock<ColorProfile> = LazyLock::new(|| {
    let curve = srgb_curve();
    let colorant = |col: usize| {
        XyzNumber::new(SRGB_TO_XYZ[0][col], SRGB_TO_XYZ[1][col], SRGB_TO_XYZ[2][col])
    };
    let data = ProfileBuilder::new(ProfileClass::Display, ColorSpace::Rgb, ColorSpace::Xyz)
        .description("sRGB IEC61966-2.1")
        .copyright("No copyright, use freely")
        .xyz(TagSignature::MEDIA_WHITE, XyzNumber::D50)
        .xyz(TagSignature::RED_COLORANT, colorant(0))
        .xyz(TagSignature::GREEN_COLORANT, colorant(1))
        .xyz(TagSignature::BLUE_COLORANT, colorant(2))
        .table_curve(TagSignature::RED_TRC, &curve)
        .table_curve(TagSignature::GREEN_TRC, &curve)
        .table_curve(TagSignature::BLUE_TRC, &curve)
        .build();
    ColorProfile::builtin(SRGB_PROFILE_NAME, data)
});

// Device CMYK is the naive ink model of `convert` on top of sRGB
static ISO_COATED: LazyLock<ColorProfile> = LazyLock::new(|| {
    let data = ProfileBuilder::new(ProfileClass::Output, ColorSpace::Cmyk, ColorSpace::Lab)
        .description("ISO Coated generic CMYK")
        .copyright("No copyright, use freely")
        .xyz(TagSignature::MEDIA_WHITE, XyzNumber::D50)
        .lut16(TagSignature::A_TO_B0, &cmyk_to_lab_lut())
        .lut16(TagSignature::B_TO_A0, &lab_to_cmyk_lut())
        .lut16(TagSignature::GAMUT, &gamut_lut())
        .build();
    ColorProfile::builtin(ISO_COATED_PROFILE_NAME, data)
});

static GRAY: LazyLock<ColorProfile> = LazyLock::new(|| {
    let data = ProfileBuilder::new(ProfileClass::Display, ColorSpace::Gray, ColorSpace::Xyz)
        .description("Generic Gray Gamma 2.2")
        .copyright("No copyright, use freely")
        .xyz(TagSignature::MEDIA_WHITE, XyzNumber::D50)
        .gamma_curve(TagSignature::GRAY_TRC, 2.2)
        .build();
    ColorProfile::builtin(GRAY_PROFILE_NAME, data)
});

fn srgb_curve() -> Vec<u16> {
    (0..SRGB_CURVE_POINTS)
        .map(|i| {
            let v = i as f64 / (SRGB_CURVE_POINTS - 1) as f64;
            (srgb_to_linear(v) * 65535.0).round() as u16
        })
        .collect()
}

fn cmyk_to_lab_lut() -> Lut16 {
    Lut16::sample(4, 3, CMYK_GRID_POINTS, |cmyk, out| {
        let rgb = cmyk_to_rgb_unit([cmyk[0], cmyk[1], cmyk[2], cmyk[3]]);
        out.copy_from_slice(&encode_lab_v2(srgb_to_lab(rgb)));
    })
}

fn lab_to_cmyk_lut() -> Lut16 {
    Lut16::sample(3, 4, LAB_GRID_POINTS, |pcs, out| {
        let linear = lab_to_linear_srgb(decode_lab_v2([pcs[0], pcs[1], pcs[2]]));
        let rgb = linear.map(|v| (linear_to_srgb(v.clamp(0.0, 1.0)) * 255.0).round() as u8);
        for (slot, ink) in out.iter_mut().zip(rgb_to_cmyk(rgb)) {
            *slot = ink as f64 / 100.0;
        }
    })
}

/// 0 in gamut, 1 outside
fn gamut_lut() -> Lut16 {
    Lut16::sample(3, 1, LAB_GRID_POINTS, |pcs, out| {
        let linear = lab_to_linear_srgb(decode_lab_v2([pcs[0], pcs[1], pcs[2]]));
        let inside = linear
            .iter()
            .all(|v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(v));
        out[0] = if inside { 0.0 } else { 1.0 };
    })
}

/// ICC Color Profile
///
/// Cloning is cheap: the bytes are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorProfile {
    name: String,
    data: Arc<[u8]>,
}

impl ColorProfile {
    /// Read a profile file fully into memory.
    ///
    /// The name is the file's base name, e.g. `ISOcoated_v2_grey1c_bas.ICC`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_path_named(path, name)
    }

    /// Read a profile file, overriding the derived name
    pub fn from_path_named(path: impl AsRef<Path>, name: impl Into<String>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = Self::from_data(data, name)?;
        tracing::info!(
            name = profile.name(),
            bytes = profile.len(),
            path = %path.display(),
            "loaded color profile"
        );
        Ok(profile)
    }

    /// Wrap raw profile bytes.
    ///
    /// Only emptiness is rejected. A missing 'acsp' signature is logged, not
    /// treated as an error; use [`has_icc_signature`](Self::has_icc_signature)
    /// or [`parse`](Self::parse) for strict validation.
    pub fn from_data(data: impl Into<Vec<u8>>, name: impl Into<String>) -> Result<Self> {
        let data = data.into();
        let name = name.into();
        if data.is_empty() {
            return Err(Error::InvalidProfile(format!("profile '{}' has no data", name)));
        }
        if !has_signature(&data) {
            tracing::warn!(name = %name, bytes = data.len(), "profile lacks 'acsp' signature");
        }
        Ok(Self {
            name,
            data: data.into(),
        })
    }

    fn builtin(name: &str, data: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            data: data.into(),
        }
    }

    /// Built-in sRGB display profile (default for RGB palettes)
    pub fn srgb() -> Self {
        SRGB.clone()
    }

    /// Built-in generic ISO coated CMYK profile (default for CMYK palettes)
    pub fn iso_coated() -> Self {
        ISO_COATED.clone()
    }

    /// Built-in gamma 2.2 grayscale profile (default for grayscale palettes)
    pub fn gray() -> Self {
        GRAY.clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte length of the profile data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; empty profiles cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check bytes 36..40 for the ASCII signature "acsp"
    pub fn has_icc_signature(&self) -> bool {
        has_signature(&self.data)
    }

    /// Decode the 128-byte ICC header
    pub fn header(&self) -> Result<IccHeader> {
        Ok(IccHeader::parse(&self.data)?)
    }

    /// Decode header and tag table
    pub fn parse(&self) -> Result<IccProfile<'_>> {
        Ok(IccProfile::parse(&self.data)?)
    }

    /// Description text embedded in the profile, if any
    pub fn description(&self) -> Result<Option<String>> {
        Ok(self.parse()?.description()?)
    }

    /// Hand the bytes to moxcms for callers that need real transforms
    pub fn to_moxcms(&self) -> Result<moxcms::ColorProfile> {
        moxcms::ColorProfile::new_from_slice(&self.data)
            .map_err(|e| Error::ProfileParse(format!("{:?}", e)))
    }
}

impl AsRef<[u8]> for ColorProfile {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
