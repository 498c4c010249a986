//! ICC Profile Basic Types
//!
//! Fixed-point numbers and 4-byte signatures as laid out in ICC.1.

/// Tag name, e.g. 'desc' or 'rTRC'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSignature(pub u32);

impl TagSignature {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    /// The signature as its 4 ASCII characters
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.0.to_be_bytes()).into_owned()
    }

    pub const A_TO_B0: Self = Self::from_bytes(*b"A2B0");
    pub const B_TO_A0: Self = Self::from_bytes(*b"B2A0");
    pub const BLUE_COLORANT: Self = Self::from_bytes(*b"bXYZ");
    pub const BLUE_TRC: Self = Self::from_bytes(*b"bTRC");
    pub const COPYRIGHT: Self = Self::from_bytes(*b"cprt");
    pub const DESC: Self = Self::from_bytes(*b"desc");
    pub const GAMUT: Self = Self::from_bytes(*b"gamt");
    pub const GRAY_TRC: Self = Self::from_bytes(*b"kTRC");
    pub const GREEN_COLORANT: Self = Self::from_bytes(*b"gXYZ");
    pub const GREEN_TRC: Self = Self::from_bytes(*b"gTRC");
    pub const MEDIA_WHITE: Self = Self::from_bytes(*b"wtpt");
    pub const RED_COLORANT: Self = Self::from_bytes(*b"rXYZ");
    pub const RED_TRC: Self = Self::from_bytes(*b"rTRC");
}

/// First four bytes of a tag payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSignature(pub u32);

impl TypeSignature {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const XYZ: Self = Self::from_bytes(*b"XYZ ");
    pub const CURVE: Self = Self::from_bytes(*b"curv");
    pub const TEXT: Self = Self::from_bytes(*b"text");
    pub const DESC: Self = Self::from_bytes(*b"desc");
    pub const MLUC: Self = Self::from_bytes(*b"mluc");
    pub const LUT16: Self = Self::from_bytes(*b"mft2");
}

/// Signed 16.16 fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct S15Fixed16(pub i32);

impl S15Fixed16 {
    /// Nearest representable value
    pub fn from_f64(val: f64) -> Self {
        Self((val * 65536.0).round() as i32)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 65536.0
    }

    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(i32::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// Unsigned 8.8 fixed point; the payload of a one-entry `curv`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U8Fixed8(pub u16);

impl U8Fixed8 {
    pub fn from_f64(val: f64) -> Self {
        Self((val * 256.0).round().clamp(0.0, u16::MAX as f64) as u16)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 256.0
    }

    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// Three s15Fixed16 values, 12 bytes on disk
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct XyzNumber {
    pub x: S15Fixed16,
    pub y: S15Fixed16,
    pub z: S15Fixed16,
}

impl XyzNumber {
    /// PCS white
    pub const D50: Self = Self {
        x: S15Fixed16(0x0000_F6D6),
        y: S15Fixed16(0x0001_0000),
        z: S15Fixed16(0x0000_D32D),
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: S15Fixed16::from_f64(x),
            y: S15Fixed16::from_f64(y),
            z: S15Fixed16::from_f64(z),
        }
    }

    /// `None` if fewer than 12 bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let mut words = bytes
            .get(..12)?
            .chunks_exact(4)
            .map(|w| S15Fixed16::from_be_bytes([w[0], w[1], w[2], w[3]]));
        Some(Self {
            x: words.next()?,
            y: words.next()?,
            z: words.next()?,
        })
    }

    pub fn to_bytes(&self) -> [u8; 12] {
        let mut out = [0u8; 12];
        for (slot, v) in out.chunks_exact_mut(4).zip([self.x, self.y, self.z]) {
            slot.copy_from_slice(&v.to_be_bytes());
        }
        out
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x.to_f64(), self.y.to_f64(), self.z.to_f64()]
    }
}

/// Six big-endian u16 fields: year, month, day, hour, minute, second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeNumber {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
}

impl DateTimeNumber {
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let mut f = [0u16; 6];
        for (field, pair) in f.iter_mut().zip(bytes.get(..12)?.chunks_exact(2)) {
            *field = u16::from_be_bytes([pair[0], pair[1]]);
        }
        let [year, month, day, hour, minute, second] = f;
        Some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    pub fn to_bytes(&self) -> [u8; 12] {
        let fields = [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        ];
        let mut out = [0u8; 12];
        for (slot, v) in out.chunks_exact_mut(2).zip(fields) {
            slot.copy_from_slice(&v.to_be_bytes());
        }
        out
    }
}
