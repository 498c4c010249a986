//! ICC Profile Parser
//!
//! Structural view over a profile blob: the header, the tag table, and
//! decoders for the handful of tags this crate cares about (text and XYZ).
//!
//! ```ignore
//! let profile = IccProfile::parse(&bytes)?;
//! println!("Profile: {:?}", profile.description());
//! ```

use super::error::IccError;
use super::header::{IccHeader, MIN_PROFILE_SIZE};
use super::lut::Lut16;
use super::types::{TagSignature, TypeSignature, XyzNumber};

/// Tag table entry (as stored in profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    /// Tag signature
    pub signature: TagSignature,
    /// Offset from start of profile
    pub offset: u32,
    /// Size of tag data
    pub size: u32,
}

/// An ICC profile parsed from bytes, borrowing the underlying data
#[derive(Debug, Clone)]
pub struct IccProfile<'a> {
    /// Profile header (128 bytes)
    pub header: IccHeader,
    entries: Vec<TagEntry>,
    data: &'a [u8],
}

impl<'a> IccProfile<'a> {
    /// Parse an ICC profile from bytes
    pub fn parse(data: &'a [u8]) -> Result<Self, IccError> {
        let header = IccHeader::parse(data)?;
        header.validate(data.len())?;

        let entries = Self::parse_tag_table(data)?;

        Ok(Self {
            header,
            entries,
            data,
        })
    }

    fn parse_tag_table(data: &[u8]) -> Result<Vec<TagEntry>, IccError> {
        if data.len() < MIN_PROFILE_SIZE + 4 {
            return Err(IccError::TooSmall {
                expected: MIN_PROFILE_SIZE + 4,
                actual: data.len(),
            });
        }

        let be_u32 = |at: usize| u32::from_be_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);

        let count = be_u32(MIN_PROFILE_SIZE) as usize;
        let table_end = MIN_PROFILE_SIZE + 4 + count * 12;
        if table_end > data.len() {
            return Err(IccError::CorruptedData(format!(
                "tag table with {} entries exceeds profile size {}",
                count,
                data.len()
            )));
        }

        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            let at = MIN_PROFILE_SIZE + 4 + i * 12;
            let entry = TagEntry {
                signature: TagSignature(be_u32(at)),
                offset: be_u32(at + 4),
                size: be_u32(at + 8),
            };

            let end = entry.offset as usize + entry.size as usize;
            if end > data.len() {
                return Err(IccError::TagOutOfBounds {
                    tag: entry.signature.0,
                    offset: entry.offset,
                    size: entry.size,
                    profile_size: data.len(),
                });
            }
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Tag table entries in file order
    pub fn tags(&self) -> &[TagEntry] {
        &self.entries
    }

    /// Check whether a tag is present
    pub fn has_tag(&self, signature: TagSignature) -> bool {
        self.entries.iter().any(|e| e.signature == signature)
    }

    /// Raw payload of a tag, including its 8-byte type header
    pub fn tag_data(&self, signature: TagSignature) -> Option<&'a [u8]> {
        self.entries
            .iter()
            .find(|e| e.signature == signature)
            .map(|e| {
                let start = e.offset as usize;
                &self.data[start..start + e.size as usize]
            })
    }

    /// Profile description ('desc' tag)
    pub fn description(&self) -> Result<Option<String>, IccError> {
        self.text_tag(TagSignature::DESC)
    }

    /// Copyright notice ('cprt' tag)
    pub fn copyright(&self) -> Result<Option<String>, IccError> {
        self.text_tag(TagSignature::COPYRIGHT)
    }

    /// Media white point ('wtpt' tag)
    pub fn media_white_point(&self) -> Result<Option<XyzNumber>, IccError> {
        let Some(payload) = self.tag_data(TagSignature::MEDIA_WHITE) else {
            return Ok(None);
        };
        let type_sig = type_of(payload);
        if type_sig != TypeSignature::XYZ.0 {
            return Err(IccError::InvalidTagType {
                tag: TagSignature::MEDIA_WHITE.0,
                type_sig,
            });
        }
        payload
            .get(8..)
            .and_then(XyzNumber::from_bytes)
            .map(Some)
            .ok_or_else(|| IccError::CorruptedData("truncated XYZ tag".into()))
    }

    /// A lut16Type tag such as 'A2B0'
    pub fn lut16(&self, signature: TagSignature) -> Result<Option<Lut16>, IccError> {
        let Some(payload) = self.tag_data(signature) else {
            return Ok(None);
        };
        let type_sig = type_of(payload);
        if type_sig != TypeSignature::LUT16.0 {
            return Err(IccError::InvalidTagType {
                tag: signature.0,
                type_sig,
            });
        }
        Lut16::parse(payload).map(Some)
    }

    fn text_tag(&self, signature: TagSignature) -> Result<Option<String>, IccError> {
        let Some(payload) = self.tag_data(signature) else {
            return Ok(None);
        };
        let type_sig = type_of(payload);
        let text = match TypeSignature(type_sig) {
            TypeSignature::DESC => decode_text_description(payload)?,
            TypeSignature::TEXT => decode_ascii(payload.get(8..).unwrap_or_default()),
            TypeSignature::MLUC => decode_mluc(payload)?,
            _ => {
                return Err(IccError::InvalidTagType {
                    tag: signature.0,
                    type_sig,
                });
            }
        };
        Ok(Some(text))
    }
}

fn type_of(payload: &[u8]) -> u32 {
    match payload {
        [a, b, c, d, ..] => u32::from_be_bytes([*a, *b, *c, *d]),
        _ => 0,
    }
}

fn read_u32(payload: &[u8], at: usize) -> Result<u32, IccError> {
    payload
        .get(at..at + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| IccError::CorruptedData(format!("read past tag end at {}", at)))
}

/// ASCII up to the first NUL
fn decode_ascii(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// v2 textDescriptionType: only the ASCII part is read
fn decode_text_description(payload: &[u8]) -> Result<String, IccError> {
    let count = read_u32(payload, 8)? as usize;
    let ascii = payload
        .get(12..12 + count)
        .ok_or_else(|| IccError::CorruptedData("truncated textDescription".into()))?;
    Ok(decode_ascii(ascii))
}

/// v4 multiLocalizedUnicodeType: first record, UTF-16BE
fn decode_mluc(payload: &[u8]) -> Result<String, IccError> {
    let records = read_u32(payload, 8)?;
    if records == 0 {
        return Ok(String::new());
    }
    let len = read_u32(payload, 20)? as usize;
    let offset = read_u32(payload, 24)? as usize;
    let raw = payload
        .get(offset..offset + len)
        .ok_or_else(|| IccError::CorruptedData("truncated mluc record".into()))?;
    let units: Vec<u16> = raw
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    Ok(String::from_utf16_lossy(&units))
}
