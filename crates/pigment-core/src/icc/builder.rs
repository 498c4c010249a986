//! ICC Profile Assembly
//!
//! Writes ICC v2.1 profiles: 128-byte header, tag table, then 4-byte aligned
//! tag payloads. Identical payloads are written once and shared between tags,
//! which ICC.1 explicitly allows (the three RGB tone curves usually are).

use super::header::{ColorSpace, IccHeader, MIN_PROFILE_SIZE, ProfileClass, RenderingIntent};
use super::lut::Lut16;
use super::types::{DateTimeNumber, TagSignature, TypeSignature, U8Fixed8, XyzNumber};

/// Builder for small, well-formed ICC profiles
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    header: IccHeader,
    tags: Vec<(TagSignature, Vec<u8>)>,
}

impl ProfileBuilder {
    pub fn new(class: ProfileClass, color_space: ColorSpace, pcs: ColorSpace) -> Self {
        let mut header = IccHeader::new(class, color_space, pcs);
        header.creation_date = DateTimeNumber {
            year: 2024,
            month: 1,
            day: 1,
            ..Default::default()
        };
        Self {
            header,
            tags: Vec::new(),
        }
    }

    pub fn rendering_intent(mut self, intent: RenderingIntent) -> Self {
        self.header.rendering_intent = intent;
        self
    }

    /// Add a 'desc' tag (textDescriptionType)
    pub fn description(self, text: &str) -> Self {
        let ascii = to_ascii(text);
        let mut payload = type_header(TypeSignature::DESC);
        payload.extend_from_slice(&(ascii.len() as u32 + 1).to_be_bytes());
        payload.extend_from_slice(&ascii);
        payload.push(0);
        // Empty Unicode (language code + count) and ScriptCode (code + count + 67 bytes)
        payload.extend_from_slice(&[0u8; 8]);
        payload.extend_from_slice(&[0u8; 2]);
        payload.push(0);
        payload.extend_from_slice(&[0u8; 67]);
        self.tag(TagSignature::DESC, payload)
    }

    /// Add a 'cprt' tag (textType)
    pub fn copyright(self, text: &str) -> Self {
        let mut payload = type_header(TypeSignature::TEXT);
        payload.extend_from_slice(&to_ascii(text));
        payload.push(0);
        self.tag(TagSignature::COPYRIGHT, payload)
    }

    /// Add an XYZ tag such as 'wtpt' or a colorant
    pub fn xyz(self, signature: TagSignature, value: XyzNumber) -> Self {
        let mut payload = type_header(TypeSignature::XYZ);
        payload.extend_from_slice(&value.to_bytes());
        self.tag(signature, payload)
    }

    /// Add a pure power-law tone curve
    pub fn gamma_curve(self, signature: TagSignature, gamma: f64) -> Self {
        let mut payload = type_header(TypeSignature::CURVE);
        payload.extend_from_slice(&1u32.to_be_bytes());
        payload.extend_from_slice(&U8Fixed8::from_f64(gamma).to_be_bytes());
        self.tag(signature, payload)
    }

    /// Add a sampled tone curve
    pub fn table_curve(self, signature: TagSignature, table: &[u16]) -> Self {
        let mut payload = type_header(TypeSignature::CURVE);
        payload.extend_from_slice(&(table.len() as u32).to_be_bytes());
        for entry in table {
            payload.extend_from_slice(&entry.to_be_bytes());
        }
        self.tag(signature, payload)
    }

    /// Add a lut16Type tag such as 'A2B0', 'B2A0' or 'gamt'
    pub fn lut16(self, signature: TagSignature, lut: &Lut16) -> Self {
        self.tag(signature, lut.encode())
    }

    fn tag(mut self, signature: TagSignature, payload: Vec<u8>) -> Self {
        self.tags.retain(|(sig, _)| *sig != signature);
        self.tags.push((signature, payload));
        self
    }

    /// Serialize the profile
    pub fn build(self) -> Vec<u8> {
        let table_len = 4 + self.tags.len() * 12;
        let mut table = Vec::with_capacity(table_len);
        table.extend_from_slice(&(self.tags.len() as u32).to_be_bytes());

        let mut body: Vec<u8> = Vec::new();
        let mut written: Vec<(usize, usize)> = Vec::with_capacity(self.tags.len());
        let body_start = MIN_PROFILE_SIZE + table_len;

        for (signature, payload) in &self.tags {
            let shared = written
                .iter()
                .find(|(at, len)| body[*at..*at + *len] == payload[..])
                .copied();
            let (at, len) = match shared {
                Some(slot) => slot,
                None => {
                    pad_to_4(&mut body, body_start);
                    let at = body.len();
                    body.extend_from_slice(payload);
                    written.push((at, payload.len()));
                    (at, payload.len())
                }
            };

            table.extend_from_slice(&signature.0.to_be_bytes());
            table.extend_from_slice(&((body_start + at) as u32).to_be_bytes());
            table.extend_from_slice(&(len as u32).to_be_bytes());
        }
        pad_to_4(&mut body, body_start);

        let mut header = self.header;
        header.size = (body_start + body.len()) as u32;

        let mut out = Vec::with_capacity(header.size as usize);
        header.write(&mut out);
        out.extend_from_slice(&table);
        out.extend_from_slice(&body);
        out
    }
}

fn type_header(sig: TypeSignature) -> Vec<u8> {
    let mut payload = Vec::with_capacity(32);
    payload.extend_from_slice(&sig.0.to_be_bytes());
    payload.extend_from_slice(&[0u8; 4]);
    payload
}

fn to_ascii(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() && c != '\0' { c as u8 } else { b'?' })
        .collect()
}

/// Pad `body` so that its absolute file offset is a multiple of 4
fn pad_to_4(body: &mut Vec<u8>, body_start: usize) {
    while (body_start + body.len()) % 4 != 0 {
        body.push(0);
    }
}
