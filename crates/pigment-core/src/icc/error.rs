//! ICC structure errors

use std::fmt;

/// Why a profile blob could not be decoded
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IccError {
    /// Fewer bytes than the structure being read needs
    TooSmall { expected: usize, actual: usize },
    /// Bytes 36..40 are not 'acsp'
    InvalidSignature(u32),
    /// Header size field exceeds the blob
    SizeMismatch { header_size: u32, actual_size: usize },
    /// Tag table entry points outside the blob
    TagOutOfBounds {
        tag: u32,
        offset: u32,
        size: u32,
        profile_size: usize,
    },
    /// Tag payload is of a type this decoder does not accept for the tag
    InvalidTagType { tag: u32, type_sig: u32 },
    InvalidProfileClass(u32),
    InvalidRenderingIntent(u32),
    /// Payload shorter than its own length fields claim
    CorruptedData(String),
}

/// Four-character code, with non-printable bytes escaped
fn fourcc(sig: u32) -> String {
    sig.to_be_bytes()
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                (b as char).to_string()
            } else {
                format!("\\x{:02x}", b)
            }
        })
        .collect()
}

impl fmt::Display for IccError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use IccError::*;
        match self {
            TooSmall { expected, actual } => {
                write!(f, "need {} bytes, have {}", expected, actual)
            }
            InvalidSignature(sig) => {
                write!(f, "signature '{}' is not 'acsp'", fourcc(*sig))
            }
            SizeMismatch {
                header_size,
                actual_size,
            } => write!(
                f,
                "header declares {} bytes but only {} are present",
                header_size, actual_size
            ),
            TagOutOfBounds {
                tag,
                offset,
                size,
                profile_size,
            } => write!(
                f,
                "tag '{}' spans {}..{} past the {}-byte profile",
                fourcc(*tag),
                offset,
                *offset as u64 + *size as u64,
                profile_size
            ),
            InvalidTagType { tag, type_sig } => {
                write!(f, "tag '{}' has unexpected type '{}'", fourcc(*tag), fourcc(*type_sig))
            }
            InvalidProfileClass(class) => write!(f, "unknown profile class '{}'", fourcc(*class)),
            InvalidRenderingIntent(intent) => write!(f, "unknown rendering intent {}", intent),
            CorruptedData(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for IccError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_use_fourcc() {
        let err = IccError::InvalidSignature(u32::from_be_bytes(*b"abcd"));
        assert_eq!(err.to_string(), "signature 'abcd' is not 'acsp'");

        let err = IccError::InvalidTagType {
            tag: u32::from_be_bytes(*b"desc"),
            type_sig: 0x0000_0001,
        };
        assert_eq!(
            err.to_string(),
            "tag 'desc' has unexpected type '\\x00\\x00\\x00\\x01'"
        );
    }
}
