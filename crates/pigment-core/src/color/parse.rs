//! Textual color notation
//!
//! Accepted forms per palette:
//! * RGB: `#rgb`, `#rrggbb`, `rrggbb`, `0xrrggbb`
//! * Gray: `#gg`, or any RGB form whose three channels are equal
//! * CMYK: `cmyk(c%, m%, y%, k%)` (the `%` signs are optional)
//!
//! Parsing only splits the notation into channel values; range checks stay
//! with the palette so the error text is the same as for numeric input.

use std::fmt;

use crate::palette::PaletteKind;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidLength,
    InvalidHex,
    InvalidFunc,
    NotGray,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ColorParseError::*;
        let msg = match self {
            Empty => "empty color string",
            InvalidLength => "invalid hex length",
            InvalidHex => "invalid hex digits",
            InvalidFunc => "invalid cmyk() function",
            NotGray => "channels differ, not a gray",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

/// Split `input` into channel values for `kind`
pub(crate) fn parse_color(kind: PaletteKind, input: &str) -> Result<Vec<i32>> {
    let input = input.trim();
    let parsed = match kind {
        PaletteKind::Rgb => parse_hex(input).map(|rgb| rgb.to_vec()),
        PaletteKind::Grayscale => parse_gray(input),
        PaletteKind::Cmyk => parse_cmyk(input),
    };
    parsed.map_err(|e| Error::InvalidArgument(format!("cannot parse {} color '{}': {}", kind, input, e)))
}

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix('#')
        .or_else(|| input.strip_prefix("0x"))
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

fn nibble(c: u8) -> std::result::Result<i32, ColorParseError> {
    match c {
        b'0'..=b'9' => Ok((c - b'0') as i32),
        b'a'..=b'f' => Ok((c - b'a' + 10) as i32),
        b'A'..=b'F' => Ok((c - b'A' + 10) as i32),
        _ => Err(ColorParseError::InvalidHex),
    }
}

fn parse_hex(input: &str) -> std::result::Result<[i32; 3], ColorParseError> {
    use ColorParseError::*;

    let bytes = strip_hex_prefix(input).as_bytes();
    match bytes.len() {
        0 => Err(Empty),
        3 => {
            // #rgb
            Ok([
                nibble(bytes[0])? * 17,
                nibble(bytes[1])? * 17,
                nibble(bytes[2])? * 17,
            ])
        }
        6 => {
            // #rrggbb
            let pair = |i: usize| -> std::result::Result<i32, ColorParseError> {
                Ok((nibble(bytes[i])? << 4) | nibble(bytes[i + 1])?)
            };
            Ok([pair(0)?, pair(2)?, pair(4)?])
        }
        _ => Err(InvalidLength),
    }
}

fn parse_gray(input: &str) -> std::result::Result<Vec<i32>, ColorParseError> {
    let bytes = strip_hex_prefix(input).as_bytes();
    if bytes.len() == 2 {
        return Ok(vec![(nibble(bytes[0])? << 4) | nibble(bytes[1])?]);
    }
    let [r, g, b] = parse_hex(input)?;
    if r != g || g != b {
        return Err(ColorParseError::NotGray);
    }
    Ok(vec![r])
}

fn parse_cmyk(input: &str) -> std::result::Result<Vec<i32>, ColorParseError> {
    use ColorParseError::*;

    if input.is_empty() {
        return Err(Empty);
    }
    let lower = input.to_ascii_lowercase();
    let args = lower
        .strip_prefix("cmyk(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(InvalidFunc)?;

    let values = args
        .split(',')
        .map(|t| {
            let t = t.trim();
            t.strip_suffix('%').unwrap_or(t).trim().parse::<i32>()
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| InvalidFunc)?;

    if values.len() != 4 {
        return Err(InvalidFunc);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_forms() {
        assert_eq!(parse_color(PaletteKind::Rgb, "#ff8040").unwrap(), vec![255, 128, 64]);
        assert_eq!(parse_color(PaletteKind::Rgb, "FF8040").unwrap(), vec![255, 128, 64]);
        assert_eq!(parse_color(PaletteKind::Rgb, "0xff8040").unwrap(), vec![255, 128, 64]);
        assert_eq!(parse_color(PaletteKind::Rgb, "fff").unwrap(), vec![255, 255, 255]);
        assert_eq!(parse_color(PaletteKind::Rgb, " #000 ").unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_rgb_errors() {
        assert_eq!(parse_hex(""), Err(ColorParseError::Empty));
        assert_eq!(parse_hex("#ff80"), Err(ColorParseError::InvalidLength));
        assert_eq!(parse_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert!(matches!(
            parse_color(PaletteKind::Rgb, "nope"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_gray_forms() {
        assert_eq!(parse_color(PaletteKind::Grayscale, "#0c").unwrap(), vec![12]);
        assert_eq!(parse_color(PaletteKind::Grayscale, "#0c0c0c").unwrap(), vec![12]);
        assert_eq!(parse_color(PaletteKind::Grayscale, "fff").unwrap(), vec![255]);
        assert_eq!(parse_gray("#0c0d0c"), Err(ColorParseError::NotGray));
    }

    #[test]
    fn test_cmyk_forms() {
        assert_eq!(
            parse_color(PaletteKind::Cmyk, "cmyk(100%, 50%, 25%, 10%)").unwrap(),
            vec![100, 50, 25, 10]
        );
        assert_eq!(
            parse_color(PaletteKind::Cmyk, "CMYK(0,0,0,100)").unwrap(),
            vec![0, 0, 0, 100]
        );
        assert_eq!(parse_cmyk("cmyk(1%, 2%, 3%)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_cmyk("rgb(1, 2, 3)"), Err(ColorParseError::InvalidFunc));
        assert_eq!(parse_cmyk("cmyk(a, b, c, d)"), Err(ColorParseError::InvalidFunc));
    }
}
