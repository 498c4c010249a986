//! lut16Type ('mft2')
//!
//! Only the CLUT carries data here: the matrix is identity and the input and
//! output tables are linear. See ICC.1 10.10.
//!
//! For Lab connection spaces the v2 16-bit encoding applies: L* 0..100 maps
//! to 0x0000..0xFF00, a* and b* -128..127.996 to 0x0000..0xFFFF.

use super::error::IccError;
use super::types::TypeSignature;

/// Entries in each linear input and output table
const TABLE_ENTRIES: usize = 256;

/// Bytes before the input tables: type header, channel counts, matrix, entry counts
const TABLES_OFFSET: usize = 52;

/// Multi-dimensional lookup table with `grid_points` nodes per input axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut16 {
    pub inputs: u8,
    pub outputs: u8,
    pub grid_points: u8,
    /// `grid_points ^ inputs` nodes, first input varying slowest, outputs interleaved
    pub clut: Vec<u16>,
}

impl Lut16 {
    /// Fill a CLUT by evaluating `f` at every grid node.
    ///
    /// `f` receives the node position as unit floats and writes unit floats,
    /// which are clamped and scaled to 16 bits.
    pub fn sample(
        inputs: u8,
        outputs: u8,
        grid_points: u8,
        mut f: impl FnMut(&[f64], &mut [f64]),
    ) -> Self {
        let n = grid_points as usize;
        let nodes = n.pow(inputs as u32);
        let step = (n.max(2) - 1) as f64;

        let mut clut = Vec::with_capacity(nodes * outputs as usize);
        let mut position = vec![0.0; inputs as usize];
        let mut out = vec![0.0; outputs as usize];
        for node in 0..nodes {
            let mut rest = node;
            for axis in position.iter_mut().rev() {
                *axis = (rest % n) as f64 / step;
                rest /= n;
            }
            f(&position, &mut out);
            clut.extend(out.iter().map(|&v| (v.clamp(0.0, 1.0) * 65535.0).round() as u16));
        }

        Self {
            inputs,
            outputs,
            grid_points,
            clut,
        }
    }

    /// Complete tag payload, type header included
    pub fn encode(&self) -> Vec<u8> {
        let tables = (self.inputs as usize + self.outputs as usize) * TABLE_ENTRIES * 2;
        let mut out = Vec::with_capacity(TABLES_OFFSET + tables + self.clut.len() * 2);

        out.extend_from_slice(&TypeSignature::LUT16.0.to_be_bytes());
        out.extend_from_slice(&[0; 4]);
        out.extend_from_slice(&[self.inputs, self.outputs, self.grid_points, 0]);
        for row in 0..3 {
            for col in 0..3 {
                let e: i32 = if row == col { 0x0001_0000 } else { 0 };
                out.extend_from_slice(&e.to_be_bytes());
            }
        }
        out.extend_from_slice(&(TABLE_ENTRIES as u16).to_be_bytes());
        out.extend_from_slice(&(TABLE_ENTRIES as u16).to_be_bytes());

        let linear = (0..TABLE_ENTRIES).map(|i| (i * 257) as u16);
        for _ in 0..self.inputs {
            linear.clone().for_each(|v| out.extend_from_slice(&v.to_be_bytes()));
        }
        for v in &self.clut {
            out.extend_from_slice(&v.to_be_bytes());
        }
        for _ in 0..self.outputs {
            linear.clone().for_each(|v| out.extend_from_slice(&v.to_be_bytes()));
        }
        out
    }

    /// Read the channel counts and CLUT of an 'mft2' payload; tables are skipped
    pub fn parse(payload: &[u8]) -> Result<Self, IccError> {
        if payload.len() < TABLES_OFFSET {
            return Err(IccError::CorruptedData("lut16 tag too small".into()));
        }
        let (inputs, outputs, grid_points) = (payload[8], payload[9], payload[10]);
        let in_entries = u16::from_be_bytes([payload[48], payload[49]]) as usize;
        let out_entries = u16::from_be_bytes([payload[50], payload[51]]) as usize;

        let clut_start = TABLES_OFFSET + inputs as usize * in_entries * 2;
        let clut_len = (grid_points as usize).pow(inputs as u32) * outputs as usize;
        let end = clut_start + clut_len * 2 + outputs as usize * out_entries * 2;
        if payload.len() < end {
            return Err(IccError::CorruptedData(format!(
                "lut16 tag needs {} bytes, has {}",
                end,
                payload.len()
            )));
        }

        let clut = payload[clut_start..clut_start + clut_len * 2]
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        Ok(Self {
            inputs,
            outputs,
            grid_points,
            clut,
        })
    }
}

/// L*a*b* to unit floats in the v2 16-bit PCS encoding
pub fn encode_lab_v2([l, a, b]: [f64; 3]) -> [f64; 3] {
    [l * 652.8 / 65535.0, (a + 128.0) * 256.0 / 65535.0, (b + 128.0) * 256.0 / 65535.0]
}

/// Inverse of [`encode_lab_v2`]
pub fn decode_lab_v2([l, a, b]: [f64; 3]) -> [f64; 3] {
    [l * 65535.0 / 652.8, a * 65535.0 / 256.0 - 128.0, b * 65535.0 / 256.0 - 128.0]
}
