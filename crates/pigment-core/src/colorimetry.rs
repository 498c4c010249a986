//! sRGB, XYZ and L*a*b* relative to the D50 profile connection space.
//!
//! Channel values are unit floats. Nothing here clamps; callers decide what
//! to do with out-of-gamut results.

/// D50 reference white
pub(crate) const D50: [f64; 3] = [0.96422, 1.0, 0.82521];

/// sRGB colorants as columns, Bradford-adapted to D50
pub(crate) const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4360747, 0.3850649, 0.1430804],
    [0.2225045, 0.7168786, 0.0606169],
    [0.0139322, 0.0971045, 0.7141733],
];

const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.1338561, -1.6168667, -0.4906146],
    [-0.9787684, 1.9161415, 0.0334540],
    [0.0719453, -0.2289914, 1.4052427],
];

/// Encoded sRGB to linear light
pub(crate) fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

pub(crate) fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

pub(crate) fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let [fx, fy, fz] = [0, 1, 2].map(|i| lab_f(xyz[i] / D50[i]));
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

pub(crate) fn lab_to_xyz([l, a, b]: [f64; 3]) -> [f64; 3] {
    let fy = (l + 16.0) / 116.0;
    let f = [a / 500.0 + fy, fy, fy - b / 200.0];
    [0, 1, 2].map(|i| lab_f_inv(f[i]) * D50[i])
}

/// Encoded sRGB to Lab
pub(crate) fn srgb_to_lab(rgb: [f64; 3]) -> [f64; 3] {
    xyz_to_lab(mul(&SRGB_TO_XYZ, rgb.map(srgb_to_linear)))
}

/// Lab to linear sRGB; components fall outside [0, 1] when out of gamut
pub(crate) fn lab_to_linear_srgb(lab: [f64; 3]) -> [f64; 3] {
    mul(&XYZ_TO_SRGB, lab_to_xyz(lab))
}

const DELTA: f64 = 6.0 / 29.0;

fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}
