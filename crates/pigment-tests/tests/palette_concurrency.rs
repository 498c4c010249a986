//! Palette Concurrency Tests
//!
//! A palette shared across threads must still hand out exactly one instance
//! per distinct input, no matter which thread asked first.

use std::sync::Arc;

use anyhow::Result;
use rayon::prelude::*;

use pigment_core::{Color, ColorProfile, Palette, PaletteKind};
use pigment_tests::patterns::{ColorPattern, random_colors};

/// Distinct inputs hammered from every worker
const DISTINCT_COLORS: usize = 64;

/// Requests per distinct input
const REPEATS: usize = 200;

#[test]
fn test_parallel_requests_share_instances() -> Result<()> {
    for kind in PaletteKind::ALL {
        let palette = Palette::new(kind);
        let mut inputs = random_colors(kind, ColorPattern::Random(99), DISTINCT_COLORS);
        inputs.sort();
        inputs.dedup();

        let requests: Vec<usize> = (0..inputs.len() * REPEATS).map(|i| i % inputs.len()).collect();
        let results: Vec<(usize, Arc<Color>)> = requests
            .par_iter()
            .map(|&i| -> pigment_core::Result<(usize, Arc<Color>)> {
                Ok((i, palette.color(&inputs[i])?))
            })
            .collect::<pigment_core::Result<_>>()?;

        assert_eq!(palette.cached_len(), inputs.len(), "{}", kind);

        let mut canonical: Vec<Option<Arc<Color>>> = vec![None; inputs.len()];
        for (i, color) in results {
            match &canonical[i] {
                Some(first) => assert!(Arc::ptr_eq(first, &color), "{} {}", kind, color),
                None => canonical[i] = Some(color),
            }
        }
    }
    Ok(())
}

#[test]
fn test_parallel_blends_are_interned() -> Result<()> {
    let palette = Palette::rgb();
    let black = palette.color(&[0, 0, 0])?;
    let white = palette.color(&[255, 255, 255])?;

    let ramps: Vec<Vec<Arc<Color>>> = (0..16)
        .into_par_iter()
        .map(|_| {
            (0..=255)
                .map(|i| palette.blend(&black, &white, i as f64 / 255.0))
                .collect::<pigment_core::Result<Vec<_>>>()
        })
        .collect::<pigment_core::Result<_>>()?;

    for ramp in &ramps[1..] {
        for (a, b) in ramp.iter().zip(&ramps[0]) {
            assert!(Arc::ptr_eq(a, b));
        }
    }
    assert_eq!(palette.cached_len(), 256);
    Ok(())
}

#[test]
fn test_profile_swaps_under_load() -> Result<()> {
    let palette = Palette::cmyk();
    let custom = ColorProfile::from_data(ColorProfile::iso_coated().data().to_vec(), "custom.icc")?;
    let builtin = ColorProfile::iso_coated();

    (0..1000).into_par_iter().try_for_each(|i| -> pigment_core::Result<()> {
        if i % 10 == 0 {
            let next = if i % 20 == 0 { &custom } else { &builtin };
            palette.set_profile(next.clone());
        } else {
            let name = palette.profile().name().to_owned();
            assert!(name == "custom.icc" || name == builtin.name(), "{}", name);
            palette.color(&[(i % 101) as i32, 0, 0, 0])?;
        }
        Ok(())
    })?;

    assert!(palette.cached_len() <= 101);
    Ok(())
}
