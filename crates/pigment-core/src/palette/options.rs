//! Palette construction options
//!
//! Options are plain serde data so they can live in a config file. The
//! profile a palette starts with is decided here, at construction time.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::PaletteKind;
use crate::Result;
use crate::profile::ColorProfile;

/// Where a palette's ICC profile comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileSource {
    /// The kind's built-in profile (sRGB, ISO coated, gray gamma 2.2).
    #[default]
    Builtin,
    /// Read from a file; the name defaults to the file's base name.
    Path {
        path: PathBuf,
        #[serde(default)]
        name: Option<String>,
    },
    /// Raw profile bytes.
    Embedded { name: String, data: Vec<u8> },
}

impl ProfileSource {
    /// Load the profile this source points at
    pub fn resolve(&self, kind: PaletteKind) -> Result<ColorProfile> {
        match self {
            ProfileSource::Builtin => Ok(kind.default_profile()),
            ProfileSource::Path { path, name: None } => ColorProfile::from_path(path),
            ProfileSource::Path {
                path,
                name: Some(name),
            } => ColorProfile::from_path_named(path, name.clone()),
            ProfileSource::Embedded { name, data } => {
                ColorProfile::from_data(data.clone(), name.clone())
            }
        }
    }
}

/// Options for palette creation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOptions {
    /// Initial profile
    pub profile: ProfileSource,
    /// Number of cache slots reserved up front
    pub cache_capacity: usize,
}

impl PaletteOptions {
    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_profile(mut self, profile: ProfileSource) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let opts = PaletteOptions::default();
        assert_eq!(opts.profile, ProfileSource::Builtin);
        assert_eq!(opts.cache_capacity, 0);
        assert_eq!(PaletteOptions::from_json("{}").unwrap(), opts);
    }

    #[test]
    fn test_from_json() {
        let opts = PaletteOptions::from_json(
            r#"{"profile": {"type": "path", "path": "/tmp/x.icc"}, "cache_capacity": 16}"#,
        )
        .unwrap();
        assert_eq!(
            opts.profile,
            ProfileSource::Path {
                path: PathBuf::from("/tmp/x.icc"),
                name: None
            }
        );
        assert_eq!(opts.cache_capacity, 16);
    }

    #[test]
    fn test_builder_methods() {
        let opts = PaletteOptions::default()
            .with_cache_capacity(64)
            .with_profile(ProfileSource::Path {
                path: PathBuf::from("/tmp/y.icc"),
                name: Some("y".into()),
            });
        assert_eq!(opts.cache_capacity, 64);
        assert!(matches!(opts.profile, ProfileSource::Path { name: Some(_), .. }));
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let err = PaletteOptions::from_json(r#"{"profile": {"type": "ftp"}}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(matches!(PaletteOptions::from_json("not json"), Err(Error::Config(_))));
    }

    #[test]
    fn test_resolve_sources() {
        let builtin = ProfileSource::Builtin.resolve(PaletteKind::Cmyk).unwrap();
        assert_eq!(builtin, ColorProfile::iso_coated());

        let embedded = ProfileSource::Embedded {
            name: "custom".into(),
            data: ColorProfile::srgb().data().to_vec(),
        }
        .resolve(PaletteKind::Rgb)
        .unwrap();
        assert_eq!(embedded.name(), "custom");

        let empty = ProfileSource::Embedded {
            name: "empty".into(),
            data: Vec::new(),
        };
        assert!(matches!(
            empty.resolve(PaletteKind::Rgb),
            Err(Error::InvalidProfile(_))
        ));

        let missing = ProfileSource::Path {
            path: PathBuf::from("/nonexistent/pigment/missing.icc"),
            name: None,
        };
        assert!(matches!(
            missing.resolve(PaletteKind::Rgb),
            Err(Error::Io { .. })
        ));
    }
}
