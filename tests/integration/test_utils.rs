//! Shared fixtures for integration tests.

use deepzoom_url::{
    Dialect, ImageMetadataProvider, MetadataError, TileSource, TileSourceConfig,
};

/// Image identifier used throughout the integration tests.
pub const IMAGE_ID: &str = "mydiss.jp2";

/// A provider backed by fixed dimensions, standing in for the HTTP HEAD
/// probe a real deployment would perform.
pub struct FixtureProvider {
    pub width: u32,
    pub height: u32,
}

impl FixtureProvider {
    pub fn standard() -> Self {
        Self {
            width: 10000,
            height: 8000,
        }
    }
}

impl ImageMetadataProvider for FixtureProvider {
    fn dimensions(&self, image_id: &str) -> Result<(u32, u32), MetadataError> {
        if image_id.starts_with("missing") {
            return Err(MetadataError::NotFound(image_id.to_string()));
        }
        Ok((self.width, self.height))
    }
}

/// The standard 10000x8000 / tile 256 / max level 12 test pyramid, opened
/// with the given dialect and base URL.
pub fn open_source(dialect: Dialect, base_url: &str) -> TileSource {
    let mut config = TileSourceConfig::new(dialect, base_url);
    config.max_level = Some(12);
    config.validate().expect("fixture config should be valid");

    TileSource::open(&FixtureProvider::standard(), IMAGE_ID, &config)
        .expect("fixture source should open")
}
