//! Deployment configuration for a tile-URL source.
//!
//! Configuration is per deployment, not per call: it selects the server
//! dialect, the base URL, the low-resolution threshold, and the handful of
//! dialect-specific knobs. Source image dimensions are deliberately *not*
//! configuration; they are probed per image via
//! [`ImageMetadataProvider`](crate::source::ImageMetadataProvider).
//!
//! All fields deserialize with serde, so a deployment can keep its settings
//! in JSON/TOML alongside the viewer:
//!
//! ```
//! use deepzoom_url::config::TileSourceConfig;
//!
//! let config: TileSourceConfig = serde_json::from_str(
//!     r#"{ "dialect": "path-region", "base_url": "http://localhost/view/zoom/" }"#,
//! ).unwrap();
//! assert_eq!(config.low_res_threshold, 8);
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

use crate::geometry::DEFAULT_TILE_SIZE;
use crate::request::{
    Dialect, FullImageSentinel, IiifDisplay, RequestTemplate, DEFAULT_SVC_FORMAT,
};
use crate::resolver::DEFAULT_LOW_RES_THRESHOLD;

// =============================================================================
// TileSourceConfig
// =============================================================================

/// Per-deployment configuration for building tile request URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSourceConfig {
    /// Which server URL convention to render requests in.
    pub dialect: Dialect,

    /// Base URL of the image service.
    pub base_url: String,

    /// Level at or below which a single tile covers the entire image.
    #[serde(default = "default_low_res_threshold")]
    pub low_res_threshold: u32,

    /// How the path-region dialect spells a full-image request.
    #[serde(default)]
    pub full_image_sentinel: FullImageSentinel,

    /// Tile edge length in pixels.
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Tile overlap in pixels.
    #[serde(default)]
    pub overlap: u32,

    /// Explicit maximum pyramid level.
    ///
    /// When absent the level is derived from the probed image dimensions.
    #[serde(default)]
    pub max_level: Option<u32>,

    /// Media type requested via `svc.format` in the SVC dialect.
    #[serde(default = "default_svc_format")]
    pub svc_format: String,

    /// IIIF display parameters passed through to rendered requests.
    #[serde(default)]
    pub iiif: IiifDisplay,
}

fn default_low_res_threshold() -> u32 {
    DEFAULT_LOW_RES_THRESHOLD
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

fn default_svc_format() -> String {
    DEFAULT_SVC_FORMAT.to_string()
}

impl TileSourceConfig {
    /// Create a configuration with default values for everything but the
    /// dialect and base URL.
    pub fn new(dialect: Dialect, base_url: impl Into<String>) -> Self {
        Self {
            dialect,
            base_url: base_url.into(),
            low_res_threshold: DEFAULT_LOW_RES_THRESHOLD,
            full_image_sentinel: FullImageSentinel::default(),
            tile_size: DEFAULT_TILE_SIZE,
            overlap: 0,
            max_level: None,
            svc_format: DEFAULT_SVC_FORMAT.to_string(),
            iiif: IiifDisplay::default(),
        }
    }

    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if let Err(e) = Url::parse(&self.base_url) {
            return Err(format!("base_url \"{}\" is not a valid URL: {e}", self.base_url));
        }

        if self.tile_size == 0 {
            return Err("tile_size must be greater than 0".to_string());
        }

        if let Some(max_level) = self.max_level {
            if self.low_res_threshold > max_level {
                return Err(format!(
                    "low_res_threshold {} exceeds max_level {}; every tile would map to the full image",
                    self.low_res_threshold, max_level
                ));
            }
        }

        Ok(())
    }

    /// Build the request template this configuration describes.
    pub(crate) fn template(&self) -> Result<RequestTemplate, crate::error::RequestError> {
        Ok(RequestTemplate::new(self.dialect, self.base_url.clone())?
            .full_image_sentinel(self.full_image_sentinel)
            .svc_format(self.svc_format.clone())
            .iiif_display(self.iiif.clone()))
    }
}

// =============================================================================
// Tests
// =============================================================================
