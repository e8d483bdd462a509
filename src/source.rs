//! The viewer-facing tile source.
//!
//! [`TileSource`] is the single entry point a tiled-viewer plugin registers:
//! `tile_url(level, x, y)` composes the region resolver and the request
//! template for whichever dialect the deployment is configured with and
//! returns a ready-to-fetch URL string.
//!
//! Source dimensions come from an [`ImageMetadataProvider`] — typically an
//! HTTP HEAD probe against the image service — which runs once at image-open
//! time. The probe is sequenced by the caller before geometry construction;
//! nothing in this crate blocks on I/O.
//!
//! # Example
//!
//! ```
//! use deepzoom_url::config::TileSourceConfig;
//! use deepzoom_url::request::Dialect;
//! use deepzoom_url::source::{ImageMetadataProvider, TileSource};
//! use deepzoom_url::error::MetadataError;
//!
//! struct FixedDimensions(u32, u32);
//!
//! impl ImageMetadataProvider for FixedDimensions {
//!     fn dimensions(&self, _image_id: &str) -> Result<(u32, u32), MetadataError> {
//!         Ok((self.0, self.1))
//!     }
//! }
//!
//! let mut config = TileSourceConfig::new(Dialect::PathRegion, "http://localhost/view/zoom/");
//! config.max_level = Some(12);
//!
//! let source = TileSource::open(&FixedDimensions(10000, 8000), "mydiss.jp2", &config).unwrap();
//! assert_eq!(
//!     source.tile_url(12, 0, 0).unwrap(),
//!     "http://localhost/view/zoom/mydiss.jp2/0,0,255,255/4096"
//! );
//! ```

use tracing::debug;

use crate::config::TileSourceConfig;
use crate::error::{MetadataError, TileSourceError};
use crate::geometry::PyramidGeometry;
use crate::request::RequestTemplate;
use crate::resolver::RegionResolver;

// =============================================================================
// Metadata provider
// =============================================================================

/// Source of an image's pixel dimensions.
///
/// Implementations look the dimensions up however the deployment requires —
/// an HTTP metadata probe, a local catalog, a fixture in tests. Failures are
/// the provider's own concern; the tile source only propagates them.
pub trait ImageMetadataProvider {
    /// Look up `(width, height)` in source pixels for `image_id`.
    fn dimensions(&self, image_id: &str) -> Result<(u32, u32), MetadataError>;
}

// =============================================================================
// TileSource
// =============================================================================

/// Maps tile addresses to request URLs for one opened image.
///
/// Immutable after construction; every [`tile_url`](Self::tile_url) call is
/// an independent pure computation, so a source may be shared across threads
/// without synchronization.
#[derive(Debug, Clone)]
pub struct TileSource {
    image_id: String,
    resolver: RegionResolver,
    template: RequestTemplate,
}

impl TileSource {
    /// Create a tile source from already-known geometry.
    ///
    /// # Errors
    ///
    /// Returns [`TileSourceError::Request`] if the configured base URL does
    /// not parse.
    pub fn new(
        image_id: impl Into<String>,
        geometry: PyramidGeometry,
        config: &TileSourceConfig,
    ) -> Result<Self, TileSourceError> {
        let template = config.template()?;
        let resolver = RegionResolver::with_threshold(geometry, config.low_res_threshold);

        Ok(Self {
            image_id: image_id.into(),
            resolver,
            template,
        })
    }

    /// Open an image: probe its dimensions, build the pyramid geometry, and
    /// return a ready tile source.
    ///
    /// The provider is consulted exactly once. When the configuration
    /// supplies an explicit `max_level` it is used as-is; otherwise the level
    /// is derived from the probed dimensions.
    ///
    /// # Errors
    ///
    /// Propagates probe failures as [`TileSourceError::Metadata`] and bad
    /// dimensions as [`TileSourceError::Geometry`].
    pub fn open<P: ImageMetadataProvider>(
        provider: &P,
        image_id: impl Into<String>,
        config: &TileSourceConfig,
    ) -> Result<Self, TileSourceError> {
        let image_id = image_id.into();
        let (width, height) = provider.dimensions(&image_id)?;
        debug!(%image_id, width, height, "probed image dimensions");

        let geometry = match config.max_level {
            Some(max_level) => {
                PyramidGeometry::with_max_level(width, height, config.tile_size, max_level)?
            }
            None => PyramidGeometry::new(width, height, config.tile_size)?,
        }
        .overlap(config.overlap);

        Self::new(image_id, geometry, config)
    }

    /// Build the request URL for the tile at `(level, x, y)`.
    ///
    /// This is the method a tiled-viewer host registers as its tile-URL
    /// callback. Any error means "tile unavailable"; the host is expected to
    /// skip the tile rather than abort.
    pub fn tile_url(&self, level: u32, x: u32, y: u32) -> Result<String, TileSourceError> {
        let resolved = self.resolver.resolve(level, x, y)?;
        let url = self
            .template
            .render(&self.image_id, &resolved.region, resolved.request_scale);
        debug!(level, x, y, %url, "rendered tile request");
        Ok(url)
    }

    /// The identifier of the opened image.
    pub fn image_id(&self) -> &str {
        &self.image_id
    }

    /// The pyramid geometry of the opened image.
    pub fn geometry(&self) -> &PyramidGeometry {
        self.resolver.geometry()
    }

    /// The resolver mapping tile addresses to regions.
    pub fn resolver(&self) -> &RegionResolver {
        &self.resolver
    }

    /// The request template for the configured dialect.
    pub fn template(&self) -> &RequestTemplate {
        &self.template
    }
}

// =============================================================================
// Tests
// =============================================================================
