//! # deepzoom-url
//!
//! Coordinate translation between a tiled deep-zoom viewer and a
//! region-based image-serving protocol.
//!
//! A deep-zoom viewer asks, for a given zoom level and tile grid coordinate,
//! "what do I fetch?". This crate answers with a URL: it maps
//! `(level, tile_x, tile_y)` through the pyramid geometry to the exact pixel
//! region of the source image that tile covers, clips the region against the
//! image's true boundary, and renders the result in one of several
//! server-specific request dialects.
//!
//! The crate is purely computational: no HTTP, no pixel manipulation, no
//! shared mutable state. Everything is safe to call concurrently once
//! constructed.
//!
//! ## Architecture
//!
//! - [`geometry`] - [`PyramidGeometry`], the static pyramid parameters and
//!   derived per-level quantities
//! - [`resolver`] - [`RegionResolver`], tile address to clipped source
//!   region plus server scale factor
//! - [`request`] - [`RequestTemplate`] and the three server [`Dialect`]s
//!   (path-region, IIIF, OpenURL/SVC)
//! - [`source`] - [`TileSource`], the viewer-facing `tile_url` entry point,
//!   and the [`ImageMetadataProvider`] dimension-probe seam
//! - [`config`] - per-deployment [`TileSourceConfig`]
//! - [`precache`] - whole-pyramid request enumeration and cache file names
//! - [`error`] - the error taxonomy
//!
//! ## Example
//!
//! ```
//! use deepzoom_url::{Dialect, PyramidGeometry, TileSource, TileSourceConfig};
//!
//! let config = TileSourceConfig::new(Dialect::Iiif, "http://localhost/iiif");
//! let geometry = PyramidGeometry::with_max_level(10000, 8000, 256, 12).unwrap();
//! let source = TileSource::new("mydiss.jp2", geometry, &config).unwrap();
//!
//! // An interior tile at full resolution
//! assert_eq!(
//!     source.tile_url(12, 1, 2).unwrap(),
//!     "http://localhost/iiif/mydiss.jp2/256,512,256,256/full/0/default.jpg"
//! );
//!
//! // A coarse level maps to the full image
//! assert_eq!(
//!     source.tile_url(5, 3, 7).unwrap(),
//!     "http://localhost/iiif/mydiss.jp2/full/full/0/default.jpg"
//! );
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod precache;
pub mod request;
pub mod resolver;
pub mod source;

// Re-export commonly used types
pub use config::TileSourceConfig;
pub use error::{
    GeometryError, MetadataError, RequestError, ResolveError, TileSourceError,
};
pub use geometry::{PyramidGeometry, DEFAULT_OVERLAP, DEFAULT_TILE_SIZE};
pub use precache::{cache_file_name, caching_requests};
pub use request::{
    Dialect, FullImageSentinel, IiifDisplay, RequestTemplate, DEFAULT_SVC_FORMAT,
    SVC_ID_GET_REGION, SVC_VAL_FMT, URL_VER,
};
pub use resolver::{
    RegionRect, RegionResolver, ResolvedTile, TileRegion, DEFAULT_LOW_RES_THRESHOLD,
};
pub use source::{ImageMetadataProvider, TileSource};
