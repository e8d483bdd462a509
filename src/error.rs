use thiserror::Error;

/// Errors raised when constructing pyramid geometry from bad parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Image dimensions must both be positive
    #[error("Invalid image dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: u32, height: u32 },

    /// Tile size must be positive
    #[error("Invalid tile size: {tile_size} (must be positive)")]
    InvalidTileSize { tile_size: u32 },

    /// The supplied level range is inverted
    #[error("Invalid level range: min level {min_level} exceeds max level {max_level}")]
    InvalidLevelRange { min_level: u32, max_level: u32 },
}

/// Errors raised when resolving a tile address to a source-image region
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Requested level lies above the top of the pyramid
    #[error("Level {level} exceeds pyramid maximum {max_level}")]
    LevelOutOfRange { level: u32, max_level: u32 },

    /// Tile coordinates fall so far outside the grid that clipping would
    /// produce an empty rectangle
    #[error("Tile ({x}, {y}) at level {level} lies outside the image")]
    TileOutOfRange { level: u32, x: u32, y: u32 },
}

/// Errors related to request-dialect selection and URL construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Dialect tag does not name a known server dialect
    #[error("Unsupported dialect: {0} (expected \"path-region\", \"iiif\" or \"svc-query\")")]
    UnsupportedDialect(String),

    /// Base URL could not be parsed as an absolute URL
    #[error("Invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Errors surfaced by an [`ImageMetadataProvider`](crate::source::ImageMetadataProvider)
/// when the source image's dimensions cannot be determined
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// The provider has no record of the image
    #[error("Image not found: {0}")]
    NotFound(String),

    /// The probe ran but returned something unusable
    #[error("Malformed metadata for {image_id}: {reason}")]
    Malformed { image_id: String, reason: String },

    /// The probe itself failed (network error, etc.)
    #[error("Metadata probe failed for {image_id}: {reason}")]
    Unavailable { image_id: String, reason: String },
}

/// Top-level error for the tile-URL pipeline.
///
/// Wraps the failure of any stage: geometry construction, configuration,
/// metadata probing, or region resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileSourceError {
    /// Geometry construction failed
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Region resolution failed
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Dialect/URL configuration failed
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Dimension probe failed
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),
}
