//! Static geometry of a deep-zoom image pyramid.
//!
//! A pyramid describes one source image at multiple resolutions. Levels are
//! numbered the Deep Zoom way: level 0 is the coarsest view and `max_level`
//! is the level at which one tile-sized step corresponds to full (1:1)
//! source resolution.
//!
//! [`PyramidGeometry`] is constructed once per opened image, after the source
//! dimensions are known, and is read-only afterwards. Everything else in this
//! crate derives from it: the span of a tile in source pixels at a level, the
//! server-side scale factor, and the tile-grid shape used when walking the
//! whole pyramid.

use crate::error::GeometryError;

// =============================================================================
// Constants
// =============================================================================

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Default tile overlap in pixels.
///
/// Overlap affects only the viewer's own rendering geometry; it is never
/// added to the served region.
pub const DEFAULT_OVERLAP: u32 = 0;

// =============================================================================
// PyramidGeometry
// =============================================================================

/// The static parameters of a deep-zoom pyramid.
///
/// Immutable once constructed. All accessors are read-only; there is no
/// mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyramidGeometry {
    /// Full source image width in pixels
    width: u32,

    /// Full source image height in pixels
    height: u32,

    /// Tile edge length in pixels (tiles are square)
    tile_size: u32,

    /// Tile overlap in pixels
    overlap: u32,

    /// Coarsest addressable level
    min_level: u32,

    /// Level at which one tile spans `tile_size` source pixels (1:1 scale)
    max_level: u32,
}

impl PyramidGeometry {
    /// Create a geometry with a derived `max_level`.
    ///
    /// The maximum level is `ceil(log2(max(width, height) / tile_size))`,
    /// the smallest level count for which the top level reaches 1:1 source
    /// resolution. `min_level` is 0 and `overlap` is 0.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimensions`] or
    /// [`GeometryError::InvalidTileSize`] if any dimension is zero.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Result<Self, GeometryError> {
        let max_level = Self::derive_max_level(width, height, tile_size);
        Self::with_levels(width, height, tile_size, 0, max_level)
    }

    /// Create a geometry with an explicitly supplied `max_level`.
    ///
    /// Some servers fix the level numbering independently of the image
    /// dimensions; this constructor accepts their value instead of deriving
    /// one.
    pub fn with_max_level(
        width: u32,
        height: u32,
        tile_size: u32,
        max_level: u32,
    ) -> Result<Self, GeometryError> {
        Self::with_levels(width, height, tile_size, 0, max_level)
    }

    /// Create a geometry with explicit level bounds.
    pub fn with_levels(
        width: u32,
        height: u32,
        tile_size: u32,
        min_level: u32,
        max_level: u32,
    ) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::InvalidDimensions { width, height });
        }
        if tile_size == 0 {
            return Err(GeometryError::InvalidTileSize { tile_size });
        }
        if min_level > max_level {
            return Err(GeometryError::InvalidLevelRange {
                min_level,
                max_level,
            });
        }

        Ok(Self {
            width,
            height,
            tile_size,
            overlap: DEFAULT_OVERLAP,
            min_level,
            max_level,
        })
    }

    /// Set the tile overlap, consuming and returning the geometry.
    pub fn overlap(mut self, overlap: u32) -> Self {
        self.overlap = overlap;
        self
    }

    /// Derive the maximum level for the given dimensions and tile size.
    ///
    /// `max_level = ceil(log2(max(width, height) / tile_size))`, clamped to 0
    /// for images no larger than one tile.
    fn derive_max_level(width: u32, height: u32, tile_size: u32) -> u32 {
        let max_dim = width.max(height);
        if tile_size == 0 || max_dim <= tile_size {
            return 0;
        }
        (max_dim as f64 / tile_size as f64).log2().ceil() as u32
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Full source image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Full source image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Tile overlap in pixels.
    pub fn tile_overlap(&self) -> u32 {
        self.overlap
    }

    /// Coarsest addressable level.
    pub fn min_level(&self) -> u32 {
        self.min_level
    }

    /// Level at which one tile corresponds to 1:1 source resolution.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    // =========================================================================
    // Derived quantities
    // =========================================================================

    /// Number of source pixels one tile spans (in both axes) at `level`.
    ///
    /// `level_span = tile_size * 2^(max_level - level)`. At `max_level` this
    /// is exactly `tile_size`. Levels above `max_level` are treated as
    /// `max_level`.
    pub fn level_span(&self, level: u32) -> u64 {
        let shift = self.max_level.saturating_sub(level);
        u64::from(self.tile_size) << shift.min(32)
    }

    /// The zoom factor the server expects for `level`: `2^level`.
    ///
    /// This is a wire value, distinct from [`level_span`](Self::level_span);
    /// the two must never be conflated.
    pub fn request_scale(&self, level: u32) -> u64 {
        1u64.checked_shl(level).unwrap_or(u64::MAX)
    }

    /// Image dimensions as displayed at `level`.
    ///
    /// `ceil(dim / 2^(max_level - level))`, at least 1x1. Returns `(0, 0)`
    /// for levels above `max_level`.
    pub fn level_dimensions(&self, level: u32) -> (u32, u32) {
        if level > self.max_level {
            return (0, 0);
        }

        let scale = 1u32 << (self.max_level - level).min(31);
        let level_width = self.width.div_ceil(scale);
        let level_height = self.height.div_ceil(scale);

        (level_width.max(1), level_height.max(1))
    }

    /// Number of tiles along each axis of the grid at `level`.
    ///
    /// Always at least 1x1; returns `(1, 1)` for levels where a single tile
    /// covers the whole image.
    pub fn tile_grid(&self, level: u32) -> (u32, u32) {
        let span = self.level_span(level);
        let tiles_x = (u64::from(self.width)).div_ceil(span).max(1);
        let tiles_y = (u64::from(self.height)).div_ceil(span).max(1);
        (tiles_x as u32, tiles_y as u32)
    }
}

// =============================================================================
// Tests
// =============================================================================
