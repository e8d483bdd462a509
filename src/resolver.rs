//! Tile-address to source-region resolution.
//!
//! This is the heart of the crate: given a tile address `(level, x, y)` and a
//! [`PyramidGeometry`], compute the exact source-image pixel rectangle that
//! tile covers, clipped against the true image boundary, together with the
//! scale factor the server expects.
//!
//! # Resolution rules
//!
//! 1. `level_span = tile_size * 2^(max_level - level)` source pixels per tile.
//! 2. `request_scale = 2^level`, the server-side zoom factor. This is a wire
//!    value independent of `level_span`.
//! 3. At or below the low-resolution threshold (level 8 by default) the
//!    server holds the whole image in a single response, so the tile maps to
//!    [`TileRegion::Full`] and no sub-region is addressed.
//! 4. Above the threshold the rectangle starts at
//!    `(x * level_span, y * level_span)` and nominally spans `level_span` in
//!    each axis, minus one pixel on the first tile of a row or column, then
//!    clipped so it never exceeds the image boundary.
//!
//! The first-row/column minus-one adjustment is a compatibility rule carried
//! over from the server's historical tiling scheme; it applies only when
//! `x == 0` or `y == 0` and is deliberately not generalized further. The
//! boundary clip always runs after the adjustment, on the already-computed
//! start coordinates.

use tracing::debug;

use crate::error::ResolveError;
use crate::geometry::PyramidGeometry;

// =============================================================================
// Constants
// =============================================================================

/// Default level at or below which a single tile covers the entire image.
///
/// This is a fixed property of the target server's internal tiling
/// granularity, not derived from the pyramid geometry.
pub const DEFAULT_LOW_RES_THRESHOLD: u32 = 8;

// =============================================================================
// Region types
// =============================================================================

/// A pixel rectangle within the full source image.
///
/// Coordinates are in source-image pixels at 1:1 scale. After clipping the
/// resolver guarantees `top + height <= image.height` and
/// `left + width <= image.width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRect {
    /// Top edge in source pixels
    pub top: u32,

    /// Left edge in source pixels
    pub left: u32,

    /// Region height in source pixels (always positive)
    pub height: u32,

    /// Region width in source pixels (always positive)
    pub width: u32,
}

/// The source-image region a tile maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileRegion {
    /// The tile covers the entire image; no region restriction is needed.
    ///
    /// How this serializes (empty string, `"all"`, `"full"`, or an omitted
    /// parameter) is a property of the request dialect, not of the region.
    Full,

    /// The tile covers a sub-rectangle of the image.
    Rect(RegionRect),
}

impl TileRegion {
    /// Whether this region covers the entire image.
    pub fn is_full(&self) -> bool {
        matches!(self, TileRegion::Full)
    }

    /// The concrete rectangle, if any.
    pub fn rect(&self) -> Option<&RegionRect> {
        match self {
            TileRegion::Full => None,
            TileRegion::Rect(rect) => Some(rect),
        }
    }
}

/// A resolved tile: the region it covers and the scale the server expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTile {
    /// Source-image region the tile covers
    pub region: TileRegion,

    /// Server-side zoom factor, `2^level`
    pub request_scale: u64,
}

// =============================================================================
// RegionResolver
// =============================================================================

/// Stateless mapper from tile addresses to source-image regions.
///
/// Every call to [`resolve`](Self::resolve) is a pure function of the
/// geometry and the tile address; nothing is retained between calls, so a
/// resolver may be shared freely across threads.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    geometry: PyramidGeometry,
    low_res_threshold: u32,
}

impl RegionResolver {
    /// Create a resolver with the default low-resolution threshold.
    pub fn new(geometry: PyramidGeometry) -> Self {
        Self::with_threshold(geometry, DEFAULT_LOW_RES_THRESHOLD)
    }

    /// Create a resolver with a custom low-resolution threshold.
    pub fn with_threshold(geometry: PyramidGeometry, low_res_threshold: u32) -> Self {
        Self {
            geometry,
            low_res_threshold,
        }
    }

    /// The geometry this resolver operates on.
    pub fn geometry(&self) -> &PyramidGeometry {
        &self.geometry
    }

    /// The level at or below which tiles map to the full image.
    pub fn low_res_threshold(&self) -> u32 {
        self.low_res_threshold
    }

    /// Resolve a tile address to its source region and request scale.
    ///
    /// Tile coordinates slightly beyond the nominal grid degrade gracefully:
    /// the clip shrinks the rectangle to the image boundary, matching the
    /// tolerant behavior expected of a tiling protocol where a viewer may
    /// request edge tiles past the grid. Coordinates so far out that clipping
    /// would leave an empty rectangle are a caller error.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::LevelOutOfRange`] if `level` exceeds the pyramid's
    ///   maximum.
    /// - [`ResolveError::TileOutOfRange`] if the clipped rectangle would have
    ///   a non-positive width or height.
    pub fn resolve(&self, level: u32, x: u32, y: u32) -> Result<ResolvedTile, ResolveError> {
        let max_level = self.geometry.max_level();
        if level > max_level {
            return Err(ResolveError::LevelOutOfRange { level, max_level });
        }

        let request_scale = self.geometry.request_scale(level);

        // At low zoom the server returns the whole image in one response;
        // sub-region addressing is neither needed nor possible.
        if level <= self.low_res_threshold {
            debug!(level, x, y, request_scale, "tile resolves to full image");
            return Ok(ResolvedTile {
                region: TileRegion::Full,
                request_scale,
            });
        }

        let span = self.geometry.level_span(level);
        let left = u64::from(x) * span;
        let top = u64::from(y) * span;

        // First tile of a row/column is served one pixel short. Historical
        // server accommodation; applied before the boundary clip.
        let mut width = if x == 0 { span - 1 } else { span };
        let mut height = if y == 0 { span - 1 } else { span };

        // Boundary clip, using the already-adjusted start coordinates. The
        // image dimensions are not generally multiples of the tile span.
        let image_width = u64::from(self.geometry.width());
        let image_height = u64::from(self.geometry.height());

        if left + width > image_width {
            width = image_width.saturating_sub(left);
        }
        if top + height > image_height {
            height = image_height.saturating_sub(top);
        }

        if width == 0 || height == 0 {
            return Err(ResolveError::TileOutOfRange { level, x, y });
        }

        let rect = RegionRect {
            top: top as u32,
            left: left as u32,
            height: height as u32,
            width: width as u32,
        };
        debug!(level, x, y, ?rect, request_scale, "tile resolved to region");

        Ok(ResolvedTile {
            region: TileRegion::Rect(rect),
            request_scale,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
