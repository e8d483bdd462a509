//! Cache-priming helpers.
//!
//! Image servers that derive tiles on demand benefit from having every tile
//! of a pyramid requested ahead of time. This module enumerates the complete
//! set of request URLs for an opened image, and derives the on-disk cache
//! file name a server would store a given derivative under.

use tracing::debug;

use crate::error::TileSourceError;
use crate::resolver::TileRegion;
use crate::source::TileSource;

/// Derive the cache file name for a derivative image.
///
/// The name is `image_{scale}_{region}.jpg`, where the region part is `full`
/// for a whole-image derivative and the `top-left-height-width` coordinates
/// (dash-joined, since commas make poor file names) otherwise. A non-zero
/// rotation is appended as an extra integer component.
pub fn cache_file_name(region: &TileRegion, request_scale: u64, rotation: f32) -> String {
    let region_part = match region {
        TileRegion::Full => "full".to_string(),
        TileRegion::Rect(rect) => format!(
            "{}-{}-{}-{}",
            rect.top, rect.left, rect.height, rect.width
        ),
    };

    let mut name = format!("image_{request_scale}_{region_part}");

    if rotation != 0.0 {
        // The server only understands whole degrees
        name.push('_');
        name.push_str(&(rotation as i32).to_string());
    }

    name.push_str(".jpg");
    name
}

/// Enumerate every tile request URL for the source's whole pyramid.
///
/// Levels at or below the low-resolution threshold contribute exactly one
/// full-image request each; higher levels contribute one request per tile of
/// their grid. The result is ordered coarsest level first, then column-major
/// within a level.
///
/// # Errors
///
/// Propagates resolver failures, which for grid-derived addresses can only
/// indicate a mis-constructed source.
pub fn caching_requests(source: &TileSource) -> Result<Vec<String>, TileSourceError> {
    let geometry = source.geometry();
    let threshold = source.resolver().low_res_threshold();
    let mut urls = Vec::new();

    for level in geometry.min_level()..=geometry.max_level() {
        if level <= threshold {
            urls.push(source.tile_url(level, 0, 0)?);
            continue;
        }

        let (tiles_x, tiles_y) = geometry.tile_grid(level);
        for x in 0..tiles_x {
            for y in 0..tiles_y {
                urls.push(source.tile_url(level, x, y)?);
            }
        }
    }

    debug!(
        image_id = source.image_id(),
        count = urls.len(),
        "enumerated cache-priming requests"
    );

    Ok(urls)
}

// =============================================================================
// Tests
// =============================================================================
