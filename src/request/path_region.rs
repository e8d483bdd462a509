//! The djatoka zoom-path dialect.
//!
//! Requests take the form `{base}/{id}/{region}/{scale}` where the region
//! segment is `top,left,height,width` in source pixels. A full-image request
//! renders the configured sentinel in the region position; with the empty
//! sentinel this yields a double slash (`{id}//{scale}`), which is what the
//! historical server expects.

use crate::resolver::TileRegion;

use super::{join_base, FullImageSentinel};

/// Render a path-region request URL.
pub(super) fn render(
    base_url: &str,
    image_id: &str,
    region: &TileRegion,
    request_scale: u64,
    sentinel: FullImageSentinel,
) -> String {
    let token = region_token(region, sentinel);
    join_base(base_url, &format!("{image_id}/{token}/{request_scale}"))
}

/// The region path segment: `top,left,height,width` or the sentinel.
fn region_token(region: &TileRegion, sentinel: FullImageSentinel) -> String {
    match region {
        TileRegion::Full => sentinel.as_str().to_string(),
        TileRegion::Rect(rect) => format!(
            "{},{},{},{}",
            rect.top, rect.left, rect.height, rect.width
        ),
    }
}

// =============================================================================
// Tests
// =============================================================================
