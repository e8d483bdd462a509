//! The IIIF Image API dialect.
//!
//! Requests take the form
//! `{base}/{id}/{region}/{size}/{rotation}/{quality}.{format}`. The region
//! parameter is `left,top,width,height` — x before y, the opposite axis
//! order from the path-region dialect — or the literal `full` for the whole
//! image. The identifier is percent-encoded per the IIIF web service API.
//!
//! Size, rotation, quality, and format are display parameters passed through
//! from the caller; this crate never computes them.

use serde::{Deserialize, Serialize};

use crate::resolver::TileRegion;

use super::join_base;

// =============================================================================
// Display parameters
// =============================================================================

/// Caller-supplied IIIF display parameters.
///
/// Defaults request the untouched image: full size, no rotation, default
/// quality, JPEG output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IiifDisplay {
    /// Size parameter (e.g. `full`, `512,`, `pct:50`)
    pub size: String,

    /// Rotation in degrees
    pub rotation: String,

    /// Quality (e.g. `default`, `native`, `gray`)
    pub quality: String,

    /// Output format extension (e.g. `jpg`, `png`)
    pub format: String,
}

impl Default for IiifDisplay {
    fn default() -> Self {
        Self {
            size: "full".to_string(),
            rotation: "0".to_string(),
            quality: "default".to_string(),
            format: "jpg".to_string(),
        }
    }
}

/// Render an IIIF Image API request URL.
pub(super) fn render(
    base_url: &str,
    image_id: &str,
    region: &TileRegion,
    display: &IiifDisplay,
) -> String {
    let id = urlencoding::encode(image_id);
    let region = region_token(region);

    join_base(
        base_url,
        &format!(
            "{}/{}/{}/{}/{}.{}",
            id, region, display.size, display.rotation, display.quality, display.format
        ),
    )
}

/// The region parameter: `left,top,width,height` or `full`.
fn region_token(region: &TileRegion) -> String {
    match region {
        TileRegion::Full => "full".to_string(),
        TileRegion::Rect(rect) => format!(
            "{},{},{},{}",
            rect.left, rect.top, rect.width, rect.height
        ),
    }
}

// =============================================================================
// Tests
// =============================================================================
