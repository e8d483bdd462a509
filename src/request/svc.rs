//! The OpenURL/SVC query dialect.
//!
//! Requests are key-value queries against the server's `resolve` endpoint,
//! carrying the fixed Z39.88-2004 OpenURL identifiers plus the image
//! identifier, media type, and scale. When the tile maps to a sub-region the
//! region is appended as `svc.region=top,left,height,width`; for a
//! full-image tile no region parameter is emitted at all (unlike the
//! path-region dialect's empty-segment convention).

use url::form_urlencoded;

use crate::resolver::TileRegion;

use super::join_base;

// =============================================================================
// Constants
// =============================================================================

/// OpenURL version identifier.
pub const URL_VER: &str = "Z39.88-2004";

/// Service identifier for region requests.
pub const SVC_ID_GET_REGION: &str = "info:lanl-repo/svc/getRegion";

/// Service value format for JPEG 2000 sources.
pub const SVC_VAL_FMT: &str = "info:ofi/fmt:kev:mtx:jpeg2000";

/// Default media type requested via `svc.format`.
pub const DEFAULT_SVC_FORMAT: &str = "image/jpeg";

/// Render an OpenURL/SVC request URL.
pub(super) fn render(
    base_url: &str,
    image_id: &str,
    region: &TileRegion,
    request_scale: u64,
    svc_format: &str,
) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());

    query.append_pair("url_ver", URL_VER);
    query.append_pair("rft_id", image_id);
    query.append_pair("svc_id", SVC_ID_GET_REGION);
    query.append_pair("svc_val_fmt", SVC_VAL_FMT);
    query.append_pair("svc.format", svc_format);

    if let TileRegion::Rect(rect) = region {
        query.append_pair(
            "svc.region",
            &format!("{},{},{},{}", rect.top, rect.left, rect.height, rect.width),
        );
    }

    query.append_pair("svc.scale", &request_scale.to_string());

    join_base(base_url, &format!("resolve?{}", query.finish()))
}

// =============================================================================
// Tests
// =============================================================================
