//! Server request dialects.
//!
//! A resolved tile (region + scale) is pure geometry; turning it into a
//! request string is a per-server concern. Three dialects are supported,
//! selected by a [`Dialect`] tag and rendered through a single
//! [`RequestTemplate`] rather than one adapter type per server:
//!
//! - [`Dialect::PathRegion`] — the djatoka zoom path,
//!   `{base}/{id}/{top,left,height,width}/{scale}`.
//! - [`Dialect::Iiif`] — an IIIF Image API request,
//!   `{base}/{id}/{region}/{size}/{rotation}/{quality}.{format}`.
//! - [`Dialect::SvcQuery`] — an OpenURL/SVC key-value query against the
//!   server's `resolve` endpoint.
//!
//! All three consume the same [`TileRegion`] and scale values; they differ
//! only in axis order, parameter naming, and how a full-image tile is
//! spelled.

mod iiif;
mod path_region;
mod svc;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::RequestError;
use crate::resolver::TileRegion;

pub use iiif::IiifDisplay;
pub use svc::{DEFAULT_SVC_FORMAT, SVC_ID_GET_REGION, SVC_VAL_FMT, URL_VER};

// =============================================================================
// Dialect
// =============================================================================

/// Which server URL convention to render requests in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dialect {
    /// Region descriptor as a `top,left,height,width` path segment
    PathRegion,

    /// IIIF Image API request path
    Iiif,

    /// OpenURL/SVC key-value query string
    SvcQuery,
}

impl Dialect {
    /// Canonical tag name for this dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::PathRegion => "path-region",
            Dialect::Iiif => "iiif",
            Dialect::SvcQuery => "svc-query",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "path-region" | "path" => Ok(Dialect::PathRegion),
            "iiif" => Ok(Dialect::Iiif),
            "svc-query" | "svc" => Ok(Dialect::SvcQuery),
            other => Err(RequestError::UnsupportedDialect(other.to_string())),
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = RequestError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Dialect> for String {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str().to_string()
    }
}

// =============================================================================
// Full-image sentinel
// =============================================================================

/// How the path-region dialect spells a full-image request.
///
/// Two historical server flavors exist: one expects an empty path segment
/// (`{id}//{scale}`), the other the literal `all`. The flavor is a
/// configuration flag, not a separate dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FullImageSentinel {
    /// Empty path segment
    #[default]
    Empty,

    /// The literal token `all`
    All,
}

impl FullImageSentinel {
    /// The path token this sentinel renders as.
    pub fn as_str(&self) -> &'static str {
        match self {
            FullImageSentinel::Empty => "",
            FullImageSentinel::All => "all",
        }
    }
}

impl TryFrom<String> for FullImageSentinel {
    type Error = RequestError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "" => Ok(FullImageSentinel::Empty),
            "all" => Ok(FullImageSentinel::All),
            other => Err(RequestError::UnsupportedDialect(format!(
                "full-image sentinel \"{other}\" (expected \"\" or \"all\")"
            ))),
        }
    }
}

impl From<FullImageSentinel> for String {
    fn from(sentinel: FullImageSentinel) -> Self {
        sentinel.as_str().to_string()
    }
}

// =============================================================================
// RequestTemplate
// =============================================================================

/// Renders resolved tiles into server request URLs.
///
/// One template is configured per deployment; rendering is pure string
/// construction with no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTemplate {
    dialect: Dialect,
    base_url: String,
    full_image_sentinel: FullImageSentinel,
    svc_format: String,
    iiif: IiifDisplay,
}

impl RequestTemplate {
    /// Create a template for a dialect and base URL.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute URL.
    pub fn new(dialect: Dialect, base_url: impl Into<String>) -> Result<Self, RequestError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| RequestError::InvalidBaseUrl {
            base_url: base_url.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            dialect,
            base_url,
            full_image_sentinel: FullImageSentinel::default(),
            svc_format: DEFAULT_SVC_FORMAT.to_string(),
            iiif: IiifDisplay::default(),
        })
    }

    /// Set the full-image sentinel used by the path-region dialect.
    pub fn full_image_sentinel(mut self, sentinel: FullImageSentinel) -> Self {
        self.full_image_sentinel = sentinel;
        self
    }

    /// Set the IIIF display parameters passed through to rendered requests.
    pub fn iiif_display(mut self, iiif: IiifDisplay) -> Self {
        self.iiif = iiif;
        self
    }

    /// Set the `svc.format` media type for the SVC dialect.
    pub fn svc_format(mut self, format: impl Into<String>) -> Self {
        self.svc_format = format.into();
        self
    }

    /// The dialect this template renders.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Render a request URL for `image_id` covering `region` at
    /// `request_scale`.
    pub fn render(&self, image_id: &str, region: &TileRegion, request_scale: u64) -> String {
        match self.dialect {
            Dialect::PathRegion => path_region::render(
                &self.base_url,
                image_id,
                region,
                request_scale,
                self.full_image_sentinel,
            ),
            Dialect::Iiif => iiif::render(&self.base_url, image_id, region, &self.iiif),
            Dialect::SvcQuery => svc::render(
                &self.base_url,
                image_id,
                region,
                request_scale,
                &self.svc_format,
            ),
        }
    }
}

/// Join a base URL and a path segment with exactly one slash.
pub(crate) fn join_base(base_url: &str, segment: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), segment)
}

// =============================================================================
// Tests
// =============================================================================
