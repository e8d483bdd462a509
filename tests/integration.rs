//! Integration tests for deepzoom-url.
//!
//! These tests verify end-to-end behavior of the tile-URL pipeline:
//! - Opening a source through a metadata provider and requesting tiles
//! - All three request dialects against the same resolved regions
//! - Boundary clipping and the low-resolution full-image rule
//! - Whole-pyramid cache-priming enumeration

mod integration {
    pub mod test_utils;

    pub mod pipeline_tests;
    pub mod precache_tests;
}
