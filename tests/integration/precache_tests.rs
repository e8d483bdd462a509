//! Tests for whole-pyramid cache-priming enumeration.

use std::collections::HashSet;

use deepzoom_url::{cache_file_name, caching_requests, Dialect, RegionRect, TileRegion};

use super::test_utils::open_source;

#[test]
fn walk_covers_every_level_exactly_once() {
    let source = open_source(Dialect::PathRegion, "http://localhost/view/zoom/");
    let urls = caching_requests(&source).unwrap();

    // No duplicate requests
    let unique: HashSet<&String> = urls.iter().collect();
    assert_eq!(unique.len(), urls.len());

    // Every level's scale appears
    for level in 0..=12u32 {
        let scale = format!("/{}", 1u64 << level);
        assert!(
            urls.iter().any(|u| u.ends_with(&scale)),
            "no request for level {level}"
        );
    }
}

#[test]
fn walk_matches_grid_dimensions() {
    let source = open_source(Dialect::PathRegion, "http://localhost/view/zoom/");
    let urls = caching_requests(&source).unwrap();
    let geometry = source.geometry();

    // Level 12 grid: ceil(10000/256) x ceil(8000/256) = 40 x 32
    assert_eq!(geometry.tile_grid(12), (40, 32));

    let level_12: Vec<&String> = urls.iter().filter(|u| u.ends_with("/4096")).collect();
    assert_eq!(level_12.len(), 40 * 32);
}

#[test]
fn walk_works_for_iiif_deployments() {
    let source = open_source(Dialect::Iiif, "http://localhost/iiif");
    let urls = caching_requests(&source).unwrap();

    assert!(urls
        .iter()
        .take(9)
        .all(|u| u.contains("/full/full/0/default.jpg")));
    assert!(urls.iter().skip(9).all(|u| !u.contains("/full/full/")));
}

#[test]
fn cache_names_distinguish_derivatives() {
    let full = cache_file_name(&TileRegion::Full, 32, 0.0);
    let rotated = cache_file_name(&TileRegion::Full, 32, 180.0);
    let region = cache_file_name(
        &TileRegion::Rect(RegionRect {
            top: 0,
            left: 0,
            height: 255,
            width: 255,
        }),
        4096,
        0.0,
    );

    assert_eq!(full, "image_32_full.jpg");
    assert_eq!(rotated, "image_32_full_180.jpg");
    assert_eq!(region, "image_4096_0-0-255-255.jpg");

    let names: HashSet<String> = [full, rotated, region].into_iter().collect();
    assert_eq!(names.len(), 3);
}
