//! End-to-end tests of the open -> resolve -> render pipeline.

use deepzoom_url::{
    Dialect, FullImageSentinel, MetadataError, TileSource, TileSourceConfig, TileSourceError,
};
use url::form_urlencoded;

use super::test_utils::{open_source, FixtureProvider, IMAGE_ID};

#[test]
fn path_region_dialect_end_to_end() {
    let source = open_source(Dialect::PathRegion, "http://localhost/view/zoom/");

    // Origin tile at full resolution: first row and column each lose a pixel
    assert_eq!(
        source.tile_url(12, 0, 0).unwrap(),
        "http://localhost/view/zoom/mydiss.jp2/0,0,255,255/4096"
    );

    // Interior tile
    assert_eq!(
        source.tile_url(12, 3, 5).unwrap(),
        "http://localhost/view/zoom/mydiss.jp2/1280,768,256,256/4096"
    );

    // Right-edge tile is clipped: left = 39 * 256 = 9984
    assert_eq!(
        source.tile_url(12, 39, 5).unwrap(),
        "http://localhost/view/zoom/mydiss.jp2/1280,9984,256,16/4096"
    );

    // Coarse level: empty region segment, scale 2^5
    assert_eq!(
        source.tile_url(5, 3, 7).unwrap(),
        "http://localhost/view/zoom/mydiss.jp2//32"
    );
}

#[test]
fn path_region_all_sentinel() {
    let mut config = TileSourceConfig::new(Dialect::PathRegion, "http://localhost/view/zoom/");
    config.max_level = Some(12);
    config.full_image_sentinel = FullImageSentinel::All;

    let source = TileSource::open(&FixtureProvider::standard(), IMAGE_ID, &config).unwrap();
    assert_eq!(
        source.tile_url(5, 0, 0).unwrap(),
        "http://localhost/view/zoom/mydiss.jp2/all/32"
    );
}

#[test]
fn iiif_dialect_end_to_end() {
    let source = open_source(Dialect::Iiif, "http://localhost/iiif");

    // IIIF swaps the axis order: left,top,width,height
    assert_eq!(
        source.tile_url(12, 3, 5).unwrap(),
        "http://localhost/iiif/mydiss.jp2/768,1280,256,256/full/0/default.jpg"
    );

    // Full image renders the literal "full"
    assert_eq!(
        source.tile_url(2, 0, 0).unwrap(),
        "http://localhost/iiif/mydiss.jp2/full/full/0/default.jpg"
    );
}

#[test]
fn svc_dialect_end_to_end() {
    let source = open_source(Dialect::SvcQuery, "http://localhost/adore-djatoka");

    let url = source.tile_url(12, 3, 5).unwrap();
    let query = url.split_once('?').unwrap().1;
    let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    assert!(pairs.contains(&("url_ver".to_string(), "Z39.88-2004".to_string())));
    assert!(pairs.contains(&("rft_id".to_string(), IMAGE_ID.to_string())));
    assert!(pairs.contains(&("svc.region".to_string(), "1280,768,256,256".to_string())));
    assert!(pairs.contains(&("svc.scale".to_string(), "4096".to_string())));

    // Full image: no region parameter at all
    let url = source.tile_url(8, 0, 0).unwrap();
    assert!(!url.contains("svc.region"));
    assert!(url.contains("svc.scale=256"));
}

#[test]
fn dialects_agree_on_resolved_geometry() {
    let path = open_source(Dialect::PathRegion, "http://localhost/view/zoom/");
    let iiif = open_source(Dialect::Iiif, "http://localhost/iiif");

    // Same tile, same resolver output, different spelling
    let path_url = path.tile_url(12, 39, 31).unwrap();
    let iiif_url = iiif.tile_url(12, 39, 31).unwrap();

    let path_region: Vec<u32> = path_url
        .rsplitn(3, '/')
        .nth(1)
        .unwrap()
        .split(',')
        .map(|t| t.parse().unwrap())
        .collect();
    let iiif_region: Vec<u32> = iiif_url
        .split('/')
        .nth(5)
        .unwrap()
        .split(',')
        .map(|t| t.parse().unwrap())
        .collect();

    // path: top,left,height,width -- iiif: left,top,width,height
    assert_eq!(path_region[0], iiif_region[1]);
    assert_eq!(path_region[1], iiif_region[0]);
    assert_eq!(path_region[2], iiif_region[3]);
    assert_eq!(path_region[3], iiif_region[2]);
}

#[test]
fn clipping_law_holds_for_every_tile_of_every_level() {
    let source = open_source(Dialect::PathRegion, "http://localhost/view/zoom/");
    let geometry = source.geometry().clone();

    for level in 9..=12 {
        let (tiles_x, tiles_y) = geometry.tile_grid(level);
        for x in 0..tiles_x {
            for y in 0..tiles_y {
                let url = source.tile_url(level, x, y).unwrap();
                let region: Vec<u64> = url
                    .rsplitn(3, '/')
                    .nth(1)
                    .unwrap()
                    .split(',')
                    .map(|t| t.parse().unwrap())
                    .collect();

                let (top, left, height, width) = (region[0], region[1], region[2], region[3]);
                assert!(top + height <= 8000, "clipping law violated: {url}");
                assert!(left + width <= 10000, "clipping law violated: {url}");
            }
        }
    }
}

#[test]
fn probe_failure_surfaces_as_tile_source_error() {
    let mut config = TileSourceConfig::new(Dialect::PathRegion, "http://localhost/view/zoom/");
    config.max_level = Some(12);

    let result = TileSource::open(&FixtureProvider::standard(), "missing.jp2", &config);
    assert!(matches!(
        result,
        Err(TileSourceError::Metadata(MetadataError::NotFound(_)))
    ));
}

#[test]
fn config_from_json_drives_the_pipeline() {
    let config: TileSourceConfig = serde_json::from_str(
        r#"{
            "dialect": "path-region",
            "base_url": "http://localhost/view/zoom/",
            "full_image_sentinel": "all",
            "max_level": 12
        }"#,
    )
    .unwrap();

    let source = TileSource::open(&FixtureProvider::standard(), IMAGE_ID, &config).unwrap();
    assert_eq!(
        source.tile_url(3, 0, 0).unwrap(),
        "http://localhost/view/zoom/mydiss.jp2/all/8"
    );
}
