use std::fs;
use std::path::PathBuf;

use geodata::{BoundingBox, GeoJsonFile, RegionSource};
use graphical_interface::{ViewEvent, ViewState, Viewport};

const DATASET: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": { "state": "Aceh" },
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [[[[95.0, 2.0], [98.0, 2.0], [98.0, 6.0], [95.0, 6.0], [95.0, 2.0]]]]
            }
        },
        {
            "type": "Feature",
            "properties": { "state": "Bali" },
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [[[[114.4, -8.8], [115.7, -8.8], [115.7, -8.0], [114.4, -8.0], [114.4, -8.8]]]]
            }
        }
    ]
}"#;

// Write the fixture dataset where the loader can pick it up.
fn write_dataset(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, DATASET).expect("Failed to write dataset fixture");
    path
}

#[test]
fn load_search_and_frame_a_province() {
    let path = write_dataset("nusantara_pipeline.geojson");

    let regions = GeoJsonFile::new(&path)
        .load_regions()
        .expect("Fixture dataset should load");
    assert_eq!(regions.len(), 2);

    let loaded = ViewState::empty().apply(ViewEvent::RegionsLoaded(regions));
    assert_eq!(loaded.filtered, loaded.regions);

    // Searching narrows the view to Bali and frames its bounding box.
    let searched = loaded.apply(ViewEvent::TermChanged("bali".to_string()));
    assert_eq!(searched.filtered.len(), 1);
    assert_eq!(searched.filtered.first().unwrap().name(), Some("Bali"));

    let bali = searched.filtered.first().unwrap();
    let bounds = BoundingBox::of_region(bali).expect("Bali has a MultiPolygon boundary");
    assert_eq!(searched.viewport.bounds, Some(bounds));
    assert_eq!(searched.viewport.center, bounds.center());

    // Only the match is highlighted; the other province stays muted.
    assert!(searched.is_highlighted(bali));
    assert!(!searched.is_highlighted(&searched.regions.regions[0]));

    // A miss leaves the previous framing in place.
    let missed = searched.apply(ViewEvent::TermChanged("Borneo".to_string()));
    assert!(missed.filtered.is_empty());
    assert_eq!(missed.viewport, searched.viewport);

    // Clearing the term restores the full dataset and the default camera.
    let cleared = missed.apply(ViewEvent::TermChanged(String::new()));
    assert_eq!(cleared.filtered, cleared.regions);
    assert_eq!(cleared.viewport, Viewport::home());

    fs::remove_file(&path).expect("Failed to remove dataset fixture");
}

#[test]
fn a_broken_dataset_fails_to_load() {
    let path = std::env::temp_dir().join("nusantara_broken.geojson");
    fs::write(&path, "{ \"type\": \"FeatureCollection\" ").expect("Failed to write fixture");

    assert!(GeoJsonFile::new(&path).load_regions().is_err());

    fs::remove_file(&path).expect("Failed to remove dataset fixture");
}
