use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use geojson::GeoJson;

use crate::types::{Region, RegionCollection};

/// Enum representing the possible errors that can occur while loading the
/// boundary dataset.
#[derive(Debug)]
pub enum GeoDataError {
    /// Input/output (I/O) error while reading the dataset file.
    Io(io::Error),
    /// The file contents are not valid GeoJSON.
    Parse(geojson::Error),
    /// The GeoJSON value is not a FeatureCollection.
    NotACollection,
}

impl Display for GeoDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoDataError::Io(e) => write!(f, "I/O Error: {}", e),
            GeoDataError::Parse(e) => write!(f, "GeoJSON Parse Error: {}", e),
            GeoDataError::NotACollection => {
                write!(f, "Dataset is not a GeoJSON FeatureCollection")
            }
        }
    }
}

impl std::error::Error for GeoDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoDataError::Io(e) => Some(e),
            GeoDataError::Parse(e) => Some(e),
            GeoDataError::NotACollection => None,
        }
    }
}

impl From<io::Error> for GeoDataError {
    fn from(error: io::Error) -> Self {
        GeoDataError::Io(error)
    }
}

impl From<geojson::Error> for GeoDataError {
    fn from(error: geojson::Error) -> Self {
        GeoDataError::Parse(error)
    }
}

/// A trait that defines the required method for a source to produce the
/// boundary dataset shown by the viewer. Implemented by any structure that
/// can yield a collection of regions.
pub trait RegionSource {
    fn load_regions(&self) -> Result<RegionCollection, GeoDataError>;
}

/// A GeoJSON file on disk holding one FeatureCollection of region
/// boundaries.
pub struct GeoJsonFile {
    path: PathBuf,
}

impl GeoJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RegionSource for GeoJsonFile {
    /// Reads and parses the file, mapping every feature to a [`Region`]
    /// with its own properties object paired with the original geometry.
    fn load_regions(&self) -> Result<RegionCollection, GeoDataError> {
        let mut file = File::open(&self.path)?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let geojson: GeoJson = contents.parse()?;

        let collection = match geojson {
            GeoJson::FeatureCollection(collection) => collection,
            _ => return Err(GeoDataError::NotACollection),
        };

        let regions = collection
            .features
            .into_iter()
            .map(|feature| Region::new(feature.properties.unwrap_or_default(), feature.geometry))
            .collect();

        Ok(RegionCollection::new(regions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const PROVINCES: &str = r#"{
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

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    #[test]
    fn loads_regions_in_dataset_order() {
        let path = write_fixture("geodata_loader_ok.geojson", PROVINCES);

        let collection = GeoJsonFile::new(&path).load_regions().unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.regions[0].name(), Some("Aceh"));
        assert_eq!(collection.regions[1].name(), Some("Bali"));
        assert!(collection.regions[1].multi_polygon().is_some());

        fs::remove_file(&path).expect("Failed to remove fixture file");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = GeoJsonFile::new(Path::new("/nonexistent/provinces.geojson"));

        assert!(matches!(
            source.load_regions(),
            Err(GeoDataError::Io(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let path = write_fixture("geodata_loader_malformed.geojson", "{ not geojson");

        assert!(matches!(
            GeoJsonFile::new(&path).load_regions(),
            Err(GeoDataError::Parse(_))
        ));

        fs::remove_file(&path).expect("Failed to remove fixture file");
    }

    #[test]
    fn bare_geometry_is_not_a_collection() {
        let path = write_fixture(
            "geodata_loader_bare_geometry.geojson",
            r#"{ "type": "Point", "coordinates": [113.9213, -0.7893] }"#,
        );

        assert!(matches!(
            GeoJsonFile::new(&path).load_regions(),
            Err(GeoDataError::NotACollection)
        ));

        fs::remove_file(&path).expect("Failed to remove fixture file");
    }
}
