use crate::types::Region;

/// Represents the geographical extremes of a region boundary, defined by
/// minimum and maximum latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Computes the smallest axis-aligned rectangle enclosing the region's
    /// MultiPolygon boundary.
    ///
    /// A single linear pass over every position of every ring. Returns
    /// `None` for any other geometry type, and for a MultiPolygon without
    /// a single usable position.
    pub fn of_region(region: &Region) -> Option<BoundingBox> {
        let polygons = region.multi_polygon()?;

        let mut bounds = BoundingBox {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lon: f64::INFINITY,
            max_lon: f64::NEG_INFINITY,
        };
        let mut seen_position = false;

        for polygon in polygons {
            for ring in polygon {
                for position in ring {
                    // GeoJSON positions are [longitude, latitude].
                    if position.len() < 2 {
                        continue;
                    }
                    let (lon, lat) = (position[0], position[1]);

                    bounds.min_lat = bounds.min_lat.min(lat);
                    bounds.max_lat = bounds.max_lat.max(lat);
                    bounds.min_lon = bounds.min_lon.min(lon);
                    bounds.max_lon = bounds.max_lon.max(lon);
                    seen_position = true;
                }
            }
        }

        seen_position.then_some(bounds)
    }

    /// Midpoint of the box as a (latitude, longitude) pair.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Geometry, JsonObject, Value};

    fn multi_polygon_region(polygons: Vec<Vec<Vec<Vec<f64>>>>) -> Region {
        Region::new(
            JsonObject::new(),
            Some(Geometry::new(Value::MultiPolygon(polygons))),
        )
    }

    #[test]
    fn unit_square() {
        let region = multi_polygon_region(vec![vec![vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![1.0, 0.0],
        ]]]);

        let bounds = BoundingBox::of_region(&region).unwrap();

        assert_eq!(bounds.min_lat, 0.0);
        assert_eq!(bounds.min_lon, 0.0);
        assert_eq!(bounds.max_lat, 1.0);
        assert_eq!(bounds.max_lon, 1.0);
    }

    #[test]
    fn spans_every_polygon_and_ring() {
        let region = multi_polygon_region(vec![
            vec![
                vec![vec![110.0, -8.0], vec![112.0, -8.0], vec![112.0, -6.0]],
                // A hole still contributes to the extremes scan.
                vec![vec![109.5, -8.5], vec![111.0, -7.0]],
            ],
            vec![vec![vec![115.0, -9.0], vec![115.5, -8.2]]],
        ]);

        let bounds = BoundingBox::of_region(&region).unwrap();

        assert_eq!(bounds.min_lon, 109.5);
        assert_eq!(bounds.max_lon, 115.5);
        assert_eq!(bounds.min_lat, -9.0);
        assert_eq!(bounds.max_lat, -6.0);
    }

    #[test]
    fn non_multi_polygon_has_no_bounds() {
        let region = Region::new(
            JsonObject::new(),
            Some(Geometry::new(Value::Point(vec![113.9213, -0.7893]))),
        );

        assert_eq!(BoundingBox::of_region(&region), None);
    }

    #[test]
    fn empty_multi_polygon_has_no_bounds() {
        assert_eq!(
            BoundingBox::of_region(&multi_polygon_region(vec![])),
            None
        );
        assert_eq!(
            BoundingBox::of_region(&multi_polygon_region(vec![vec![vec![]]])),
            None
        );
    }

    #[test]
    fn center_is_the_midpoint() {
        let bounds = BoundingBox {
            min_lat: -2.0,
            max_lat: 4.0,
            min_lon: 100.0,
            max_lon: 110.0,
        };

        assert_eq!(bounds.center(), (1.0, 105.0));
    }
}
