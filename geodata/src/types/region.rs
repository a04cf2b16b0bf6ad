use geojson::{Geometry, JsonObject, PolygonType, Value};

/// Represents one administrative region: its descriptive properties and its
/// boundary geometry as parsed from the source dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub properties: JsonObject,
    pub geometry: Option<Geometry>,
}

impl Region {
    pub fn new(properties: JsonObject, geometry: Option<Geometry>) -> Self {
        Self {
            properties,
            geometry,
        }
    }

    /// The region name, read from the `state` property.
    ///
    /// Returns `None` when the property is missing or not a string.
    pub fn name(&self) -> Option<&str> {
        self.properties.get("state").and_then(|value| value.as_str())
    }

    /// The MultiPolygon coordinates of the boundary, when that is what the
    /// geometry holds. Any other geometry type yields `None`.
    pub fn multi_polygon(&self) -> Option<&[PolygonType]> {
        match self.geometry.as_ref().map(|geometry| &geometry.value) {
            Some(Value::MultiPolygon(polygons)) => Some(polygons),
            _ => None,
        }
    }
}
