use geodata::BoundingBox;

/// Default framing of the whole archipelago.
pub const DEFAULT_CENTER_LAT: f64 = -0.7893;
pub const DEFAULT_CENTER_LON: f64 = 113.9213;
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Zoom recorded when a search hits a region.
pub const MATCH_ZOOM: f64 = 10.0;

/// Pixel padding kept around fitted bounds on every side.
pub const FIT_PADDING: f32 = 50.0;

const TILE_SIZE: f64 = 256.0;
const MIN_ZOOM: f64 = 0.0;
const MAX_ZOOM: f64 = 19.0;

// Latitude limit of the Web-Mercator projection.
const MAX_MERCATOR_LAT: f64 = 85.051129;

/// The map camera the viewer wants: center, zoom and, after a successful
/// search, the bounds to frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// (latitude, longitude) pair.
    pub center: (f64, f64),
    pub zoom: f64,
    pub bounds: Option<BoundingBox>,
}

impl Viewport {
    /// The fixed default view: archipelago center, wide zoom, no bounds.
    pub fn home() -> Self {
        Self {
            center: (DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON),
            zoom: DEFAULT_ZOOM,
            bounds: None,
        }
    }

    /// A view framing `bounds`, centered on its midpoint.
    pub fn framing(bounds: BoundingBox) -> Self {
        Self {
            center: bounds.center(),
            zoom: MATCH_ZOOM,
            bounds: Some(bounds),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::home()
    }
}

/// The zoom level at which `bounds` fits a panel of `panel_size` points
/// while keeping [`FIT_PADDING`] free on every side.
///
/// Works on Web-Mercator world fractions: at zoom `z` the world is
/// `256 * 2^z` points wide, so the zoom that makes a lat/lon span fill the
/// usable panel follows directly from the span's world fraction. The
/// smaller of the horizontal and vertical answers wins, clamped to the
/// widget's valid range.
pub fn zoom_to_fit(bounds: &BoundingBox, panel_size: egui::Vec2) -> f64 {
    let usable_w = f64::from((panel_size.x - 2.0 * FIT_PADDING).max(1.0));
    let usable_h = f64::from((panel_size.y - 2.0 * FIT_PADDING).max(1.0));

    let world_x = ((bounds.max_lon - bounds.min_lon) / 360.0).max(f64::EPSILON);
    let world_y = ((mercator_y(bounds.max_lat) - mercator_y(bounds.min_lat)).abs()
        / (2.0 * std::f64::consts::PI))
        .max(f64::EPSILON);

    let zoom_x = (usable_w / (TILE_SIZE * world_x)).log2();
    let zoom_y = (usable_h / (TILE_SIZE * world_y)).log2();

    zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM)
}

fn mercator_y(lat: f64) -> f64 {
    lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
        .to_radians()
        .tan()
        .asinh()
}
