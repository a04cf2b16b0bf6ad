mod bounds;
mod loader;
mod search;
mod types;

pub use bounds::BoundingBox;
pub use loader::{GeoDataError, GeoJsonFile, RegionSource};
pub use search::filter_by_name;
pub use types::{Region, RegionCollection};
