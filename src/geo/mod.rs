mod coordinate;
mod distance;
mod projection;

pub use coordinate::{wrap_longitude, GeoCoordinate, ParseCoordinateError};
pub use distance::{distance_km, distance_meters, EARTH_RADIUS_M};
pub use projection::{project, project_lat_lon, project_unit, unproject, DEFAULT_RADIUS};
pub(crate) use projection::project_unchecked;
