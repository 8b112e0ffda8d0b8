//! Latitude/longitude to sphere-surface projection.
//!
//! Meridian convention: the longitude is offset by 180° and the x term negated, so
//! `(0°, 0°)` lands on +X, `(0°, 90°E)` on -Z and the north pole on +Y. A globe
//! mesh carrying an equirectangular texture must use the same convention (u-seam
//! on -X, u increasing eastward) for markers to line up with the imagery.

use crate::error::{GeoError, GeoResult};
use crate::math::Point3D;

use super::GeoCoordinate;

pub const DEFAULT_RADIUS: f64 = 1.0;

/// Projects `coord` onto a sphere of `radius` centred at the origin.
pub fn project(coord: GeoCoordinate, radius: f64) -> GeoResult<Point3D> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeoError::InvalidRadius(radius));
    }
    Ok(project_unchecked(coord, radius))
}

/// Validates raw degrees and projects them.
pub fn project_lat_lon(latitude: f64, longitude: f64, radius: f64) -> GeoResult<Point3D> {
    project(GeoCoordinate::new(latitude, longitude)?, radius)
}

/// Projection on the unit sphere; never fails because `coord` is already valid.
pub fn project_unit(coord: GeoCoordinate) -> Point3D {
    project_unchecked(coord, DEFAULT_RADIUS)
}

/// Projection for radii already known to be positive and finite.
pub(crate) fn project_unchecked(coord: GeoCoordinate, radius: f64) -> Point3D {
    let phi = (90.0 - coord.latitude()).to_radians();
    let theta = (coord.longitude() + 180.0).to_radians();

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();

    Point3D::new(
        -radius * sin_phi * cos_theta,
        radius * cos_phi,
        radius * sin_phi * sin_theta,
    )
}

/// Inverse of [`project`] for any point off the origin.
/// On the poles the longitude is undefined and reported as 0.
pub fn unproject(point: Point3D) -> GeoResult<GeoCoordinate> {
    let r = point.length();
    if !(r.is_finite() && r > 0.0) {
        return Err(GeoError::InvalidRadius(r));
    }

    let latitude = 90.0 - (point.y / r).clamp(-1.0, 1.0).acos().to_degrees();

    let horizontal = point.x.hypot(point.z);
    let longitude = if horizontal <= r * 1e-12 {
        0.0
    } else {
        super::wrap_longitude(point.z.atan2(-point.x).to_degrees() - 180.0)
    };

    GeoCoordinate::new(latitude.clamp(-90.0, 90.0), longitude)
}
