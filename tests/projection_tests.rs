use geo_globe::geo::{project, project_lat_lon, unproject, GeoCoordinate};
use geo_globe::math::Point3D;
use geo_globe::GeoError;
use std::f64::consts::PI;

const EPS: f64 = 1e-9;

fn coord(lat: f64, lon: f64) -> GeoCoordinate {
    GeoCoordinate::new(lat, lon).unwrap()
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    #[test]
    fn test_projected_points_lie_on_sphere() {
        for lat_step in 0..=36 {
            for lon_step in 0..=72 {
                let lat = -90.0 + lat_step as f64 * 5.0;
                let lon = -180.0 + lon_step as f64 * 5.0;
                for &radius in &[0.5, 1.0, 1.02, 6371.0] {
                    let p = project(coord(lat, lon), radius).unwrap();
                    assert!(
                        (p.length() - radius).abs() < radius * 1e-12,
                        "({}, {}) r={} landed at distance {}",
                        lat,
                        lon,
                        radius,
                        p.length()
                    );
                }
            }
        }
    }

    #[test]
    fn test_prime_and_antimeridian_are_antipodal() {
        let a = project(coord(0.0, 0.0), 1.0).unwrap();
        let b = project(coord(0.0, 180.0), 1.0).unwrap();
        assert!((a.x + b.x).abs() < EPS, "x not negated: {:?} {:?}", a, b);
        assert!((a.z + b.z).abs() < EPS, "z not negated: {:?} {:?}", a, b);
        assert!((a.y - b.y).abs() < EPS, "y differs: {:?} {:?}", a, b);
    }

    #[test]
    fn test_north_pole_ignores_longitude() {
        for &lon in &[-180.0, -90.0, 0.0, 45.0, 180.0] {
            let p = project(coord(90.0, lon), 2.0).unwrap();
            assert!(p.abs_diff_eq(Point3D::new(0.0, 2.0, 0.0), EPS), "lon {} gave {:?}", lon, p);
        }
    }

    #[test]
    fn test_south_pole_ignores_longitude() {
        let a = project(coord(-90.0, -120.0), 1.0).unwrap();
        let b = project(coord(-90.0, 33.0), 1.0).unwrap();
        assert!(a.abs_diff_eq(b, EPS));
        assert!(a.abs_diff_eq(Point3D::new(0.0, -1.0, 0.0), EPS));
    }

    #[test]
    fn test_projection_is_continuous() {
        let a = project(coord(48.8566, 2.3522), 1.0).unwrap();
        let b = project(coord(48.8567, 2.3523), 1.0).unwrap();
        assert!(a.distance(b) < 1e-5);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let a = project(coord(-12.5, 77.7), 1.02).unwrap();
        let b = project(coord(-12.5, 77.7), 1.02).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_paris_half_turn_equals_antimeridian_shift() {
        let radius = 1.02;
        let rotated = project(coord(48.8566, 2.3522), radius).unwrap().rotate_y(PI);
        let shifted = project(GeoCoordinate::wrapped(48.8566, 2.3522 + 180.0).unwrap(), radius).unwrap();
        assert!(
            rotated.abs_diff_eq(shifted, EPS),
            "rotated {:?} vs shifted {:?}",
            rotated,
            shifted
        );
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(matches!(
            project_lat_lon(-90.5, 0.0, 1.0),
            Err(GeoError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            project_lat_lon(0.0, 200.0, 1.0),
            Err(GeoError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            project_lat_lon(0.0, 0.0, 0.0),
            Err(GeoError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_unproject_round_trip_for_cities() {
        let cities = [
            (25.7617, -80.1918),
            (32.3078, -64.7505),
            (18.4655, -66.1057),
            (43.7034, 7.2663),
            (43.2965, 5.3698),
        ];
        for &(lat, lon) in &cities {
            let back = unproject(project(coord(lat, lon), 1.0).unwrap()).unwrap();
            assert!((back.latitude() - lat).abs() < 1e-9);
            assert!((back.longitude() - lon).abs() < 1e-9);
        }
    }
}
