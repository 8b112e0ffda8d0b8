use geo_globe::geo::{project_unit, GeoCoordinate};
use geo_globe::math::Point3D;
use geo_globe::{CameraFramer, CameraTransition, GeoError};

const EPS: f64 = 1e-9;

fn coord(lat: f64, lon: f64) -> GeoCoordinate {
    GeoCoordinate::new(lat, lon).unwrap()
}

fn framer() -> CameraFramer {
    CameraFramer::new(1.0).unwrap()
}

#[cfg(test)]
mod frame_on_tests {
    use super::*;

    #[test]
    fn test_frame_on_distance_and_direction() {
        for &(lat, lon) in &[(0.0, 0.0), (48.8566, 2.3522), (-33.86, 151.21), (89.0, -45.0)] {
            for &d in &[1.5, 2.2, 6.0] {
                let p = framer().frame_on(coord(lat, lon), d, 0.0).unwrap();
                assert!((p.length() - d).abs() < EPS, "distance {} vs {}", p.length(), d);

                let dir = project_unit(coord(lat, lon));
                let cross = p.normalize().cross(dir);
                assert!(cross.length() < EPS, "not parallel for ({}, {})", lat, lon);
                assert!(p.dot(dir) > 0.0, "camera on the wrong side for ({}, {})", lat, lon);
            }
        }
    }

    #[test]
    fn test_frame_on_applies_globe_rotation() {
        let c = coord(10.0, 20.0);
        let rotation = 0.75;
        let p = framer().frame_on(c, 2.2, rotation).unwrap();
        let expected = project_unit(c).rotate_y(rotation) * 2.2;
        assert!(p.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_frame_on_rejects_surface_distance() {
        assert!(matches!(
            framer().frame_on(coord(0.0, 0.0), 1.0, 0.0),
            Err(GeoError::InvalidDistance { .. })
        ));
        assert!(matches!(
            framer().frame_on(coord(0.0, 0.0), -3.0, 0.0),
            Err(GeoError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_larger_sphere_raises_minimum() {
        let big = CameraFramer::new(3.0).unwrap();
        assert!(big.frame_on(coord(0.0, 0.0), 2.5, 0.0).is_err());
        assert!(big.frame_on(coord(0.0, 0.0), 3.5, 0.0).is_ok());
    }
}

#[cfg(test)]
mod transition_tests {
    use super::*;

    fn transition(duration_ms: u32) -> CameraTransition {
        framer()
            .begin_transition(
                Point3D::new(0.0, 0.0, 2.5),
                coord(0.0, 0.0),
                2.2,
                0.0,
                duration_ms,
                1_000,
            )
            .unwrap()
    }

    #[test]
    fn test_sample_at_start_returns_start() {
        let mut t = transition(800);
        let s = t.sample(1_000);
        assert_eq!(s.position, Point3D::new(0.0, 0.0, 2.5));
        assert!(!s.done);
    }

    #[test]
    fn test_sample_at_end_returns_exact_target() {
        let mut t = transition(800);
        let target = t.target();
        let s = t.sample(1_800);
        assert!(s.done);
        assert_eq!(s.position, target);
    }

    #[test]
    fn test_sample_past_end_returns_exact_target() {
        let mut t = transition(800);
        let target = t.target();
        let s = t.sample(50_000);
        assert!(s.done);
        assert_eq!(s.position, target);
    }

    #[test]
    fn test_intermediate_samples_lie_on_segment() {
        let start = Point3D::new(0.0, 0.0, 2.5);
        for step in 1..8 {
            let mut t = transition(800);
            let target = t.target();
            let now = 1_000 + step * 100;
            let s = t.sample(now);
            assert!(!s.done);

            // Collinear with start and target, and strictly between them
            let along = s.position - start;
            let segment = target - start;
            assert!(along.cross(segment).length() < EPS);
            let fraction = along.dot(segment) / segment.dot(segment);
            assert!((fraction - step as f64 / 8.0).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut t = transition(0);
        let target = t.target();
        let s = t.sample(1_000);
        assert!(s.done);
        assert_eq!(s.position, target);
    }

    #[test]
    fn test_no_resample_after_completion() {
        let mut t = transition(800);
        let end = t.sample(1_800);
        assert!(t.is_done());
        assert_eq!(t.sample(1_200), end);
        assert_eq!(t.sample(9_999), end);
    }
}
