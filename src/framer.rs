//! Camera placement over a geographic target, instantaneous or animated.

use log::debug;

use crate::error::{GeoError, GeoResult};
use crate::geo::{project_unit, GeoCoordinate};
use crate::math::Point3D;

/// Computes camera positions that look at the sphere centre from above a coordinate.
#[derive(Debug, Clone, Copy)]
pub struct CameraFramer {
    sphere_radius: f64,
}

impl CameraFramer {
    pub fn new(sphere_radius: f64) -> GeoResult<Self> {
        if !(sphere_radius.is_finite() && sphere_radius > 0.0) {
            return Err(GeoError::InvalidRadius(sphere_radius));
        }
        Ok(Self { sphere_radius })
    }

    pub fn sphere_radius(&self) -> f64 {
        self.sphere_radius
    }

    /// Camera position `distance` away from the centre, above `coord` on a sphere
    /// that has been spun by `rotation_y` about +Y.
    ///
    /// Composition order is fixed: unit projection, then rotation, then scale.
    pub fn frame_on(&self, coord: GeoCoordinate, distance: f64, rotation_y: f64) -> GeoResult<Point3D> {
        self.check_distance(distance)?;

        let direction = project_unit(coord).normalize().rotate_y(rotation_y);
        Ok(direction.scale(distance))
    }

    /// Starts an animated move from `from` to the framed position of `coord`.
    pub fn begin_transition(
        &self,
        from: Point3D,
        coord: GeoCoordinate,
        distance: f64,
        rotation_y: f64,
        duration_ms: u32,
        now_ms: u64,
    ) -> GeoResult<CameraTransition> {
        let target = self.frame_on(coord, distance, rotation_y)?;
        Ok(CameraTransition::new(from, target, now_ms, duration_ms))
    }

    fn check_distance(&self, distance: f64) -> GeoResult<()> {
        if distance.is_finite() && distance > self.sphere_radius {
            Ok(())
        } else {
            Err(GeoError::InvalidDistance {
                distance,
                minimum: self.sphere_radius,
            })
        }
    }
}

/// Position produced by one sample of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSample {
    pub position: Point3D,
    pub done: bool,
}

/// Straight-line camera move over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    start: Point3D,
    target: Point3D,
    start_ms: u64,
    duration_ms: u32,
    done: bool,
}

impl CameraTransition {
    pub fn new(start: Point3D, target: Point3D, start_ms: u64, duration_ms: u32) -> Self {
        Self {
            start,
            target,
            start_ms,
            duration_ms,
            done: false,
        }
    }

    pub fn start(&self) -> Point3D {
        self.start
    }

    pub fn target(&self) -> Point3D {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Elapsed fraction in [0, 1]. A zero duration is complete immediately.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        (elapsed / f64::from(self.duration_ms)).clamp(0.0, 1.0)
    }

    /// Interpolated position at `now_ms`. Once done, every further call returns the
    /// target unchanged.
    pub fn sample(&mut self, now_ms: u64) -> TransitionSample {
        if self.done {
            return TransitionSample {
                position: self.target,
                done: true,
            };
        }

        let t = self.progress(now_ms);
        if t >= 1.0 {
            self.done = true;
            return TransitionSample {
                position: self.target,
                done: true,
            };
        }

        TransitionSample {
            position: self.start.lerp(self.target, t),
            done: false,
        }
    }
}

/// Holds at most one in-flight transition. A new navigation replaces the current
/// one and starts from wherever the camera is at that moment.
#[derive(Debug, Clone)]
pub struct Navigator {
    framer: CameraFramer,
    active: Option<CameraTransition>,
}

impl Navigator {
    pub fn new(framer: CameraFramer) -> Self {
        Self {
            framer,
            active: None,
        }
    }

    pub fn framer(&self) -> &CameraFramer {
        &self.framer
    }

    pub fn active(&self) -> Option<&CameraTransition> {
        self.active.as_ref()
    }

    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    /// Begins a move toward `coord`. `camera_position` is the current, possibly
    /// mid-flight, camera position.
    pub fn navigate(
        &mut self,
        camera_position: Point3D,
        coord: GeoCoordinate,
        distance: f64,
        rotation_y: f64,
        duration_ms: u32,
        now_ms: u64,
    ) -> GeoResult<&CameraTransition> {
        let transition = self.framer.begin_transition(
            camera_position,
            coord,
            distance,
            rotation_y,
            duration_ms,
            now_ms,
        )?;

        if self.active.is_some() {
            debug!("navigation to {} replaces in-flight transition", coord);
        }

        Ok(&*self.active.insert(transition))
    }

    /// Samples the active transition, dropping it once it completes.
    pub fn step(&mut self, now_ms: u64) -> Option<TransitionSample> {
        let sample = self.active.as_mut()?.sample(now_ms);
        if sample.done {
            self.active = None;
        }
        Some(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_rejects_distance_inside_sphere() {
        let framer = CameraFramer::new(1.0).unwrap();
        assert_eq!(
            framer.frame_on(coord(0.0, 0.0), 1.0, 0.0),
            Err(GeoError::InvalidDistance {
                distance: 1.0,
                minimum: 1.0
            })
        );
        assert!(framer.frame_on(coord(0.0, 0.0), 0.5, 0.0).is_err());
        assert!(framer.frame_on(coord(0.0, 0.0), f64::INFINITY, 0.0).is_err());
    }

    #[test]
    fn test_rejects_bad_sphere_radius() {
        assert!(CameraFramer::new(0.0).is_err());
        assert!(CameraFramer::new(-1.0).is_err());
    }

    #[test]
    fn test_zero_duration_completes_on_first_sample() {
        let mut t = CameraTransition::new(Point3D::Z * 3.0, Point3D::X * 2.0, 100, 0);
        let s = t.sample(100);
        assert!(s.done);
        assert_eq!(s.position, Point3D::X * 2.0);
    }

    #[test]
    fn test_sample_before_start_is_start() {
        let start = Point3D::new(0.0, 0.0, 2.5);
        let mut t = CameraTransition::new(start, Point3D::X * 2.2, 1_000, 500);
        let s = t.sample(900);
        assert_eq!(s.position, start);
        assert!(!s.done);
    }

    #[test]
    fn test_completed_transition_is_idempotent() {
        let target = Point3D::X * 2.2;
        let mut t = CameraTransition::new(Point3D::Z * 2.5, target, 0, 100);
        assert!(t.sample(100).done);
        // Sampling earlier after completion must not rewind
        let again = t.sample(50);
        assert!(again.done);
        assert_eq!(again.position, target);
    }

    #[test]
    fn test_navigator_clears_after_completion() {
        let mut nav = Navigator::new(CameraFramer::new(1.0).unwrap());
        nav.navigate(Point3D::Z * 2.5, coord(0.0, 0.0), 2.2, 0.0, 100, 0).unwrap();
        assert!(nav.is_moving());

        assert!(!nav.step(50).unwrap().done);
        assert!(nav.step(100).unwrap().done);
        assert!(!nav.is_moving());
        assert!(nav.step(150).is_none());
    }

    #[test]
    fn test_navigator_last_write_wins_from_current_position() {
        let mut nav = Navigator::new(CameraFramer::new(1.0).unwrap());
        let start = Point3D::new(0.0, 0.0, 2.5);
        nav.navigate(start, coord(0.0, 0.0), 2.2, 0.0, 1_000, 0).unwrap();

        let mid = nav.step(500).unwrap().position;
        let replaced = nav.navigate(mid, coord(0.0, 90.0), 2.2, 0.0, 1_000, 500).unwrap();

        assert_eq!(replaced.start(), mid);
        assert!(replaced.target().abs_diff_eq(Point3D::new(0.0, 0.0, -2.2), 1e-12));
        assert_eq!(nav.step(500).unwrap().position, mid);
    }

    #[test]
    fn test_invalid_navigation_keeps_current_transition() {
        let mut nav = Navigator::new(CameraFramer::new(1.0).unwrap());
        nav.navigate(Point3D::Z * 2.5, coord(0.0, 0.0), 2.2, 0.0, 1_000, 0).unwrap();
        let before = nav.active().copied();

        assert!(nav.navigate(Point3D::Z * 2.5, coord(10.0, 10.0), 0.5, 0.0, 1_000, 10).is_err());
        assert_eq!(nav.active().copied(), before);
    }
}
