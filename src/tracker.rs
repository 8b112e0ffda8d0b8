//! Keeps surface decorations anchored to their coordinates on a spinning globe.

use glam::{DMat4, DVec3};

use crate::error::GeoResult;
use crate::geo::{project, project_unchecked, GeoCoordinate};
use crate::math::{Basis, Point3D};
use crate::types::DecorationInstance;

/// What a decoration looks like; the tracker itself only cares about the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecorationKind {
    /// Flat rectangle (country flag), faces outward.
    Flag { width: f64, height: f64 },
    /// Small sphere (user location, capital dot).
    Marker { size: f64 },
}

impl DecorationKind {
    /// Radius of a sphere enclosing the decoration, used for picking.
    pub fn bounding_radius(&self) -> f64 {
        match *self {
            DecorationKind::Flag { width, height } => 0.5 * width.hypot(height),
            DecorationKind::Marker { size } => size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Point3D,
    pub orientation: Basis,
    pub scale: f64,
}

impl Transform {
    pub fn model_matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(
            DVec3::splat(self.scale),
            self.orientation.to_quat(),
            self.position.into(),
        )
    }
}

/// A renderable anchored to a fixed coordinate at a fixed radius.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceDecoration {
    coordinate: GeoCoordinate,
    radius: f64,
    pub kind: DecorationKind,
    /// Index of the dataset record this decoration was built from, if any.
    pub source: Option<usize>,
    pub transform: Transform,
}

impl SurfaceDecoration {
    /// Places the decoration on the un-rotated globe.
    pub fn new(coordinate: GeoCoordinate, radius: f64, kind: DecorationKind) -> GeoResult<Self> {
        let position = project(coordinate, radius)?;
        Ok(Self {
            coordinate,
            radius,
            kind,
            source: None,
            transform: Transform {
                position,
                orientation: outward(position),
                scale: 1.0,
            },
        })
    }

    pub fn with_source(mut self, index: usize) -> Self {
        self.source = Some(index);
        self
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> Point3D {
        self.transform.position
    }

    pub fn to_instance(&self) -> DecorationInstance {
        DecorationInstance::from_transform(&self.transform)
    }
}

fn outward(position: Point3D) -> Basis {
    Basis::looking_at(position, position * 2.0)
}

/// Per-frame updater. Stateless: the result depends only on each decoration's
/// anchor and the rotation passed in.
#[derive(Debug, Default, Clone, Copy)]
pub struct SurfaceTracker;

impl SurfaceTracker {
    pub fn update(decorations: &mut [SurfaceDecoration], rotation_y: f64) {
        for decoration in decorations.iter_mut() {
            Self::update_one(decoration, rotation_y);
        }
    }

    pub fn update_one(decoration: &mut SurfaceDecoration, rotation_y: f64) {
        // Radius was validated on construction
        let position =
            project_unchecked(decoration.coordinate, decoration.radius).rotate_y(rotation_y);

        decoration.transform.position = position;
        decoration.transform.orientation = outward(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn flag(lat: f64, lon: f64) -> SurfaceDecoration {
        SurfaceDecoration::new(
            GeoCoordinate::new(lat, lon).unwrap(),
            1.02,
            DecorationKind::Flag {
                width: 0.12,
                height: 0.07,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_bad_radius() {
        let c = GeoCoordinate::new(0.0, 0.0).unwrap();
        assert!(SurfaceDecoration::new(c, 0.0, DecorationKind::Marker { size: 0.02 }).is_err());
    }

    #[test]
    fn test_update_rotates_about_y() {
        let mut decorations = vec![flag(0.0, 0.0)];
        SurfaceTracker::update(&mut decorations, FRAC_PI_2);
        let p = decorations[0].position();
        assert!(p.abs_diff_eq(Point3D::new(0.0, 0.0, -1.02), 1e-12), "got {:?}", p);
    }

    #[test]
    fn test_update_moves_every_decoration() {
        let marker = SurfaceDecoration::new(
            GeoCoordinate::new(-45.0, 170.0).unwrap(),
            1.3,
            DecorationKind::Marker { size: 0.02 },
        )
        .unwrap();
        let mut decorations = vec![flag(0.0, 0.0), marker, flag(89.0, -120.0)];
        let before: Vec<_> = decorations.iter().map(|d| d.position()).collect();

        SurfaceTracker::update(&mut decorations, 2.0);

        for (d, old) in decorations.iter().zip(before) {
            let expected = project(d.coordinate(), d.radius()).unwrap().rotate_y(2.0);
            assert!(d.position().abs_diff_eq(expected, 1e-12));
            assert!(!d.position().abs_diff_eq(old, 1e-6));
        }
    }

    #[test]
    fn test_update_faces_outward() {
        let mut decorations = vec![flag(35.0, 139.0), flag(-70.0, -20.0)];
        SurfaceTracker::update(&mut decorations, 0.7);
        for d in &decorations {
            let radial = d.position().normalize();
            assert!(d.transform.orientation.z_axis.abs_diff_eq(radial, 1e-12));
        }
    }

    #[test]
    fn test_update_does_not_accumulate() {
        let mut decorations = vec![flag(48.8566, 2.3522)];
        SurfaceTracker::update(&mut decorations, 1.1);
        let first = decorations[0].transform;
        SurfaceTracker::update(&mut decorations, 1.1);
        assert_eq!(decorations[0].transform, first);
    }

    #[test]
    fn test_bounding_radius() {
        let k = DecorationKind::Flag {
            width: 0.6,
            height: 0.8,
        };
        assert!((k.bounding_radius() - 0.5).abs() < 1e-12);
        assert_eq!(DecorationKind::Marker { size: 0.02 }.bounding_radius(), 0.02);
    }

    #[test]
    fn test_model_matrix_translation() {
        let d = flag(10.0, 20.0);
        let m = d.transform.model_matrix();
        let t = Point3D::from(m.w_axis.truncate());
        assert!(t.abs_diff_eq(d.position(), 1e-12));
    }
}
