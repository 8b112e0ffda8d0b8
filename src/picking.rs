use crate::geo::{unproject, GeoCoordinate};
use crate::math::{Point3D, Ray};
use crate::tracker::SurfaceDecoration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickHit {
    /// Index into the decoration slice that was tested.
    Decoration { index: usize, distance: f64 },
    /// Point on the globe surface, with the spin removed.
    Globe {
        coordinate: GeoCoordinate,
        distance: f64,
    },
}

impl PickHit {
    pub fn distance(&self) -> f64 {
        match *self {
            PickHit::Decoration { distance, .. } | PickHit::Globe { distance, .. } => distance,
        }
    }
}

/// Nearest decoration hit along `ray`, tested against each decoration's
/// bounding sphere at its current position.
pub fn pick_decoration(ray: &Ray, decorations: &[SurfaceDecoration]) -> Option<PickHit> {
    decorations
        .iter()
        .enumerate()
        .filter_map(|(index, d)| {
            ray.intersect_sphere(d.position(), d.kind.bounding_radius())
                .map(|distance| PickHit::Decoration { index, distance })
        })
        .min_by(|a, b| a.distance().total_cmp(&b.distance()))
}

/// Where `ray` meets a globe of `radius` spun by `rotation_y`, as a coordinate.
pub fn pick_globe(ray: &Ray, radius: f64, rotation_y: f64) -> Option<PickHit> {
    let distance = ray.intersect_sphere(Point3D::ZERO, radius)?;
    let local = ray.at(distance).rotate_y(-rotation_y);
    let coordinate = unproject(local).ok()?;
    Some(PickHit::Globe {
        coordinate,
        distance,
    })
}

/// Closest of a decoration hit and a globe hit.
pub fn pick(
    ray: &Ray,
    decorations: &[SurfaceDecoration],
    globe_radius: f64,
    rotation_y: f64,
) -> Option<PickHit> {
    let decoration = pick_decoration(ray, decorations);
    let globe = pick_globe(ray, globe_radius, rotation_y);

    match (decoration, globe) {
        (Some(d), Some(g)) => Some(if d.distance() <= g.distance() { d } else { g }),
        (d, g) => d.or(g),
    }
}
