use super::Point3D;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3D,
    /// Unit length.
    pub direction: Point3D,
}

impl Ray {
    pub fn new(origin: Point3D, direction: Point3D) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn at(&self, t: f64) -> Point3D {
        self.origin + self.direction * t
    }

    /// Nearest positive hit distance against a sphere.
    /// When the origin is inside the sphere the exit distance is returned.
    pub fn intersect_sphere(&self, center: Point3D, radius: f64) -> Option<f64> {
        const T_MIN: f64 = 1e-9;

        let oc = self.origin - center;
        let a = self.direction.dot(self.direction);
        let half_b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t = (-half_b - sqrt_d) / a;
        if t > T_MIN {
            return Some(t);
        }

        let t = (-half_b + sqrt_d) / a;
        if t > T_MIN {
            Some(t)
        } else {
            None
        }
    }
}
