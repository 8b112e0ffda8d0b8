use glam::{DMat4, DVec3, DVec4};

use crate::math::{Point3D, Ray};
use crate::types::CameraUniform;

pub const ORBIT_ROTATION_SPEED: f64 = 0.005;
pub const MAX_PITCH: f64 = std::f64::consts::FRAC_PI_2 - 0.017;

/// Perspective camera orbiting the globe. It always looks at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobeCamera {
    position: Point3D,
    pub fov_y: f64,
    pub aspect: f64,
    pub z_near: f64,
    pub z_far: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for GlobeCamera {
    fn default() -> Self {
        Self {
            position: Point3D::new(0.0, 0.0, 2.5),
            fov_y: 45f64.to_radians(),
            aspect: 1.0,
            z_near: 0.1,
            z_far: 1000.0,
            min_distance: 1.5,
            max_distance: 6.0,
        }
    }
}

impl GlobeCamera {
    /// Camera at the default position with the given field of view and zoom range.
    pub fn new(fov_y: f64, min_distance: f64, max_distance: f64) -> Self {
        Self {
            fov_y,
            min_distance,
            max_distance,
            ..Self::default()
        }
    }

    pub fn position(&self) -> Point3D {
        self.position
    }

    /// Moves the camera; orientation follows since the camera looks at the origin.
    pub fn set_position(&mut self, position: Point3D) {
        self.position = position;
    }

    pub fn distance(&self) -> f64 {
        self.position.length()
    }

    pub fn forward(&self) -> Point3D {
        (-self.position).normalize()
    }

    pub fn right(&self) -> Point3D {
        self.forward().cross(self.up_hint()).normalize()
    }

    pub fn up(&self) -> Point3D {
        self.right().cross(self.forward())
    }

    // World up, except right over a pole where it would be parallel to forward
    fn up_hint(&self) -> Point3D {
        if self.forward().cross(Point3D::Y).length() < 1e-9 {
            Point3D::Z
        } else {
            Point3D::Y
        }
    }

    /// Rotates around the origin by yaw/pitch deltas (radians), keeping distance and
    /// staying clear of the poles.
    pub fn orbit(&mut self, delta_yaw: f64, delta_pitch: f64) {
        let distance = self.distance();
        if distance == 0.0 {
            return;
        }
        let dir = self.position.normalize();
        let pitch = dir.y.clamp(-1.0, 1.0).asin();
        let yaw = dir.x.atan2(dir.z);

        let pitch = (pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
        let yaw = yaw + delta_yaw;

        self.position = Point3D::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            yaw.cos() * pitch.cos(),
        ) * distance;
    }

    /// Pointer drag in pixels, as orbit controls do.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.orbit(-dx * ORBIT_ROTATION_SPEED, dy * ORBIT_ROTATION_SPEED);
    }

    /// Multiplies the distance by `factor` and clamps to [min_distance, max_distance].
    pub fn zoom(&mut self, factor: f64) {
        let distance = (self.distance() * factor).clamp(self.min_distance, self.max_distance);
        self.position = self.position.normalize() * distance;
    }

    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position.into(), DVec3::ZERO, self.up_hint().into())
    }

    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fov_y, self.aspect.max(1e-3), self.z_near, self.z_far)
    }

    pub fn view_proj(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn to_uniform(&self, time: f32, globe_rotation: f32) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().as_mat4().to_cols_array_2d(),
            position: self.position.to_f32_array(),
            time,
            forward: self.forward().to_f32_array(),
            globe_rotation,
        }
    }

    /// Ray through normalized device coordinates (x right, y up, both in [-1, 1]).
    pub fn pick_ray(&self, ndc_x: f64, ndc_y: f64) -> Ray {
        let inv = self.view_proj().inverse();
        let near = inv * DVec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inv * DVec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = Point3D::from(near.truncate() / near.w);
        let far = Point3D::from(far.truncate() / far.w);
        Ray::new(self.position, far - near)
    }
}

/// Converts a pixel position inside a `width` x `height` viewport to NDC.
pub fn screen_to_ndc(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    ((x / width) * 2.0 - 1.0, -(y / height) * 2.0 + 1.0)
}
