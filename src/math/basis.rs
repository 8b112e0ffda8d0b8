use glam::{DMat3, DQuat};

use super::Point3D;

/// Orthonormal frame of an object. `z_axis` is the facing direction, matching the
/// convention where an object's local +Z is turned toward its look-at target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Basis {
    pub x_axis: Point3D,
    pub y_axis: Point3D,
    pub z_axis: Point3D,
}

impl Basis {
    pub const IDENTITY: Self = Self {
        x_axis: Point3D::X,
        y_axis: Point3D::Y,
        z_axis: Point3D::Z,
    };

    /// Frame at `eye` whose +Z points at `target`, keeping +Y as close to world up
    /// as possible. Looking straight up or down falls back to +Z as the up hint.
    /// Coincident `eye` and `target` yield the identity frame.
    pub fn looking_at(eye: Point3D, target: Point3D) -> Self {
        let forward = (target - eye).normalize();
        if forward == Point3D::ZERO {
            return Self::IDENTITY;
        }

        let mut up_hint = Point3D::Y;
        if forward.cross(up_hint).length() < 1e-9 {
            up_hint = Point3D::Z;
        }

        let x_axis = up_hint.cross(forward).normalize();
        let y_axis = forward.cross(x_axis);

        Self {
            x_axis,
            y_axis,
            z_axis: forward,
        }
    }

    pub fn to_mat3(self) -> DMat3 {
        DMat3::from_cols(self.x_axis.into(), self.y_axis.into(), self.z_axis.into())
    }

    pub fn to_quat(self) -> DQuat {
        DQuat::from_mat3(&self.to_mat3())
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}
