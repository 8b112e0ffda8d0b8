use crate::tracker::Transform;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub time: f32, // Seconds since start, drives cloud/atmosphere shaders
    pub forward: [f32; 3],
    pub globe_rotation: f32,
}

/// Per-instance data for one surface decoration
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DecorationInstance {
    pub model: [[f32; 4]; 4],
}

impl DecorationInstance {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            model: transform.model_matrix().as_mat4().to_cols_array_2d(),
        }
    }
}
