/// CameraUniform: the view transform laid out for a GPU uniform buffer.

use bytemuck::{Pod, Zeroable};
use super::camera::Camera;

/// Camera data for upload to a uniform buffer.
///
/// `view` is column-major, matching `glam::Mat4::to_cols_array_2d()`.
/// Padded to a 16-byte multiple.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct CameraUniform {
    /// World → viewport pixel transform
    pub view: [[f32; 4]; 4],
    /// Camera center in world space
    pub position: [f32; 2],
    /// Magnification factor
    pub zoom: f32,
    pub _padding: f32,
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            position: camera.position().to_array(),
            zoom: camera.zoom(),
            _padding: 0.0,
        }
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
