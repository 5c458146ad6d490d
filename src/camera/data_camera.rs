/// Data-Oriented Camera
///
/// Plain data plus free functions. The starfield camera never rotates: it sits at
/// `camera.initialZ` looking down -Z, and only its x/y move with parallax.
use bytemuck::{Pod, Zeroable};
use cgmath::{perspective, Deg, Matrix4, Point3, SquareMatrix, Vector3, Vector4};

use crate::config::StarfieldConfig;

/// Camera data as a plain old data structure
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraData {
    pub position: [f32; 3],
    pub aspect_ratio: f32,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// Camera uniform buffer for GPU backends
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_matrix: [[f32; 4]; 4],
    pub projection_matrix: [[f32; 4]; 4],
    pub position: [f32; 3],
    _padding: f32,
}

fn aspect(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Initialize camera data from configuration and the viewport size
pub fn init_camera(config: &StarfieldConfig, width: u32, height: u32) -> CameraData {
    let camera = &config.camera;
    CameraData {
        position: [0.0, 0.0, camera.initial_z],
        aspect_ratio: aspect(width, height),
        fovy_degrees: camera.fov,
        znear: camera.near,
        zfar: camera.far,
    }
}

/// Update camera aspect ratio for window resize
pub fn update_aspect_ratio(camera: &CameraData, width: u32, height: u32) -> CameraData {
    let mut updated = *camera;
    updated.aspect_ratio = aspect(width, height);
    updated
}

/// Build view matrix from camera data
pub fn build_view_matrix(camera: &CameraData) -> Matrix4<f32> {
    let [x, y, z] = camera.position;
    Matrix4::look_to_rh(
        Point3::new(x, y, z),
        -Vector3::unit_z(),
        Vector3::unit_y(),
    )
}

/// Build projection matrix from camera data
pub fn build_projection_matrix(camera: &CameraData) -> Matrix4<f32> {
    perspective(
        Deg(camera.fovy_degrees),
        camera.aspect_ratio,
        camera.znear,
        camera.zfar,
    )
}

/// Map a normalized-device-coordinate point back into world space.
///
/// Returns `None` if the view-projection matrix is singular.
pub fn unproject_ndc(camera: &CameraData, ndc_x: f32, ndc_y: f32, ndc_z: f32) -> Option<Vector3<f32>> {
    let view_proj = build_projection_matrix(camera) * build_view_matrix(camera);
    let inverse = view_proj.invert()?;
    let clip = inverse * Vector4::new(ndc_x, ndc_y, ndc_z, 1.0);
    if clip.w.abs() <= f32::EPSILON {
        return None;
    }
    Some(clip.truncate() / clip.w)
}

/// Build camera uniform buffer for GPU
pub fn build_camera_uniform(camera: &CameraData) -> CameraUniform {
    CameraUniform {
        view_matrix: build_view_matrix(camera).into(),
        projection_matrix: build_projection_matrix(camera).into(),
        position: camera.position,
        _padding: 0.0,
    }
}
