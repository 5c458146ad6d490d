/// Camera Module
///
/// Data-oriented camera plus the pointer-driven parallax follow.

pub mod data_camera;
pub mod parallax;

pub use data_camera::{
    build_camera_uniform, build_projection_matrix, build_view_matrix, init_camera,
    unproject_ndc, update_aspect_ratio, CameraData, CameraUniform,
};
pub use parallax::{update_camera_parallax, ParallaxState};
