use crate::camera::data_camera::CameraData;
use crate::config::StarfieldConfig;

/// Smoothed camera offset that trails the pointer
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParallaxState {
    pub offset_x: f32,
    pub offset_y: f32,
}

/// One exponential-smoothing step toward the pointer offset.
///
/// `pointer_offset` is screen-centered with +y pointing down; the camera follows
/// with y flipped. Returns the camera moved to the scaled offset.
pub fn update_camera_parallax(
    state: &mut ParallaxState,
    camera: &CameraData,
    pointer_offset: (f32, f32),
    config: &StarfieldConfig,
) -> CameraData {
    let smoothing = config.parallax.smoothing;
    let (target_x, target_y) = (pointer_offset.0, -pointer_offset.1);

    state.offset_x += (target_x - state.offset_x) * smoothing;
    state.offset_y += (target_y - state.offset_y) * smoothing;

    let mut updated = *camera;
    updated.position[0] = state.offset_x * config.camera.parallax_factor;
    updated.position[1] = state.offset_y * config.camera.parallax_factor;
    updated
}
