use crate::camera::{build_camera_uniform, CameraData, CameraUniform};
use crate::particles::{BufferChanges, StarData};
use crate::renderer::{prepare_render_data, RenderBackend, RenderSettings, StarVertex};

/// Backend with no display: packs uploads into a vertex buffer and counts frames.
///
/// Used by the native runner and by tests that need to observe what a real renderer
/// would receive.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    pub settings: Option<RenderSettings>,
    pub size: Option<(u32, u32)>,
    pub resize_count: usize,
    pub upload_count: usize,
    pub last_changes: BufferChanges,
    pub frames_rendered: u64,
    pub last_camera: Option<CameraUniform>,
    pub vertices: Vec<StarVertex>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for HeadlessBackend {
    fn configure(&mut self, settings: &RenderSettings) {
        log::debug!("Headless backend configured: {:?}", settings);
        self.settings = Some(*settings);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
        self.resize_count += 1;
    }

    fn upload(&mut self, stars: &StarData, changes: BufferChanges) {
        self.last_changes = changes;
        if !changes.any() {
            return;
        }
        prepare_render_data(stars, &mut self.vertices);
        self.upload_count += 1;
    }

    fn render(&mut self, camera: &CameraData) {
        self.last_camera = Some(build_camera_uniform(camera));
        self.frames_rendered += 1;
    }
}
