//! Browser binding
//!
//! The page's graphics library stays in JavaScript. This wrapper reads the device
//! signals from the window, checks the mount element, and exposes the simulation
//! buffers so the page can copy them into its point geometry every frame.
use wasm_bindgen::prelude::*;

use crate::camera::CameraData;
use crate::config::StarfieldConfig;
use crate::constants::device::DEFAULT_DEVICE_PIXEL_RATIO;
use crate::constants::viewport::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::environment::DeviceSignals;
use crate::error::StarfieldError;
use crate::input::Viewport;
use crate::particles::{BufferChanges, StarData};
use crate::renderer::{RenderBackend, RenderSettings};
use crate::starfield::{RaycastOutcome, Starfield};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Collects what the page has to apply on its side
#[derive(Debug, Default)]
struct PageBridge {
    settings: Option<RenderSettings>,
    pending_size: Option<(u32, u32)>,
    changes: BufferChanges,
    camera_position: [f32; 3],
}

impl RenderBackend for PageBridge {
    fn configure(&mut self, settings: &RenderSettings) {
        self.settings = Some(*settings);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.pending_size = Some((width, height));
    }

    fn upload(&mut self, _stars: &StarData, changes: BufferChanges) {
        self.changes = self.changes.merge(changes);
    }

    fn render(&mut self, camera: &CameraData) {
        self.camera_position = camera.position;
    }
}

fn startup_error(error: StarfieldError) -> JsValue {
    log::error!("Starfield not started: {}", error);
    JsValue::from_str(&error.to_string())
}

fn read_signals(window: &web_sys::Window) -> DeviceSignals {
    let user_agent = window.navigator().user_agent().ok();
    let prefers_reduced_motion = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    let ratio = window.device_pixel_ratio() as f32;

    DeviceSignals {
        user_agent,
        prefers_reduced_motion,
        device_pixel_ratio: if ratio > 0.0 { ratio } else { DEFAULT_DEVICE_PIXEL_RATIO },
    }
}

fn read_viewport(window: &web_sys::Window) -> Viewport {
    let dimension = |value: Result<JsValue, JsValue>, fallback: u32| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v as u32)
            .unwrap_or(fallback)
    };
    Viewport::new(
        dimension(window.inner_width(), DEFAULT_WIDTH),
        dimension(window.inner_height(), DEFAULT_HEIGHT),
    )
}

#[wasm_bindgen]
pub struct WebStarfield {
    starfield: Starfield,
    bridge: PageBridge,
}

#[wasm_bindgen]
impl WebStarfield {
    /// Start from an already-fetched config document. Fails if the config is invalid
    /// or the mount element is missing.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, mount_id: &str) -> Result<WebStarfield, JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let config = StarfieldConfig::from_json_str(config_json).map_err(startup_error)?;

        let window = web_sys::window()
            .ok_or_else(|| startup_error(StarfieldError::JsError("no window".to_string())))?;
        let document = window
            .document()
            .ok_or_else(|| startup_error(StarfieldError::JsError("no document".to_string())))?;
        if document.get_element_by_id(mount_id).is_none() {
            return Err(startup_error(StarfieldError::MissingMount(mount_id.to_string())));
        }

        let signals = read_signals(&window);
        let viewport = read_viewport(&window);
        let mut bridge = PageBridge::default();
        let starfield =
            Starfield::initialize(config, &signals, viewport, &mut bridge).map_err(startup_error)?;

        Ok(WebStarfield { starfield, bridge })
    }

    /// Run one frame. Returns true when the pointer exploded a star.
    pub fn tick(&mut self, dt_seconds: f32, now_ms: f64) -> bool {
        matches!(
            self.starfield.tick(dt_seconds, now_ms, &mut self.bridge),
            RaycastOutcome::Exploded(_)
        )
    }

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.starfield.on_pointer_move(client_x, client_y);
    }

    pub fn resize(&mut self, now_ms: f64, width: u32, height: u32) {
        self.starfield.on_resize(now_ms, width, height);
    }

    /// `[width, height]` once a debounced resize is due, otherwise empty
    pub fn take_resize(&mut self) -> Vec<u32> {
        match self.bridge.pending_size.take() {
            Some((width, height)) => vec![width, height],
            None => Vec::new(),
        }
    }

    /// Whether buffers changed since the last call
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.bridge.changes).any()
    }

    pub fn star_count(&self) -> usize {
        self.starfield.stars().len()
    }

    pub fn positions(&self) -> Vec<f32> {
        self.starfield.stars().positions.clone()
    }

    pub fn colors(&self) -> Vec<f32> {
        self.starfield.stars().colors.clone()
    }

    pub fn sizes(&self) -> Vec<f32> {
        self.starfield.stars().sizes.clone()
    }

    pub fn opacities(&self) -> Vec<f32> {
        self.starfield.stars().opacities.clone()
    }

    pub fn camera_position(&self) -> Vec<f32> {
        self.bridge.camera_position.to_vec()
    }

    pub fn camera_fov(&self) -> f32 {
        self.starfield.camera().fovy_degrees
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.bridge
            .settings
            .map(|s| s.pixel_ratio)
            .unwrap_or(DEFAULT_DEVICE_PIXEL_RATIO)
    }

    pub fn antialias(&self) -> bool {
        self.bridge.settings.map(|s| s.antialias).unwrap_or(false)
    }
}
