pub mod camera;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod input;
pub mod particles;
pub mod picking;
pub mod renderer;
pub mod starfield;
pub mod time;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use camera::{CameraData, ParallaxState};
pub use config::{ConfigFormat, StarfieldConfig};
pub use environment::{detect_environment, DeviceSignals, Environment};
pub use error::{StarfieldError, StarfieldResult};
pub use input::{PointerState, Viewport};
pub use particles::{BufferChanges, ExplosionRecord, StarData, StarState};
pub use picking::{intersect_point_cloud, PointHit, Ray, RaycastThrottle};
pub use renderer::{HeadlessBackend, RenderBackend, RenderSettings, StarVertex};
pub use starfield::{RaycastOutcome, Starfield};
pub use time::{FrameClock, ResizeDebouncer};
