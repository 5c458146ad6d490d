//! Simulation context
//!
//! [`Starfield`] owns every piece of per-instance state. The host drives it by forwarding
//! input events and calling [`Starfield::tick`] once per display refresh.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::{init_camera, update_aspect_ratio, update_camera_parallax, CameraData, ParallaxState};
use crate::config::StarfieldConfig;
use crate::environment::{detect_environment, DeviceSignals, Environment};
use crate::error::StarfieldResult;
use crate::input::{PointerState, Viewport};
use crate::particles::{explode_star, populate_stars, update_stars, BufferChanges, StarData};
use crate::picking::{RaycastThrottle, Ray};
use crate::renderer::{RenderBackend, RenderSettings};
use crate::time::ResizeDebouncer;

/// Result of one hit-test opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaycastOutcome {
    /// Throttled, disabled, or the pointer did not move
    Skipped,
    Missed,
    Exploded(usize),
    /// The nearest hit was already exploding
    AlreadyExploded(usize),
}

pub struct Starfield {
    config: StarfieldConfig,
    env: Environment,
    stars: StarData,
    camera: CameraData,
    parallax: ParallaxState,
    pointer: PointerState,
    throttle: RaycastThrottle,
    resize: ResizeDebouncer,
    viewport: Viewport,
    rng: StdRng,
    frame: u64,
}

impl Starfield {
    /// Build a starfield with an entropy-seeded random source.
    ///
    /// `config` must already have passed [`StarfieldConfig::validate`]; out-of-range
    /// probabilities panic in the update walk. [`Starfield::initialize`] checks it.
    pub fn new(config: StarfieldConfig, env: Environment, viewport: Viewport) -> Self {
        Self::with_rng(config, env, viewport, StdRng::from_entropy())
    }

    /// Build a starfield whose randomness is reproducible
    pub fn with_seed(config: StarfieldConfig, env: Environment, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, env, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: StarfieldConfig, env: Environment, viewport: Viewport, mut rng: StdRng) -> Self {
        let mut stars = StarData::new(env.star_count);
        populate_stars(&mut stars, &config, &mut rng);

        let camera = init_camera(&config, viewport.width, viewport.height);
        let throttle = RaycastThrottle::new(config.raycasting.throttle_ms);
        let resize = ResizeDebouncer::new(config.performance.resize_debounce_ms);

        Self {
            config,
            env,
            stars,
            camera,
            parallax: ParallaxState::default(),
            pointer: PointerState::new(),
            throttle,
            resize,
            viewport,
            rng,
            frame: 0,
        }
    }

    /// Validate the config, detect the environment, build the starfield and hand the
    /// backend its settings. Nothing reaches the backend if the config is rejected.
    pub fn initialize<B: RenderBackend + ?Sized>(
        config: StarfieldConfig,
        signals: &DeviceSignals,
        viewport: Viewport,
        backend: &mut B,
    ) -> StarfieldResult<Self> {
        config.validate()?;

        let env = detect_environment(&config, signals);
        let settings = RenderSettings::from_environment(&env, signals);

        backend.configure(&settings);
        backend.resize(viewport.width, viewport.height);

        log::info!(
            "Starfield initialized: {} stars (mobile: {}, reduced motion: {}, raycast: {}, stride: {})",
            env.star_count,
            env.is_mobile,
            env.prefers_reduced_motion,
            env.should_raycast,
            env.update_stride,
        );

        Ok(Self::new(config, env, viewport))
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn stars(&self) -> &StarData {
        &self.stars
    }

    pub fn camera(&self) -> &CameraData {
        &self.camera
    }

    pub fn parallax(&self) -> &ParallaxState {
        &self.parallax
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Record pointer movement. Ignored on mobile, where no pointer tracking runs.
    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        if self.env.is_mobile {
            return;
        }
        self.pointer.record_move(client_x, client_y, self.viewport);
    }

    /// Note a viewport change; the camera and renderer follow after the debounce period
    pub fn on_resize(&mut self, now_ms: f64, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.resize.schedule(now_ms, width, height);
    }

    /// Advance every (strided) star by one tick and move on to the next stride phase
    pub fn step(&mut self, dt: f32, now_ms: f64) -> BufferChanges {
        let changes = update_stars(
            &mut self.stars,
            &self.config,
            &self.env,
            &mut self.rng,
            dt,
            now_ms,
            self.frame,
        );
        self.frame += 1;
        changes
    }

    /// Ease the camera toward the pointer. No-op under reduced motion.
    pub fn update_parallax(&mut self) {
        if self.env.prefers_reduced_motion {
            return;
        }
        self.camera = update_camera_parallax(
            &mut self.parallax,
            &self.camera,
            self.pointer.offset(),
            &self.config,
        );
    }

    /// Explode one star. Returns `false` if it was already exploding or out of range.
    pub fn explode(&mut self, index: usize, now_ms: f64) -> bool {
        if index >= self.stars.count {
            log::warn!("Ignoring explosion for out-of-range star {}", index);
            return false;
        }
        explode_star(&mut self.stars, &self.config, &mut self.rng, index, now_ms)
    }

    /// Run a throttled hit-test under the pointer and explode the nearest star hit
    pub fn maybe_raycast<B: RenderBackend + ?Sized>(&mut self, now_ms: f64, backend: &B) -> RaycastOutcome {
        if !self
            .throttle
            .should_fire(now_ms, self.pointer.has_moved(), self.env.should_raycast)
        {
            return RaycastOutcome::Skipped;
        }

        self.throttle.record(now_ms);
        self.pointer.clear_moved();

        let Some(ray) = Ray::from_camera(&self.camera, self.pointer.ndc()) else {
            return RaycastOutcome::Missed;
        };

        let hits = backend.intersect_points(
            &ray,
            &self.stars.positions,
            self.config.raycasting.threshold,
            self.camera.znear,
            self.camera.zfar,
        );

        match hits.first() {
            None => RaycastOutcome::Missed,
            Some(hit) if self.explode(hit.index, now_ms) => RaycastOutcome::Exploded(hit.index),
            Some(hit) => RaycastOutcome::AlreadyExploded(hit.index),
        }
    }

    /// Apply a debounced resize if its quiet period has passed
    fn apply_pending_resize<B: RenderBackend + ?Sized>(&mut self, now_ms: f64, backend: &mut B) {
        if let Some((width, height)) = self.resize.poll(now_ms) {
            self.camera = update_aspect_ratio(&self.camera, width, height);
            backend.resize(width, height);
            log::info!("Viewport resized to {}x{}", width, height);
        }
    }

    /// One full frame: resize, simulate, parallax, hit-test, upload, draw
    pub fn tick<B: RenderBackend + ?Sized>(&mut self, dt: f32, now_ms: f64, backend: &mut B) -> RaycastOutcome {
        self.apply_pending_resize(now_ms, backend);

        let changes = self.step(dt, now_ms);
        self.update_parallax();
        let outcome = self.maybe_raycast(now_ms, backend);

        backend.upload(&self.stars, changes);
        backend.render(&self.camera);

        outcome
    }
}
