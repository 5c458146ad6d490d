//! Device and accessibility detection
//!
//! Turns host signals into the immutable [`Environment`] that sizes the star store
//! and switches the expensive features on or off.

use crate::config::StarfieldConfig;
use crate::constants::device::{DEFAULT_DEVICE_PIXEL_RATIO, MOBILE_USER_AGENT_TOKENS};

/// Raw signals read from the host once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSignals {
    pub user_agent: Option<String>,
    pub prefers_reduced_motion: bool,
    pub device_pixel_ratio: f32,
}

impl Default for DeviceSignals {
    fn default() -> Self {
        Self {
            user_agent: None,
            prefers_reduced_motion: false,
            device_pixel_ratio: DEFAULT_DEVICE_PIXEL_RATIO,
        }
    }
}

impl DeviceSignals {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.prefers_reduced_motion = reduced;
        self
    }
}

/// Environment descriptor derived from config and device signals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub is_mobile: bool,
    pub prefers_reduced_motion: bool,
    pub should_raycast: bool,
    pub star_count: usize,
    /// Every k-th star is updated per tick
    pub update_stride: usize,
    pub pixel_ratio_cap: f32,
    pub antialias: bool,
}

impl Environment {
    /// Whether normal stars may randomly turn into falling stars
    pub fn falling_stars_enabled(&self) -> bool {
        !self.is_mobile && !self.prefers_reduced_motion
    }
}

/// Whether a user-agent string belongs to a mobile browser
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let lowered = user_agent.to_ascii_lowercase();
    MOBILE_USER_AGENT_TOKENS
        .iter()
        .any(|token| lowered.contains(token))
}

/// Build the environment descriptor. Unknown signals take the desktop path.
pub fn detect_environment(config: &StarfieldConfig, signals: &DeviceSignals) -> Environment {
    let is_mobile = signals
        .user_agent
        .as_deref()
        .map(is_mobile_user_agent)
        .unwrap_or(false);
    let prefers_reduced_motion = signals.prefers_reduced_motion;
    let perf = &config.performance;

    let (star_count, update_stride, pixel_ratio_cap) = if is_mobile {
        (
            config.star_field.count_mobile,
            perf.mobile_update_interval,
            perf.pixel_ratio_max_mobile,
        )
    } else {
        (
            config.star_field.count_desktop,
            perf.desktop_update_interval,
            perf.pixel_ratio_max_desktop,
        )
    };

    Environment {
        is_mobile,
        prefers_reduced_motion,
        should_raycast: !is_mobile && !prefers_reduced_motion,
        star_count,
        update_stride: update_stride.max(1),
        pixel_ratio_cap,
        antialias: !is_mobile,
    }
}
