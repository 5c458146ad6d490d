// Starfield Engine Constants
//
// Fixed values that are not part of the tunable configuration document.
// Everything a site owner may want to tweak lives in `config.json` instead.

/// Store limits
pub mod stars {
    /// Hard upper bound on the star count accepted from configuration
    pub const MAX_STARS: usize = 1_000_000;

    /// Floats per star in the position and color buffers
    pub const COMPONENTS: usize = 3;
}

/// Device classification
pub mod device {
    /// User-agent fragments that mark a mobile browser (matched case-insensitively)
    pub const MOBILE_USER_AGENT_TOKENS: &[&str] = &[
        "android",
        "webos",
        "iphone",
        "ipad",
        "ipod",
        "blackberry",
        "iemobile",
        "opera mini",
    ];

    /// Pixel ratio assumed when the host does not report one
    pub const DEFAULT_DEVICE_PIXEL_RATIO: f32 = 1.0;
}

/// Renderer-side presentation values
pub mod render {
    /// Background clear color (0x0a0e27)
    pub const CLEAR_COLOR: [f32; 3] = [10.0 / 255.0, 14.0 / 255.0, 39.0 / 255.0];

    /// Exponential fog density applied to the scene
    pub const FOG_DENSITY: f32 = 0.00025;

    /// Numerator of the perspective point-size attenuation (`size * ratio * scale / -view_z`)
    pub const POINT_SIZE_SCALE: f32 = 300.0;
}

/// Viewport used before the host reports its size
pub mod viewport {
    pub const DEFAULT_WIDTH: u32 = 1280;
    pub const DEFAULT_HEIGHT: u32 = 720;
}
