/// Viewport size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pointer state recorded by move events and consumed once per frame.
///
/// Event handlers only write here; the simulation buffers are never touched from
/// an input callback.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Offset from the viewport center, +y down
    offset: (f32, f32),
    /// Normalized device coordinates, +y up
    ndc: (f32, f32),
    moved: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_move(&mut self, client_x: f32, client_y: f32, viewport: Viewport) {
        let width = viewport.width.max(1) as f32;
        let height = viewport.height.max(1) as f32;

        self.offset = (client_x - width / 2.0, client_y - height / 2.0);
        self.ndc = (
            (client_x / width) * 2.0 - 1.0,
            -(client_y / height) * 2.0 + 1.0,
        );
        self.moved = true;
    }

    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    pub fn ndc(&self) -> (f32, f32) {
        self.ndc
    }

    /// Whether the pointer moved since the last hit-test
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub fn clear_moved(&mut self) {
        self.moved = false;
    }
}
