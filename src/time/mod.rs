pub mod clock;
pub mod debounce;

pub use clock::FrameClock;
pub use debounce::ResizeDebouncer;
