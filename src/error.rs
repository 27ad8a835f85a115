use thiserror::Error;

/// Main error type for block mover operations.
///
/// The animation core cannot fail once its configuration has been accepted;
/// every variant is either a configuration problem caught up front or a
/// failure reported by the window host.
#[derive(Error, Debug)]
pub enum MoverError {
    /// The palette has no colors, so there would be no nodes to animate
    #[error("Configuration error: palette must contain at least one color")]
    EmptyPalette,

    /// A part count of zero would divide the progress range by zero
    #[error("Configuration error: part count must be greater than zero")]
    ZeroParts,

    /// A window with no area cannot back a pixel buffer
    #[error("Configuration error: window size must be non-zero, got {width}x{height}")]
    ZeroWindowSize { width: u32, height: u32 },

    /// A sizing or step factor that must be a positive finite number
    #[error("Configuration error: {name} must be positive and finite, got {value}")]
    InvalidFactor { name: &'static str, value: f32 },

    /// Errors raised while creating or running the event loop
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Errors raised by the OS while creating the window
    #[error("Window error: {0}")]
    Window(#[from] winit::error::OsError),

    /// Errors raised by the pixel buffer
    #[error("Pixel buffer error: {0}")]
    Pixels(#[from] pixels::Error),

    /// Errors raised while resizing the pixel buffer texture
    #[error("Texture error: {0}")]
    Texture(#[from] pixels::TextureError),
}

/// Result type alias for block mover operations
pub type Result<T> = std::result::Result<T, MoverError>;
