use std::time::Duration;

use bon::Builder;

use crate::error::{MoverError, Result};

/// Color representation for glyph and background fills
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// Default node colors, one node per entry
pub const DEFAULT_PALETTE: [Color; 5] = [
    Color::from_hex(0xF44336),
    Color::from_hex(0x3F51B5),
    Color::from_hex(0x4CAF50),
    Color::from_hex(0xFF9800),
    Color::from_hex(0x009688),
];

pub const DEFAULT_BACKGROUND: Color = Color::from_hex(0xBDBDBD);

/// Number of staged parts in the glyph: line, drop, tilt, slide, spin
pub const PARTS: usize = 5;

/// Immutable settings for one block mover view.
///
/// Built once at startup and shared by reference with the chain, the glyph
/// renderer and the animation driver.
#[derive(Debug, Clone, Builder)]
pub struct MoverConfig {
    #[builder(default = "Inclined Block Mover".to_string(), into)]
    pub title: String,

    // Window configuration
    #[builder(default = 400)]
    pub window_width: u32,
    #[builder(default = 400)]
    pub window_height: u32,
    #[builder(default = false)]
    pub resizable: bool,

    // Colors
    #[builder(default = DEFAULT_PALETTE.to_vec())]
    pub palette: Vec<Color>,
    #[builder(default = DEFAULT_BACKGROUND)]
    pub background: Color,

    // Glyph configuration
    #[builder(default = 90.0)]
    pub stroke_factor: f32,
    #[builder(default = 12.8)]
    pub rect_size_factor: f32,
    #[builder(default = 3.2)]
    pub line_size_factor: f32,
    #[builder(default = 45.0)]
    pub deg: f32,

    // Animation configuration
    #[builder(default = 0.02)]
    pub scale_step_base: f32,
    #[builder(default = Duration::from_millis(20))]
    pub delay: Duration,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MoverConfig {
    /// Scale advanced per tick.
    pub fn scale_step(&self) -> f32 {
        self.scale_step_base / PARTS as f32
    }

    /// Rotation applied to the block at the end of its swing.
    pub fn rect_rotation(&self) -> f32 {
        90.0 + self.deg
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(MoverError::EmptyPalette);
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(MoverError::ZeroWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        let factors = [
            ("stroke_factor", self.stroke_factor),
            ("rect_size_factor", self.rect_size_factor),
            ("line_size_factor", self.line_size_factor),
            ("scale_step_base", self.scale_step_base),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(MoverError::InvalidFactor { name, value });
            }
        }
        Ok(())
    }
}
