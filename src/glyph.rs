use std::num::NonZeroUsize;

use crate::config::{Color, MoverConfig, PARTS};
use crate::error::Result;
use crate::scale::{checked_parts, divide_scale, sinify};
use crate::surface::{LineCap, Surface};

/// Stage indices into the eased progress, in the order they activate.
const LINE_STAGE: usize = 0;
const DROP_STAGE: usize = 1;
const TILT_STAGE: usize = 2;
const SLIDE_STAGE: usize = 3;
const SPIN_STAGE: usize = 4;

/// Draws the inclined block mover glyph: a line with a small block that
/// drops in, slides along it and spins while the whole frame tilts.
#[derive(Debug, Clone)]
pub struct GlyphRenderer {
    parts: NonZeroUsize,
    stroke_factor: f32,
    rect_size_factor: f32,
    line_size_factor: f32,
    tilt: f32,
    spin: f32,
}

impl GlyphRenderer {
    pub fn new(config: &MoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            parts: checked_parts(PARTS)?,
            stroke_factor: config.stroke_factor,
            rect_size_factor: config.rect_size_factor,
            line_size_factor: config.line_size_factor,
            tilt: config.deg,
            spin: config.rect_rotation(),
        })
    }

    fn stage(&self, eased: f32, i: usize) -> f32 {
        divide_scale(eased, i, self.parts)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, progress: f32, color: Color) {
        let w = surface.width();
        let h = surface.height();
        let size = w.min(h);
        let sf = sinify(progress);
        let line_size = size / self.line_size_factor;
        let rect_size = size / self.rect_size_factor;
        let stroke = size / self.stroke_factor;

        surface.save();
        surface.translate(w / 2.0, h / 2.0);
        surface.rotate(self.tilt * self.stage(sf, TILT_STAGE));

        surface.save();
        surface.rotate(self.spin * self.stage(sf, SPIN_STAGE));
        surface.translate(
            -line_size * (1.0 - self.stage(sf, SLIDE_STAGE)),
            (h / 2.0) * (1.0 - self.stage(sf, DROP_STAGE)),
        );
        surface.draw_rect(-rect_size, -rect_size, 0.0, 0.0, color);
        surface.restore();

        surface.draw_line(
            0.0,
            0.0,
            -line_size * self.stage(sf, LINE_STAGE),
            0.0,
            stroke,
            color,
            LineCap::Round,
        );
        surface.restore();
    }
}
