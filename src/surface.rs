// ============================================================================
// SURFACE ABSTRACTION
// ============================================================================

use crate::config::Color;
use crate::geometry::{Point, Transform};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
    Butt,
}

/// Minimal 2D drawing target.
///
/// Coordinates passed to the draw calls are in the current local frame, which
/// `translate` and `rotate` modify and `save`/`restore` push and pop.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn clear(&mut self, color: Color);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Rotates the local frame by `degrees`, clockwise on screen.
    fn rotate(&mut self, degrees: f32);

    #[allow(clippy::too_many_arguments)]
    fn draw_line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        stroke: f32,
        color: Color,
        cap: LineCap,
    );

    /// Fills the rectangle spanned by two opposite corners.
    fn draw_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color);
}

// ============================================================================
// RETAINED MODE
// ============================================================================

/// A draw call with its geometry resolved to device space.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: Point,
        to: Point,
        stroke: f32,
        color: Color,
        cap: LineCap,
    },
    Quad {
        corners: [Point; 4],
        color: Color,
    },
}

/// Records draw calls so a frame can be inspected before it is rasterized.
#[derive(Debug, Clone)]
pub struct Scene {
    width: f32,
    height: f32,
    transform: Transform,
    saved: Vec<Transform>,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
            transform: Transform::IDENTITY,
            saved: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn render(&self, canvas: &mut Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Line {
                    from,
                    to,
                    stroke,
                    color,
                    cap,
                } => canvas.draw_thick_line_aa(*from, *to, *stroke, *color, *cap),
                DrawCommand::Quad { corners, color } => canvas.fill_quad_aa(corners, *color),
            }
        }
    }
}

impl Surface for Scene {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.then(&Transform::translation(dx, dy));
    }

    fn rotate(&mut self, degrees: f32) {
        self.transform = self.transform.then(&Transform::rotation(degrees));
    }

    fn draw_line(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        stroke: f32,
        color: Color,
        cap: LineCap,
    ) {
        self.commands.push(DrawCommand::Line {
            from: self.transform.apply(Point::new(x0, y0)),
            to: self.transform.apply(Point::new(x1, y1)),
            stroke,
            color,
            cap,
        });
    }

    fn draw_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        let corners = [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
        .map(|p| self.transform.apply(p));
        self.commands.push(DrawCommand::Quad { corners, color });
    }
}

// ============================================================================
// PIXEL CANVAS
// ============================================================================

/// RGBA8 frame buffer view, as handed out by `pixels`.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        let rows = if width == 0 { 0 } else { frame.len() / (width * 4) };
        Self {
            frame,
            width,
            height: height.min(rows),
        }
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = alpha.clamp(0.0, 1.0);
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (channel, value) in src.iter().enumerate() {
            let dst = self.frame[idx + channel] as f32;
            self.frame[idx + channel] = (value * a + dst * (1.0 - a)).round() as u8;
        }
        self.frame[idx + 3] = 0xff;
    }

    fn pixel_bounds(&self, min: Point, max: Point, pad: f32) -> (i32, i32, i32, i32) {
        let min_x = ((min.x - pad).floor() as i32).max(0);
        let min_y = ((min.y - pad).floor() as i32).max(0);
        let max_x = ((max.x + pad).ceil() as i32).min(self.width as i32 - 1);
        let max_y = ((max.y + pad).ceil() as i32).min(self.height as i32 - 1);
        (min_x, min_y, max_x, max_y)
    }

    pub fn draw_thick_line_aa(
        &mut self,
        from: Point,
        to: Point,
        thickness: f32,
        color: Color,
        cap: LineCap,
    ) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len_sq = dx * dx + dy * dy;
        let len = len_sq.sqrt();
        if len_sq <= f32::EPSILON && cap == LineCap::Butt {
            return;
        }
        let half = thickness / 2.0;
        let (min_x, min_y, max_x, max_y) = self.pixel_bounds(
            Point::new(from.x.min(to.x), from.y.min(to.y)),
            Point::new(from.x.max(to.x), from.y.max(to.y)),
            half + 1.0,
        );
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len_sq <= f32::EPSILON {
                    0.0
                } else {
                    ((p.x - from.x) * dx + (p.y - from.y) * dy) / len_sq
                };
                let aa = match cap {
                    LineCap::Round => {
                        let t = t.clamp(0.0, 1.0);
                        let closest = Point::new(from.x + t * dx, from.y + t * dy);
                        1.0 - (p.distance(closest) - half).clamp(0.0, 1.0)
                    }
                    LineCap::Butt => {
                        let across = ((p.x - from.x) * dy - (p.y - from.y) * dx).abs() / len;
                        let beyond = (-t).max(t - 1.0) * len;
                        let side = 1.0 - (across - half).clamp(0.0, 1.0);
                        let end = (0.5 - beyond).clamp(0.0, 1.0);
                        side * end
                    }
                };
                if aa > 0.01 {
                    self.set_pixel(x, y, color, aa);
                }
            }
        }
    }

    /// Fills a convex quad with anti-aliased edges. Winding may be either way.
    pub fn fill_quad_aa(&mut self, corners: &[Point; 4], color: Color) {
        let area: f32 = (0..4)
            .map(|i| {
                let (p, q) = (corners[i], corners[(i + 1) % 4]);
                p.x * q.y - q.x * p.y
            })
            .sum();
        if area.abs() <= f32::EPSILON {
            return;
        }
        let winding = area.signum();

        let min = corners.iter().fold(Point::new(f32::MAX, f32::MAX), |m, c| {
            Point::new(m.x.min(c.x), m.y.min(c.y))
        });
        let max = corners.iter().fold(Point::new(f32::MIN, f32::MIN), |m, c| {
            Point::new(m.x.max(c.x), m.y.max(c.y))
        });
        let (min_x, min_y, max_x, max_y) = self.pixel_bounds(min, max, 1.0);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
                let inside = (0..4)
                    .filter_map(|i| {
                        let (a, b) = (corners[i], corners[(i + 1) % 4]);
                        let edge = a.distance(b);
                        if edge <= f32::EPSILON {
                            return None;
                        }
                        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
                        Some(winding * cross / edge)
                    })
                    .fold(f32::MAX, f32::min);
                let aa = (inside + 0.5).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.set_pixel(x, y, color, aa);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(0xff, 0, 0);
    const WHITE: Color = Color::new(0xff, 0xff, 0xff);

    #[test]
    fn test_scene_resolves_transforms() {
        let mut scene = Scene::new(100, 100);
        scene.save();
        scene.translate(50.0, 50.0);
        scene.rotate(90.0);
        scene.draw_line(0.0, 0.0, 10.0, 0.0, 2.0, RED, LineCap::Round);
        scene.restore();
        scene.draw_rect(0.0, 0.0, 5.0, 5.0, RED);

        match &scene.commands()[0] {
            DrawCommand::Line { from, to, .. } => {
                assert!((from.x - 50.0).abs() < 1e-4 && (from.y - 50.0).abs() < 1e-4);
                assert!((to.x - 50.0).abs() < 1e-4 && (to.y - 60.0).abs() < 1e-4);
            }
            other => panic!("unexpected command {other:?}"),
        }
        match &scene.commands()[1] {
            DrawCommand::Quad { corners, .. } => {
                assert_eq!(corners[0], Point::new(0.0, 0.0));
                assert_eq!(corners[2], Point::new(5.0, 5.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut scene = Scene::new(10, 10);
        scene.restore();
        scene.translate(1.0, 1.0);
        scene.draw_rect(0.0, 0.0, 1.0, 1.0, RED);
        assert!(matches!(
            scene.commands()[0],
            DrawCommand::Quad { corners, .. } if corners[0] == Point::new(1.0, 1.0)
        ));
    }

    #[test]
    fn test_canvas_clear_and_quad() {
        let mut frame = vec![0u8; 20 * 20 * 4];
        let mut canvas = Canvas::new(&mut frame, 20, 20);
        canvas.clear(WHITE);
        assert_eq!(canvas.pixel(0, 0), Some([0xff, 0xff, 0xff, 0xff]));

        let corners = [
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Point::new(15.0, 15.0),
            Point::new(5.0, 15.0),
        ];
        canvas.fill_quad_aa(&corners, RED);
        assert_eq!(canvas.pixel(10, 10), Some([0xff, 0, 0, 0xff]));
        assert_eq!(canvas.pixel(1, 1), Some([0xff, 0xff, 0xff, 0xff]));

        // reversed winding fills the same area
        let mut reversed = corners;
        reversed.reverse();
        canvas.clear(WHITE);
        canvas.fill_quad_aa(&reversed, RED);
        assert_eq!(canvas.pixel(10, 10), Some([0xff, 0, 0, 0xff]));
    }

    #[test]
    fn test_canvas_line_caps() {
        let mut frame = vec![0u8; 30 * 10 * 4];
        let mut canvas = Canvas::new(&mut frame, 30, 10);
        canvas.clear(WHITE);
        canvas.draw_thick_line_aa(
            Point::new(10.0, 5.0),
            Point::new(20.0, 5.0),
            4.0,
            RED,
            LineCap::Butt,
        );
        assert_eq!(canvas.pixel(15, 4), Some([0xff, 0, 0, 0xff]));
        // butt caps stop at the endpoint
        assert_eq!(canvas.pixel(7, 4), Some([0xff, 0xff, 0xff, 0xff]));

        canvas.clear(WHITE);
        canvas.draw_thick_line_aa(
            Point::new(10.0, 5.0),
            Point::new(20.0, 5.0),
            4.0,
            RED,
            LineCap::Round,
        );
        // round caps extend past it by half the thickness
        assert_eq!(canvas.pixel(8, 4), Some([0xff, 0, 0, 0xff]));
    }

    #[test]
    fn test_zero_length_round_line_is_a_dot() {
        let mut frame = vec![0u8; 10 * 10 * 4];
        let mut canvas = Canvas::new(&mut frame, 10, 10);
        canvas.clear(WHITE);
        let center = Point::new(5.0, 5.0);
        canvas.draw_thick_line_aa(center, center, 4.0, RED, LineCap::Butt);
        assert_eq!(canvas.pixel(4, 4), Some([0xff, 0xff, 0xff, 0xff]));
        canvas.draw_thick_line_aa(center, center, 4.0, RED, LineCap::Round);
        assert_eq!(canvas.pixel(4, 4), Some([0xff, 0, 0, 0xff]));
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut frame = vec![0u8; 4 * 4 * 4];
        let mut canvas = Canvas::new(&mut frame, 4, 4);
        canvas.draw_thick_line_aa(
            Point::new(-50.0, -50.0),
            Point::new(50.0, 50.0),
            3.0,
            RED,
            LineCap::Round,
        );
        assert_eq!(canvas.pixel(4, 0), None);
        assert_eq!(canvas.pixel(0, 0), Some([0xff, 0, 0, 0xff]));
    }
}
