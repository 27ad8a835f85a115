// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod chain;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod node;
pub mod scale;
pub mod surface;
pub mod view;

pub use chain::{Chain, ChainUpdate, Direction};
pub use config::{Color, MoverConfig};
pub use driver::{Animator, RedrawHost, Tick};
pub use error::{MoverError, Result};
pub use glyph::GlyphRenderer;
pub use node::{NodeState, NodeUpdate};
pub use surface::{Canvas, DrawCommand, LineCap, Scene, Surface};
pub use view::BlockMoverView;

// External crate imports
use pixels::{Pixels, SurfaceTexture};
use tracing::{info, warn};

// Standard library imports
use std::sync::Arc;
use std::time::Instant;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Opens a window running the block mover animation.
#[derive(Debug, Clone)]
pub struct BlockMover {
    config: MoverConfig,
}

impl BlockMover {
    pub fn new(config: MoverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Blocks until the window is closed.
    pub fn show(&self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .with_resizable(self.config.resizable)
            .build(&event_loop)?;
        let window = Arc::new(window);

        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Err(MoverError::ZeroWindowSize {
                width: size.width,
                height: size.height,
            });
        }
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, window.clone());
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let mut view = BlockMoverView::new(&self.config)?;
        let mut host = WindowHost::new(window.clone());
        info!(
            width = fb_width,
            height = fb_height,
            nodes = view.chain().len(),
            "window opened"
        );
        window.request_redraw();

        event_loop.run(move |event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("window closed");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    if new_size.width == 0 || new_size.height == 0 {
                        return;
                    }
                    fb_width = new_size.width as usize;
                    fb_height = new_size.height as usize;
                    if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                        warn!(%err, "failed to resize pixel buffer");
                    }
                    if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                        warn!(%err, "failed to resize surface");
                    }
                    window.request_redraw();
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => view.handle_tap(&mut host),
                WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => {
                    view.handle_tap(&mut host)
                }
                WindowEvent::RedrawRequested => {
                    let mut scene = Scene::new(fb_width, fb_height);
                    view.render(&mut scene, &mut host, Instant::now());

                    let mut canvas = Canvas::new(pixels.frame_mut(), fb_width, fb_height);
                    scene.render(&mut canvas);
                    if let Err(err) = pixels.render() {
                        warn!(%err, "failed to present frame");
                        window_target.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                let flow = host.next_control_flow(Instant::now());
                window_target.set_control_flow(flow);
            }
            _ => {}
        })?;

        Ok(())
    }
}

// ============================================================================
// WINDOW HOST
// ============================================================================

/// Turns redraw requests from the driver into winit redraws and wake-ups.
struct WindowHost {
    window: Arc<Window>,
    deadline: Option<Instant>,
}

impl WindowHost {
    fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    fn next_control_flow(&mut self, now: Instant) -> ControlFlow {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                self.window.request_redraw();
                ControlFlow::Wait
            }
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        }
    }
}

impl RedrawHost for WindowHost {
    fn request_redraw(&mut self) {
        self.window.request_redraw();
    }

    fn request_redraw_at(&mut self, deadline: Instant) {
        self.deadline = Some(match self.deadline {
            Some(existing) => existing.min(deadline),
            None => deadline,
        });
    }
}
