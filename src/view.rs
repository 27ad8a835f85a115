use std::time::Instant;

use tracing::debug;

use crate::chain::{Chain, ChainUpdate};
use crate::config::{Color, MoverConfig};
use crate::driver::{Animator, RedrawHost, Tick};
use crate::error::Result;
use crate::glyph::GlyphRenderer;
use crate::surface::Surface;

/// Ties the chain, the glyph renderer and the animation driver together.
///
/// A tap starts the current node; every frame draws it and, while the driver
/// runs, advances it one tick. The driver stops whenever a node settles and
/// waits for the next tap.
#[derive(Debug, Clone)]
pub struct BlockMoverView {
    background: Color,
    renderer: GlyphRenderer,
    chain: Chain,
    animator: Animator,
}

impl BlockMoverView {
    pub fn new(config: &MoverConfig) -> Result<Self> {
        Ok(Self {
            background: config.background,
            renderer: GlyphRenderer::new(config)?,
            chain: Chain::new(config)?,
            animator: Animator::new(config.delay),
        })
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn render<S, H>(&mut self, surface: &mut S, host: &mut H, now: Instant)
    where
        S: Surface + ?Sized,
        H: RedrawHost + ?Sized,
    {
        surface.clear(self.background);
        self.chain.draw(surface, &self.renderer);

        let chain = &mut self.chain;
        self.animator.animate(now, host, || match chain.update() {
            ChainUpdate::Continuing => Tick::Continue,
            ChainUpdate::Advanced { .. } | ChainUpdate::Reversed { .. } => Tick::Stop,
        });
    }

    pub fn handle_tap<H: RedrawHost + ?Sized>(&mut self, host: &mut H) {
        if self.chain.start_updating() {
            debug!(node = self.chain.current_index(), "tap started node");
            self.animator.start(host);
        } else {
            debug!("tap ignored while animating");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::tests::RecordingHost;
    use crate::surface::{DrawCommand, Scene};

    #[test]
    fn test_render_clears_then_draws_current_node() {
        let config = MoverConfig::default();
        let mut view = BlockMoverView::new(&config).unwrap();
        let mut scene = Scene::new(200, 200);
        let mut host = RecordingHost::default();
        view.render(&mut scene, &mut host, Instant::now());

        let commands = scene.commands();
        assert_eq!(commands[0], DrawCommand::Clear(config.background));
        assert!(matches!(
            commands[1],
            DrawCommand::Quad { color, .. } if color == config.palette[0]
        ));
        // idle view does not schedule anything
        assert!(host.scheduled.is_empty());
    }

    #[test]
    fn test_tap_starts_and_second_tap_is_ignored() {
        let mut view = BlockMoverView::new(&MoverConfig::default()).unwrap();
        let mut host = RecordingHost::default();
        view.handle_tap(&mut host);
        assert!(view.is_animating());
        assert_eq!(view.chain().current_state().direction(), 1.0);

        let mut scene = Scene::new(200, 200);
        view.render(&mut scene, &mut host, Instant::now());
        let before = *view.chain().current_state();
        view.handle_tap(&mut host);
        assert_eq!(*view.chain().current_state(), before);
        assert_eq!(host.immediate, 1);
    }
}
