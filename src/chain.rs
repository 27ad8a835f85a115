use tracing::{info, trace};

use crate::config::{Color, MoverConfig};
use crate::error::Result;
use crate::glyph::GlyphRenderer;
use crate::node::{NodeState, NodeUpdate};
use crate::surface::Surface;

/// Travel direction along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Outcome of a tick on the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainUpdate {
    Continuing,
    /// The current node finished and its neighbour took over.
    Advanced { from: usize, to: usize },
    /// The current node finished at an end of the chain; the chain turned
    /// around and stays on it.
    Reversed { at: usize },
}

#[derive(Debug, Clone)]
struct Node {
    color: Color,
    state: NodeState,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Node {
    fn neighbour(&self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Forward => self.next,
            Direction::Backward => self.prev,
        }
    }
}

/// One node per palette color, linked by index.
#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<Node>,
    current: usize,
    direction: Direction,
    step: f32,
}

impl Chain {
    pub fn new(config: &MoverConfig) -> Result<Self> {
        config.validate()?;
        let count = config.palette.len();
        let nodes = config
            .palette
            .iter()
            .enumerate()
            .map(|(i, &color)| Node {
                color,
                state: NodeState::new(),
                prev: i.checked_sub(1),
                next: (i + 1 < count).then_some(i + 1),
            })
            .collect();
        Ok(Self {
            nodes,
            current: 0,
            direction: Direction::Forward,
            step: config.scale_step(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn node_state(&self, index: usize) -> Option<&NodeState> {
        self.nodes.get(index).map(|node| &node.state)
    }

    pub fn current_state(&self) -> &NodeState {
        &self.nodes[self.current].state
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, renderer: &GlyphRenderer) {
        let node = &self.nodes[self.current];
        renderer.draw(surface, node.state.scale(), node.color);
    }

    pub fn update(&mut self) -> ChainUpdate {
        let node = &mut self.nodes[self.current];
        match node.state.update(self.step) {
            NodeUpdate::Continuing => ChainUpdate::Continuing,
            NodeUpdate::Completed { settled } => {
                trace!(node = self.current, settled, "node settled");
                let from = self.current;
                match node.neighbour(self.direction) {
                    Some(to) => {
                        self.current = to;
                        info!(from, to, "advanced to next node");
                        ChainUpdate::Advanced { from, to }
                    }
                    None => {
                        self.direction = self.direction.reversed();
                        info!(at = from, direction = ?self.direction, "reached end of chain, reversing");
                        ChainUpdate::Reversed { at: from }
                    }
                }
            }
        }
    }

    /// Returns `true` when the current node left idle.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.current].state.start_updating()
    }
}
