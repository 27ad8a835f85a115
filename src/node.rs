/// Outcome of a single tick on one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeUpdate {
    Continuing,
    /// The node travelled a full unit and settled at `settled` (0 or 1).
    Completed { settled: f32 },
}

/// Animation state of one node.
///
/// `direction == 0` means idle. Otherwise the node is moving from
/// `previous_scale` towards `previous_scale + direction`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeState {
    scale: f32,
    direction: f32,
    previous_scale: f32,
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn previous_scale(&self) -> f32 {
        self.previous_scale
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Moves `scale` one `step` in the current direction. Once it has
    /// travelled a full unit it snaps to the far end and the node goes idle.
    pub fn update(&mut self, step: f32) -> NodeUpdate {
        self.scale += step * self.direction;
        if (self.scale - self.previous_scale).abs() > 1.0 {
            self.scale = self.previous_scale + self.direction;
            self.direction = 0.0;
            self.previous_scale = self.scale;
            return NodeUpdate::Completed {
                settled: self.previous_scale,
            };
        }
        NodeUpdate::Continuing
    }

    /// Starts moving away from the settled end. Returns `false` when the node
    /// is already animating, in which case nothing changes.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.direction = 1.0 - 2.0 * self.previous_scale;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.02 / 5.0;

    fn run_to_completion(state: &mut NodeState) -> (usize, f32) {
        for tick in 1..=1000 {
            if let NodeUpdate::Completed { settled } = state.update(STEP) {
                return (tick, settled);
            }
        }
        panic!("node never completed: {state:?}");
    }

    #[test]
    fn test_idle_update_is_stationary() {
        let mut state = NodeState::new();
        assert_eq!(state.update(STEP), NodeUpdate::Continuing);
        assert_eq!(state, NodeState::new());
    }

    #[test]
    fn test_forward_cycle() {
        let mut state = NodeState::new();
        assert!(state.start_updating());
        assert_eq!(state.direction(), 1.0);

        let mut last = state.scale();
        while state.update(STEP) == NodeUpdate::Continuing {
            assert!(state.scale() > last);
            assert!(state.scale() <= 1.0 + STEP);
            last = state.scale();
        }
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.previous_scale(), 1.0);
        assert!(state.is_idle());
    }

    #[test]
    fn test_cycle_length() {
        let mut state = NodeState::new();
        state.start_updating();
        let (ticks, settled) = run_to_completion(&mut state);
        assert!((250..=252).contains(&ticks), "took {ticks} ticks");
        assert_eq!(settled, 1.0);
    }

    #[test]
    fn test_backward_cycle_after_forward() {
        let mut state = NodeState::new();
        state.start_updating();
        run_to_completion(&mut state);

        assert!(state.start_updating());
        assert_eq!(state.direction(), -1.0);
        let (_, settled) = run_to_completion(&mut state);
        assert_eq!(settled, 0.0);
        assert_eq!(state.scale(), 0.0);
    }

    #[test]
    fn test_start_while_animating_is_noop() {
        let mut state = NodeState::new();
        assert!(state.start_updating());
        state.update(STEP);
        let before = state;
        assert!(!state.start_updating());
        assert_eq!(state, before);
    }
}
