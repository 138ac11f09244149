//! Running game score for one interactive session

/// Accumulated game points, owned and threaded through by the caller
///
/// Updates never mutate in place; [`SessionScoreState::with_points`]
/// returns the next state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionScoreState {
    /// Sum of all applied deltas
    pub total_points: f64,
    /// Number of scored actions
    pub actions: u32,
    /// Delta of the most recent action
    pub last_delta: Option<f64>,
}

impl SessionScoreState {
    /// Start a fresh session at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Next state after scoring one action
    pub fn with_points(self, delta: f64) -> Self {
        Self {
            total_points: self.total_points + delta,
            actions: self.actions + 1,
            last_delta: Some(delta),
        }
    }

    /// Mean points per action; 0 before the first action
    pub fn average(&self) -> f64 {
        if self.actions == 0 {
            0.0
        } else {
            self.total_points / f64::from(self.actions)
        }
    }
}
