//! Session score reducer
//!
//! The running game score is a value the caller threads through its own
//! state. Nothing in this crate stores it.

use veritas_domain::SessionScoreState;

/// Fold one point delta into the session state
pub fn apply_points(state: SessionScoreState, delta: f64) -> SessionScoreState {
    state.with_points(delta)
}

/// Replay a sequence of deltas from a fresh session
pub fn replay(deltas: &[f64]) -> SessionScoreState {
    deltas
        .iter()
        .fold(SessionScoreState::new(), |state, delta| apply_points(state, *delta))
}
