//! Policy port - maps the current state to an action

use crate::types::{Action, State};

/// Behaviour policy followed while collecting episodes.
///
/// Any `FnMut(State) -> Action` closure is a policy, so callers can pass
/// `|_| Action::Right` directly.
pub trait Policy {
    /// Choose the action to take from `state`.
    fn select_action(&mut self, state: State) -> Action;

    /// Name used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Policy for F
where
    F: FnMut(State) -> Action,
{
    fn select_action(&mut self, state: State) -> Action {
        self(state)
    }
}
