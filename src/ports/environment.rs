//! Environment port - the MDP being simulated

use crate::{
    Result,
    types::State,
    walk::{EnvInfo, Step},
};

/// Episodic environment with a discrete, integer state space.
///
/// Mirrors the Gymnasium contract: `reset` starts an episode and `step`
/// advances it by one transition. Actions are passed in their discrete
/// encoding so that out-of-range codes can be rejected with
/// [`crate::Error::InvalidAction`].
pub trait Environment {
    /// Number of states, terminals included.
    fn n_states(&self) -> usize;

    /// Current state.
    fn state(&self) -> State;

    /// Start a new episode and return the initial state.
    fn reset(&mut self) -> (State, EnvInfo);

    /// Apply `action` and return the resulting transition.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] for unknown action codes and
    /// [`crate::Error::EpisodeTerminated`] when called from an absorbing state.
    fn step(&mut self, action: usize) -> Result<Step>;
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn n_states(&self) -> usize {
        (**self).n_states()
    }

    fn state(&self) -> State {
        (**self).state()
    }

    fn reset(&mut self) -> (State, EnvInfo) {
        (**self).reset()
    }

    fn step(&mut self, action: usize) -> Result<Step> {
        (**self).step(action)
    }
}
