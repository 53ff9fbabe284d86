//! Walking environment state and transition rules

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Environment,
    types::{Action, State},
};

/// Static information attached to every reset and step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvInfo {
    /// Total number of states, terminals included.
    pub n_states: usize,
    /// Number of transient states (`n_states - 2`).
    pub non_terminal_states: usize,
}

/// Result of a single environment step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// State after the transition.
    pub state: State,
    pub reward: f64,
    /// The new state is absorbing.
    pub terminal: bool,
    /// An external step limit cut the episode short.
    pub truncated: bool,
    pub info: EnvInfo,
}

impl Step {
    /// Whether the episode is over for either reason.
    pub fn is_done(&self) -> bool {
        self.terminal || self.truncated
    }
}

/// Finite linear random walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkingEnv {
    n_states: usize,
    state: State,
    info: EnvInfo,
}

impl WalkingEnv {
    /// Smallest walk: two terminals and one transient state.
    pub const MIN_STATES: usize = 3;

    /// Create a walk with `n_states` cells, terminals included.
    ///
    /// The walker is placed at the start state; calling [`Environment::reset`]
    /// before the first episode is still expected.
    pub fn new(n_states: usize) -> Result<Self> {
        if n_states < Self::MIN_STATES {
            return Err(Error::InvalidStateCount { n_states });
        }
        Ok(Self {
            n_states,
            state: n_states / 2,
            info: EnvInfo {
                n_states,
                non_terminal_states: n_states - 2,
            },
        })
    }

    /// The midpoint `floor(n_states / 2)`.
    pub fn start_state(&self) -> State {
        self.n_states / 2
    }

    /// Whether `state` is one of the two absorbing ends.
    pub fn is_terminal(&self, state: State) -> bool {
        state == 0 || state == self.n_states - 1
    }

    pub fn info(&self) -> EnvInfo {
        self.info
    }

    /// Reward and terminal flag for landing on `state`.
    ///
    /// Both come from the same comparison so they cannot disagree.
    fn outcome(&self, state: State) -> (f64, bool) {
        if state == self.n_states - 1 {
            (1.0, true)
        } else if state == 0 {
            (0.0, true)
        } else {
            (0.0, false)
        }
    }
}

impl Environment for WalkingEnv {
    fn n_states(&self) -> usize {
        self.n_states
    }

    fn state(&self) -> State {
        self.state
    }

    fn reset(&mut self) -> (State, EnvInfo) {
        self.state = self.start_state();
        (self.state, self.info)
    }

    fn step(&mut self, action: usize) -> Result<Step> {
        let action = Action::try_from(action)?;
        if self.is_terminal(self.state) {
            return Err(Error::EpisodeTerminated { state: self.state });
        }

        self.state = action.apply(self.state);
        let (reward, terminal) = self.outcome(self.state);

        Ok(Step {
            state: self.state,
            reward,
            terminal,
            truncated: false,
            info: self.info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_too_few_states() {
        assert!(matches!(
            WalkingEnv::new(2),
            Err(Error::InvalidStateCount { n_states: 2 })
        ));
        assert!(WalkingEnv::new(3).is_ok());
    }

    #[test]
    fn test_reset_returns_midpoint() {
        for n_states in 3..20 {
            let mut env = WalkingEnv::new(n_states).unwrap();
            let (state, info) = env.reset();
            assert_eq!(state, n_states / 2);
            assert!(!env.is_terminal(state));
            assert_eq!(info.n_states, n_states);
            assert_eq!(info.non_terminal_states, n_states - 2);
        }
    }

    #[test]
    fn test_right_edge_pays_one() {
        let mut env = WalkingEnv::new(3).unwrap();
        env.reset();
        let step = env.step(Action::Right.index()).unwrap();
        assert_eq!(step.state, 2);
        assert_eq!(step.reward, 1.0);
        assert!(step.terminal);
        assert!(!step.truncated);
    }

    #[test]
    fn test_left_edge_pays_zero() {
        let mut env = WalkingEnv::new(3).unwrap();
        env.reset();
        let step = env.step(Action::Left.index()).unwrap();
        assert_eq!(step.state, 0);
        assert_eq!(step.reward, 0.0);
        assert!(step.terminal);
    }

    #[test]
    fn test_invalid_action_leaves_state() {
        let mut env = WalkingEnv::new(7).unwrap();
        env.reset();
        let err = env.step(2).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { action: 2 }));
        assert_eq!(env.state(), 3);
    }

    #[test]
    fn test_step_after_terminal_requires_reset() {
        let mut env = WalkingEnv::new(3).unwrap();
        env.reset();
        env.step(Action::Left.index()).unwrap();
        assert!(matches!(
            env.step(Action::Right.index()),
            Err(Error::EpisodeTerminated { state: 0 })
        ));

        env.reset();
        assert!(env.step(Action::Right.index()).is_ok());
    }
}
