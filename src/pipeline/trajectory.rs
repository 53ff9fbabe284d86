//! Episode trajectories

use serde::{Deserialize, Serialize};

use crate::{
    types::{Action, State},
    walk::Step,
};

/// Everything observed during one episode.
///
/// `states` holds the initial state followed by the state reached after each
/// step, so it is always one longer than `actions` and `rewards`. The reward
/// at index `i` was received on the transition from `states[i]` into
/// `states[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    states: Vec<State>,
    actions: Vec<Action>,
    rewards: Vec<f64>,
    terminal: bool,
    truncated: bool,
}

impl Trajectory {
    pub fn new(initial_state: State) -> Self {
        Self {
            states: vec![initial_state],
            actions: Vec::new(),
            rewards: Vec::new(),
            terminal: false,
            truncated: false,
        }
    }

    /// Append the transition produced by taking `action`.
    pub fn record(&mut self, action: Action, step: &Step) {
        self.states.push(step.state);
        self.actions.push(action);
        self.rewards.push(step.reward);
        self.terminal = step.terminal;
        self.truncated = step.truncated;
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }

    /// Number of transitions.
    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    pub fn initial_state(&self) -> State {
        self.states[0]
    }

    pub fn final_state(&self) -> State {
        self.states[self.states.len() - 1]
    }

    /// The episode ended in an absorbing state.
    pub fn terminated(&self) -> bool {
        self.terminal
    }

    /// The episode was cut short by a step limit.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// `(state, reward)` pairs, one per transition, in time order.
    ///
    /// The final state is never the source of a transition, so terminal
    /// states do not appear here.
    pub fn transitions(
        &self,
    ) -> impl DoubleEndedIterator<Item = (State, f64)> + ExactSizeIterator + '_ {
        self.states
            .iter()
            .copied()
            .zip(self.rewards.iter().copied())
    }

    /// Discounted return from the initial state.
    pub fn discounted_return(&self, gamma: f64) -> f64 {
        self.rewards
            .iter()
            .rev()
            .fold(0.0, |g, &reward| gamma * g + reward)
    }

    /// Undiscounted sum of rewards.
    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::EnvInfo;

    fn step(state: State, reward: f64, terminal: bool) -> Step {
        Step {
            state,
            reward,
            terminal,
            truncated: false,
            info: EnvInfo {
                n_states: 5,
                non_terminal_states: 3,
            },
        }
    }

    #[test]
    fn test_alignment() {
        let mut trajectory = Trajectory::new(2);
        trajectory.record(Action::Right, &step(3, 0.0, false));
        trajectory.record(Action::Right, &step(4, 1.0, true));

        assert_eq!(trajectory.states(), &[2, 3, 4]);
        assert_eq!(trajectory.rewards(), &[0.0, 1.0]);
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.final_state(), 4);
        assert!(trajectory.terminated());

        let pairs: Vec<_> = trajectory.transitions().collect();
        assert_eq!(pairs, vec![(2, 0.0), (3, 1.0)]);
    }

    #[test]
    fn test_discounted_return() {
        let mut trajectory = Trajectory::new(2);
        trajectory.record(Action::Right, &step(3, 0.0, false));
        trajectory.record(Action::Right, &step(4, 1.0, true));
        assert_eq!(trajectory.discounted_return(1.0), 1.0);
        assert!((trajectory.discounted_return(0.9) - 0.9).abs() < 1e-12);
        assert_eq!(trajectory.total_reward(), 1.0);
    }
}
