//! TD(0) state-value estimation
//!
//! Online: every transition `s → s'` with reward `r` immediately moves
//! `V(s)` toward the bootstrapped one-step target.
//!
//! ```text
//! δ ← r + γ·V(s') − V(s)      (V(s') taken as 0 when s' is terminal)
//! V(s) ← V(s) + α·δ
//! ```

use crate::{
    Result, ports::ValueEstimator, types::State, value_table::ValueTable, walk::Step,
};

/// TD(0) estimator
#[derive(Debug, Clone)]
pub struct Td0Estimator {
    values: ValueTable,
    gamma: f64,
    alpha: f64,
}

impl Td0Estimator {
    /// Fresh estimator for a walk of `n_states` states.
    ///
    /// # Arguments
    ///
    /// * `n_states` - Number of states, terminals included
    /// * `gamma` - Discount factor γ
    /// * `alpha` - Learning rate α
    pub fn new(n_states: usize, gamma: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            values: ValueTable::new(n_states)?,
            gamma,
            alpha,
        })
    }

    /// Start from an existing table instead of the 0.5 prior.
    pub fn with_values(mut self, values: ValueTable) -> Self {
        self.values = values;
        self
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn into_values(self) -> ValueTable {
        self.values
    }

    /// Apply one TD(0) update and return the TD error.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ValueTableSizeMismatch`] when either state lies
    /// outside the table; the table is left untouched.
    pub fn update(
        &mut self,
        state: State,
        reward: f64,
        next_state: State,
        terminal: bool,
    ) -> Result<f64> {
        self.values.ensure_covers(state.max(next_state))?;
        let next_value = if terminal {
            0.0
        } else {
            self.values.as_slice()[next_state]
        };
        let td_target = reward + self.gamma * next_value;
        let td_error = td_target - self.values.as_slice()[state];
        self.values.nudge(state, self.alpha * td_error);
        Ok(td_error)
    }
}

impl ValueEstimator for Td0Estimator {
    fn name(&self) -> &str {
        "TD(0)"
    }

    fn values(&self) -> &ValueTable {
        &self.values
    }

    fn on_step(&mut self, state: State, step: &Step) -> Result<()> {
        self.update(state, step.reward, step.state, step.terminal)?;
        Ok(())
    }
}
