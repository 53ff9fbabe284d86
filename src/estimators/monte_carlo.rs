//! Monte Carlo state-value estimation
//!
//! Episode-batched: nothing is learned while the episode runs. Once it
//! ends, the trajectory is walked backwards accumulating the discounted
//! return `G`, and each state's estimate moves to the running sample mean
//! of the returns observed from it:
//!
//! ```text
//! G ← γ·G + r
//! N(s) ← N(s) + 1
//! V(s) ← V(s) + (G − V(s)) / N(s)
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    pipeline::Trajectory,
    ports::ValueEstimator,
    types::State,
    value_table::{ValueTable, VisitCounting, VisitCounts},
};

/// Which occurrences of a state within one episode contribute a return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VisitRule {
    /// Every occurrence updates the state, processed last to first.
    #[default]
    EveryOccurrence,
    /// Only the earliest occurrence in the episode updates the state.
    FirstOccurrence,
}

/// Monte Carlo estimator
#[derive(Debug, Clone)]
pub struct MonteCarloEstimator {
    values: ValueTable,
    visits: VisitCounts,
    gamma: f64,
    counting: VisitCounting,
    rule: VisitRule,
}

impl MonteCarloEstimator {
    /// Fresh estimator for a walk of `n_states` states.
    ///
    /// # Arguments
    ///
    /// * `n_states` - Number of states, terminals included
    /// * `gamma` - Discount factor γ
    pub fn new(n_states: usize, gamma: f64) -> Result<Self> {
        Ok(Self {
            values: ValueTable::new(n_states)?,
            visits: VisitCounts::new(n_states, VisitCounting::default()),
            gamma,
            counting: VisitCounting::default(),
            rule: VisitRule::default(),
        })
    }

    /// Start from an existing table instead of the 0.5 prior.
    pub fn with_values(mut self, values: ValueTable) -> Self {
        self.visits = VisitCounts::new(values.n_states(), self.counting);
        self.values = values;
        self
    }

    /// Choose the visit-counter convention. Resets the counters.
    pub fn with_visit_counting(mut self, counting: VisitCounting) -> Self {
        self.counting = counting;
        self.visits = VisitCounts::new(self.values.n_states(), counting);
        self
    }

    pub fn with_visit_rule(mut self, rule: VisitRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn visits(&self) -> &VisitCounts {
        &self.visits
    }

    pub fn into_values(self) -> ValueTable {
        self.values
    }

    /// Apply the backward pass over a finished episode.
    ///
    /// Episodes cut short by a step limit carry no return for their
    /// unfinished tail and are skipped; the table and counters stay as
    /// they were.
    ///
    /// # Errors
    ///
    /// [`crate::Error::ValueTableSizeMismatch`] when the trajectory visits
    /// a state outside the table. Nothing is updated in that case.
    pub fn update_from_trajectory(&mut self, trajectory: &Trajectory) -> Result<()> {
        if let Some(&highest) = trajectory.states().iter().max() {
            self.values.ensure_covers(highest)?;
        }
        if trajectory.truncated() {
            tracing::debug!(
                steps = trajectory.len(),
                "skipping Monte Carlo update for truncated episode"
            );
            return Ok(());
        }

        let first_occurrence = match self.rule {
            VisitRule::EveryOccurrence => None,
            VisitRule::FirstOccurrence => Some(first_occurrences(trajectory, self.values.n_states())),
        };

        let mut g = 0.0;
        for (t, (state, reward)) in trajectory.transitions().enumerate().rev() {
            g = self.gamma * g + reward;
            if self.values.is_terminal(state) {
                continue;
            }
            if first_occurrence
                .as_ref()
                .is_some_and(|first| first[state] != Some(t))
            {
                continue;
            }
            let count = self.visits.increment(state) as f64;
            let current = self.values.as_slice()[state];
            self.values.nudge(state, (g - current) / count);
        }
        Ok(())
    }
}

/// Index of the first transition leaving each state, if any.
fn first_occurrences(trajectory: &Trajectory, n_states: usize) -> Vec<Option<usize>> {
    let mut first = vec![None; n_states];
    for (t, (state, _)) in trajectory.transitions().enumerate() {
        first[state].get_or_insert(t);
    }
    first
}

impl ValueEstimator for MonteCarloEstimator {
    fn name(&self) -> &str {
        "Monte Carlo"
    }

    fn values(&self) -> &ValueTable {
        &self.values
    }

    fn on_reset(&mut self, state: State) -> Result<()> {
        self.values.ensure_covers(state)?;
        if self.counting == VisitCounting::SeededWithResetBump {
            self.visits.increment(state);
        }
        Ok(())
    }

    fn on_episode_end(&mut self, trajectory: &Trajectory) -> Result<()> {
        self.update_from_trajectory(trajectory)
    }
}
