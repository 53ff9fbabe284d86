//! Tabular state values and visit counters

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, types::State};

/// State-value estimates indexed by state.
///
/// The two terminal entries are held at zero and never updated by the
/// estimators in this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ValueTable {
    values: Vec<f64>,
}

impl TryFrom<Vec<f64>> for ValueTable {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_values(values)
    }
}

impl From<ValueTable> for Vec<f64> {
    fn from(table: ValueTable) -> Self {
        table.values
    }
}

impl ValueTable {
    /// Starting estimate for every non-terminal state.
    pub const INITIAL_VALUE: f64 = 0.5;

    /// `[0, 0.5, ..., 0.5, 0]` with `n_states` entries.
    pub fn new(n_states: usize) -> Result<Self> {
        Self::filled(n_states, Self::INITIAL_VALUE)
    }

    /// Terminals at zero, every other entry at `initial`.
    pub fn filled(n_states: usize, initial: f64) -> Result<Self> {
        if n_states < 3 {
            return Err(Error::InvalidStateCount { n_states });
        }
        let mut values = vec![initial; n_states];
        values[0] = 0.0;
        values[n_states - 1] = 0.0;
        Ok(Self { values })
    }

    /// Wrap an explicit table covering every state.
    ///
    /// Both terminal entries must be zero.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.len() < 3 {
            return Err(Error::InvalidStateCount {
                n_states: values.len(),
            });
        }
        let last = values.len() - 1;
        for state in [0, last] {
            if values[state] != 0.0 {
                return Err(Error::NonZeroTerminalValue {
                    state,
                    value: values[state],
                });
            }
        }
        Ok(Self { values })
    }

    /// Build a full table from either `n_states` entries or the
    /// `n_states - 2` non-terminal entries (terminal zeros implied).
    pub fn expand(values: &[f64], n_states: usize) -> Result<Self> {
        if values.len() == n_states {
            return Self::from_values(values.to_vec());
        }
        if n_states >= 2 && values.len() == n_states - 2 {
            let mut full = Vec::with_capacity(n_states);
            full.push(0.0);
            full.extend_from_slice(values);
            full.push(0.0);
            return Self::from_values(full);
        }
        Err(Error::ValueTableSizeMismatch {
            expected: n_states,
            got: values.len(),
        })
    }

    /// True values of the uniform random walk with `gamma = 1`:
    /// the probability of exiting on the right, `s / (n_states - 1)`.
    pub fn uniform_random_walk(n_states: usize) -> Result<Self> {
        let mut table = Self::filled(n_states, 0.0)?;
        let last = (n_states - 1) as f64;
        for state in 1..n_states - 1 {
            table.values[state] = state as f64 / last;
        }
        Ok(table)
    }

    pub fn n_states(&self) -> usize {
        self.values.len()
    }

    pub fn is_terminal(&self, state: State) -> bool {
        state == 0 || state == self.values.len() - 1
    }

    /// Value of `state`, or `None` when out of range.
    pub fn get(&self, state: State) -> Option<f64> {
        self.values.get(state).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Move `state`'s estimate by `delta`. Terminal states are left untouched.
    pub(crate) fn nudge(&mut self, state: State, delta: f64) {
        if !self.is_terminal(state) {
            self.values[state] += delta;
        }
    }

    /// Fail unless `state` indexes into the table.
    pub fn ensure_covers(&self, state: State) -> Result<()> {
        if state >= self.values.len() {
            return Err(Error::ValueTableSizeMismatch {
                expected: state + 1,
                got: self.values.len(),
            });
        }
        Ok(())
    }

    /// Fail unless the table covers exactly `n_states` states.
    pub fn ensure_len(&self, n_states: usize) -> Result<()> {
        if self.values.len() != n_states {
            return Err(Error::ValueTableSizeMismatch {
                expected: n_states,
                got: self.values.len(),
            });
        }
        Ok(())
    }

    /// Values rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Vec<f64> {
        let scale = 10f64.powi(decimals as i32);
        self.values
            .iter()
            .map(|v| (v * scale).round() / scale)
            .collect()
    }

    /// Root-mean-square error over the non-terminal states.
    pub fn rms_error(&self, reference: &ValueTable) -> Result<f64> {
        reference.ensure_len(self.n_states())?;
        let interior = 1..self.n_states() - 1;
        let count = interior.len() as f64;
        let sum: f64 = interior
            .map(|s| (self.values[s] - reference.values[s]).powi(2))
            .sum();
        Ok((sum / count).sqrt())
    }

    /// Largest absolute difference over all states.
    pub fn max_abs_error(&self, reference: &ValueTable) -> Result<f64> {
        reference.ensure_len(self.n_states())?;
        Ok(self
            .values
            .iter()
            .zip(&reference.values)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max))
    }
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v:.precision$}")?;
        }
        write!(f, "]")
    }
}

/// How Monte Carlo visit counters are seeded and bumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VisitCounting {
    /// Counters start at zero and are incremented before dividing, so the
    /// first update of a state sets its value to the observed return.
    #[default]
    Standard,
    /// Counters start at one and the reset state is bumped once per
    /// episode on top of the per-update increment. Inflated divisors make
    /// MC converge more slowly.
    SeededWithResetBump,
}

/// Per-state visit counters, the denominators of the MC sample mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitCounts {
    counts: Vec<u64>,
}

impl VisitCounts {
    pub fn new(n_states: usize, counting: VisitCounting) -> Self {
        let seed = match counting {
            VisitCounting::Standard => 0,
            VisitCounting::SeededWithResetBump => 1,
        };
        Self {
            counts: vec![seed; n_states],
        }
    }

    /// Increment `state`'s counter and return the new count.
    pub fn increment(&mut self, state: State) -> u64 {
        self.counts[state] += 1;
        self.counts[state]
    }

    pub fn get(&self, state: State) -> Option<u64> {
        self.counts.get(state).copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
