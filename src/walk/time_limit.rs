//! Step-limit wrapper
//!
//! The walk itself never truncates. `TimeLimit` layers an episode-length
//! cap on top of any [`Environment`], marking the step that reaches the cap
//! as truncated unless it is also terminal.

use crate::{
    Result,
    ports::Environment,
    types::State,
    walk::{EnvInfo, Step},
};

#[derive(Debug, Clone)]
pub struct TimeLimit<E> {
    inner: E,
    max_steps: usize,
    elapsed: usize,
}

impl<E: Environment> TimeLimit<E> {
    pub fn new(inner: E, max_steps: usize) -> Self {
        Self {
            inner,
            max_steps,
            elapsed: 0,
        }
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Steps taken since the last reset.
    pub fn elapsed(&self) -> usize {
        self.elapsed
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: Environment> Environment for TimeLimit<E> {
    fn n_states(&self) -> usize {
        self.inner.n_states()
    }

    fn state(&self) -> State {
        self.inner.state()
    }

    fn reset(&mut self) -> (State, EnvInfo) {
        self.elapsed = 0;
        self.inner.reset()
    }

    fn step(&mut self, action: usize) -> Result<Step> {
        let mut step = self.inner.step(action)?;
        self.elapsed += 1;
        if self.elapsed >= self.max_steps && !step.terminal {
            step.truncated = true;
        }
        Ok(step)
    }
}
