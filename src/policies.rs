//! Behaviour policies for the walk

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    ports::Policy,
    types::{Action, State},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Picks `Left` or `Right` with equal probability, ignoring the state.
#[derive(Debug, Clone)]
pub struct UniformRandomPolicy {
    rng: StdRng,
    rng_seed: Option<u64>,
}

impl UniformRandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: build_rng(None),
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.rng_seed = Some(seed);
        self
    }

    /// Seed given at construction, if any.
    pub fn seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Restart the random stream (from the seed when there is one).
    pub fn reset_rng(&mut self) {
        self.rng = build_rng(self.rng_seed);
    }
}

impl Default for UniformRandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for UniformRandomPolicy {
    fn select_action(&mut self, _state: State) -> Action {
        if self.rng.random_bool(0.5) {
            Action::Right
        } else {
            Action::Left
        }
    }

    fn name(&self) -> &str {
        "uniform-random"
    }
}

/// Always takes the same action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantPolicy {
    action: Action,
}

impl ConstantPolicy {
    pub fn new(action: Action) -> Self {
        Self { action }
    }

    pub fn action(&self) -> Action {
        self.action
    }
}

impl Policy for ConstantPolicy {
    fn select_action(&mut self, _state: State) -> Action {
        self.action
    }

    fn name(&self) -> &str {
        match self.action {
            Action::Left => "always-left",
            Action::Right => "always-right",
        }
    }
}
