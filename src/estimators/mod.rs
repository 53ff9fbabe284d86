//! Tabular state-value estimators
//!
//! Two classical prediction methods for a fixed policy:
//!
//! - **Monte Carlo**: waits for the episode to end and averages the
//!   observed discounted returns
//! - **TD(0)**: updates after every step toward `r + γ·V(s')`
//!
//! Both can run side by side on the same episodes; each keeps its own table.
//!
//! ## Usage Example
//!
//! ```no_run
//! use walking::{
//!     estimators::{EstimationParams, estimate_td0_mc},
//!     policies::UniformRandomPolicy,
//!     walk::WalkingEnv,
//! };
//!
//! let mut env = WalkingEnv::new(7)?;
//! let mut policy = UniformRandomPolicy::new().with_seed(42);
//! let params = EstimationParams::default().with_episodes(1000);
//! let (td0, mc) = estimate_td0_mc(&mut env, &mut policy, &params, None)?;
//! println!("TD(0): {td0}\nMC:    {mc}");
//! # Ok::<(), walking::Error>(())
//! ```

pub mod monte_carlo;
pub mod td0;

pub use monte_carlo::{MonteCarloEstimator, VisitRule};
pub use td0::Td0Estimator;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    pipeline::run_episode,
    ports::{Environment, Policy, RenderHook, ValueEstimator},
    value_table::{ValueTable, VisitCounting},
};

/// Parameters shared by the one-call estimation helpers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationParams {
    /// Number of episodes
    pub episodes: usize,
    /// Discount factor γ
    pub gamma: f64,
    /// TD(0) learning rate α
    pub alpha: f64,
    /// Monte Carlo visit-counter convention
    pub visit_counting: VisitCounting,
    /// Monte Carlo visit rule
    pub visit_rule: VisitRule,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            episodes: 10,
            gamma: 1.0,
            alpha: 0.05,
            visit_counting: VisitCounting::default(),
            visit_rule: VisitRule::default(),
        }
    }
}

impl EstimationParams {
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_visit_counting(mut self, counting: VisitCounting) -> Self {
        self.visit_counting = counting;
        self
    }

    pub fn with_visit_rule(mut self, rule: VisitRule) -> Self {
        self.visit_rule = rule;
        self
    }

    /// Monte Carlo estimator configured from these parameters.
    pub fn monte_carlo(&self, n_states: usize) -> Result<MonteCarloEstimator> {
        Ok(MonteCarloEstimator::new(n_states, self.gamma)?
            .with_visit_counting(self.visit_counting)
            .with_visit_rule(self.visit_rule))
    }

    /// TD(0) estimator configured from these parameters.
    pub fn td0(&self, n_states: usize) -> Result<Td0Estimator> {
        Td0Estimator::new(n_states, self.gamma, self.alpha)
    }
}

/// Run `params.episodes` episodes updating a Monte Carlo table.
pub fn estimate_mc<E, P>(
    env: &mut E,
    policy: &mut P,
    params: &EstimationParams,
    render: Option<&mut (dyn RenderHook + '_)>,
) -> Result<ValueTable>
where
    E: Environment + ?Sized,
    P: Policy + ?Sized,
{
    let mut mc = params.monte_carlo(env.n_states())?;
    run_episodes(env, policy, params.episodes, &mut [&mut mc], render)?;
    Ok(mc.into_values())
}

/// Run `params.episodes` episodes updating a TD(0) table.
pub fn estimate_td0<E, P>(
    env: &mut E,
    policy: &mut P,
    params: &EstimationParams,
    render: Option<&mut (dyn RenderHook + '_)>,
) -> Result<ValueTable>
where
    E: Environment + ?Sized,
    P: Policy + ?Sized,
{
    let mut td0 = params.td0(env.n_states())?;
    run_episodes(env, policy, params.episodes, &mut [&mut td0], render)?;
    Ok(td0.into_values())
}

/// Run TD(0) and Monte Carlo on the same episodes.
///
/// Returns `(td0, mc)`. TD(0) learns during each episode; Monte Carlo
/// processes the identical trajectory once it ends.
pub fn estimate_td0_mc<E, P>(
    env: &mut E,
    policy: &mut P,
    params: &EstimationParams,
    render: Option<&mut (dyn RenderHook + '_)>,
) -> Result<(ValueTable, ValueTable)>
where
    E: Environment + ?Sized,
    P: Policy + ?Sized,
{
    let n_states = env.n_states();
    let mut td0 = params.td0(n_states)?;
    let mut mc = params.monte_carlo(n_states)?;
    run_episodes(env, policy, params.episodes, &mut [&mut td0, &mut mc], render)?;
    Ok((td0.into_values(), mc.into_values()))
}

fn run_episodes<E, P>(
    env: &mut E,
    policy: &mut P,
    episodes: usize,
    estimators: &mut [&mut dyn ValueEstimator],
    mut render: Option<&mut (dyn RenderHook + '_)>,
) -> Result<()>
where
    E: Environment + ?Sized,
    P: Policy + ?Sized,
{
    for _ in 0..episodes {
        run_episode(env, policy, estimators, render.as_deref_mut())?;
    }
    Ok(())
}
