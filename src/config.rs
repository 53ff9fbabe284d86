//! Run configuration

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    estimators::{EstimationParams, VisitRule},
    value_table::VisitCounting,
    walk::{WalkingEnv, WalkingPreset},
};

/// Parameters of one estimation run.
///
/// Every field has a default, so a JSON file only needs the keys it
/// overrides.
///
/// # Examples
///
/// ```
/// use walking::config::RunConfig;
/// use walking::walk::WalkingPreset;
///
/// let config = RunConfig::default()
///     .with_preset(WalkingPreset::Walking7)
///     .with_episodes(500)
///     .with_seed(42);
/// assert_eq!(config.resolved_n_states(), 9);
/// config.validate()?;
/// # Ok::<(), walking::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Reference walk size
    pub preset: WalkingPreset,
    /// Explicit state count, overriding the preset
    pub n_states: Option<usize>,
    /// Number of episodes
    pub episodes: usize,
    /// Discount factor γ
    pub gamma: f64,
    /// TD(0) learning rate α
    pub alpha: f64,
    /// Invoke the render hook after every reset and step
    pub render: bool,
    /// Random seed for the behaviour policy
    pub seed: Option<u64>,
    /// Episode step cap; `None` uses the preset's cap
    pub max_steps: Option<usize>,
    /// Disable the step cap entirely
    pub time_limit: bool,
    /// Monte Carlo visit-counter convention
    pub visit_counting: VisitCounting,
    /// Monte Carlo visit rule
    pub visit_rule: VisitRule,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            preset: WalkingPreset::default(),
            n_states: None,
            episodes: 10,
            gamma: 1.0,
            alpha: 0.05,
            render: true,
            seed: None,
            max_steps: None,
            time_limit: true,
            visit_counting: VisitCounting::default(),
            visit_rule: VisitRule::default(),
        }
    }
}

impl RunConfig {
    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_preset(mut self, preset: WalkingPreset) -> Self {
        self.preset = preset;
        self
    }

    pub fn with_n_states(mut self, n_states: usize) -> Self {
        self.n_states = Some(n_states);
        self
    }

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

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn without_time_limit(mut self) -> Self {
        self.time_limit = false;
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

    /// Number of states after applying the override.
    pub fn resolved_n_states(&self) -> usize {
        self.n_states.unwrap_or_else(|| self.preset.n_states())
    }

    /// Step cap to apply, if any.
    ///
    /// The preset's cap only belongs to the preset's size: with an explicit
    /// `n_states` there is no cap unless `max_steps` is set.
    pub fn resolved_max_steps(&self) -> Option<usize> {
        if !self.time_limit {
            return None;
        }
        match (self.max_steps, self.n_states) {
            (Some(max_steps), _) => Some(max_steps),
            (None, Some(_)) => None,
            (None, None) => Some(self.preset.max_episode_steps()),
        }
    }

    /// Check ranges before any episode runs.
    pub fn validate(&self) -> Result<()> {
        let n_states = self.resolved_n_states();
        if n_states < WalkingEnv::MIN_STATES {
            return Err(Error::InvalidStateCount { n_states });
        }
        if self.episodes == 0 {
            return Err(Error::config("episodes must be a positive integer"));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(Error::config(format!(
                "gamma must be in [0, 1], got {}",
                self.gamma
            )));
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(Error::config(format!(
                "alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        if self.time_limit && self.max_steps == Some(0) {
            return Err(Error::config("max_steps must be positive"));
        }
        Ok(())
    }

    /// Estimation parameters derived from this configuration.
    pub fn estimation_params(&self) -> EstimationParams {
        EstimationParams {
            episodes: self.episodes,
            gamma: self.gamma,
            alpha: self.alpha,
            visit_counting: self.visit_counting,
            visit_rule: self.visit_rule,
        }
    }
}
