//! Arguments shared by all estimation commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    config::RunConfig,
    estimators::VisitRule,
    value_table::VisitCounting,
    walk::WalkingPreset,
};

/// Lenient boolean parser: `true`, `t`, `yes`
/// and `1` (any case) are true, everything else is false.
pub fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "t" | "yes" | "1"
    ))
}

/// Environment and episode-loop options
#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Number of episodes. Default: 10
    #[arg(long, short = 'e')]
    pub episodes: Option<usize>,

    /// Gamma (discount factor). Default: 1.0
    #[arg(long, short = 'g')]
    pub gamma: Option<f64>,

    /// Whether to render or not. Default: True
    #[arg(long, short = 'r', value_parser = parse_flag)]
    pub render: Option<bool>,

    /// Walk preset
    #[arg(long = "env", value_enum)]
    pub preset: Option<WalkingPreset>,

    /// Number of states including both terminals (overrides --env)
    #[arg(long)]
    pub n_states: Option<usize>,

    /// Maximum steps per episode (defaults to the preset's limit; none with --n-states)
    #[arg(long)]
    pub max_steps: Option<usize>,

    /// Run episodes without any step limit
    #[arg(long, default_value_t = false)]
    pub no_time_limit: bool,

    /// Random seed for the policy
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with run configuration; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = false)]
    pub progress: bool,

    /// Optional file for per-episode JSONL trajectories
    #[arg(long)]
    pub episode_log: Option<PathBuf>,
}

/// Monte Carlo bookkeeping options
#[derive(Args, Debug, Clone, Default)]
pub struct VisitArgs {
    /// Visit-counter convention
    #[arg(long, value_enum)]
    pub visit_counting: Option<VisitCounting>,

    /// Which occurrences of a state update it
    #[arg(long, value_enum)]
    pub visit_rule: Option<VisitRule>,
}

impl WalkArgs {
    /// Merge the config file (if any) with the flags given on the command line.
    pub fn to_config(&self, alpha: Option<f64>, visit: Option<&VisitArgs>) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(preset) = self.preset {
            config.preset = preset;
        }
        if let Some(n_states) = self.n_states {
            config.n_states = Some(n_states);
        }
        if let Some(episodes) = self.episodes {
            config.episodes = episodes;
        }
        if let Some(gamma) = self.gamma {
            config.gamma = gamma;
        }
        if let Some(alpha) = alpha {
            config.alpha = alpha;
        }
        if let Some(render) = self.render {
            config.render = render;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = Some(max_steps);
        }
        if self.no_time_limit {
            config.time_limit = false;
        }
        if let Some(visit) = visit {
            if let Some(counting) = visit.visit_counting {
                config.visit_counting = counting;
            }
            if let Some(rule) = visit.visit_rule {
                config.visit_rule = rule;
            }
        }

        config.validate().context("invalid run configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        for truthy in ["true", "T", "yes", "1", " True "] {
            assert!(parse_flag(truthy).unwrap());
        }
        for falsy in ["false", "0", "no", "nope"] {
            assert!(!parse_flag(falsy).unwrap());
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = WalkArgs {
            episodes: Some(200),
            render: Some(false),
            preset: Some(WalkingPreset::Walking7),
            ..WalkArgs::default()
        };
        let config = args.to_config(Some(0.1), None).unwrap();
        assert_eq!(config.episodes, 200);
        assert!(!config.render);
        assert_eq!(config.alpha, 0.1);
        assert_eq!(config.resolved_n_states(), 9);
        assert_eq!(config.gamma, 1.0);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let args = WalkArgs {
            n_states: Some(2),
            ..WalkArgs::default()
        };
        assert!(args.to_config(None, None).is_err());
    }
}
