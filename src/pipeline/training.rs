//! Training pipeline - repeats episodes and feeds estimators

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    pipeline::{Trajectory, episode::run_episode},
    ports::{Environment, Observer, Policy, RenderHook, ValueEstimator},
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of episodes to run
    pub num_episodes: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self { num_episodes: 10 }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Episodes run
    pub episodes: usize,

    /// Environment steps across all episodes
    pub total_steps: usize,

    /// Episodes ending in the rewarding (right) terminal
    pub right_exits: usize,

    /// Episodes ending in the left terminal
    pub left_exits: usize,

    /// Episodes cut short by a step limit
    pub truncated: usize,

    /// Mean number of steps per episode
    pub mean_episode_length: f64,
}

impl TrainingResult {
    fn record(&mut self, trajectory: &Trajectory, n_states: usize) {
        self.episodes += 1;
        self.total_steps += trajectory.len();
        if trajectory.truncated() {
            self.truncated += 1;
        } else if trajectory.final_state() == n_states - 1 {
            self.right_exits += 1;
        } else if trajectory.final_state() == 0 {
            self.left_exits += 1;
        }
        self.mean_episode_length = self.total_steps as f64 / self.episodes as f64;
    }

    /// Fraction of episodes ending on the right
    pub fn right_exit_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.right_exits as f64 / self.episodes as f64
        }
    }
}

/// Runs `num_episodes` episodes, sharing each trajectory between all
/// estimators passed to [`TrainingPipeline::run`].
pub struct TrainingPipeline<'r> {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
    render: Option<Box<dyn RenderHook + 'r>>,
}

impl<'r> TrainingPipeline<'r> {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
            render: None,
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Render after every reset and step
    pub fn with_render_hook(mut self, hook: Box<dyn RenderHook + 'r>) -> Self {
        self.render = Some(hook);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run the configured number of episodes.
    ///
    /// Estimator tables persist across episodes; with zero episodes they are
    /// left exactly as given.
    pub fn run<E, P>(
        &mut self,
        env: &mut E,
        policy: &mut P,
        estimators: &mut [&mut dyn ValueEstimator],
    ) -> Result<TrainingResult>
    where
        E: Environment + ?Sized,
        P: Policy + ?Sized,
    {
        let n_states = env.n_states();
        for estimator in estimators.iter() {
            estimator.values().ensure_len(n_states)?;
        }

        let names: Vec<&str> = estimators.iter().map(|e| e.name()).collect();
        tracing::info!(
            episodes = self.config.num_episodes,
            n_states,
            policy = policy.name(),
            estimators = ?names,
            "starting estimation run"
        );

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_episodes)?;
        }

        let mut result = TrainingResult::default();
        for episode in 0..self.config.num_episodes {
            for observer in &mut self.observers {
                observer.on_episode_start(episode)?;
            }

            let trajectory = run_episode(env, policy, estimators, self.render.as_deref_mut())?;
            result.record(&trajectory, n_states);

            if trajectory.truncated() {
                tracing::warn!(
                    episode,
                    steps = trajectory.len(),
                    "episode truncated by step limit"
                );
            } else {
                tracing::debug!(
                    episode,
                    steps = trajectory.len(),
                    final_state = trajectory.final_state(),
                    "episode finished"
                );
            }

            for observer in &mut self.observers {
                observer.on_episode_end(episode, &trajectory)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        tracing::info!(
            episodes = result.episodes,
            total_steps = result.total_steps,
            right_exits = result.right_exits,
            truncated = result.truncated,
            "estimation run finished"
        );

        Ok(result)
    }
}
