//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing estimation runs,
//! allowing composable reporting without coupling the episode loop
//! to progress bars, log formats or metrics.

use crate::{Result, pipeline::Trajectory};

/// Observer trait for monitoring estimation runs
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_episodes)` - Once at the beginning
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_episode_end(episode, trajectory)` - After all estimators have updated
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use walking::{pipeline::Trajectory, ports::Observer};
///
/// struct StepCounter {
///     steps: usize,
/// }
///
/// impl Observer for StepCounter {
///     fn on_episode_end(&mut self, _episode: usize, trajectory: &Trajectory) -> walking::Result<()> {
///         self.steps += trajectory.len();
///         Ok(())
///     }
/// }
/// ```
pub trait Observer {
    /// Called when a run starts.
    ///
    /// # Parameters
    ///
    /// * `total_episodes` - Total number of episodes that will be run
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    /// Called before an episode's reset.
    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called when an episode ends, after every estimator has processed it.
    fn on_episode_end(&mut self, _episode: usize, _trajectory: &Trajectory) -> Result<()> {
        Ok(())
    }

    /// Called when the run completes.
    ///
    /// Use this to finalize outputs, flush files, or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
