//! Estimator port - value-estimation algorithms driven by the episode loop

use crate::{Result, pipeline::Trajectory, types::State, value_table::ValueTable, walk::Step};

/// A tabular state-value estimator.
///
/// The episode driver calls the hooks in this order for every episode:
/// 1. `on_reset(initial_state)`
/// 2. `on_step(state, step)` after each environment step, before the next one
/// 3. `on_episode_end(trajectory)` once the episode has terminated or been truncated
///
/// Online methods (TD) do their work in `on_step`; episode-batched methods
/// (Monte Carlo) in `on_episode_end`. Several estimators can share one
/// trajectory.
pub trait ValueEstimator {
    /// Name used in logs and render labels.
    fn name(&self) -> &str;

    /// Current value table.
    fn values(&self) -> &ValueTable;

    fn on_reset(&mut self, _state: State) -> Result<()> {
        Ok(())
    }

    fn on_step(&mut self, _state: State, _step: &Step) -> Result<()> {
        Ok(())
    }

    fn on_episode_end(&mut self, _trajectory: &Trajectory) -> Result<()> {
        Ok(())
    }
}
