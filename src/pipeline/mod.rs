//! Episode collection and training loops
//!
//! This module provides:
//! - The episode driver, which runs one episode and feeds estimators
//! - The training pipeline, which repeats episodes and notifies observers
//! - Observer implementations for progress display and episode logs

pub mod episode;
pub mod observers;
pub mod training;
pub mod trajectory;

pub use episode::{collect_episode, run_episode};
pub use observers::{EpisodeRecord, JsonlObserver, ProgressObserver};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};
pub use trajectory::Trajectory;

pub use crate::ports::{Observer, ValueEstimator};
