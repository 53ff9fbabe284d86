//! Observer implementations for estimation runs

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    pipeline::Trajectory,
    ports::Observer,
    types::{Action, State},
};

/// Progress bar observer - Shows episode progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    right_exits: usize,
    left_exits: usize,
    truncated: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            right_exits: 0,
            left_exits: 0,
            truncated: 0,
        }
    }

    fn message(&self) -> String {
        format!(
            "R:{} L:{} T:{}",
            self.right_exits, self.left_exits, self.truncated
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, trajectory: &Trajectory) -> Result<()> {
        if trajectory.truncated() {
            self.truncated += 1;
        } else if trajectory.final_state() == 0 {
            self.left_exits += 1;
        } else {
            self.right_exits += 1;
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// One JSONL record per episode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub episode: usize,
    pub states: Vec<State>,
    pub actions: Vec<Action>,
    pub rewards: Vec<f64>,
    pub terminal: bool,
    pub truncated: bool,
}

impl EpisodeRecord {
    pub fn from_trajectory(episode: usize, trajectory: &Trajectory) -> Self {
        Self {
            episode,
            states: trajectory.states().to_vec(),
            actions: trajectory.actions().to_vec(),
            rewards: trajectory.rewards().to_vec(),
            terminal: trajectory.terminated(),
            truncated: trajectory.truncated(),
        }
    }
}

/// JSONL observer - Exports each episode's trajectory as one JSON line
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create episode log {}", path.display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_episode_end(&mut self, episode: usize, trajectory: &Trajectory) -> Result<()> {
        let record = EpisodeRecord::from_trajectory(episode, trajectory);
        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
