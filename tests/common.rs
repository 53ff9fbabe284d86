//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use walking::{
    Result, ValueTable,
    pipeline::Trajectory,
    policies::UniformRandomPolicy,
    ports::{Observer, RenderFrame, RenderHook},
    walk::WalkingEnv,
};

/// Fresh walk and a seeded uniform random policy.
pub fn seeded_walk(n_states: usize, seed: u64) -> (WalkingEnv, UniformRandomPolicy) {
    let env = WalkingEnv::new(n_states).expect("valid walk size");
    let policy = UniformRandomPolicy::new().with_seed(seed);
    (env, policy)
}

/// Assert every state of `values` lies within `tolerance` of `expected`.
pub fn assert_close(values: &ValueTable, expected: &ValueTable, tolerance: f64) {
    assert_eq!(values.n_states(), expected.n_states());
    for (state, (got, want)) in values
        .as_slice()
        .iter()
        .zip(expected.as_slice())
        .enumerate()
    {
        assert!(
            (got - want).abs() <= tolerance,
            "state {state}: got {got:.4}, expected {want:.4} (±{tolerance})\n  values:   {values}\n  expected: {expected}"
        );
    }
}

/// Terminal entries must never move away from zero.
pub fn assert_terminals_zero(values: &ValueTable) {
    let slice = values.as_slice();
    assert_eq!(slice[0], 0.0);
    assert_eq!(slice[slice.len() - 1], 0.0);
}

/// What a recording render hook saw for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub state: usize,
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// Render hook that keeps every frame it is given.
#[derive(Debug, Default)]
pub struct RecordingHook {
    pub frames: Vec<Frame>,
}

impl RenderHook for RecordingHook {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()> {
        self.frames.push(Frame {
            state: frame.state,
            labels: frame
                .snapshots
                .iter()
                .map(|s| s.label.to_string())
                .collect(),
            values: frame.snapshots.iter().map(|s| s.values.to_vec()).collect(),
        });
        Ok(())
    }
}

/// Observer event log, shared with the test through an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    TrainingStart(usize),
    EpisodeStart(usize),
    EpisodeEnd(usize, usize),
    TrainingEnd,
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Arc<Mutex<Vec<Event>>>,
}

impl EventLog {
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.lock().expect("event log poisoned").clone()
    }

    fn push(&self, event: Event) {
        self.events.lock().expect("event log poisoned").push(event);
    }
}

impl Observer for EventLog {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        self.push(Event::TrainingStart(total_episodes));
        Ok(())
    }

    fn on_episode_start(&mut self, episode: usize) -> Result<()> {
        self.push(Event::EpisodeStart(episode));
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, trajectory: &Trajectory) -> Result<()> {
        self.push(Event::EpisodeEnd(episode, trajectory.len()));
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.push(Event::TrainingEnd);
        Ok(())
    }
}
