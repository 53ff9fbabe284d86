//! The random-walk environment
//!
//! A linear chain of `n_states` cells. The walker starts in the middle and
//! moves one cell left or right per step; both ends are absorbing. Only the
//! transition into the right end pays a reward of 1.

pub mod env;
pub mod presets;
pub mod time_limit;

pub use env::{EnvInfo, Step, WalkingEnv};
pub use presets::WalkingPreset;
pub use time_limit::TimeLimit;
