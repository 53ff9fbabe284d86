//! Random-walk prediction with Monte Carlo and TD(0)
//!
//! This crate provides:
//! - A finite linear random-walk MDP with Gymnasium-style `reset`/`step`
//! - An episode driver that runs a policy and feeds value estimators
//! - Monte Carlo and TD(0) tabular state-value estimators
//! - Optional render hooks and training observers
//! - A command-line front end mirroring the classic TD(0)/MC scripts
//!
//! ```no_run
//! use walking::{
//!     estimators::{EstimationParams, estimate_td0},
//!     policies::UniformRandomPolicy,
//!     walk::WalkingEnv,
//! };
//!
//! let mut env = WalkingEnv::new(7)?;
//! let mut policy = UniformRandomPolicy::new();
//! let values = estimate_td0(&mut env, &mut policy, &EstimationParams::default(), None)?;
//! println!("{values}");
//! # Ok::<(), walking::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod estimators;
pub mod pipeline;
pub mod policies;
pub mod ports;
pub mod render;
pub mod types;
pub mod value_table;
pub mod walk;

pub use error::{Error, Result};
pub use types::{Action, State};
pub use value_table::{ValueTable, VisitCounting, VisitCounts};
