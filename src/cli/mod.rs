//! CLI infrastructure for the walking toolkit
//!
//! One subcommand per estimation run: TD(0), Monte Carlo, or both on the
//! same episodes.

pub mod args;
pub mod commands;
pub mod output;
