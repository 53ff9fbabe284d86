//! Render hook port - optional visualization of value tables
//!
//! The hook receives the walker position and a variable-length list of
//! value-table snapshots; it decides the layout itself. Errors raised by a
//! hook (a size mismatch, a failed write) are propagated to the caller.

use crate::{Result, types::State};

/// A labelled, read-only view of one value table.
#[derive(Debug, Clone, Copy)]
pub struct ValueSnapshot<'a> {
    pub label: &'a str,
    pub values: &'a [f64],
}

/// Everything a hook needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub n_states: usize,
    /// Position of the walker.
    pub state: State,
    pub snapshots: &'a [ValueSnapshot<'a>],
}

/// Called after every reset and every step when rendering is enabled.
///
/// Closures taking a frame and returning nothing are hooks as well.
pub trait RenderHook {
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()>;
}

impl<F> RenderHook for F
where
    F: FnMut(&RenderFrame<'_>),
{
    fn render(&mut self, frame: &RenderFrame<'_>) -> Result<()> {
        self(frame);
        Ok(())
    }
}
