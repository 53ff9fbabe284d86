//! Ports (trait boundaries) between the estimation core and its collaborators.
//!
//! The environment, the policy, the render hook and training observers are
//! all supplied by the caller; estimators plug into the episode loop through
//! [`ValueEstimator`].

pub mod environment;
pub mod estimator;
pub mod observer;
pub mod policy;
pub mod render;

pub use environment::Environment;
pub use estimator::ValueEstimator;
pub use observer::Observer;
pub use policy::Policy;
pub use render::{RenderFrame, RenderHook, ValueSnapshot};
