//! Core value types shared across the crate

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A position on the walk, in `[0, n_states - 1]`.
pub type State = usize;

/// One of the two moves available in every non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Left,
    Right,
}

impl Action {
    /// Both actions in encoding order.
    pub const ALL: [Action; 2] = [Action::Left, Action::Right];

    /// Discrete encoding used by [`crate::ports::Environment::step`].
    pub const fn index(self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
        }
    }

    /// Apply the transition rule to `state`.
    ///
    /// Callers guarantee `state` is non-terminal, so `Left` never underflows.
    pub(crate) const fn apply(self, state: State) -> State {
        match self {
            Action::Left => state - 1,
            Action::Right => state + 1,
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = Error;

    fn try_from(action: usize) -> Result<Self> {
        match action {
            0 => Ok(Action::Left),
            1 => Ok(Action::Right),
            _ => Err(Error::InvalidAction { action }),
        }
    }
}

impl From<Action> for usize {
    fn from(action: Action) -> Self {
        action.index()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Left => write!(f, "LEFT"),
            Action::Right => write!(f, "RIGHT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_encoding() {
        assert_eq!(Action::Left.index(), 0);
        assert_eq!(Action::Right.index(), 1);
        assert_eq!(Action::try_from(0).unwrap(), Action::Left);
        assert_eq!(Action::try_from(1).unwrap(), Action::Right);
    }

    #[test]
    fn test_invalid_action_code() {
        let err = Action::try_from(2).unwrap_err();
        assert!(matches!(err, Error::InvalidAction { action: 2 }));
    }

    #[test]
    fn test_apply() {
        assert_eq!(Action::Left.apply(3), 2);
        assert_eq!(Action::Right.apply(3), 4);
    }
}
