use std::fmt::Debug;
use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Action {action} is not applicable in state {state}")]
    InvalidAction { state: String, action: String },

    #[error("No solution has been found yet")]
    NoSolutionYet,

    #[error("Step limit exhausted after {0} expansions")]
    StepLimitExhausted(usize),

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),
}

impl SearchError {
    /// Build an [SearchError::InvalidAction] from the offending state and action.
    pub fn invalid_action<S, A>(state: &S, action: &A) -> Self
    where
        S: Debug + ?Sized,
        A: Debug + ?Sized,
    {
        SearchError::InvalidAction {
            state: format!("{:?}", state),
            action: format!("{:?}", action),
        }
    }
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
