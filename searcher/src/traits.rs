use std::fmt::Debug;

use crate::errors::Result;

/// Cost of a step, of a path, or of a heuristic estimate.
pub type Cost = f64;

/// Provides the problem definition for a tree search.
///
/// A domain tells the search engine which actions are legal
/// in a state, where they lead, what they cost and how far
/// a state is estimated to be from a goal. The engine never
/// looks inside states or actions beyond comparing states
/// for equality.
pub trait SearchDomain {
    type State: Debug + Clone + PartialEq;
    type Action: Debug + Clone;

    /// All actions applicable in this state, in a deterministic order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying the action in this state.
    ///
    /// Actions which are not applicable in the state should
    /// produce [crate::SearchError::InvalidAction].
    fn result(&self, state: &Self::State, action: &Self::Action) -> Result<Self::State>;

    /// The (non-negative) cost of applying an action in this state.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> Result<Cost>;

    /// Best guess of the remaining cost to reach the goal.
    ///
    /// Only used by the greedy and A* strategies. Should never
    /// overestimate the real cost.
    fn heuristic(&self, state: &Self::State, goal: &Self::State) -> Cost;

    /// Whether the state satisfies the goal.
    fn satisfies(&self, state: &Self::State, goal: &Self::State) -> bool;
}
