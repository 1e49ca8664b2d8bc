//! Generalized tree search algorithms.
//!
//! To use these search algorithms, implement the trait [SearchDomain]
//! for a problem domain, pose a [SearchProblem] within it, and run
//! a [SearchTree] with one of the [Strategy] variants:
//!
//! - breadth-first
//! - depth-first
//! - uniform cost
//! - greedy best-first
//! - A*

mod errors;
pub mod frontier;
pub mod node;
mod problem;
mod strategy;
mod traits;
mod tree;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use node::SearchNode;
pub use problem::SearchProblem;
pub use strategy::Strategy;
pub use traits::Cost;
pub use traits::SearchDomain;
pub use tree::Node;
pub use tree::SearchTree;
