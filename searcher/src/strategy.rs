use std::fmt;
use std::str::FromStr;

use crate::errors::SearchError;
use crate::node::SearchNode;
use crate::traits::Cost;

/// The policy which decides where newly generated nodes
/// are inserted into the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Append children to the back of the frontier.
    Breadth,
    /// Push children onto the front of the frontier.
    Depth,
    /// Keep the frontier sorted by accumulated cost.
    Uniform,
    /// Keep the frontier sorted by heuristic estimate.
    Greedy,
    /// Keep the frontier sorted by cost plus heuristic.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Breadth,
        Strategy::Depth,
        Strategy::Uniform,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// The key used to order the frontier, for strategies which sort it.
    pub fn priority<S, A>(self, node: &SearchNode<S, A>) -> Option<Cost> {
        match self {
            Strategy::Breadth | Strategy::Depth => None,
            Strategy::Uniform => Some(node.cost()),
            Strategy::Greedy => Some(node.heuristic()),
            Strategy::AStar => Some(node.cost() + node.heuristic()),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Breadth
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Breadth => "breadth",
            Strategy::Depth => "depth",
            Strategy::Uniform => "uniform",
            Strategy::Greedy => "greedy",
            Strategy::AStar => "a*",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breadth" => Ok(Strategy::Breadth),
            "depth" => Ok(Strategy::Depth),
            "uniform" => Ok(Strategy::Uniform),
            "greedy" => Ok(Strategy::Greedy),
            "a*" | "astar" => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}
