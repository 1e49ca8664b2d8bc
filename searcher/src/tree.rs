//! The search tree, which drives a search to completion.

use std::rc::Rc;

use tracing::{debug, info, trace};

use crate::errors::{Result, SearchError};
use crate::frontier::Frontier;
use crate::node::SearchNode;
use crate::problem::SearchProblem;
use crate::strategy::Strategy;
use crate::traits::{Cost, SearchDomain};

/// A search node for the states and actions of a domain.
pub type Node<D> = SearchNode<<D as SearchDomain>::State, <D as SearchDomain>::Action>;

#[derive(Debug)]
struct StepLimit {
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self { maximum: limit }
    }

    fn check(&self, expanded: usize) -> Result<()> {
        if expanded >= self.maximum {
            Err(SearchError::StepLimitExhausted(expanded))
        } else {
            Ok(())
        }
    }
}

/// Tree search over a problem, using a single strategy.
///
/// The tree records the solution once one is found, along
/// with the number of terminal and non-terminal nodes, from
/// which the average branching factor is derived.
#[derive(Debug)]
pub struct SearchTree<'d, D>
where
    D: SearchDomain,
{
    problem: SearchProblem<'d, D>,
    open_nodes: Frontier<D::State, D::Action>,
    solution: Option<Rc<Node<D>>>,
    terminals: usize,
    non_terminals: usize,
    counter: Option<StepLimit>,
}

impl<'d, D> SearchTree<'d, D>
where
    D: SearchDomain,
{
    pub fn new(problem: SearchProblem<'d, D>, strategy: Strategy) -> Self {
        let heuristic = problem
            .domain()
            .heuristic(problem.initial(), problem.goal());
        let root = Rc::new(SearchNode::root(problem.initial().clone(), heuristic));

        SearchTree {
            problem,
            open_nodes: Frontier::new(strategy, root),
            solution: None,
            terminals: 1,
            non_terminals: 0,
            counter: None,
        }
    }

    /// Set a limit on the number of nodes expanded.
    ///
    /// When this many nodes have been expanded without finding
    /// the goal, the search will return an error.
    pub fn set_expansion_limit(&mut self, limit: usize) {
        self.counter = Some(StepLimit::new(limit))
    }

    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.set_expansion_limit(limit);
        self
    }

    pub fn problem(&self) -> &SearchProblem<'d, D> {
        &self.problem
    }

    pub fn strategy(&self) -> Strategy {
        self.open_nodes.strategy()
    }

    /// The goal node, once the search has succeeded.
    pub fn solution(&self) -> Option<&Node<D>> {
        self.solution.as_deref()
    }

    /// Nodes which were generated but never expanded.
    pub fn terminals(&self) -> usize {
        self.terminals
    }

    /// Nodes which were expanded.
    pub fn non_terminals(&self) -> usize {
        self.non_terminals
    }

    /// Number of nodes still waiting in the frontier.
    pub fn open_nodes(&self) -> usize {
        self.open_nodes.len()
    }

    /// States from the root to this node.
    pub fn get_path(&self, node: &Node<D>) -> Vec<D::State> {
        node.path()
    }

    /// Actions from the root to this node.
    pub fn get_plan(&self, node: &Node<D>) -> Vec<D::Action> {
        node.plan()
    }

    fn solved(&self) -> Result<&Node<D>> {
        self.solution().ok_or(SearchError::NoSolutionYet)
    }

    /// Number of steps in the solution.
    pub fn length(&self) -> Result<usize> {
        Ok(self.solved()?.depth())
    }

    /// Total cost of the solution.
    pub fn cost(&self) -> Result<Cost> {
        Ok(self.solved()?.cost())
    }

    /// Actions which lead from the initial state to the solution.
    pub fn plan(&self) -> Result<Vec<D::Action>> {
        Ok(self.get_plan(self.solved()?))
    }

    /// States from the initial state to the solution.
    pub fn path(&self) -> Result<Vec<D::State>> {
        Ok(self.get_path(self.solved()?))
    }

    /// Average number of children per expanded node, rounded
    /// to two decimal places.
    ///
    /// Zero when no node has been expanded, e.g. when the
    /// initial state already satisfies the goal.
    pub fn avg_branching(&self) -> f64 {
        if self.non_terminals == 0 {
            return 0.0;
        }
        let generated = (self.terminals + self.non_terminals - 1) as f64;
        let ratio = generated / self.non_terminals as f64;
        (ratio * 100.0).round() / 100.0
    }

    /// Run the search to completion.
    ///
    /// Returns the states from the initial state to the goal,
    /// or `None` when the search space was exhausted. Children
    /// deeper than `limit` are never generated.
    pub fn search(&mut self, limit: Option<usize>) -> Result<Option<Vec<D::State>>> {
        if let Some(ref solution) = self.solution {
            return Ok(Some(solution.path()));
        }

        while let Some(node) = self.open_nodes.pop() {
            if self.problem.goal_test(node.state()) {
                // The goal is still a terminal node.
                self.terminals = self.open_nodes.len() + 1;
                info!(
                    strategy = %self.strategy(),
                    depth = node.depth(),
                    cost = node.cost(),
                    terminals = self.terminals,
                    non_terminals = self.non_terminals,
                    "solution found"
                );
                let path = node.path();
                self.solution = Some(node);
                return Ok(Some(path));
            }

            if let Some(ref counter) = self.counter {
                counter.check(self.non_terminals)?;
            }
            self.non_terminals += 1;

            let children = self.expand(&node, limit)?;
            debug!(
                state = ?node.state(),
                depth = node.depth(),
                cost = node.cost(),
                children = children.len(),
                open = self.open_nodes.len(),
                "expanded node"
            );
            self.open_nodes.push(children);
        }

        self.terminals = self.open_nodes.len();
        info!(
            strategy = %self.strategy(),
            non_terminals = self.non_terminals,
            "search space exhausted"
        );
        Ok(None)
    }

    fn expand(&self, node: &Rc<Node<D>>, limit: Option<usize>) -> Result<Vec<Rc<Node<D>>>> {
        let domain = self.problem.domain();
        let mut children = Vec::new();

        for action in domain.actions(node.state()) {
            let state = domain.result(node.state(), &action)?;
            let step = domain.cost(node.state(), &action)?;
            let heuristic = domain.heuristic(&state, self.problem.goal());

            // Never revisit a state on the path back to the root.
            if node.in_ancestor_chain(&state) {
                trace!(state = ?state, "discarding cyclic child");
                continue;
            }

            let child = SearchNode::child(node, state, action, step, heuristic);
            if limit.map_or(false, |l| child.depth() > l) {
                trace!(state = ?child.state(), "discarding child beyond depth limit");
                continue;
            }
            children.push(Rc::new(child));
        }

        Ok(children)
    }
}
