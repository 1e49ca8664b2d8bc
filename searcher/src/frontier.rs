//! The open list of generated but not yet expanded nodes.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::node::SearchNode;
use crate::strategy::Strategy;

/// Queue of search nodes awaiting expansion.
///
/// Nodes are always taken from the front. The strategy only
/// decides where new nodes are inserted, which is the whole
/// difference between the search algorithms.
#[derive(Debug)]
pub struct Frontier<S, A> {
    strategy: Strategy,
    queue: VecDeque<Rc<SearchNode<S, A>>>,
}

impl<S, A> Frontier<S, A> {
    pub fn new(strategy: Strategy, root: Rc<SearchNode<S, A>>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root);
        Frontier { strategy, queue }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn pop(&mut self) -> Option<Rc<SearchNode<S, A>>> {
        self.queue.pop_front()
    }

    /// Insert the children of an expanded node.
    pub fn push(&mut self, children: Vec<Rc<SearchNode<S, A>>>) {
        match self.strategy {
            Strategy::Breadth => self.queue.extend(children),
            Strategy::Depth => {
                // Children keep their relative order at the front.
                for child in children.into_iter().rev() {
                    self.queue.push_front(child);
                }
            }
            Strategy::Uniform | Strategy::Greedy | Strategy::AStar => {
                self.queue.extend(children);
                self.sort();
            }
        }
    }

    // Slice sorts are stable, so equal keys keep their prior order.
    fn sort(&mut self) {
        let strategy = self.strategy;
        self.queue.make_contiguous().sort_by(|a, b| {
            match (strategy.priority(&**a), strategy.priority(&**b)) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => Ordering::Equal,
            }
        });
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S, A>> {
        self.queue.iter().map(|n| &**n)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    type Node = SearchNode<&'static str, ()>;

    fn children(root: &Rc<Node>, specs: &[(&'static str, f64, f64)]) -> Vec<Rc<Node>> {
        specs
            .iter()
            .map(|&(name, cost, heuristic)| Rc::new(SearchNode::child(root, name, (), cost, heuristic)))
            .collect()
    }

    fn states(frontier: &Frontier<&'static str, ()>) -> Vec<&'static str> {
        frontier.iter().map(|n| *n.state()).collect()
    }

    fn fill(strategy: Strategy) -> Frontier<&'static str, ()> {
        let root = Rc::new(SearchNode::root("R", 0.0));
        let mut frontier = Frontier::new(strategy, Rc::clone(&root));
        assert_eq!(frontier.pop().map(|n| *n.state()), Some("R"));

        frontier.push(children(&root, &[("A", 5.0, 1.0), ("B", 2.0, 9.0)]));
        frontier.push(children(&root, &[("C", 2.0, 3.0), ("D", 1.0, 6.0)]));
        frontier
    }

    #[test]
    fn breadth() {
        assert_eq!(states(&fill(Strategy::Breadth)), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn depth() {
        assert_eq!(states(&fill(Strategy::Depth)), vec!["C", "D", "A", "B"]);
    }

    #[test]
    fn uniform() {
        // B and C tie on cost, B was there first.
        assert_eq!(states(&fill(Strategy::Uniform)), vec!["D", "B", "C", "A"]);
    }

    #[test]
    fn greedy() {
        assert_eq!(states(&fill(Strategy::Greedy)), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn astar() {
        // f: A=6, B=11, C=5, D=7
        assert_eq!(states(&fill(Strategy::AStar)), vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn sorted_pop_is_minimal() {
        for strategy in &[Strategy::Uniform, Strategy::Greedy, Strategy::AStar] {
            let mut frontier = fill(*strategy);
            while let Some(node) = frontier.pop() {
                let key = strategy.priority(&*node).unwrap();
                assert!(frontier.iter().all(|n| key <= strategy.priority(n).unwrap()));
            }
            assert!(frontier.is_empty());
        }
    }
}
