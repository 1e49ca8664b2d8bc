//! Nodes of a search tree.

use std::fmt;
use std::rc::Rc;

use crate::traits::Cost;

/// A node in a search tree.
///
/// Nodes are immutable once built. Each node holds a shared
/// reference to its parent, which is used to walk back to the
/// root; a node never owns its children.
#[derive(Debug)]
pub struct SearchNode<S, A> {
    state: S,
    parent: Option<Rc<SearchNode<S, A>>>,
    depth: usize,
    cost: Cost,
    heuristic: Cost,
    action: Option<A>,
}

impl<S, A> SearchNode<S, A> {
    /// Construct the root of a search tree.
    pub fn root(state: S, heuristic: Cost) -> Self {
        SearchNode {
            state,
            parent: None,
            depth: 0,
            cost: 0.0,
            heuristic,
            action: None,
        }
    }

    /// Construct the node reached from `parent` by taking `action`.
    pub fn child(
        parent: &Rc<SearchNode<S, A>>,
        state: S,
        action: A,
        step_cost: Cost,
        heuristic: Cost,
    ) -> Self {
        SearchNode {
            state,
            parent: Some(Rc::clone(parent)),
            depth: parent.depth + 1,
            cost: parent.cost + step_cost,
            heuristic,
            action: Some(action),
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<&SearchNode<S, A>> {
        self.parent.as_deref()
    }

    /// Number of steps from the root to this node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Accumulated cost from the root to this node.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Estimated remaining cost from this node to the goal.
    pub fn heuristic(&self) -> Cost {
        self.heuristic
    }

    /// The action which produced this node, `None` for the root.
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Walk from this node up to the root, starting with this node.
    pub fn ancestors(&self) -> Ancestors<'_, S, A> {
        Ancestors { node: Some(self) }
    }

    /// Sequence of states from the root to this node.
    pub fn path(&self) -> Vec<S>
    where
        S: Clone,
    {
        let mut path: Vec<S> = self.ancestors().map(|n| n.state.clone()).collect();
        path.reverse();
        path
    }

    /// Sequence of actions taken from the root to reach this node.
    pub fn plan(&self) -> Vec<A>
    where
        A: Clone,
    {
        let mut plan: Vec<A> = self
            .ancestors()
            .filter_map(|n| n.action.clone())
            .collect();
        plan.reverse();
        plan
    }
}

impl<S, A> SearchNode<S, A>
where
    S: PartialEq,
{
    /// Is this state held by this node or by any of its ancestors?
    ///
    /// Used to avoid cycles: a child which would revisit a state
    /// on its own path back to the root is never generated.
    pub fn in_ancestor_chain(&self, state: &S) -> bool {
        self.ancestors().any(|n| &n.state == state)
    }
}

// Unlink the parent chain iteratively, so that dropping a very
// deep node does not recurse once per ancestor.
impl<S, A> Drop for SearchNode<S, A> {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            parent = match Rc::try_unwrap(node) {
                Ok(mut node) => node.parent.take(),
                Err(_) => None,
            };
        }
    }
}

impl<S, A> fmt::Display for SearchNode<S, A>
where
    S: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no({},", self.state)?;
        match self.parent {
            Some(ref parent) => write!(f, "{}", parent)?,
            None => write!(f, "None")?,
        };
        write!(f, ")")
    }
}

/// Iterator over a node and its ancestors, leaf first.
#[derive(Debug)]
pub struct Ancestors<'n, S, A> {
    node: Option<&'n SearchNode<S, A>>,
}

impl<'n, S, A> Iterator for Ancestors<'n, S, A> {
    type Item = &'n SearchNode<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.parent.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chain() -> Rc<SearchNode<&'static str, (&'static str, &'static str)>> {
        let a = Rc::new(SearchNode::root("A", 35.0));
        let b = Rc::new(SearchNode::child(&a, "B", ("A", "B"), 10.0, 25.0));
        let c = Rc::new(SearchNode::child(&b, "C", ("B", "C"), 20.0, 5.0));
        Rc::new(SearchNode::child(&c, "D", ("C", "D"), 5.0, 0.0))
    }

    #[test]
    fn root() {
        let root: SearchNode<&str, ()> = SearchNode::root("A", 1.5);
        assert_eq!(root.depth(), 0);
        assert_eq!(root.cost(), 0.0);
        assert_eq!(root.heuristic(), 1.5);
        assert!(root.parent().is_none());
        assert!(root.action().is_none());
        assert_eq!(root.path(), vec!["A"]);
        assert!(root.plan().is_empty());
    }

    #[test]
    fn child_accumulates() {
        let d = chain();
        assert_eq!(d.depth(), 3);
        assert_eq!(d.cost(), 35.0);
        assert_eq!(d.heuristic(), 0.0);
        assert_eq!(d.action(), Some(&("C", "D")));
        assert_eq!(d.parent().map(|p| *p.state()), Some("C"));
    }

    #[test]
    fn path_and_plan() {
        let d = chain();
        assert_eq!(d.path(), vec!["A", "B", "C", "D"]);
        assert_eq!(d.plan(), vec![("A", "B"), ("B", "C"), ("C", "D")]);

        // Pure functions of the chain.
        assert_eq!(d.path(), d.path());
        assert_eq!(d.plan(), d.plan());
        assert_eq!(d.plan().len(), d.path().len() - 1);
    }

    #[test]
    fn ancestor_chain() {
        let d = chain();
        assert!(d.in_ancestor_chain(&"D"));
        assert!(d.in_ancestor_chain(&"B"));
        assert!(d.in_ancestor_chain(&"A"));
        assert!(!d.in_ancestor_chain(&"E"));

        let c = d.parent().unwrap();
        assert!(!c.in_ancestor_chain(&"D"));
        assert_eq!(d.ancestors().count(), 4);
    }

    #[test]
    fn display() {
        let d = chain();
        assert_eq!(
            format!("{}", d.parent().unwrap()),
            "no(C,no(B,no(A,None)))"
        );
    }

    #[test]
    fn deep_chain_drops() {
        let mut node: Rc<SearchNode<usize, ()>> = Rc::new(SearchNode::root(0, 0.0));
        for i in 1..200_000 {
            node = Rc::new(SearchNode::child(&node, i, (), 1.0, 0.0));
        }
        assert_eq!(node.depth(), 199_999);
        assert!(node.in_ancestor_chain(&0));
        drop(node);
    }
}
