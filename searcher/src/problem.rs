use crate::traits::SearchDomain;

/// A concrete problem to be solved within a domain:
/// get from an initial state to one satisfying the goal.
#[derive(Debug)]
pub struct SearchProblem<'d, D>
where
    D: SearchDomain,
{
    domain: &'d D,
    initial: D::State,
    goal: D::State,
}

impl<'d, D> SearchProblem<'d, D>
where
    D: SearchDomain,
{
    pub fn new(domain: &'d D, initial: D::State, goal: D::State) -> Self {
        Self {
            domain,
            initial,
            goal,
        }
    }

    pub fn domain(&self) -> &'d D {
        self.domain
    }

    pub fn initial(&self) -> &D::State {
        &self.initial
    }

    pub fn goal(&self) -> &D::State {
        &self.goal
    }

    /// Does this state satisfy the goal of the problem?
    pub fn goal_test(&self, state: &D::State) -> bool {
        self.domain.satisfies(state, &self.goal)
    }
}
