pub mod actions;
pub mod convergence;
pub mod grid;
pub mod solvers;
pub mod transitions;

use crate::{Action, Continuous, State};

/// Queries on a solved grid world MDP - Sutton & Barto 2018.
pub trait MdpSolver {
    fn v_star(&self, s: State) -> Option<Continuous>;

    fn q_star(&self, s: State, a: Action) -> Option<Continuous>;

    fn pi_star(&self, s: State) -> Option<Action>;
}
