extern crate ndarray;
extern crate serde;
extern crate serde_json;

pub mod config;
pub mod error;
pub mod mdps;

pub use config::SolverConfig;
pub use error::{MdpError, Result};
pub use mdps::{
    actions::Action,
    convergence::{policy_converged, values_converged, VALUE_TOLERANCE},
    grid::{initialize_mdp_parameters, render_policy, render_values, ExitMap, PolicyGrid, ValueGrid},
    solvers::value_iteration::{MdpProblem, Solution, Step, ValueIteration},
    transitions::{get_transition, Transition},
    MdpSolver,
};

pub type Discrete = i32;
pub type Continuous = f64;

/// A logical grid state `(x, y)`. `x` indexes rows (North decreases it), `y` indexes columns.
pub type State = (Discrete, Discrete);
