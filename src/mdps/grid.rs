use super::actions::Action;
use crate::{Continuous, State};
use itertools::Itertools;
use ndarray::Array2;
use std::collections::HashMap;

/// Exit states and their terminal rewards, e.g. `{(0, 2): 1., (1, 2): -1.}`.
pub type ExitMap = HashMap<State, Continuous>;

/// V_k(s) for every cell, indexed `[[x, y]]`.
pub type ValueGrid = Array2<Continuous>;

/// Best known action for every cell, indexed `[[x, y]]`.
pub type PolicyGrid = Array2<Action>;

/// Maps a logical state onto an index of a grid of shape `dim`, if it lies inside.
pub fn cell_index(dim: (usize, usize), (x, y): State) -> Option<(usize, usize)> {
    let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
    (x < dim.0 && y < dim.1).then_some((x, y))
}

/// Builds the initial value grid, its lookback copy and the initial policy.
///
/// Exit cells hold their reward and the `Exit` action, every other cell starts
/// at `0` heading `North`. Exits outside the grid are ignored.
pub fn initialize_mdp_parameters(
    width: usize,
    height: usize,
    exits: &ExitMap,
) -> (ValueGrid, ValueGrid, PolicyGrid) {
    let mut values = ValueGrid::zeros((width, height));
    let mut policy = PolicyGrid::from_elem((width, height), Action::North);

    for (&state, &reward) in exits {
        if let Some(ix) = cell_index((width, height), state) {
            values[ix] = reward;
            policy[ix] = Action::Exit;
        }
    }

    let prev_values = values.clone();
    (values, prev_values, policy)
}

pub fn render_values(values: &ValueGrid, precision: usize) -> String {
    values
        .outer_iter()
        .map(|row| row.iter().map(|v| format!("{v:.precision$}")).join(" "))
        .join("\n")
}

pub fn render_policy(policy: &PolicyGrid) -> String {
    policy
        .outer_iter()
        .map(|row| row.iter().join(" "))
        .join("\n")
}
