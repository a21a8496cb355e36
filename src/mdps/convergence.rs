use super::grid::{PolicyGrid, ValueGrid};
use crate::Continuous;
use ndarray::Zip;

pub const VALUE_TOLERANCE: Continuous = 0.05;

/// True iff every cell moved strictly less than `tolerance` between the two grids.
pub fn values_converged(v_states: &ValueGrid, v_prev: &ValueGrid, tolerance: Continuous) -> bool {
    v_states.dim() == v_prev.dim()
        && Zip::from(v_states)
            .and(v_prev)
            .all(|&v, &pv| (v - pv).abs() < tolerance)
}

/// True iff both grids hold the same action in every cell.
pub fn policy_converged(policy: &PolicyGrid, policy_prev: &PolicyGrid) -> bool {
    policy == policy_prev
}
