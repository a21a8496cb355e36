use super::{actions::Action, grid::cell_index};
use crate::{Continuous, State};

/// Probability of moving in the intended direction.
pub const P_INTENDED: Continuous = 0.8;

/// Probability of slipping into the perpendicular direction instead.
pub const P_SLIP: Continuous = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next_state: State,
    pub probability: Continuous,
}

/// Next non-deterministic states after choosing `action` in `state` on a grid of shape `dim`,
/// e.g. `[((x, y), 0.8), ((z, t), 0.2)]`.
///
/// Destinations off the grid are dropped and their probability mass is lost, so the result
/// can hold fewer than two entries and sum to less than 1 along the edges.
pub fn get_transition(dim: (usize, usize), state: State, action: Action) -> Vec<Transition> {
    let Some(slip) = action.slip() else {
        return vec![];
    };

    [(action, P_INTENDED), (slip, P_SLIP)]
        .into_iter()
        .filter_map(|(a, probability)| {
            let (dx, dy) = a.delta();
            let next_state = (state.0 + dx, state.1 + dy);
            cell_index(dim, next_state).map(|_| Transition {
                next_state,
                probability,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertor::*;
    use float_eq::*;
    use rstest::*;

    fn mass(ts: &[Transition]) -> Continuous {
        ts.iter().map(|t| t.probability).sum()
    }

    #[test]
    fn interior_cells_keep_full_mass() {
        for a in Action::MOVES {
            let ts = get_transition((3, 3), (1, 1), a);

            assert_that!(ts).has_length(2);
            assert_float_eq!(mass(&ts), 1., abs <= 1e-12);
        }
    }

    #[rstest]
    #[case(Action::North, (2, 3))]
    #[case(Action::East, (3, 2))]
    #[case(Action::South, (2, 1))]
    #[case(Action::West, (1, 2))]
    fn slip_lands_clockwise(#[case] action: Action, #[case] slipped_to: State) {
        let ts = get_transition((5, 5), (2, 2), action);

        assert_that!(ts).contains(Transition {
            next_state: slipped_to,
            probability: P_SLIP,
        });
    }

    #[test]
    fn intended_move_comes_first() {
        let ts = get_transition((3, 3), (1, 1), Action::North);

        assert_eq!(
            ts,
            vec![
                Transition {
                    next_state: (0, 1),
                    probability: 0.8
                },
                Transition {
                    next_state: (1, 2),
                    probability: 0.2
                },
            ]
        );
    }

    #[rstest]
    #[case((0, 0), Action::North, vec![((0, 1), 0.2)])]
    #[case((0, 0), Action::West, vec![])]
    #[case((2, 2), Action::South, vec![((2, 1), 0.2)])]
    #[case((2, 2), Action::East, vec![])]
    #[case((0, 2), Action::North, vec![])]
    #[case((2, 0), Action::South, vec![])]
    #[case((1, 2), Action::East, vec![((2, 2), 0.2)])]
    #[case((1, 0), Action::West, vec![((0, 0), 0.2)])]
    #[case((0, 1), Action::East, vec![((0, 2), 0.8), ((1, 1), 0.2)])]
    fn off_grid_destinations_are_dropped(
        #[case] state: State,
        #[case] action: Action,
        #[case] expected: Vec<(State, Continuous)>,
    ) {
        let ts = get_transition((3, 3), state, action)
            .into_iter()
            .map(|t| (t.next_state, t.probability))
            .collect::<Vec<_>>();

        assert_eq!(ts, expected);
    }

    #[test]
    fn edge_cells_lose_mass() {
        let ts = get_transition((3, 3), (0, 1), Action::North);

        assert_that!(ts).has_length(1);
        assert!(mass(&ts) < 1.);
    }

    #[test]
    fn non_square_bounds_use_width_for_x() {
        assert_that!(get_transition((2, 4), (1, 0), Action::South)).is_empty();
        assert_that!(get_transition((2, 4), (1, 2), Action::East)).has_length(1);
    }

    #[test]
    fn exit_has_no_transitions() {
        assert_that!(get_transition((3, 3), (1, 1), Action::Exit)).is_empty();
    }
}
