use super::super::{
    actions::Action,
    convergence::{policy_converged, values_converged},
    grid::*,
    transitions::get_transition,
    MdpSolver,
};
use crate::{error::*, Continuous, Discrete, SolverConfig, State};
use itertools::iproduct;
use std::iter::FusedIterator;
use tracing::{debug, info, warn};

/// Grid world MDP with stochastic moves: the intended direction succeeds 80% of the time,
/// otherwise the agent slips clockwise.
///
/// `width` bounds the first coordinate `x`, `height` the second coordinate `y`.
#[derive(Debug, Clone)]
pub struct MdpProblem {
    width: usize,
    height: usize,
    exits: ExitMap,
}

impl MdpProblem {
    /// Exits outside the grid are accepted but never visited.
    pub fn new(width: usize, height: usize, exits: ExitMap) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MdpError::EmptyGrid { width, height });
        }

        for (&(x, y), &reward) in &exits {
            if !reward.is_finite() {
                return Err(MdpError::NonFiniteReward { x, y, reward });
            }

            if cell_index((width, height), (x, y)).is_none() {
                warn!(x, y, reward, "Exit lies outside the {width}x{height} grid, ignoring.");
            }
        }

        Ok(Self {
            width,
            height,
            exits,
        })
    }

    pub fn dim(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn exits(&self) -> &ExitMap {
        &self.exits
    }

    pub fn is_exit(&self, s: State) -> bool {
        self.exits.contains_key(&s)
    }

    /// Lazily runs `config.steps` synchronous Bellman backups, yielding V_k and pi_k after each.
    pub fn compute_policy(&self, config: SolverConfig) -> Result<ValueIteration<'_>> {
        config.validate()?;

        // The working grid is rebuilt from the lookback each step, so the initial one is not kept.
        let (_, pre_v_states, prev_policy) =
            initialize_mdp_parameters(self.width, self.height, &self.exits);
        debug!(
            "Initial values:\n{}\nInitial policy:\n{}",
            render_values(&pre_v_states, 3),
            render_policy(&prev_policy)
        );

        Ok(ValueIteration {
            problem: self,
            config,
            k: 0,
            pre_v_states,
            prev_policy,
        })
    }

    /// Runs every step of [`MdpProblem::compute_policy`] and keeps the last one.
    pub fn solve(&self, config: SolverConfig) -> Result<Solution<'_>> {
        let step = self
            .compute_policy(config)?
            .last()
            .ok_or(MdpError::NoIterations)?;

        Ok(Solution {
            problem: self,
            config,
            step,
        })
    }

    fn q_value(
        &self,
        pre_v_states: &ValueGrid,
        s: State,
        a: Action,
        config: &SolverConfig,
    ) -> Continuous {
        get_transition(self.dim(), s, a)
            .iter()
            .filter_map(|t| {
                cell_index(pre_v_states.dim(), t.next_state).map(|ix| (ix, t.probability))
            })
            .fold(0., |sum, (ix, p)| {
                sum + p * (config.living_reward + config.discount * pre_v_states[ix])
            })
    }

    /// Best move and its value. Ties go to the action evaluated last.
    fn greedy(
        &self,
        pre_v_states: &ValueGrid,
        s: State,
        config: &SolverConfig,
    ) -> (Action, Continuous) {
        let mut optimal_policy = Action::North;
        let mut max_sum = Continuous::NEG_INFINITY;
        for a in Action::MOVES {
            let sum = self.q_value(pre_v_states, s, a, config);
            if sum >= max_sum {
                max_sum = sum;
                optimal_policy = a;
            }
        }

        (optimal_policy, max_sum)
    }
}

/// Outcome of one value iteration sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub iteration: usize,
    pub values: ValueGrid,
    pub policy: PolicyGrid,
    pub policy_converged: bool,
    pub values_converged: bool,
}

impl Step {
    pub fn into_parts(self) -> (ValueGrid, PolicyGrid) {
        (self.values, self.policy)
    }
}

/// Iterator over the steps of a value iteration run. Each `next` performs one full sweep.
#[derive(Debug)]
pub struct ValueIteration<'a> {
    problem: &'a MdpProblem,
    config: SolverConfig,
    k: usize,
    pre_v_states: ValueGrid,
    prev_policy: PolicyGrid,
}

impl Iterator for ValueIteration<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        if self.k >= self.config.steps {
            return None;
        }

        let problem = self.problem;
        let mut v_states = self.pre_v_states.clone();
        let mut policy = self.prev_policy.clone();
        for (x, y) in iproduct!(0..problem.width, 0..problem.height) {
            let s = (x as Discrete, y as Discrete);
            if problem.is_exit(s) {
                policy[[x, y]] = Action::Exit;
                continue;
            }

            let (a, v) = problem.greedy(&self.pre_v_states, s, &self.config);
            v_states[[x, y]] = v;
            policy[[x, y]] = a;
        }

        let step = Step {
            iteration: self.k,
            policy_converged: policy_converged(&policy, &self.prev_policy),
            values_converged: values_converged(
                &v_states,
                &self.pre_v_states,
                self.config.tolerance,
            ),
            values: v_states,
            policy,
        };

        debug!(
            k = step.iteration,
            "Values:\n{}\nPolicy:\n{}",
            render_values(&step.values, 3),
            render_policy(&step.policy)
        );
        if step.policy_converged {
            info!(k = step.iteration, "Policy converged.");
        }
        if step.values_converged {
            info!(k = step.iteration, "Values converged.");
        }

        self.pre_v_states = step.values.clone();
        self.prev_policy = step.policy.clone();
        self.k += 1;

        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.config.steps.saturating_sub(self.k);
        (n, Some(n))
    }
}

impl ExactSizeIterator for ValueIteration<'_> {}

impl FusedIterator for ValueIteration<'_> {}

/// Final step of a value iteration run.
#[derive(Debug, Clone)]
pub struct Solution<'a> {
    problem: &'a MdpProblem,
    config: SolverConfig,
    step: Step,
}

impl Solution<'_> {
    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn values(&self) -> &ValueGrid {
        &self.step.values
    }

    pub fn policy(&self) -> &PolicyGrid {
        &self.step.policy
    }
}

impl MdpSolver for Solution<'_> {
    fn v_star(&self, s: State) -> Option<Continuous> {
        cell_index(self.problem.dim(), s).map(|ix| self.step.values[ix])
    }

    /// One step lookahead over the final values. Exits only admit `Exit`, other cells only moves.
    fn q_star(&self, s: State, a: Action) -> Option<Continuous> {
        let ix = cell_index(self.problem.dim(), s)?;
        match (self.problem.is_exit(s), a) {
            (true, Action::Exit) => Some(self.step.values[ix]),
            (false, Action::Exit) | (true, _) => None,
            (false, a) => Some(
                self.problem
                    .q_value(&self.step.values, s, a, &self.config),
            ),
        }
    }

    fn pi_star(&self, s: State) -> Option<Action> {
        cell_index(self.problem.dim(), s).map(|ix| self.step.policy[ix])
    }
}
