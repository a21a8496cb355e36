use gridworld::*;
use std::env;

/// Solves the classic 3x3 grid world: +1 exit at (0, 2) and -1 exit at (1, 2).
/// An optional path to a JSON `SolverConfig` may be passed as the first argument.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match env::args().nth(1) {
        Some(path) => SolverConfig::from_path(path)?,
        None => SolverConfig::default(),
    };

    let mdp = MdpProblem::new(3, 3, ExitMap::from([((0, 2), 1.), ((1, 2), -1.)]))?;
    for step in mdp.compute_policy(config)? {
        println!(
            "************************ {} *********************",
            step.iteration
        );
        println!("{}", render_values(&step.values, 3));
        println!("{}", render_policy(&step.policy));
        println!(
            "Policy converged: {}, Values converged: {}",
            step.policy_converged, step.values_converged
        );
    }

    Ok(())
}
