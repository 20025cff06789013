//! Session policy resolution from command line and environment.

use drill_core::SessionPolicy;

use crate::Cli;

/// Build the run-wide policy, falling back to the library defaults for
/// anything not given on the command line or in the environment.
pub fn session_policy(cli: &Cli) -> SessionPolicy {
    let defaults = SessionPolicy::default();

    SessionPolicy {
        randomize: cli.randomize,
        perpetual: cli.perpetual,
        batch_size: cli
            .batch_size
            .map(|n| n as usize)
            .unwrap_or(defaults.batch_size),
        retry_threshold: cli
            .threshold
            .map(|percent| f64::from(percent) / 100.0)
            .unwrap_or(defaults.retry_threshold),
        seed: cli.seed,
    }
}
