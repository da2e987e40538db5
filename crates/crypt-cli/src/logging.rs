//! Log output on stderr, so stdout only carries command output.

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_ENV;

/// Install the global subscriber. `CRYPT_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
