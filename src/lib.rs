pub mod cli;
pub mod netutils;
pub mod probes;
pub mod scan;
pub mod service;
pub mod types;

pub use scan::run;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Safe to call more than once
/// (later calls are no-ops), so tests can use it freely.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
