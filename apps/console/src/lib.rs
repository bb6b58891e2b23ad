//! Console front end for the admission and registration workflows

pub mod admission;
pub mod config;
pub mod prompt;
pub mod registration;

pub use config::Config;

/// Logs go to stderr so they never interleave with prompts on stdout.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
