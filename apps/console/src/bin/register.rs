use std::io;

use anyhow::Result;
use console::{init_tracing, prompt::Prompter, registration, Config};
use domain::registrations::MemoryStorage;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut storage = MemoryStorage::new();

    if registration::run(&mut prompter, &mut storage)?.is_none() {
        tracing::info!("Registration not submitted");
    }

    Ok(())
}
