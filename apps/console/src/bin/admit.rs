use std::io;

use anyhow::Result;
use console::{admission, init_tracing, prompt::Prompter, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let admission = admission::run(&mut prompter, &config)?;
    tracing::info!(
        "Admission complete for patient {}, {} departments notified",
        admission.event.patient_id,
        admission.report.delivered
    );

    Ok(())
}
