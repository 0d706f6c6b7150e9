use anyhow::{Context, Result};
use sheetcalc_core::{Console, Exercise};
use std::io;
use tracing::debug;

/// Run an exercise against the process's stdin and stdout.
pub fn run_exercise<E: Exercise>(exercise: &E) -> Result<()> {
    debug!("Running exercise: {}", exercise.name());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    exercise
        .run(&mut console)
        .with_context(|| format!("Failed to run {}", exercise.name()))?;

    if console.is_failed() {
        debug!("Input did not scan cleanly; zero was substituted");
    }

    Ok(())
}
