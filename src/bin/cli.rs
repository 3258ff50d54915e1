use anyhow::{Context, Result};
use bet_tracker::run_session;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging on stderr so it stays out of the prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    run_session(stdin.lock(), stdout.lock()).context("Bet tracker session failed")?;

    Ok(())
}
