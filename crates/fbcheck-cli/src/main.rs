use clap::Parser;
use fbcheck_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unwritable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    let cli = Cli::parse();
    let outcome = cli::run(cli).await;
    tracing::info!(?outcome, code = outcome.code(), "fbcheck finished");
    std::process::exit(outcome.code());
}
