//! Entry point: parse CLI, set up logging and run the results pipeline.

use anyhow::Context;
use clap::Parser;
use pl_results::{
    cli::Args,
    commands::results::{handle_results, ResultsParams},
    logging::setup_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    if let Err(e) = run(&args).await {
        // One diagnostic line, causes joined with ": "
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let params = ResultsParams::from_args(args).context("invalid arguments")?;
    handle_results(params)
        .await
        .context("failed to fetch results")?;
    Ok(())
}
