//! phiguard CLI
//!
//! Screens extracted insurance document text before it is sent for LLM
//! analysis: classify, redact, or build the analysis prompt.

use anyhow::Result;
use clap::Parser;
use phiguard_classifiers::{AnalysisPrompt, PhiClassifier, Screener};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

mod cli;
mod commands;
mod config;

use cli::{Cli, Commands};

/// Exit status for `classify --fail-on-reject` when the document is rejected
const EXIT_REJECTED: u8 = 3;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = config::load(&cli)?;
    let prompt = AnalysisPrompt::new(config.prompt_char_budget);
    let screener = Screener::new(Arc::new(PhiClassifier::with_config(config)?));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Classify {
            input,
            format,
            fail_on_reject,
        } => {
            let sample = commands::read_sample(input)?;
            let accepted = commands::classify(&screener, &sample, *format, &mut out)?;
            out.flush()?;

            if !accepted && *fail_on_reject {
                info!("Exiting with status {} for rejected document", EXIT_REJECTED);
                return Ok(ExitCode::from(EXIT_REJECTED));
            }
        }
        Commands::Redact { input } => {
            let sample = commands::read_sample(input)?;
            commands::redact(&screener, &sample, &mut out)?;
        }
        Commands::Prompt { input } => {
            let sample = commands::read_sample(input)?;
            commands::prompt(&screener, &prompt, &sample, &mut out)?;
        }
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Initialize tracing/logging on stderr, keeping stdout for command output
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("phiguard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("phiguard=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
