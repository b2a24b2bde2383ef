//! CLI configuration loading

use phiguard_classifiers::GuardConfig;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::Cli;

/// Load the classifier configuration from file, then apply CLI overrides.
///
/// A missing file is not an error; the built-in defaults are used.
pub fn load(cli: &Cli) -> anyhow::Result<GuardConfig> {
    let mut config = if Path::new(&cli.config).exists() {
        info!("Loading configuration from {}", cli.config);
        GuardConfig::from_file(&cli.config)?
    } else {
        debug!("No configuration at {}, using defaults", cli.config);
        GuardConfig::default()
    };

    if let Some(placeholder) = &cli.placeholder {
        config.placeholder = placeholder.clone();
    }

    if let Some(budget) = cli.prompt_budget {
        config.prompt_char_budget = budget;
    }

    config.validate()?;
    Ok(config)
}
