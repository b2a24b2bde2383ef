use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "phiguard")]
#[command(
    author,
    version,
    about = "Screen insurance documents for personal health information before LLM analysis"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "phiguard.yaml", env = "PHIGUARD_CONFIG")]
    pub config: String,

    /// Override the redaction placeholder
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Override the prompt character budget
    #[arg(long)]
    pub prompt_budget: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a document and print the verdict
    Classify {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Exit with status 3 when the document is rejected
        #[arg(long)]
        fail_on_reject: bool,
    },

    /// Print the redacted text of an accepted document
    Redact {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the analysis prompt messages for an accepted document as JSON
    Prompt {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Plain-text document path, or "-" for stdin
    pub path: String,

    /// Original filename (defaults to the file name of PATH)
    #[arg(long)]
    pub filename: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}
