//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  groq-chat                          Launch interactive TUI
  groq-chat -p \"explain X\"           Single question, print the reply to stdout
  groq-chat -p - -m gemma2-9b-it     Read the question from stdin, pick a model
  groq-chat models                   List selectable models
  groq-chat config                   Show endpoint, settings and API key status
  groq-chat completions bash         Generate bash completions

ENVIRONMENT:
  GROQ_API_KEY (required), GROQ_BASE_URL, GROQ_MODEL, GROQ_MEMORY_LENGTH,
  GROQ_SYSTEM_PROMPT. A .env file in the current directory is loaded first.
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "A terminal chat client for Groq-hosted models",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ask a single question then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Ask a single question and print the reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override the initial model
    #[arg(short = 'm', long, help = "Model ID (e.g. llama-3.1-8b-instant)")]
    pub model: Option<String>,

    /// Override the initial conversational memory length
    #[arg(short = 'k', long, help = "Conversational memory length (1-10)")]
    pub memory_length: Option<i64>,

    /// Print the exchange as JSON ({"human": ..., "AI": ...}) in prompt mode
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show endpoint, initial settings, and API key status
    Config,
    /// List selectable models
    Models,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
