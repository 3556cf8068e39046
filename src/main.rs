//! # Groq Chat - terminal chat client
//!
//! Forwards questions to a Groq-hosted model and renders the reply, keeping a short
//! rolling window of previous exchanges as context.
//!
//! ## Features
//! - Interactive terminal UI with model selector and memory-length slider
//! - Single question mode with `-p` or `--prompt`
//! - Config and model listing subcommands

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

/// Main application entry point.
///
/// The API key is checked before any UI or model interaction; a missing key
/// prints an error and exits with status 1.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match &args.command {
        Some(Commands::Config) => {
            core::cli::run_config();
            return Ok(());
        }
        Some(Commands::Models) => {
            core::cli::run_models();
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            cli::generate(
                *shell,
                &mut Args::command(),
                core::app::NAME,
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        None => {}
    }

    let config = core::config::load().unwrap_or_else(|e| {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if args.prompt.is_some() {
        if let Err(e) = run::run_single_prompt(&args, &config).await {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    run::launch_tui(config).await
}
