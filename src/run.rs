//! Application run modes: logger init, single prompt, TUI launch.

use std::io;

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::llm::GroqClient;
use crate::core::memory::MemoryWindow;
use crate::core::session::Session;
use crate::core::turn::{self, TurnOutcome, TurnRequest};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.prompt.is_none() && args.command.is_none() {
        if let Some(path) = core::paths::log_file()
            && let Some(dir) = path.parent()
            && std::fs::create_dir_all(dir).is_ok()
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run single prompt mode: one turn on a fresh session, reply printed to stdout.
pub async fn run_single_prompt(
    args: &Args,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(prompt_arg) = args.prompt.as_ref() else {
        return Ok(());
    };
    let prompt = if prompt_arg == "-" {
        let input = io::read_to_string(io::stdin())?;
        input.trim_end_matches(['\r', '\n']).to_string()
    } else {
        prompt_arg.clone()
    };
    if prompt.trim().is_empty() {
        eprintln!("Error: empty prompt");
        std::process::exit(1);
    }

    for w in &config.warnings {
        eprintln!("Warning: {}", w);
    }

    let model_id = args
        .model
        .clone()
        .unwrap_or_else(|| config.settings.model.id().to_string());
    let memory_length = args
        .memory_length
        .unwrap_or(config.settings.memory_length.get() as i64);

    let client = GroqClient::new(config);
    let mut session = Session::new();
    let mut window = MemoryWindow::new(config.settings.memory_length);
    let outcome = turn::run_turn(
        &client,
        &mut session,
        &mut window,
        TurnRequest {
            model_id: &model_id,
            memory_length,
            system_prompt: &config.system_prompt,
            question: &prompt,
        },
    )
    .await?;

    if let TurnOutcome::Replied(reply) = outcome {
        if args.json {
            if let Some(pair) = session.all().last() {
                println!("{}", serde_json::to_string(pair)?);
            }
        } else {
            println!("{}", reply);
        }
    }
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
