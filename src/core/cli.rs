//! CLI-only commands: config info and models list.
//!
//! These run without opening the TUI and produce plain text output.

use std::env;

use crate::core::app;
use crate::core::config::{self, MODEL_VAR, MEMORY_LENGTH_VAR, Settings};
use crate::core::models::Model;
use crate::core::paths;

/// Run the `config` command: display endpoint, initial settings, and API key status.
pub fn run_config() {
    let base_url = env::var(config::BASE_URL_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| config::DEFAULT_BASE_URL.to_string());
    let (settings, warnings) =
        config::settings_from_lookup(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()));
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let api_key_status = if config::api_key_present() {
        "set ✓"
    } else {
        "not set"
    };

    println!("Version:       {} {}", app::NAME, app::VERSION);
    println!("Endpoint:      {}", base_url);
    println!(
        "Model:         {} ({})",
        settings.model,
        source(MODEL_VAR, settings, |s| s.model != Model::default())
    );
    println!(
        "Memory length: {} ({})",
        settings.memory_length,
        source(MEMORY_LENGTH_VAR, settings, |s| {
            s.memory_length != Default::default()
        })
    );
    println!("API key:       {}", api_key_status);
    println!("Log file:      {}", log_file);
    for w in warnings {
        eprintln!("Warning: {}", w);
    }
}

fn source(
    var: &'static str,
    settings: Settings,
    non_default: impl Fn(&Settings) -> bool,
) -> &'static str {
    if non_default(&settings) { var } else { "default" }
}

/// Run the `models` command: list the selectable models, marking the default.
pub fn run_models() {
    let width = Model::ALL.iter().map(|m| m.id().len()).max().unwrap_or(0);
    for m in Model::ALL {
        let marker = if m == Model::default() { " (default)" } else { "" };
        println!("{:<width$}  {}{}", m.id(), m.label(), marker, width = width);
    }
}
