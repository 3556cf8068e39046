//! TUI (Text User Interface) for chatting with a Groq model.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

pub use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::llm::GroqClient;
use crate::core::turn::{self, TurnRequest};

use draw::draw;
use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for model calls.
pub fn run(config: Config) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt =
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?;

    let client = GroqClient::new(&config);
    let mut app = App::new(config.settings, &config.warnings);
    log::info!(
        "TUI started (model {}, memory length {})",
        app.model,
        app.memory_length
    );

    // Mouse wheel scrolls the reply
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;

    // Kitty keyboard protocol: Alt+key as single event with modifier (Ghostty, WezTerm, kitty, etc.)
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | crossterm::event::KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    loop {
        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if !event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            continue;
        }
        match event::read()? {
            Event::Mouse(mouse) => handlers::handle_mouse(mouse, &mut app),
            Event::Key(key) => match handlers::handle_key(key, &mut app) {
                HandleResult::Break => break,
                HandleResult::Continue => {}
                HandleResult::Submit(question) => {
                    // Show the Processing state before blocking on the model.
                    terminal.draw(|f| draw(f, &mut app, f.area()))?;
                    let request = TurnRequest {
                        model_id: app.model.id(),
                        memory_length: app.memory_length.get() as i64,
                        system_prompt: &config.system_prompt,
                        question: &question,
                    };
                    let result = rt.block_on(turn::run_turn(
                        &client,
                        &mut app.session,
                        &mut app.window,
                        request,
                    ));
                    app.finish_turn(result);
                    // Drop keys typed while the request was in flight.
                    while event::poll(Duration::ZERO)? {
                        let _ = event::read()?;
                    }
                }
            },
            _ => {}
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
