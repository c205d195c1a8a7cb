use assignmate::app::{App, AppMessage};
use assignmate::cli::{parse_args, run_cli_command};
use assignmate::config::AppConfig;
use assignmate::logging::init_logging;
use assignmate::terminal::{setup_panic_hook, TerminalManager};
use assignmate::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Event loop tick; drives the spinner
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("assignmate: {}", e);
            eprintln!("Try 'assignmate --help' for more information.");
            std::process::exit(2);
        }
    };
    let config = match AppConfig::from_env() {
        Ok(config) => args.apply(config),
        Err(e) => {
            eprintln!("assignmate: {}", e);
            std::process::exit(2);
        }
    };

    let log_path = init_logging(&config)?;

    // Version, help and --print never touch the terminal
    if let Some(code) = run_cli_command(&args, &config)? {
        std::process::exit(code);
    }

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    tracing::info!(
        endpoint = %config.endpoint,
        mode = %config.mode,
        theme = %config.theme,
        log_file = ?log_path,
        "starting TUI"
    );

    let result = runtime.block_on(run_tui(&config));

    if let Err(ref e) = result {
        tracing::error!(error = %e, "TUI exited with an error");
    }
    result
}

async fn run_tui(config: &AppConfig) -> Result<()> {
    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(config);
    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore();
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw only when needed; the spinner keeps redrawing while loading
        if app.needs_redraw() || app.is_loading() {
            terminal.draw(|f| ui::render(f, app))?;
            app.mark_drawn();
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                        app.mark_dirty();
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event stream error");
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}
