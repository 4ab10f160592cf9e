use mindspoke::adapters::{ArboardClipboard, ReqwestHttpClient, SystemShare};
use mindspoke::app::{App, AppMessage};
use mindspoke::cli::{parse_args, run_cli_command, run_print, CliCommand};
use mindspoke::gemini::GeminiClient;
use mindspoke::share::{CardRasterizer, ShareService};
use mindspoke::startup::{init_logging, AppConfig};
use mindspoke::terminal::{setup_panic_hook, TerminalManager};
use mindspoke::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Frame tick, ~60fps.
const TICK: Duration = Duration::from_millis(16);

/// Main event loop: keyboard, async messages and the tick.
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
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "Terminal event stream failed");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }

    color_eyre::install()?;

    // Configuration problems are reported before the terminal is touched.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", e.recovery_hint());
            std::process::exit(1);
        }
    };

    let _log_guard = match init_logging(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    tracing::info!(config = ?config, "Starting mindspoke {}", mindspoke::cli::VERSION);

    let runtime = tokio::runtime::Runtime::new()?;

    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let gemini = Arc::new(GeminiClient::new(Arc::new(http), &config));

    if let CliCommand::Print(input) = command {
        return match runtime.block_on(run_print(&gemini, &input)) {
            Ok(text) => {
                println!("{}", text);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, code = e.error_code(), "Print mode generation failed");
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
        };
    }

    let share_service = Arc::new(ShareService::new(
        Arc::new(CardRasterizer::new()),
        Arc::new(SystemShare::new(config.share_dir.clone())),
        Arc::new(ArboardClipboard::new()),
    ));

    // Restore the terminal before color-eyre prints a panic report.
    setup_panic_hook();

    let result = runtime.block_on(async {
        let mut app = App::new(gemini, share_service);
        let mut term_manager = TerminalManager::new()?;
        run_app(term_manager.terminal(), &mut app).await
    });

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    }
    tracing::info!("Shutting down");
    result
}
