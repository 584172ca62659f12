use std::io::stdout;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use reaction_picker::app::App;
use reaction_picker::config::Config;
use reaction_picker::log;
use reaction_picker::picker::SelectionEvent;
use reaction_picker::tui;

/// Parsed command line.
#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    default_index: Option<usize>,
    long_press_ms: Option<u64>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--config" | "-c" => match value {
                Some(path) => {
                    parsed.config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                None => eprintln!("Warning: --config requires a path argument"),
            },
            "--default" | "-d" => match value.and_then(|v| v.parse().ok()) {
                Some(index) => {
                    parsed.default_index = Some(index);
                    i += 1;
                }
                None => eprintln!("Warning: --default requires an index"),
            },
            "--long-press-ms" => match value.and_then(|v| v.parse().ok()) {
                Some(ms) => {
                    parsed.long_press_ms = Some(ms);
                    i += 1;
                }
                None => eprintln!("Warning: --long-press-ms requires a number of milliseconds"),
            },
            other => {
                eprintln!("Warning: ignoring unknown argument '{}'", other);
            }
        }
        i += 1;
    }

    parsed
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args = parse_args();

    // Config precedence: CLI > env var > file > defaults
    let config = match &args.config_path {
        Some(path) => Config::load_or_default(path),
        None => Config::load(),
    }
    .with_overrides(args.default_index, args.long_press_ms);

    let (selection_tx, selection_rx) = mpsc::unbounded_channel();
    let mut app = App::new(&config, selection_tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app, selection_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::log("=== reaction-picker exited ===");
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut selection_rx: mpsc::UnboundedReceiver<SelectionEvent>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    // Frame timer drives long-press timing and animations
    let mut frames = tokio::time::interval(app.frame_interval());

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key, Instant::now());
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse(mouse, Instant::now());
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            // Selection callbacks from the picker
            Some(event) = selection_rx.recv() => {
                app.record(event);
            }

            _ = frames.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
