//! Card gallery - teaser card demo
//!
//! Renders a deck of cards in a grid. Move the mouse over a card to reveal
//! its ingress, click the image or the title to fire a notification.
//!
//! 1. Mouse event -> Gallery.handle_event() -> card actions tagged with a slot
//! 2. Actions dispatched to the store, the card reducer declares effects
//! 3. Reveal steps become keyed debounce tasks, notifications are logged
//! 4. If state changed, re-render
//!
//! # Usage
//!
//! ```sh
//! cargo run -p card-gallery
//! cargo run -p card-gallery -- --deck my-cards.json --reveal-ms 3000
//! tail -f card-gallery.log
//! ```

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use teaser_card::{Component, RevealConfig};
use teaser_card_core::{EffectRuntime, EventKind, EventOutcome, LoggingMiddleware};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use card_gallery::action::AppAction;
use card_gallery::deck::load_deck;
use card_gallery::effect::handle_effect;
use card_gallery::reducer::reducer;
use card_gallery::state::AppState;
use card_gallery::ui::{Gallery, GalleryProps};

/// Teaser card gallery
#[derive(Parser, Debug)]
#[command(name = "card-gallery")]
#[command(about = "Preview teaser cards with hover reveal in the terminal")]
struct Args {
    /// JSON deck of cards (defaults to the four sample cards)
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Delay between reveal steps, in milliseconds
    #[arg(long, default_value = "50")]
    step_ms: u64,

    /// Time to reveal the whole hidden ingress, in milliseconds
    #[arg(long, default_value = "1500")]
    reveal_ms: u64,

    /// Log file (the terminal belongs to the UI)
    #[arg(long, default_value = "card-gallery.log")]
    log_file: PathBuf,

    /// Log filter, e.g. `debug` or `teaser_card=trace`
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Keeps the non-blocking log writer flushing until the app exits.
struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

fn setup_logging(path: &Path, filter: &str) -> io::Result<LogGuard> {
    let file = File::create(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let filter = tracing_subscriber::EnvFilter::try_new(filter)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(LogGuard { _guard: guard })
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let _log_guard = match setup_logging(&args.log_file, &args.log_level) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!(
                "Error: could not set up logging to {}: {}",
                args.log_file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    // Load the deck before entering TUI mode
    let deck = match load_deck(args.deck.as_deref()) {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let config = RevealConfig {
        step_interval: Duration::from_millis(args.step_ms),
        duration: Duration::from_millis(args.reveal_ms),
    };
    tracing::info!(cards = deck.len(), ?config, "Starting gallery");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, AppState::new(deck, config)).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: AppState,
) -> io::Result<()> {
    let mut runtime = EffectRuntime::new(state, reducer, LoggingMiddleware::new());
    let gallery = RefCell::new(Gallery::new());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                gallery
                    .borrow_mut()
                    .render(frame, area, GalleryProps { state });
            },
            |event, state| {
                let outcome = EventOutcome::from_actions(
                    gallery
                        .borrow_mut()
                        .handle_event(event, GalleryProps { state }),
                );
                if matches!(event, EventKind::Resize(..)) {
                    outcome.with_render()
                } else {
                    outcome
                }
            },
            |action| matches!(action, AppAction::Quit),
            handle_effect,
        )
        .await
}
