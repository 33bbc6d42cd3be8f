//! Command-line deck-list lookup against the Scryfall API.
//!
//! Reads a deck list from a file or stdin, resolves every card name in
//! paced batches, and prints the rendered card details. With `--copy` the
//! plain-text rendering also lands on the system clipboard.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use scrydeck_engine::{
    Clipboard, ClipboardError, CopyOutcome, Engine, Pacing, PanelState, ScryfallClient, Session,
};
use tracing::{debug, info};

// ============================================================================
// CLI Arguments
// ============================================================================

/// Resolve a deck list to card details via the Scryfall API.
#[derive(Parser, Debug)]
#[command(name = "scrydeck")]
#[command(version, about, long_about = None)]
struct Args {
    /// Deck-list file to read (stdin when omitted)
    file: Option<PathBuf>,

    /// Scryfall API base URL
    #[arg(long, default_value = "https://api.scryfall.com")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Pause between collection requests in milliseconds (0 disables pacing)
    #[arg(long, default_value_t = 100)]
    pace_ms: u64,

    /// Output format: text or html
    #[arg(long, default_value = "text")]
    format: Format,

    /// Copy the plain-text card details to the system clipboard
    #[arg(long, default_value_t = false)]
    copy: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Output format for the rendered panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Format {
    /// Plain text (the clipboard projection)
    #[default]
    Text,
    /// HTML fragments, one per card
    Html,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "html" => Ok(Format::Html),
            _ => Err(format!("Invalid format: {}. Use 'text' or 'html'", s)),
        }
    }
}

// ============================================================================
// Clipboard
// ============================================================================

/// System clipboard destination, backed by `arboard`.
///
/// The handle is created fresh for each write to avoid holding platform
/// clipboard resources for the whole session.
struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new().map_err(ClipboardError::new)?;
        clipboard.set_text(text).map_err(ClipboardError::new)
    }
}

// ============================================================================
// Entry point
// ============================================================================

fn read_decklist(file: Option<&Path>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let input = read_decklist(args.file.as_deref())?;
    debug!(bytes = input.len(), "deck list read");

    let client = ScryfallClient::builder()
        .url(&args.api_url)
        .timeout(Duration::from_secs(args.timeout))
        .build();
    let pacing = if args.pace_ms == 0 {
        Pacing::none()
    } else {
        Pacing::fixed(Duration::from_millis(args.pace_ms))
    };

    info!(api_url = %args.api_url, pace_ms = args.pace_ms, "starting deck-list fetch");
    let engine = Engine::from_client(client).with_pacing(pacing);
    let mut session = Session::new(engine, SystemClipboard);

    session.fetch(&input).await;

    match session.panel().state() {
        PanelState::Error => {
            eprintln!("Fetch failed. Re-run with -v for details.");
            std::process::exit(1);
        }
        _ => match args.format {
            Format::Html => println!("{}", session.panel().html()),
            Format::Text => {
                let text = session.panel().text();
                if text.is_empty() {
                    eprintln!("No cards matched the deck list.");
                } else {
                    print!("{}", text);
                }
            }
        },
    }

    if args.copy {
        match session.copy() {
            CopyOutcome::Copied => info!("card details copied to the clipboard"),
            CopyOutcome::NothingToCopy => debug!("empty panel, nothing copied"),
            // A write failure was already logged by the session; Disabled
            // cannot happen on a session that has not copied yet.
            CopyOutcome::Failed | CopyOutcome::Disabled => {}
        }
    }

    Ok(())
}
