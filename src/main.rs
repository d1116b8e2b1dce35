// St. Movens School - interactive information terminal
//
// A single-binary TUI for the school's front of house: browse pages, filter
// news by category, open the enrollment inquiry dialog, switch between the
// two light themes (persisted across runs), and watch the announcement
// carousel rotate.
//
// Architecture:
// - TUI (ratatui): pages, dialog overlay, status/title bars
// - Form: enrollment fields with per-field validation
// - Config: TOML file holding the durable theme preference
// - Logging: tracing captured to an in-memory buffer (plus optional files)

mod cli;
mod config;
mod form;
mod logging;
mod site;
mod theme;
mod tui;
mod validate;

use anyhow::Result;
use config::{Config, LogRotation, VERSION};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration (env > file > defaults); this is also where the
    // persisted theme preference is read
    let config = Config::from_env();

    // Create log buffer so tracing output never garbles the alternate screen
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("stmovens={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                // Create rolling file appender based on configured rotation
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            // No file logging - buffer only
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();

            None
        };

    tracing::info!(
        "Starting St. Movens terminal v{} (theme: {})",
        VERSION,
        config.theme.label()
    );

    // Run the TUI; this blocks until the user quits (presses 'q')
    tui::run_tui(config, log_buffer).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
