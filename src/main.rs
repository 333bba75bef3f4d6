//! Folio binary entrypoint kept minimal. The full runtime lives in `app`.

mod app;
mod args;
mod catalog;
mod clipboard;
mod events;
mod filter;
mod state;
mod theme;
mod ui;
mod util;

use clap::Parser;
use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

struct FolioTimer;

impl tracing_subscriber::fmt::time::FormatTime for FolioTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(_) => 0,
        };
        let s = crate::util::ts_to_date(Some(secs)); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-T HH:MM:SS"
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();

    // Initialize tracing logger writing to ~/.config/folio/logs/folio.log
    {
        let level = args::determine_log_level(&cli);
        let mut log_path = crate::theme::logs_dir();
        log_path.push("folio.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(FolioTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                // Fallback: init stderr logger to avoid blocking startup
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(FolioTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    if args::process_args(&cli) {
        return;
    }

    tracing::info!("Folio starting");
    if let Err(err) = app::run(&cli).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Folio exited");
}
