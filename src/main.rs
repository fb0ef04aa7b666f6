mod api;
mod app;
mod cli;
mod event;
mod favorites;
mod keys;
mod page;
mod refresh;
mod reveal;
mod settings;
mod storage;
mod time;
mod tui;
mod views;

#[cfg(test)]
mod test_utils;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::{Category, HnClient};
use app::{App, Message};
use cli::Cli;
use event::{Event, EventHandler};
use favorites::FavoritesStore;
use settings::Settings;
use storage::{Storage, StorageLocation};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = settings::config_dir(cli.config_dir.as_ref());
    let _log_guard = config_dir
        .as_ref()
        .and_then(|dir| init_logging(dir, cli.verbose));

    let settings = config_dir
        .as_ref()
        .map(|dir| {
            let path = settings::settings_path(dir);
            Settings::load(&path).unwrap_or_else(|e| {
                eprintln!("Warning: {e}");
                Settings::default()
            })
        })
        .unwrap_or_default();

    let category = cli
        .category
        .or_else(|| settings.category.as_deref().and_then(|s| s.parse().ok()))
        .unwrap_or_default();

    let storage = config_dir.as_ref().and_then(|dir| {
        let location = StorageLocation::Path(settings::db_path(dir));
        match Storage::open(location) {
            Ok(s) => Some(s),
            Err(e) => {
                eprintln!("Storage disabled: {e}");
                None
            }
        }
    });

    let favorites = FavoritesStore::load(storage).await;
    let client = HnClient::new();

    info!(category = category.label(), page = cli.page, "starting");
    run_tui(client, favorites, category, cli.page).await
}

/// Logs go to a file since the TUI owns stdout. Returns the appender guard,
/// which must stay alive for the duration of the program.
fn init_logging(config_dir: &Path, verbose: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = settings::log_dir(config_dir);
    std::fs::create_dir_all(&log_dir).ok()?;

    let appender = tracing_appender::rolling::never(&log_dir, "newsdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("newsdeck={default_level}")));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    if verbose {
        eprintln!("Logging to {}", log_dir.join("newsdeck.log").display());
    }

    Some(guard)
}

async fn run_tui(
    client: HnClient,
    favorites: FavoritesStore,
    category: Category,
    page: usize,
) -> Result<()> {
    let mut terminal = tui::init()?;
    let mut app = App::new(client, favorites, category, page);
    let mut events = EventHandler::new(250);

    app.mount();

    loop {
        terminal.draw(|frame| views::render(frame, &app, frame.area()))?;

        // Poll async results (non-blocking)
        while let Ok(result) = app.result_rx.try_recv() {
            app.handle_async_result(result);
        }
        while app.refresh_rx.try_recv().is_ok() {
            app.update(Message::AutoRefresh);
        }

        if app.should_quit {
            break;
        }

        match events.next().await? {
            Event::Key(key) => {
                if let Some(msg) = keys::handle_key(key, &app) {
                    app.update(msg);
                }
            }
            Event::Tick | Event::Resize => {}
        }
    }

    tui::restore()?;
    Ok(())
}
