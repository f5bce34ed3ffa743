//! Desktop notifier for Pleroma/Mastodon notification snapshots.
//!
//! Wires the store, settings, message catalog and OS notification queue
//! around the curation pipeline.

pub mod cli;
pub mod config;
pub mod desktop;
pub mod i18n;

use std::path::PathBuf;

use notification_store::Database;

use config::{AppConfig, SettingsManager};

/// Determine the data directory for the application.
/// Priority: NOTIFIER_DATA_DIR env var > ~/.fedi-notifier
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NOTIFIER_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".fedi-notifier")
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::debug!("No .env file found, using system environment variables");
}

/// Open the store, migrate settings and load config (fatal on error).
pub fn init_foundation() -> Result<(Database, AppConfig), anyhow::Error> {
    load_dotenv();
    let dir = data_dir();
    std::fs::create_dir_all(&dir)?;

    let db_path = dir.join("notifications.db");
    tracing::debug!("Opening database at {}", db_path.display());
    let db = Database::open(&db_path)?;

    let sm = SettingsManager::new(db.clone());
    if let Err(e) = sm.migrate_from_env() {
        tracing::error!("Failed to migrate from env: {e}");
    }
    sm.initialize_defaults()?;

    let config = AppConfig::load(&sm)?;
    tracing::debug!(locale = %config.locale, "Settings loaded");
    Ok((db, config))
}
