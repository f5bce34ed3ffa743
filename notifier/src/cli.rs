//! Command-line interface.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use mute_filter::{SubstringMatcher, parse_mute_words};
use notification_curation::{
    Config, DesktopNotifier, Localize, VisibleTypes, curate, maybe_show_notification, unseen,
    unseen_count,
};
use notification_model::{Notification, NotificationType, RawNotification};
use notification_store::{Database, StoreError};

use crate::config::{AppConfig, SettingsManager};
use crate::desktop::{LogNotifier, OsPresenter, start_worker};
use crate::i18n::Catalog;

/// Curate Pleroma/Mastodon notifications and forward new ones to the desktop
#[derive(Parser)]
#[command(about, version)]
pub struct Cli {
    /// Log desktop notifications instead of showing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store notifications from a JSON array file and notify about new ones
    Import { path: PathBuf },
    /// Print the curated notification list
    List {
        /// Show only these types, ignoring visibility settings
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,
        /// Show only unseen notifications
        #[arg(long)]
        unseen: bool,
        /// Print JSON instead of rows
        #[arg(long)]
        json: bool,
    },
    /// Print the number of unseen notifications
    Unseen,
    /// Print one stored notification as JSON
    Show { id: String },
    /// Manage mute words
    #[command(subcommand)]
    Mute(MuteCommand),
    /// Inspect or change settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Subcommand)]
pub enum MuteCommand {
    Add {
        #[arg(required = true)]
        words: Vec<String>,
    },
    List,
    Remove {
        id: i64,
    },
    /// Add every line of a text file
    Import {
        path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    Get { key: String },
    Set { key: String, value: String },
    /// Revert a setting to its default
    Reset { key: String },
    List,
}

pub async fn run(cli: Cli, db: Database, config: AppConfig) -> anyhow::Result<()> {
    let sm = SettingsManager::new(db);

    match cli.command {
        Command::Import { path } => import(&sm, &config, &path, cli.dry_run).await,
        Command::List {
            types,
            unseen,
            json,
        } => list(&sm, &config, &types, unseen, json),
        Command::Unseen => {
            let snapshot = config.load_snapshot(&sm)?;
            let records = sm.db().list_notifications()?;
            println!("{}", unseen_count(&records, &snapshot));
            Ok(())
        }
        Command::Show { id } => {
            let Some(record) = sm.db().get_notification(&id)? else {
                anyhow::bail!("no notification with id {id}");
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Command::Mute(cmd) => mute(&sm, cmd),
        Command::Settings(cmd) => settings(&sm, cmd),
    }
}

async fn import(
    sm: &SettingsManager,
    config: &AppConfig,
    path: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let (records, skipped) = decode_records(&content)?;
    let total = records.len() + skipped;

    let fresh = store_records(sm.db(), records)?;
    let snapshot = config.load_snapshot(sm)?;
    let catalog = Catalog::load(&config.locale)?;

    let shown = if !config.desktop_enabled {
        tracing::info!("Desktop notifications disabled");
        0
    } else if dry_run {
        notify_new(&fresh, &snapshot, &catalog, &LogNotifier)
    } else {
        let (notifier, worker) = start_worker(OsPresenter::new(config.app_name.clone()));
        let dispatched = notify_new(&fresh, &snapshot, &catalog, &notifier);
        let dropped = notifier.dropped();
        drop(notifier);
        worker.await?;
        dispatched.saturating_sub(dropped)
    };

    println!(
        "{total} read, {skipped} unreadable, {} new, {shown} notified, {} stored",
        fresh.len(),
        sm.db().notification_count()?
    );
    Ok(())
}

/// Decodes a JSON array record by record. Records that do not decode are
/// skipped and counted.
pub fn decode_records(content: &str) -> anyhow::Result<(Vec<RawNotification>, usize)> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(content).context("expected a JSON array of notifications")?;

    let mut records = Vec::with_capacity(values.len());
    let mut skipped = 0;
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawNotification>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(index, "Skipping unreadable notification: {e}");
                skipped += 1;
            }
        }
    }
    Ok((records, skipped))
}

/// Stores `records` and returns those whose id was not stored before,
/// in input order.
pub fn store_records(
    db: &Database,
    records: Vec<RawNotification>,
) -> Result<Vec<RawNotification>, StoreError> {
    let mut fresh = Vec::new();
    for record in records {
        if db.upsert_notification(&record)? {
            fresh.push(record);
        }
    }
    Ok(fresh)
}

/// Runs the desktop decision for each newly arrived record.
/// Returns how many were dispatched.
pub fn notify_new<L, N>(
    records: &[RawNotification],
    config: &Config,
    localize: &L,
    notifier: &N,
) -> usize
where
    L: Localize + ?Sized,
    N: DesktopNotifier + ?Sized,
{
    records
        .iter()
        .cloned()
        .filter_map(|raw| match Notification::try_from(raw) {
            Ok(n) => Some(n),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping invalid notification");
                None
            }
        })
        .filter(|n| maybe_show_notification(n, config, localize, &SubstringMatcher, notifier))
        .count()
}

fn list(
    sm: &SettingsManager,
    config: &AppConfig,
    types: &[String],
    unseen_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    let snapshot = config.load_snapshot(sm)?;
    let records = sm.db().list_notifications()?;

    let explicit: Option<VisibleTypes> = (!types.is_empty()).then(|| {
        types
            .iter()
            .map(|t| NotificationType::from(t.as_str()))
            .collect()
    });

    let notifications = match (&explicit, unseen_only) {
        (None, true) => unseen(&records, &snapshot),
        (explicit, unseen_only) => {
            let mut curated = curate(&records, &snapshot, explicit.as_ref());
            if unseen_only {
                curated.retain(|n| !n.seen);
            }
            curated
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&notifications)?);
    } else {
        for n in &notifications {
            println!("{}", format_row(n));
        }
    }
    Ok(())
}

/// One tab-separated row: unseen marker, id, type, actor.
pub fn format_row(n: &Notification) -> String {
    let marker = if n.seen { " " } else { "*" };
    format!(
        "{marker}\t{}\t{}\t{}",
        n.id,
        n.notification_type(),
        n.from_profile.name
    )
}

fn mute(sm: &SettingsManager, cmd: MuteCommand) -> anyhow::Result<()> {
    let db = sm.db();
    match cmd {
        MuteCommand::Add { words } => {
            for word in words {
                let added = db.add_mute_word(&word)?;
                println!("{}\t{}", added.id, added.word);
            }
        }
        MuteCommand::List => {
            for w in db.list_mute_words()? {
                println!("{}\t{}", w.id, w.word);
            }
        }
        MuteCommand::Remove { id } => {
            if !db.delete_mute_word(id)? {
                anyhow::bail!("no mute word with id {id}");
            }
        }
        MuteCommand::Import { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let words = parse_mute_words(&content);
            db.bulk_insert_mute_words(&words)?;
            tracing::info!(count = words.len(), "Imported mute words");
        }
    }
    Ok(())
}

fn settings(sm: &SettingsManager, cmd: SettingsCommand) -> anyhow::Result<()> {
    match cmd {
        SettingsCommand::Get { key } => println!("{}", sm.get_setting(&key)?),
        SettingsCommand::Set { key, value } => sm.set_setting(&key, &value)?,
        SettingsCommand::Reset { key } => {
            let value = sm.reset_setting(&key)?;
            println!("{key}={value}");
        }
        SettingsCommand::List => {
            for s in sm.get_all_settings()? {
                let marker = if s.is_default { "" } else { " (changed)" };
                println!("{}={}{marker}\t# {}", s.key, s.value, s.description);
            }
        }
    }
    Ok(())
}
