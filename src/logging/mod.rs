use crate::core::Result;
use chrono::Local;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Directory holding one `test_<timestamp>.log` file per logger creation.
const LOG_DIR: &str = "reports/logs";

/// Retention count: older log files beyond this are pruned before a new
/// file is created.
const MAX_LOG_FILES: usize = 5;

static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<Logger>>>> = OnceLock::new();
static TRACING: OnceLock<()> = OnceLock::new();

/// Install the global console subscriber (info-and-above unless `RUST_LOG`
/// says otherwise). Safe to call any number of times.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .ok();
    });
}

/// Named logger writing timestamped lines to its own file and mirroring
/// every record to the console stream via `tracing`.
pub struct Logger {
    name: String,
    path: PathBuf,
    file: Mutex<File>,
}

impl Logger {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The log file this logger writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::DEBUG, message.as_ref());
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::INFO, message.as_ref());
    }

    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::WARN, message.as_ref());
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::ERROR, message.as_ref());
    }

    fn log(&self, level: Level, message: &str) {
        let line = format_line(&self.name, level, message);
        if let Ok(mut file) = self.file.lock() {
            // The file takes every level; the console filter decides what
            // the terminal shows.
            let _ = writeln!(file, "{line}");
        }
        match level {
            Level::ERROR => tracing::error!(logger = %self.name, "{message}"),
            Level::WARN => tracing::warn!(logger = %self.name, "{message}"),
            Level::INFO => tracing::info!(logger = %self.name, "{message}"),
            _ => tracing::debug!(logger = %self.name, "{message}"),
        }
    }
}

/// Fixed line format: `timestamp - name - LEVEL - message`.
fn format_line(name: &str, level: Level, message: &str) -> String {
    format!(
        "{} - {} - {} - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        name,
        level,
        message
    )
}

/// Return the logger registered under `name`, creating it on first lookup.
///
/// Creation ensures the log directory exists, prunes old `test_*.log` files
/// down to the retention count, and opens a fresh timestamped file.
pub fn get_logger(name: &str) -> Result<Arc<Logger>> {
    init_tracing();
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    let mut registry = registry.lock().expect("logger registry poisoned");
    if let Some(logger) = registry.get(name) {
        return Ok(Arc::clone(logger));
    }
    let logger = Arc::new(create_logger(Path::new(LOG_DIR), name)?);
    registry.insert(name.to_string(), Arc::clone(&logger));
    Ok(logger)
}

fn create_logger(dir: &Path, name: &str) -> Result<Logger> {
    fs::create_dir_all(dir)?;
    prune_old_logs(dir, MAX_LOG_FILES);

    let path = dir.join(format!("test_{}.log", Local::now().format("%Y%m%d_%H%M%S")));
    // Append: loggers created within the same second share a file rather
    // than truncating each other.
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok(Logger {
        name: name.to_string(),
        path,
        file: Mutex::new(file),
    })
}

/// Delete the oldest `test_*.log` files so that after a new file is created
/// at most `max` remain. Tie-break is file modification time, oldest first.
fn prune_old_logs(dir: &Path, max: usize) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    let mut logs: Vec<(std::time::SystemTime, PathBuf)> = entries
        .flatten()
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with("test_") && name.ends_with(".log")
        })
        .map(|entry| {
            let modified = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
            (modified, entry.path())
        })
        .collect();

    if logs.len() < max {
        return;
    }

    logs.sort_by_key(|(modified, _)| *modified);
    let excess = logs.len() - max + 1;
    for (_, path) in logs.into_iter().take(excess) {
        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!("Could not delete old log {}: {e}", path.display());
        }
    }
}
